use arp_pp::{
    drum::DrumPerformance, keys::KeysPerformance, rain::RainPerformance, tap::TapPerformance,
    Beatmap, GameMode,
};

#[test]
fn tap() {
    let map = Beatmap::default();
    let _ = TapPerformance::new(&map).calculate().unwrap();
}

#[test]
fn drum() {
    let mut map = Beatmap::default();

    // convert
    let _ = DrumPerformance::new(&map).calculate().unwrap();

    // regular
    map.mode = GameMode::Drum;
    let _ = DrumPerformance::new(&map).calculate().unwrap();
}

#[test]
fn rain() {
    let mut map = Beatmap::default();

    // convert
    let _ = RainPerformance::new(&map).calculate().unwrap();

    // regular
    map.mode = GameMode::Rain;
    let _ = RainPerformance::new(&map).calculate().unwrap();
}

#[test]
fn keys() {
    let mut map = Beatmap::default();

    // convert
    let _ = KeysPerformance::new(&map).calculate().unwrap();

    // regular
    map.mode = GameMode::Keys;
    let _ = KeysPerformance::new(&map).calculate().unwrap();
}
