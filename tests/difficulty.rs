use arp_pp::{Beatmap, Difficulty, DifficultyAttributes, GameMode, GameMods, Strains};

mod common;

#[test]
fn attributes_for_all_modes() {
    let map = common::tap_map();

    for mode in [
        GameMode::Tap,
        GameMode::Drum,
        GameMode::Rain,
        GameMode::Keys,
    ] {
        let attrs = Difficulty::new().mode(mode).calculate(&map).unwrap();

        assert_eq!(attrs.mode(), mode);
        assert!(attrs.stars() > 0.0, "mode={mode:?}");
        assert!(attrs.max_combo() > 0, "mode={mode:?}");
    }
}

#[test]
fn tap_attributes_count_objects() {
    let map = common::tap_map();

    let DifficultyAttributes::Tap(attrs) = Difficulty::new().calculate(&map).unwrap() else {
        panic!("expected attributes of the map's own mode")
    };

    assert_eq!(
        attrs.n_circles + attrs.n_sliders + attrs.n_spinners,
        map.hit_objects.len() as u32
    );
    assert!(attrs.aim > 0.0);
    assert!(attrs.speed > 0.0);
}

#[test]
fn clock_rate_changes_stars() {
    let map = common::tap_map();

    let nm = Difficulty::new().calculate(&map).unwrap().stars();
    let dt = Difficulty::new()
        .clock_rate(1.5)
        .calculate(&map)
        .unwrap()
        .stars();

    assert!(nm > 0.0);
    assert!(dt > nm, "nm={nm} dt={dt}");
}

#[test]
fn mods_adjust_map_attributes() {
    let map = common::tap_map();

    let nm = Difficulty::new().calculate(&map).unwrap();
    let hr = Difficulty::new()
        .mods(GameMods::from_bits(common::mods::HR, GameMode::Tap))
        .calculate(&map)
        .unwrap();

    let DifficultyAttributes::Tap(nm) = nm else {
        panic!("wrong mode")
    };
    let DifficultyAttributes::Tap(hr) = hr else {
        panic!("wrong mode")
    };

    assert!(hr.ar > nm.ar, "nm={} hr={}", nm.ar, hr.ar);
    assert!(
        hr.great_hit_window < nm.great_hit_window,
        "nm={} hr={}",
        nm.great_hit_window,
        hr.great_hit_window
    );
}

#[test]
fn strains_match_mode_sections() {
    let map = common::tap_map();

    let strains = Difficulty::new().strains(&map).unwrap();

    let Strains::Tap(strains) = strains else {
        panic!("wrong mode")
    };

    assert!((strains.section_len - 400.0).abs() < f64::EPSILON);
    assert!(!strains.aim.is_empty());
    assert_eq!(strains.aim.len(), strains.speed.len());

    let rain = Difficulty::new()
        .mode(GameMode::Rain)
        .strains(&map)
        .unwrap();

    assert!((rain.section_len() - 750.0).abs() < f64::EPSILON);
}

#[test]
fn passed_objects_zero_is_empty() {
    let map = common::tap_map();

    let attrs = Difficulty::new()
        .passed_objects(0)
        .calculate(&map)
        .unwrap();

    assert!((attrs.stars() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn empty_map_has_no_difficulty() {
    let attrs = Difficulty::new().calculate(&Beatmap::default()).unwrap();

    assert!((attrs.stars() - 0.0).abs() < f64::EPSILON);
    assert_eq!(attrs.max_combo(), 0);
}
