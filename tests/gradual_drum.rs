use arp_pp::{
    any::DifficultyAttributes,
    drum::{DrumGradualDifficulty, DrumGradualPerformance, DrumPerformance},
    Beatmap, Difficulty, GameMode, ScoreState,
};

mod common;

#[test]
fn empty_map() {
    let mut map = Beatmap::default();
    map.mode = GameMode::Drum;

    let mut gradual = DrumGradualDifficulty::new(Difficulty::new(), &map).unwrap();

    assert_eq!(gradual.len(), 0);
    assert!(gradual.next().is_none());
}

#[test]
fn difficulty_eq_regular() {
    let map = common::converted_map(GameMode::Drum);
    let mut gradual = DrumGradualDifficulty::new(Difficulty::new(), &map).unwrap();

    for i in 1..=gradual.len() {
        let gradual_attrs = gradual.next().unwrap();

        let regular = Difficulty::new()
            .passed_objects(i as u32)
            .calculate(&map)
            .unwrap();

        assert_eq!(DifficultyAttributes::Drum(gradual_attrs), regular, "i={i}");
    }

    assert!(gradual.next().is_none());
}

#[test]
fn gradual_end_eq_regular() {
    let map = common::converted_map(GameMode::Drum);

    let state = ScoreState {
        max_combo: 70,
        n300: 95,
        n100: 4,
        misses: 1,
        ..ScoreState::new()
    };

    let regular = DrumPerformance::new(&map)
        .state(state.clone())
        .calculate()
        .unwrap();

    let mut gradual = DrumGradualPerformance::new(Difficulty::new(), &map).unwrap();
    let gradual_end = gradual.last(state.clone()).unwrap();

    assert_eq!(regular, gradual_end);
    assert!(gradual.next(state).is_none());
}

#[test]
fn complete_next_eq_regular() {
    let map = common::converted_map(GameMode::Drum);

    let mut gradual = DrumGradualPerformance::new(Difficulty::new(), &map).unwrap();
    let len = gradual.len();

    let mut state = ScoreState::new();

    for i in 1.. {
        if i % 5 == 0 {
            state.n100 += 1;
        } else {
            state.n300 += 1;
            state.max_combo += 1;
        }

        let Some(next_gradual) = gradual.next(state.clone()) else {
            assert_eq!(i, len + 1);
            break;
        };

        let regular = DrumPerformance::new(&map)
            .passed_objects(i as u32)
            .state(state.clone())
            .calculate()
            .unwrap();

        assert_eq!(next_gradual, regular, "i={i}");
    }
}
