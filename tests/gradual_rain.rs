use arp_pp::{
    any::DifficultyAttributes,
    rain::{RainGradualDifficulty, RainGradualPerformance, RainPerformance},
    Beatmap, Difficulty, GameMode, ScoreState,
};

mod common;

#[test]
fn empty_map() {
    let mut map = Beatmap::default();
    map.mode = GameMode::Rain;

    let mut gradual = RainGradualDifficulty::new(Difficulty::new(), &map).unwrap();

    assert_eq!(gradual.len(), 0);
    assert!(gradual.next().is_none());
}

#[test]
fn difficulty_eq_regular() {
    let map = common::converted_map(GameMode::Rain);
    let mut gradual = RainGradualDifficulty::new(Difficulty::new(), &map).unwrap();

    // Spinners are not palpable, so fewer objects than the map contains.
    for i in 1..=gradual.len() {
        let gradual_attrs = gradual.next().unwrap();

        let regular = Difficulty::new()
            .passed_objects(i as u32)
            .calculate(&map)
            .unwrap();

        assert_eq!(DifficultyAttributes::Rain(gradual_attrs), regular, "i={i}");
    }

    assert!(gradual.next().is_none());
}

#[test]
fn gradual_end_eq_regular() {
    let map = common::converted_map(GameMode::Rain);

    let state = ScoreState {
        max_combo: 80,
        n300: 100,
        n100: 12,
        n50: 30,
        n_katu: 3,
        misses: 2,
        ..ScoreState::new()
    };

    let regular = RainPerformance::new(&map)
        .state(state.clone())
        .calculate()
        .unwrap();

    let mut gradual = RainGradualPerformance::new(Difficulty::new(), &map).unwrap();
    let gradual_end = gradual.last(state.clone()).unwrap();

    assert_eq!(regular, gradual_end);
    assert!(gradual.next(state).is_none());
}

#[test]
fn complete_next_eq_regular() {
    let map = common::converted_map(GameMode::Rain);

    let mut gradual = RainGradualPerformance::new(Difficulty::new(), &map).unwrap();
    let len = gradual.len();

    let mut state = ScoreState::new();

    for i in 1.. {
        if i % 9 == 0 {
            state.misses += 1;
        } else {
            state.n300 += 1;
            state.max_combo += 1;
        }

        if i % 10 == 0 {
            state.n50 += 3;
        }

        let Some(next_gradual) = gradual.next(state.clone()) else {
            assert_eq!(i, len + 1);
            break;
        };

        let regular = RainPerformance::new(&map)
            .passed_objects(i as u32)
            .state(state.clone())
            .calculate()
            .unwrap();

        assert_eq!(next_gradual, regular, "i={i}");
    }
}
