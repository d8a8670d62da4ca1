use arp_pp::{
    any::DifficultyAttributes,
    keys::{KeysGradualDifficulty, KeysGradualPerformance, KeysPerformance},
    Beatmap, Difficulty, GameMode, ScoreState,
};

mod common;

#[test]
fn empty_map() {
    let mut map = Beatmap::default();
    map.mode = GameMode::Keys;

    let mut gradual = KeysGradualDifficulty::new(Difficulty::new(), &map).unwrap();

    assert_eq!(gradual.len(), 0);
    assert!(gradual.next().is_none());
}

#[test]
fn difficulty_eq_regular() {
    let map = common::converted_map(GameMode::Keys);
    let mut gradual = KeysGradualDifficulty::new(Difficulty::new(), &map).unwrap();

    assert_eq!(gradual.len(), map.hit_objects.len());

    for i in 1..=map.hit_objects.len() {
        let gradual_attrs = gradual.next().unwrap();

        let regular = Difficulty::new()
            .passed_objects(i as u32)
            .calculate(&map)
            .unwrap();

        assert_eq!(DifficultyAttributes::Keys(gradual_attrs), regular, "i={i}");
    }

    assert!(gradual.next().is_none());
}

#[test]
fn gradual_end_eq_regular() {
    let map = common::converted_map(GameMode::Keys);

    let state = ScoreState {
        max_combo: 120,
        n_geki: 80,
        n300: 10,
        n_katu: 5,
        n100: 3,
        n50: 1,
        misses: 1,
        ..ScoreState::new()
    };

    let regular = KeysPerformance::new(&map)
        .state(state.clone())
        .calculate()
        .unwrap();

    let mut gradual = KeysGradualPerformance::new(Difficulty::new(), &map).unwrap();
    let gradual_end = gradual.last(state.clone()).unwrap();

    assert_eq!(regular, gradual_end);
    assert!(gradual.next(state).is_none());
}

#[test]
fn complete_next_eq_regular() {
    let map = common::converted_map(GameMode::Keys);

    let mut gradual = KeysGradualPerformance::new(Difficulty::new(), &map).unwrap();
    let len = gradual.len();

    let mut state = ScoreState::new();

    for i in 1.. {
        if i % 6 == 0 {
            state.n_katu += 1;
        } else {
            state.n_geki += 1;
            state.max_combo += 1;
        }

        let Some(next_gradual) = gradual.next(state.clone()) else {
            assert_eq!(i, len + 1);
            break;
        };

        let regular = KeysPerformance::new(&map)
            .passed_objects(i as u32)
            .state(state.clone())
            .calculate()
            .unwrap();

        assert_eq!(next_gradual, regular, "i={i}");
    }
}
