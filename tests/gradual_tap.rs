use arp_pp::{
    any::DifficultyAttributes,
    tap::{TapGradualDifficulty, TapGradualPerformance, TapPerformance},
    Beatmap, Difficulty, ScoreState,
};

mod common;

#[test]
fn empty_map() {
    let map = Beatmap::default();
    let mut gradual = TapGradualDifficulty::new(Difficulty::new(), &map).unwrap();

    assert_eq!(gradual.len(), 0);
    assert!(gradual.next().is_none());
}

#[test]
fn difficulty_eq_regular() {
    let map = common::tap_map();
    let mut gradual = TapGradualDifficulty::new(Difficulty::new(), &map).unwrap();

    assert_eq!(gradual.len(), map.hit_objects.len());

    for i in 1..=map.hit_objects.len() {
        let gradual_attrs = gradual.next().unwrap();

        let regular = Difficulty::new()
            .passed_objects(i as u32)
            .calculate(&map)
            .unwrap();

        assert_eq!(DifficultyAttributes::Tap(gradual_attrs), regular, "i={i}");
    }

    assert!(gradual.next().is_none());
}

#[test]
fn gradual_end_eq_regular() {
    let map = common::tap_map();

    let state = ScoreState {
        max_combo: 50,
        n300: 90,
        n100: 8,
        n50: 1,
        misses: 1,
        ..ScoreState::new()
    };

    let regular = TapPerformance::new(&map)
        .state(state.clone())
        .calculate()
        .unwrap();

    let mut gradual = TapGradualPerformance::new(Difficulty::new(), &map).unwrap();
    let gradual_end = gradual.last(state.clone()).unwrap();

    assert_eq!(regular, gradual_end);
    assert!(gradual.next(state).is_none());
}

#[test]
fn complete_next_eq_regular() {
    let map = common::tap_map();

    let mut gradual = TapGradualPerformance::new(Difficulty::new(), &map).unwrap();
    let mut gradual_2nd = TapGradualPerformance::new(Difficulty::new(), &map).unwrap();

    let mut state = ScoreState::new();

    for i in 1.. {
        if i % 4 == 0 {
            state.misses += 1;
        } else {
            state.n300 += 1;
            state.max_combo += 1;
        }

        let Some(next_gradual) = gradual.next(state.clone()) else {
            assert_eq!(i, map.hit_objects.len() + 1);
            break;
        };

        if i % 2 == 0 {
            let next_gradual_2nd = gradual_2nd.nth(state.clone(), 1).unwrap();
            assert_eq!(next_gradual, next_gradual_2nd, "i={i}");
        }

        let regular = TapPerformance::new(&map)
            .passed_objects(i as u32)
            .state(state.clone())
            .calculate()
            .unwrap();

        assert_eq!(next_gradual, regular, "i={i}");
    }
}
