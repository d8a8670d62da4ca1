use arp_pp::{
    Beatmap, GameMode, HitResultPriority, Performance, PerformanceAttributes, ScoreOrigin,
};

mod common;

fn map_of(mode: GameMode) -> Beatmap {
    if mode == GameMode::Tap {
        common::tap_map()
    } else {
        common::converted_map(mode)
    }
}

#[test]
fn generated_state_hits_the_accuracy_target() {
    let map = common::converted_map(GameMode::Drum);

    for acc in [87.3, 92.0, 98.5] {
        let state = Performance::new(&map)
            .accuracy(acc)
            .generate_state()
            .unwrap();

        let actual = state.accuracy(GameMode::Drum, ScoreOrigin::Lazer) * 100.0;

        assert!(
            (actual - acc).abs() < 1.0,
            "target acc {acc} but generated {actual}"
        );
    }
}

#[test]
fn priorities_agree_on_totals() {
    let map = common::converted_map(GameMode::Keys);

    let mut totals = Vec::new();

    for priority in [
        HitResultPriority::BestCase,
        HitResultPriority::WorstCase,
        HitResultPriority::Fastest,
    ] {
        let state = Performance::new(&map)
            .accuracy(90.0)
            .hitresult_priority(priority)
            .generate_state()
            .unwrap();

        totals.push(state.total_hits(GameMode::Keys));
    }

    assert_eq!(totals[0], totals[1]);
    assert_eq!(totals[0], totals[2]);
}

#[test]
fn best_case_prefers_perfect_hits() {
    let map = common::converted_map(GameMode::Keys);

    let best = Performance::new(&map)
        .accuracy(90.0)
        .hitresult_priority(HitResultPriority::BestCase)
        .generate_state()
        .unwrap();

    let worst = Performance::new(&map)
        .accuracy(90.0)
        .hitresult_priority(HitResultPriority::WorstCase)
        .generate_state()
        .unwrap();

    assert!(
        best.n_geki >= worst.n_geki,
        "best={best:?} worst={worst:?}"
    );
    assert!(best.n50 <= worst.n50, "best={best:?} worst={worst:?}");
}

#[test]
fn generate_state_is_idempotent() {
    for mode in [
        GameMode::Tap,
        GameMode::Drum,
        GameMode::Rain,
        GameMode::Keys,
    ] {
        let map = map_of(mode);

        let mut perf = Performance::new(&map).accuracy(96.0);
        let generated = perf.generate_state().unwrap();

        let roundtrip = Performance::new(&map)
            .state(generated.clone())
            .generate_state()
            .unwrap();

        assert_eq!(generated, roundtrip, "mode={mode:?}");
    }
}

#[test]
fn pp_grows_with_accuracy() {
    for mode in [
        GameMode::Tap,
        GameMode::Drum,
        GameMode::Rain,
        GameMode::Keys,
    ] {
        let map = map_of(mode);

        let low = Performance::new(&map)
            .accuracy(90.0)
            .calculate()
            .unwrap()
            .pp();

        let high = Performance::new(&map)
            .accuracy(99.0)
            .calculate()
            .unwrap()
            .pp();

        assert!(low <= high, "mode={mode:?} low={low} high={high}");
        assert!(high > 0.0, "mode={mode:?}");
    }
}

#[test]
fn reused_attributes_eq_fresh_calculation() {
    let map = common::tap_map();

    let diff_attrs = arp_pp::Difficulty::new().calculate(&map).unwrap();

    let via_attrs = diff_attrs
        .performance()
        .accuracy(98.0)
        .calculate()
        .unwrap();

    let fresh = Performance::new(&map).accuracy(98.0).calculate().unwrap();

    assert_eq!(via_attrs, fresh);
}

#[test]
fn mode_erased_dispatch() {
    let map = common::converted_map(GameMode::Keys);

    let attrs = Performance::new(&map)
        .n_geki(100)
        .misses(2)
        .calculate()
        .unwrap();

    assert!(matches!(attrs, PerformanceAttributes::Keys(_)));
}

#[test]
fn misses_reduce_pp() {
    let map = common::tap_map();

    let clean = Performance::new(&map)
        .accuracy(99.0)
        .calculate()
        .unwrap()
        .pp();

    let missy = Performance::new(&map)
        .accuracy(99.0)
        .misses(10)
        .calculate()
        .unwrap()
        .pp();

    assert!(missy < clean, "missy={missy} clean={clean}");
}
