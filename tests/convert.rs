use arp_pp::{
    model::{
        beatmap::TooSuspicious,
        hit_object::{HitObject, HitObjectKind, Pos, Slider},
        mode::ConvertError,
    },
    tap::TapDifficultyAttributes,
    Beatmap, Difficulty, DifficultyAttributes, GameMode,
};

mod common;

#[test]
fn tap_map_converts_to_all_modes() {
    for mode in [GameMode::Drum, GameMode::Rain, GameMode::Keys] {
        let map = common::converted_map(mode);

        assert_eq!(map.mode, mode);
        assert!(map.is_convert);
    }
}

#[test]
fn same_mode_is_a_noop() {
    let map = common::tap_map();
    let converted = map
        .clone()
        .convert(GameMode::Tap)
        .unwrap();

    assert_eq!(map, converted);
}

#[test]
fn specialized_modes_do_not_convert() {
    let map = common::converted_map(GameMode::Drum);

    let err = map.convert(GameMode::Keys);

    assert_eq!(err.unwrap_err(), ConvertError::AlreadyConverted);
}

#[test]
fn keys_convert_snaps_columns() {
    let map = common::converted_map(GameMode::Keys);

    // cs 4 means four columns, each 128 map units wide
    for h in &map.hit_objects {
        let column = (h.pos.x / 128.0).floor();

        common::assert_eq_float(f64::from(h.pos.x), f64::from(column * 128.0 + 64.0));
        assert!(column < 4.0);

        // spinners and sliders become hold notes
        assert!(matches!(
            h.kind,
            HitObjectKind::Circle | HitObjectKind::Hold(_)
        ));
    }
}

#[test]
fn difficulty_mode_converts_on_the_fly() {
    let map = common::tap_map();

    let attrs = Difficulty::new()
        .mode(GameMode::Drum)
        .calculate(&map)
        .unwrap();

    assert!(matches!(attrs, DifficultyAttributes::Drum(_)));
}

#[test]
fn attribute_mismatch() {
    let attrs = DifficultyAttributes::Drum(Default::default());

    let err = TapDifficultyAttributes::try_from(attrs).unwrap_err();

    assert_eq!(
        err,
        ConvertError::AttributeMismatch {
            expected: GameMode::Tap,
            actual: GameMode::Drum,
        }
    );
}

#[test]
fn suspicion_check_accepts_a_normal_map() {
    assert!(common::tap_map().check_suspicion().is_ok());
}

#[test]
fn suspicion_check_flags_excessive_object_counts() {
    let hit_objects = (0_u32..20_001)
        .map(|i| HitObject {
            pos: Pos::new(256.0, 192.0),
            start_time: f64::from(i) * 100.0,
            kind: HitObjectKind::Circle,
        })
        .collect();

    let map = Beatmap {
        mode: GameMode::Drum,
        is_convert: true,
        hit_objects,
        ..Beatmap::default()
    };

    assert_eq!(map.check_suspicion(), Err(TooSuspicious::ObjectCount));
}

#[test]
fn suspicion_check_flags_excessive_density() {
    let hit_objects = (0_u32..300)
        .map(|i| HitObject {
            pos: Pos::new(256.0, 192.0),
            start_time: f64::from(i),
            kind: HitObjectKind::Circle,
        })
        .collect();

    let map = Beatmap {
        hit_objects,
        ..Beatmap::default()
    };

    assert_eq!(map.check_suspicion(), Err(TooSuspicious::Density));
}

#[test]
fn suspicion_check_flags_far_out_slider_positions() {
    let hit_objects: Vec<_> = (0_u32..260)
        .map(|i| HitObject {
            pos: Pos::new(20_000.0, 0.0),
            start_time: f64::from(i) * 10_000.0,
            kind: HitObjectKind::Slider(Slider {
                expected_dist: Some(100.0),
                repeats: 0,
                duration: 500.0,
            }),
        })
        .collect();

    let map = Beatmap {
        hit_objects: hit_objects.clone(),
        ..Beatmap::default()
    };

    assert_eq!(map.check_suspicion(), Err(TooSuspicious::SliderPositions));

    // Slider positions carry no meaning in the scrolling mode
    let keys = Beatmap {
        mode: GameMode::Keys,
        is_convert: true,
        hit_objects,
        ..Beatmap::default()
    };

    assert!(keys.check_suspicion().is_ok());
}

#[test]
fn suspicion_check_flags_extreme_slider_repeats() {
    let slider = |pos: Pos, start_time: f64| HitObject {
        pos,
        start_time,
        kind: HitObjectKind::Slider(Slider {
            expected_dist: Some(100.0),
            repeats: 1001,
            duration: 500.0,
        }),
    };

    let hit_objects: Vec<_> = (0_u32..260)
        .map(|i| slider(Pos::new(256.0, 192.0), f64::from(i) * 10_000.0))
        .collect();

    let map = Beatmap {
        hit_objects,
        ..Beatmap::default()
    };

    assert_eq!(map.check_suspicion(), Err(TooSuspicious::SliderRepeats));

    // Extreme repeats on a far out of bounds slider bail immediately
    let red_flag = Beatmap {
        hit_objects: vec![slider(Pos::new(20_000.0, 0.0), 0.0)],
        ..Beatmap::default()
    };

    assert_eq!(red_flag.check_suspicion(), Err(TooSuspicious::RedFlag));
}
