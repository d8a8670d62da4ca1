#![allow(unused)]

use arp_pp::{
    model::hit_object::{HitObject, HitObjectKind, Pos, Slider, Spinner},
    Beatmap, GameMode,
};

/// Bit values for legacy mods
pub mod mods {
    #![allow(unused)]

    pub const NM: u32 = 0;
    pub const NF: u32 = 1 << 0;
    pub const EZ: u32 = 1 << 1;
    pub const HD: u32 = 1 << 3;
    pub const HR: u32 = 1 << 4;
    pub const DT: u32 = 1 << 6;
    pub const HT: u32 = 1 << 8;
    pub const FL: u32 = 1 << 10;
}

/// A deterministic cursor mode map with a mixture of circles, sliders, and
/// spinners.
pub fn tap_map() -> Beatmap {
    let hit_objects = (0_u32..100)
        .map(|i| {
            let kind = if i % 23 == 22 {
                HitObjectKind::Spinner(Spinner { duration: 1000.0 })
            } else if i % 7 == 6 {
                HitObjectKind::Slider(Slider {
                    expected_dist: Some(140.0),
                    repeats: (i % 3) as usize,
                    duration: 350.0,
                })
            } else {
                HitObjectKind::Circle
            };

            HitObject {
                pos: Pos::new((i * 37 % 512) as f32, (i * 53 % 384) as f32),
                start_time: f64::from(i) * 250.0,
                kind,
            }
        })
        .collect();

    Beatmap {
        ar: 9.0,
        cs: 4.0,
        hp: 6.0,
        od: 8.5,
        bpm: 180.0,
        hit_objects,
        ..Beatmap::default()
    }
}

/// The [`tap_map`] converted to the given mode.
pub fn converted_map(mode: GameMode) -> Beatmap {
    tap_map().convert(mode).unwrap()
}

#[track_caller]
pub fn assert_eq_float(a: f64, b: f64) {
    assert!((a - b).abs() < f64::EPSILON, "{a} != {b}");
}
