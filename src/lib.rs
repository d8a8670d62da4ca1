//! Library to calculate difficulty and performance attributes for all
//! Arpeggio gamemodes.
//!
//! ## Usage
//!
//! ```
//! use arp_pp::{Beatmap, Difficulty};
//! use arp_pp::model::hit_object::{HitObject, HitObjectKind, Pos};
//! use arp_pp::model::mods::GameMods;
//!
//! // Usually maps come from an external source; here we build a small
//! // one by hand.
//! let hit_objects = (0..64)
//!     .map(|i| HitObject {
//!         pos: Pos::new((i % 8) as f32 * 64.0, 192.0),
//!         start_time: f64::from(i) * 250.0,
//!         kind: HitObjectKind::Circle,
//!     })
//!     .collect();
//!
//! let map = Beatmap {
//!     hit_objects,
//!     ..Beatmap::default()
//! };
//!
//! // Calculate difficulty attributes
//! let mods = GameMods::from_acronyms(&["HD", "HR"], map.mode).unwrap();
//! let diff_attrs = Difficulty::new().mods(mods.clone()).calculate(&map).unwrap();
//!
//! let stars = diff_attrs.stars();
//!
//! // Calculate performance attributes.
//! //
//! // To speed up the calculation significantly, we re-use the previous
//! // attributes. **Note** that this should only be done if the map, mode,
//! // mods, and amount of passed objects stay the same. Otherwise, the
//! // resulting attributes will be incorrect.
//! let perf_attrs = diff_attrs
//!     .performance()
//!     .mods(mods)
//!     .combo(50)
//!     .accuracy(99.2)
//!     .misses(2)
//!     .calculate()
//!     .unwrap();
//!
//! let pp = perf_attrs.pp();
//!
//! println!("Stars: {stars} | PP: {pp}");
//! ```
//!
//! ## Gradual calculation
//!
//! Gradually calculating attributes provides an efficient way to process
//! scores played on the same map with various amounts of passed objects,
//! e.g. when watching a score in real time.
//!
//! Gradual difficulty calculation is done through [`GradualDifficulty`]
//! which implements [`Iterator`]; each step processes one more hit object.
//! Gradual performance calculation is done through [`GradualPerformance`]
//! whose `next` method takes the current [`ScoreState`].
//!
//! ```
//! use arp_pp::{Beatmap, Difficulty, GradualPerformance, ScoreState};
//! # use arp_pp::model::hit_object::{HitObject, HitObjectKind, Pos};
//! # let hit_objects = (0..16)
//! #     .map(|i| HitObject {
//! #         pos: Pos::new((i % 8) as f32 * 64.0, 192.0),
//! #         start_time: f64::from(i) * 250.0,
//! #         kind: HitObjectKind::Circle,
//! #     })
//! #     .collect();
//! # let map = Beatmap { hit_objects, ..Beatmap::default() };
//!
//! let mut gradual = GradualPerformance::new(Difficulty::new(), &map).unwrap();
//! let mut state = ScoreState::new();
//!
//! // The first 10 hitresults are perfect
//! for _ in 0..10 {
//!     state.n300 += 1;
//!     state.max_combo += 1;
//!
//!     let attrs = gradual.next(state.clone()).unwrap();
//!     println!("PP: {}", attrs.pp());
//! }
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Any unknown mod encountered during mods decoding will be logged through `tracing::debug`. If this feature is not enabled, unknown mods will be ignored silently. | [`tracing`]
//!
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::match_same_arms,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::cast_possible_wrap
)]

#[doc(inline)]
pub use self::{
    any::{
        Difficulty, DifficultyAttributes, GradualDifficulty, GradualPerformance,
        HitResultPriority, Performance, PerformanceAttributes, ScoreOrigin, ScoreState, Strains,
    },
    model::{beatmap::Beatmap, mode::GameMode, mods::GameMods},
};

/// Types for calculations of any mode.
pub mod any;

/// Types for cursor mode calculations.
pub mod tap;

/// Types for percussion mode calculations.
pub mod drum;

/// Types for catcher mode calculations.
pub mod rain;

/// Types for scrolling mode calculations.
pub mod keys;

/// Types used in and around this crate.
pub mod model;

mod util;
