//! Timeline model of [osu!] beatmaps.
//!
//! ## Description
//!
//! A [`Beatmap`] holds the control points, breaks, and hit objects of a chart
//! after it has been parsed. Decoding the `.osu` format, audio, and difficulty
//! calculation all happen elsewhere; this crate only keeps the timeline
//! consistent and answers questions about it.
//!
//! - Control points are kept sorted by time per kind and looked up
//!   piecewise-constant, i.e. the point in effect at some time is the last one
//!   at or before it.
//! - The nominal bpm is derived from the beat length that was in effect for the
//!   longest time.
//! - Clones copy the control points and share breaks and hit objects until
//!   either side mutates them.
//!
//! ## Usage
//!
//! ```
//! use rosu_timeline::{
//!     model::{
//!         break_period::BreakPeriod,
//!         control_point::TimingPoint,
//!         hit_object::{HitObject, Pos},
//!     },
//!     Beatmap,
//! };
//!
//! let map = Beatmap::builder()
//!     .control_point(TimingPoint::new(0.0, 500.0))
//!     .control_point(TimingPoint::new(1000.0, 250.0))
//!     .break_period(BreakPeriod::new(100.0, 200.0)?)
//!     .hit_object(HitObject::circle(Pos::new(256.0, 192.0), 2000.0))
//!     .build();
//!
//! // Both beat lengths lasted 1000ms; the first one wins
//! assert_eq!(map.bpm(), Ok(120.0));
//! assert_eq!(map.timing_point_at(1500.0).beat_len, 250.0);
//! assert_eq!(map.total_break_time(), 100.0);
//!
//! let mut branch = map.clone();
//! branch.control_points.add(TimingPoint::new(3000.0, 400.0));
//! assert_eq!(map.control_points.timing_points().len(), 2);
//! # Ok::<_, rosu_timeline::model::break_period::InvalidBreakPeriod>(())
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | Enables the `sync` feature |
//! | `sync` | Breaks and hit objects are shared through `Arc` instead of `Rc` so that a [`Beatmap`] is `Send` and `Sync`. |
//! | `serde` | Implements `Serialize` and `Deserialize` for the model. Hit objects carry their variant under the `type` key. | [`serde`]
//! | `tracing` | Replaced control points and unusable beat lengths are logged through `tracing`. If this feature is not enabled, nothing is logged. | [`tracing`]
//!
//! [osu!]: https://osu.ppy.sh/home
//! [`serde`]: https://docs.rs/serde
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]

#[doc(inline)]
pub use self::model::beatmap::{Beatmap, BeatmapBuilder, BpmError};

/// Types used in and around this crate.
pub mod model;

mod util;
