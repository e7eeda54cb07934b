//! Simulated plays for osu!catch.
//!
//! When no replay or score is available, difficulty and performance
//! calculation still needs a set of hitresults. This crate reconstructs
//! them from a few play-quality parameters (accuracy, combo, misses) and
//! the geometry of a [`Chart`].
//!
//! ## Usage
//!
//! ```
//! use rosu_catch_sim::{
//!     catch::{CatchObject, CatchSimulation, Droplet, JuiceStream},
//!     Chart,
//! };
//!
//! let chart: Chart = vec![
//!     CatchObject::Fruit,
//!     CatchObject::JuiceStream(JuiceStream::new(1, vec![Droplet::DROPLET, Droplet::TINY])),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(chart.max_combo(), 5);
//! assert_eq!(chart.total_scorable_units(), 6);
//!
//! let play = CatchSimulation::new().misses(1).percent_combo(50.0).simulate(&chart);
//!
//! assert_eq!(play.hitresults.perfect, 5);
//! assert_eq!(play.combo, 2);
//! assert!((play.accuracy - 5.0 / 6.0).abs() < f64::EPSILON);
//!
//! for (name, value) in play.report(&chart).attributes() {
//!     println!("{name}: {value}");
//! }
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Emits events for derived totals and inputs that exceed the chart's scorable units | [`tracing`]
//!
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links, rustdoc::missing_crate_level_docs)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic, missing_debug_implementations)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

#[doc(inline)]
pub use self::catch::Chart;

#[doc(inline)]
pub use self::model::mods::GameMods;

/// Types for calculations of any mode.
pub mod any;

/// Types for osu!catch simulations.
pub mod catch;

/// Types used in and around this crate.
pub mod model;

#[doc(inline)]
pub use rosu_map::section::general::GameMode;
