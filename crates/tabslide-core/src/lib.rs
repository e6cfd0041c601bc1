//! # tabslide-core
//!
//! Core state machine for an animated horizontal tab strip.
//!
//! The strip renders a colored highlight rectangle behind the selected
//! tab and slides it to the new resting position whenever the selection
//! changes. This crate holds everything that can be reasoned about
//! without a terminal:
//!
//! - [`TabView`] / [`TabAdapter`] - the tab model and the host-provided
//!   factory the strip is rebuilt from
//! - [`AnimationDriver`] / [`AnimationRun`] - time-based interpolation
//!   of the highlight offset
//! - [`TabStrip`] - selection state, animation orchestration, and the
//!   single-slot select/reselect notification handlers
//! - [`StripConfig`] - highlight color and slide duration, loadable
//!   from TOML
//! - [`StripError`] - the adapter contract violation and config errors
//!
//! ## Concurrency model
//!
//! Everything here is single-threaded and cooperative: the host owns a
//! redraw loop, calls [`TabStrip::set_current`] on input, and drives
//! [`TabStrip::tick`] while a run is in flight. All timestamps are
//! caller-supplied [`std::time::Instant`]s, so the whole state machine
//! is testable without a live scheduler.
//!
//! ## Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tabslide_core::animation::AnimationDriver;
//!
//! let driver = AnimationDriver::new(Duration::from_millis(800));
//! let t0 = Instant::now();
//! let run = driver.start(0, 60, t0);
//! let (offset, finished) = driver.sample(&run, t0 + Duration::from_millis(400));
//! assert_eq!((offset, finished), (30, false));
//! ```

pub mod animation;
pub mod config;
pub mod error;
pub mod event;
pub mod strip;
pub mod tab;

pub use animation::{AnimationDriver, AnimationRun};
pub use config::{StripConfig, DEFAULT_DURATION_MS, DEFAULT_HIGHLIGHT};
pub use error::{StripError, StripResult};
pub use event::InputEvent;
pub use strip::{SelectionHandler, TabStrip};
pub use tab::{TabAdapter, TabView};
