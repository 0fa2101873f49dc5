#![forbid(unsafe_code)]

//! Core: configuration, loop geometry, slide set, and position model.
//!
//! # Role in slidekit
//! `slidekit-core` is the pure model layer of the carousel engine. It owns
//! everything that can be computed without a clock: clone-count derivation,
//! render-slide materialization, index-to-offset mapping, and page-indicator
//! math.
//!
//! # Primary responsibilities
//! - **CarouselConfig**: validated, immutable configuration.
//! - **Loop geometry**: clone counts and index bounds for infinite looping.
//! - **SlideSet**: originals plus synthesized boundary clones.
//! - **Position**: fractional track offsets and transition modes.
//! - **Indicator**: looped-index to real-page derivation.
//!
//! # How it fits in the system
//! The runtime (`slidekit-runtime`) drives this model from move requests and
//! timers. Nothing in this crate suspends, schedules, or owns a thread, so
//! every function here is directly testable without a clock.

pub mod config;
pub mod geometry;
pub mod indicator;
pub mod position;
pub mod slides;

pub use config::{CarouselConfig, ConfigError, SlideBy};
pub use position::{PaintFrame, PositionRenderer, TrackSink, Transition};
pub use slides::{Provenance, SlideSet};

#[cfg(any(test, feature = "test-helpers"))]
pub use position::RecordingSink;
