#![forbid(unsafe_code)]

//! slidekit public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the model layer (`slidekit-core`) and the control surface
//! (`slidekit-runtime`) and offers a lightweight prelude for day-to-day use.
//!
//! # Quick start
//!
//! ```
//! use std::time::Duration;
//! use slidekit::prelude::*;
//!
//! struct NullSink;
//! impl TrackSink for NullSink {
//!     fn set_transition(&mut self, _: Transition) {}
//!     fn set_transform(&mut self, _: f64) {}
//! }
//!
//! let config = CarouselConfig::new().speed(Duration::from_millis(300));
//! let panels = vec!["a", "b", "c", "d", "e", "f"];
//! let mut carousel =
//!     Carousel::new(config, panels, NullSink, VirtualScheduler::new()).unwrap();
//!
//! carousel.next();
//! assert!(carousel.is_animating());
//! ```

// --- Core re-exports -------------------------------------------------------

pub use slidekit_core::config::{CarouselConfig, ConfigError, SlideBy};
pub use slidekit_core::geometry;
pub use slidekit_core::indicator;
pub use slidekit_core::position::{PaintFrame, PositionRenderer, TrackSink, Transition};
pub use slidekit_core::slides::{Provenance, SlideSet};

// --- Runtime re-exports ----------------------------------------------------

pub use slidekit_runtime::carousel::{Carousel, PaintEvent};
pub use slidekit_runtime::controller::{IndexController, Move};
pub use slidekit_runtime::scheduler::{
    Scheduler, ThreadScheduler, TimerId, TimerMsg, VirtualScheduler,
};

/// Common imports for carousel hosts.
pub mod prelude {
    pub use crate::{
        Carousel, CarouselConfig, PaintEvent, Scheduler, SlideBy, ThreadScheduler, TimerMsg,
        TrackSink, Transition, VirtualScheduler,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    struct NullSink;
    impl TrackSink for NullSink {
        fn set_transition(&mut self, _: Transition) {}
        fn set_transform(&mut self, _: f64) {}
    }

    #[test]
    fn facade_builds_a_working_carousel() {
        let mut carousel = Carousel::new(
            CarouselConfig::new(),
            vec![1u8, 2, 3, 4, 5, 6],
            NullSink,
            VirtualScheduler::new(),
        )
        .unwrap();

        carousel.next();
        let msgs = carousel.scheduler_mut().advance(std::time::Duration::from_millis(300));
        for msg in msgs {
            carousel.handle_timer(msg);
        }
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(carousel.active_page(), 1);
    }
}
