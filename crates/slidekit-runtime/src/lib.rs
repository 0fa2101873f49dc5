#![forbid(unsafe_code)]

//! Runtime: the index state machine, timer capability, and control surface.
//!
//! # Role in slidekit
//! `slidekit-runtime` drives the pure model in `slidekit-core` from move
//! requests and timers. It owns the single piece of mutable state in the
//! engine (the current index plus its animation lock) and the two timers the
//! design needs: the post-transition wrap correction and the autoplay
//! interval.
//!
//! # Primary responsibilities
//! - **IndexController**: clamp-then-correct two-phase moves with a
//!   single-flight animation lock.
//! - **Scheduler**: injected timer capability; deterministic
//!   [`scheduler::VirtualScheduler`] for tests, thread-backed
//!   [`scheduler::ThreadScheduler`] for real hosts.
//! - **Carousel**: the public control surface (`move_by`, `seek_to_page`,
//!   autoplay, paint subscriptions).
//!
//! # Timer flow
//! Timers deliver [`scheduler::TimerMsg`] values back to the host, which
//! feeds them into [`Carousel::handle_timer`]. Routing timers as messages
//! instead of reentrant callbacks keeps the engine single-threaded and
//! testable with a virtual clock.

pub mod carousel;
pub mod controller;
pub mod scheduler;

pub use carousel::{Carousel, PaintEvent};
pub use controller::{IndexController, Move};
pub use scheduler::{Scheduler, ThreadScheduler, TimerId, TimerMsg, VirtualScheduler};
