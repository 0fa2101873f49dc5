#![forbid(unsafe_code)]

//! Two-phase index state machine.
//!
//! A move is clamp-then-correct: the index is clamped into the padded render
//! track and painted with an animated transition, and only after the full
//! transition duration does the correction run, silently wrapping the index
//! out of clone territory with an instant repaint. Collapsing the phases
//! would make the loop seam visible, so the ordering is load-bearing:
//! paint animated -> wait `speed` -> correct instantly -> accept new moves.
//!
//! # Invariants
//!
//! 1. `current_index` stays in `[0, render_len - items]` after every call.
//! 2. Without looping the index never leaves `[0, slide_count - items]`
//!    (there is no clone territory to enter).
//! 3. At most one transition is in flight; a move requested while animating
//!    is dropped, not queued.
//!
//! # Failure Modes
//!
//! - A missed correction timer leaves the lock held forever. That is an
//!   unrecoverable host failure; the controller has no timeout of its own.
//! - A spurious `finish_move` while idle is ignored.

use std::time::Duration;

use slidekit_core::config::CarouselConfig;
use slidekit_core::position::{self, PaintFrame};
use slidekit_core::{geometry, indicator};

/// Transition phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No transition in flight.
    Idle,
    /// A transition is in flight; moves are dropped until `finish_move`.
    Animating,
}

/// An accepted move: the frame to paint now and when to finish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    /// Animated frame to paint synchronously.
    pub frame: PaintFrame,
    /// Delay after which [`IndexController::finish_move`] must run.
    pub correction_delay: Duration,
}

/// Owns the current index and its animation lock.
#[derive(Debug, Clone)]
pub struct IndexController {
    looping: bool,
    items: usize,
    speed: Duration,
    slide_count: usize,
    clone_count: usize,
    render_len: usize,
    current_index: usize,
    phase: Phase,
}

impl IndexController {
    /// Seed the controller for a built slide set.
    ///
    /// The initial index is the clone-prefix length: index `clone_count` is
    /// the first original panel, and it is 0 when nothing was cloned.
    #[must_use]
    pub fn new(config: &CarouselConfig, slide_count: usize, clone_count: usize) -> Self {
        Self {
            looping: config.is_looping(),
            items: config.visible_items(),
            speed: config.transition_speed(),
            slide_count,
            clone_count,
            render_len: slide_count + 2 * clone_count,
            current_index: clone_count,
            phase: Phase::Idle,
        }
    }

    /// Request an animated move by `step` slides (negative moves backward).
    ///
    /// Returns `None` when a transition is already in flight (the drop
    /// policy). Otherwise clamps the target into the render track, takes the
    /// lock, and returns the animated frame plus the correction delay. The
    /// caller must paint the frame first, then arm the correction timer.
    pub fn request_move(&mut self, step: i64) -> Option<Move> {
        if self.phase == Phase::Animating {
            tracing::debug!(step, "move dropped: transition in flight");
            return None;
        }
        self.phase = Phase::Animating;

        let max = self.max_index() as i64;
        let next = (self.current_index as i64 + step).clamp(0, max) as usize;
        tracing::debug!(step, from = self.current_index, to = next, "move accepted");
        self.current_index = next;

        Some(Move {
            frame: position::frame(self.current_index, self.items, self.speed, false),
            correction_delay: self.speed,
        })
    }

    /// Finish the in-flight move: wrap the index out of clone territory and
    /// release the lock.
    ///
    /// Returns the instant repaint frame when a teleport happened. The
    /// teleported position is pixel-identical to the displayed one, because
    /// clones are copies of the wrapped-around originals. Idle calls are
    /// ignored.
    pub fn finish_move(&mut self) -> Option<PaintFrame> {
        if self.phase == Phase::Idle {
            return None;
        }
        self.phase = Phase::Idle;
        if !self.looping {
            return None;
        }

        let corrected = if self.current_index < self.clone_count {
            // Drifted backward past the start: teleport one panel-set right.
            Some(self.current_index + self.slide_count)
        } else if self.current_index > self.slide_count {
            // Drifted forward past the end: teleport one panel-set left.
            Some(self.current_index - self.slide_count)
        } else {
            None
        };

        let corrected = corrected?;
        tracing::debug!(from = self.current_index, to = corrected, "wrap correction");
        self.current_index = corrected;
        Some(position::frame(self.current_index, self.items, self.speed, true))
    }

    /// Jump straight to a real page, bypassing the animate-then-correct
    /// cycle. No lock interaction: the target is already canonical.
    pub fn seek_to_page(&mut self, page: usize) -> PaintFrame {
        let offset = if self.looping { self.clone_count } else { 0 };
        let target = (page * self.items + offset).min(self.max_index());
        tracing::debug!(page, from = self.current_index, to = target, "seek");
        self.current_index = target;
        position::frame(self.current_index, self.items, self.speed, true)
    }

    /// Current left-edge index on the render track.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Animating
    }

    /// Highest index the window can take.
    #[must_use]
    pub fn max_index(&self) -> usize {
        geometry::max_index(self.render_len, self.items)
    }

    /// Real page for the current index.
    #[must_use]
    pub fn active_page(&self) -> usize {
        indicator::active_page(
            self.current_index,
            self.clone_count,
            self.slide_count,
            self.items,
            self.looping,
        )
    }
}
