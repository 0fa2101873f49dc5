#![forbid(unsafe_code)]

//! Position model: logical index to fractional track offset.
//!
//! A paint is a pure numeric mapping plus one style write into a
//! [`TrackSink`]. Each visible item occupies `100 / items` percent of the
//! viewport, so the track offset for a left-edge index is
//! `-(index * 100 / items)` percent.

use std::time::Duration;

/// Transition mode for one paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Apply the offset immediately. Used by wrap corrections and seeks,
    /// where the new position is pixel-identical to the displayed one.
    None,
    /// Animate the offset change over the given duration.
    Animate(Duration),
}

impl Transition {
    /// Whether this transition is user-visible.
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        matches!(self, Self::Animate(_))
    }
}

/// One computed paint: where the track goes and how it gets there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintFrame {
    /// Horizontal translation of the track, in percent of the viewport.
    /// Zero or negative.
    pub offset_percent: f64,
    /// How the offset is applied.
    pub transition: Transition,
}

/// Rendering sink: the track container owned by the host layer.
///
/// The engine never creates or styles elements itself; it only pushes a
/// transition mode and a transform through this seam. The transition is
/// always set before the transform it applies to.
pub trait TrackSink {
    /// Set the transition mode for subsequent transforms.
    fn set_transition(&mut self, transition: Transition);
    /// Translate the track horizontally by `offset_percent`.
    fn set_transform(&mut self, offset_percent: f64);
}

/// Track offset for a left-edge index with `items` visible slides.
#[must_use]
pub fn offset_percent(index: usize, items: usize) -> f64 {
    -(index as f64 * 100.0 / items as f64)
}

/// Compute the frame for an index without touching a sink.
#[must_use]
pub fn frame(index: usize, items: usize, speed: Duration, instant: bool) -> PaintFrame {
    PaintFrame {
        offset_percent: offset_percent(index, items),
        transition: if instant {
            Transition::None
        } else {
            Transition::Animate(speed)
        },
    }
}

/// Paints logical indices into a [`TrackSink`].
#[derive(Debug)]
pub struct PositionRenderer<S> {
    sink: S,
    items: usize,
    speed: Duration,
}

impl<S: TrackSink> PositionRenderer<S> {
    /// Wrap a sink with the visible-window width and transition speed.
    #[must_use]
    pub fn new(sink: S, items: usize, speed: Duration) -> Self {
        Self { sink, items, speed }
    }

    /// Paint an index: transition mode first, then the transform.
    pub fn paint(&mut self, index: usize, instant: bool) -> PaintFrame {
        let frame = frame(index, self.items, self.speed, instant);
        self.sink.set_transition(frame.transition);
        self.sink.set_transform(frame.offset_percent);
        frame
    }

    /// Borrow the sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

/// Test sink recording every painted frame in order.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Default)]
pub struct RecordingSink {
    transition: Option<Transition>,
    /// Frames in paint order.
    pub frames: Vec<PaintFrame>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl RecordingSink {
    /// Empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent frame, if any paint happened.
    #[must_use]
    pub fn last(&self) -> Option<&PaintFrame> {
        self.frames.last()
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl TrackSink for RecordingSink {
    fn set_transition(&mut self, transition: Transition) {
        self.transition = Some(transition);
    }

    fn set_transform(&mut self, offset_percent: f64) {
        // A transform without a preceding transition would be a renderer bug.
        let transition = self.transition.take().unwrap_or(Transition::None);
        self.frames.push(PaintFrame {
            offset_percent,
            transition,
        });
    }
}
