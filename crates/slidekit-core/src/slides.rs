#![forbid(unsafe_code)]

//! Slide set: original panels plus synthesized boundary clones.
//!
//! When looping is on and clones are needed, the render track is laid out as
//!
//! ```text
//! [last clone_count originals] ++ [originals] ++ [first clone_count originals]
//! ```
//!
//! so that an animated move past either end always slides over real content
//! before the index is silently wrapped back into the canonical window. When
//! looping is off (or the panel set is too small to loop) the render track is
//! the original panels, identity, with no copies made.

/// Where a rendered slot comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Prefix clone of one of the last `clone_count` originals.
    HeadClone,
    /// One of the original panels.
    Original,
    /// Suffix clone of one of the first `clone_count` originals.
    TailClone,
}

/// The ordered panels of one carousel: originals plus owned clones.
///
/// Clones are independent `T::clone` copies; mutating host-side state hung
/// off a clone must never leak back into the original, which is why the set
/// owns its copies rather than aliasing the originals.
#[derive(Debug, Clone)]
pub struct SlideSet<T> {
    originals: Vec<T>,
    head: Vec<T>,
    tail: Vec<T>,
}

impl<T: Clone> SlideSet<T> {
    /// Build the render track.
    ///
    /// `clone_count` is trusted from [`crate::geometry::clone_count`]; it must
    /// not exceed `originals.len()`.
    #[must_use]
    pub fn new(originals: Vec<T>, looping: bool, clone_count: usize) -> Self {
        debug_assert!(clone_count <= originals.len());
        let (head, tail) = if looping && clone_count > 0 {
            let head = originals[originals.len() - clone_count..].to_vec();
            let tail = originals[..clone_count].to_vec();
            (head, tail)
        } else {
            (Vec::new(), Vec::new())
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            slide_count = originals.len(),
            clone_count = head.len(),
            looping,
            "slide set built"
        );

        Self {
            originals,
            head,
            tail,
        }
    }
}

impl<T> SlideSet<T> {
    /// Number of original panels.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.originals.len()
    }

    /// Number of clones on each end of the track.
    #[must_use]
    pub fn clone_count(&self) -> usize {
        self.head.len()
    }

    /// Total number of rendered slots.
    #[must_use]
    pub fn render_len(&self) -> usize {
        self.head.len() + self.originals.len() + self.tail.len()
    }

    /// The original panels, in order.
    #[must_use]
    pub fn originals(&self) -> &[T] {
        &self.originals
    }

    /// Panel at a render-track position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let cc = self.head.len();
        if index < cc {
            self.head.get(index)
        } else if index < cc + self.originals.len() {
            self.originals.get(index - cc)
        } else {
            self.tail.get(index - cc - self.originals.len())
        }
    }

    /// Provenance of a render-track position.
    #[must_use]
    pub fn provenance(&self, index: usize) -> Option<Provenance> {
        let cc = self.head.len();
        if index >= self.render_len() {
            None
        } else if index < cc {
            Some(Provenance::HeadClone)
        } else if index < cc + self.originals.len() {
            Some(Provenance::Original)
        } else {
            Some(Provenance::TailClone)
        }
    }

    /// Whether a render-track position holds a clone.
    #[must_use]
    pub fn is_clone(&self, index: usize) -> bool {
        matches!(
            self.provenance(index),
            Some(Provenance::HeadClone | Provenance::TailClone)
        )
    }

    /// Iterate the render track in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.head
            .iter()
            .chain(self.originals.iter())
            .chain(self.tail.iter())
    }
}
