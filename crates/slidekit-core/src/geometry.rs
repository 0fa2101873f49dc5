#![forbid(unsafe_code)]

//! Loop geometry: pure clone-count and index-bound arithmetic.
//!
//! # Invariants
//!
//! 1. `0 <= clone_count(n, items, step) <= n` for all inputs.
//! 2. `clone_count == 0` whenever `n <= items` (nothing to loop over).
//! 3. `page_count(n, items) * items >= n` and `page_count >= 1` for `n >= 1`.

/// Number of panels cloned onto each end of the render track.
///
/// The count covers one full step plus one visible window, so an animated
/// move across either boundary always has real pixels to slide over. It is
/// capped at `slide_count` because clones can never need to duplicate more
/// panels than exist.
#[must_use]
pub fn clone_count(slide_count: usize, items: usize, effective_slide_by: usize) -> usize {
    if slide_count <= items {
        return 0;
    }
    (effective_slide_by + items).min(slide_count)
}

/// Highest left-edge index the visible window can take on a track of
/// `render_len` slides.
#[must_use]
pub fn max_index(render_len: usize, items: usize) -> usize {
    render_len.saturating_sub(items)
}

/// Number of indicator pages covering the original panels.
#[must_use]
pub fn page_count(slide_count: usize, items: usize) -> usize {
    slide_count.div_ceil(items)
}
