#![forbid(unsafe_code)]

//! Page-indicator sync: real-page derivation for a possibly-looped index.
//!
//! When looping, the current index lives in the padded render track and may
//! transiently sit in clone territory mid-animation, so `index - clone_count`
//! can be negative. The mapping back to original-panel space therefore uses a
//! non-negative modulo (`rem_euclid`).

/// Active page for indicator highlighting.
///
/// Always in `[0, page_count - 1]` for any index reachable on the render
/// track. `slide_count == 0` yields page 0.
#[must_use]
pub fn active_page(
    current_index: usize,
    clone_count: usize,
    slide_count: usize,
    items: usize,
    looping: bool,
) -> usize {
    if slide_count == 0 {
        return 0;
    }
    let real_index = if looping {
        (current_index as i64 - clone_count as i64).rem_euclid(slide_count as i64) as usize
    } else {
        current_index
    };
    real_index / items
}
