//! Property tests for loop geometry and slide-set invariants.

use proptest::prelude::*;
use slidekit_core::geometry::{clone_count, max_index, page_count};
use slidekit_core::SlideSet;

proptest! {
    /// Clone count is always within `[0, slide_count]`.
    #[test]
    fn clone_count_bounded(
        slide_count in 1usize..64,
        items in 1usize..16,
        step in 1usize..16,
    ) {
        let cc = clone_count(slide_count, items, step);
        prop_assert!(cc <= slide_count);
    }

    /// No clones whenever the whole panel set fits in the window.
    #[test]
    fn small_sets_never_clone(
        slide_count in 1usize..16,
        extra in 0usize..16,
        step in 1usize..16,
    ) {
        let items = slide_count + extra;
        prop_assert_eq!(clone_count(slide_count, items, step), 0);
    }

    /// The render track is exactly `slide_count + 2 * clone_count` long and
    /// the clone prefix/suffix mirror the originals.
    #[test]
    fn render_track_shape(
        slide_count in 1usize..32,
        items in 1usize..8,
        step in 1usize..8,
        looping: bool,
    ) {
        let cc = if looping { clone_count(slide_count, items, step) } else { 0 };
        let originals: Vec<usize> = (0..slide_count).collect();
        let set = SlideSet::new(originals.clone(), looping, cc);

        prop_assert_eq!(set.render_len(), slide_count + 2 * cc);
        prop_assert_eq!(set.clone_count(), cc);

        let track: Vec<usize> = set.iter().copied().collect();
        prop_assert_eq!(&track[cc..cc + slide_count], originals.as_slice());
        prop_assert_eq!(&track[..cc], &originals[slide_count - cc..]);
        prop_assert_eq!(&track[cc + slide_count..], &originals[..cc]);
    }

    /// Identity case: a set that fits its window renders as the originals.
    #[test]
    fn fitting_set_renders_identity(
        slide_count in 1usize..8,
        extra in 0usize..8,
    ) {
        let items = slide_count + extra;
        let cc = clone_count(slide_count, items, 1);
        let originals: Vec<usize> = (0..slide_count).collect();
        let set = SlideSet::new(originals.clone(), true, cc);
        prop_assert_eq!(set.render_len(), slide_count);
        prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), originals);
    }

    /// Page count covers every slide and never over-counts by a full page.
    #[test]
    fn page_count_covers_slides(
        slide_count in 1usize..64,
        items in 1usize..16,
    ) {
        let pages = page_count(slide_count, items);
        prop_assert!(pages * items >= slide_count);
        prop_assert!((pages - 1) * items < slide_count);
    }

    /// Every index on the render track is paintable: the window starting at
    /// `max_index` still fits.
    #[test]
    fn max_index_window_fits(
        render_len in 1usize..64,
        items in 1usize..16,
    ) {
        let max = max_index(render_len, items);
        prop_assert!(max == 0 || max + items == render_len);
    }
}
