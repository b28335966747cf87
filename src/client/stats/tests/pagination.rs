//! Tests for the pagination helpers.

use crate::client::stats::{clamp_page, page_count, paginate};

/// Tests the page count over several item counts.
///
/// Expected: ceiling division with a floor of one page
#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(35, 10), 4);
}

/// Tests clamping after the filtered list shrinks.
///
/// Expected: an out-of-range page snaps to the last valid one
#[test]
fn clamp_snaps_into_range() {
    assert_eq!(clamp_page(4, 35, 10), 4);
    assert_eq!(clamp_page(9, 35, 10), 4);
    assert_eq!(clamp_page(0, 35, 10), 1);
    assert_eq!(clamp_page(3, 0, 10), 1);
}

/// Tests slicing of full and partial pages.
///
/// Expected: ten items on page one, the remainder on the last page
#[test]
fn paginate_slices_pages() {
    let items: Vec<u32> = (1..=25).collect();

    assert_eq!(paginate(&items, 1, 10), (1..=10).collect::<Vec<u32>>());
    assert_eq!(paginate(&items, 3, 10), (21..=25).collect::<Vec<u32>>());
}

/// Tests a page past the end.
///
/// Expected: an empty slice rather than a panic
#[test]
fn page_past_end_is_empty() {
    let items: Vec<u32> = (1..=5).collect();
    assert!(paginate(&items, 3, 10).is_empty());
}
