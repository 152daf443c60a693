//! Pagination window calculator.
//!
//! Turns `(total_pages, current_page, window_size, surround_count)` into the
//! ordered row of page markers. Pure: no validation, no logging. Callers keep
//! `1 <= current_page <= total_pages` and `window_size >= 1`.

use pagewin_types::{PageMarker, DEFAULT_SURROUND_COUNT, DEFAULT_WINDOW_SIZE};

/// Compute the marker row.
///
/// - `total_pages <= window_size`: every page, no ellipses.
/// - Near the start (`current_page + surround_count <= window_size`): the
///   first `window_size` pages, then the tail.
/// - Otherwise: `1`, an ellipsis, the window around `current_page`, then the
///   tail. A window clamped at `total_pages` is extended leftwards by the
///   pages it lost, stopping at page 2.
///
/// The tail is `total_pages` preceded by an ellipsis only when at least one
/// page is hidden between it and the last shown page.
pub fn compute_markers(
    total_pages: usize,
    current_page: usize,
    window_size: usize,
    surround_count: usize,
) -> Vec<PageMarker> {
    if total_pages <= window_size {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    if current_page.saturating_add(surround_count) <= window_size {
        let mut markers: Vec<_> = (1..=window_size).map(PageMarker::Page).collect();
        push_tail(&mut markers, window_size, total_pages);
        return markers;
    }

    let upper = current_page.saturating_add(surround_count).min(total_pages);
    let shortfall = surround_count.saturating_sub(upper.saturating_sub(current_page));
    let lower = current_page.saturating_sub(surround_count).saturating_sub(shortfall).max(2);

    let mut markers = vec![PageMarker::Page(1), PageMarker::Ellipsis];
    markers.extend((lower..=upper).map(PageMarker::Page));
    push_tail(&mut markers, upper, total_pages);
    markers
}

/// [`compute_markers`] with the stock window of 5 and surround of 2.
pub fn default_markers(total_pages: usize, current_page: usize) -> Vec<PageMarker> {
    compute_markers(total_pages, current_page, DEFAULT_WINDOW_SIZE, DEFAULT_SURROUND_COUNT)
}

fn push_tail(markers: &mut Vec<PageMarker>, last_shown: usize, total_pages: usize) {
    if last_shown >= total_pages {
        return;
    }
    // A single-page gap shows the page itself.
    if total_pages.saturating_sub(last_shown) >= 2 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.push(PageMarker::Page(total_pages));
}
