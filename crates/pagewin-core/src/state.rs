//! Immutable snapshot of what the control is showing.

use std::ops::Range;

use pagewin_types::{PageMarker, PaginationConfig};

use crate::window::compute_markers;

/// Current page plus the marker row derived from it.
///
/// Never mutated: an accepted page change builds a fresh snapshot, so the
/// `(current_page, markers)` pair is always consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    total_pages: usize,
    markers: Vec<PageMarker>,
}

impl PaginationState {
    /// Build a snapshot for an in-range `current_page`.
    pub fn compute(
        total_pages: usize,
        current_page: usize,
        window_size: usize,
        surround_count: usize,
    ) -> Self {
        Self {
            current_page,
            total_pages,
            markers: compute_markers(total_pages, current_page, window_size, surround_count),
        }
    }

    /// Build a snapshot using the window settings of `config`.
    pub fn for_config(config: &PaginationConfig, current_page: usize) -> Self {
        Self::compute(config.total_pages(), current_page, config.window_size, config.surround_count)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn markers(&self) -> &[PageMarker] {
        &self.markers
    }
}

/// Item indices shown on `page` (1-based), end-exclusive and clamped to `total`.
pub fn page_item_range(page: usize, page_size: usize, total: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}
