//! Render model read by the display layer after each transition.

use pagewin_types::PageMarker;

use crate::state::PaginationState;

/// A click coming from the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageClick {
    /// "Previous" control: targets `current_page - 1`
    Prev,
    /// "Next" control: targets `current_page + 1`
    Next,
    /// A numbered marker
    Page(usize),
}

impl PageClick {
    /// Resolve the requested page relative to `current_page`.
    ///
    /// The result may be out of range (e.g. `Prev` on page 1 gives 0); the
    /// paginator drops such requests.
    pub fn target(self, current_page: usize) -> usize {
        match self {
            Self::Prev => current_page.saturating_sub(1),
            Self::Next => current_page.saturating_add(1),
            Self::Page(n) => n,
        }
    }

    /// Click for a marker; ellipses are inert.
    pub fn from_marker(marker: PageMarker) -> Option<Self> {
        marker.page().map(Self::Page)
    }
}

/// Which side of the marker row an edge control sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSide {
    Prev,
    Next,
}

/// Previous / next control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeControl {
    pub side: EdgeSide,
    /// Page the control would request (may be out of range when disabled)
    pub target: usize,
    pub disabled: bool,
}

impl EdgeControl {
    pub fn click(&self) -> PageClick {
        match self.side {
            EdgeSide::Prev => PageClick::Prev,
            EdgeSide::Next => PageClick::Next,
        }
    }

    pub fn class(&self) -> &'static str {
        match (self.side, self.disabled) {
            (EdgeSide::Prev, false) => "pagination-item-prev",
            (EdgeSide::Prev, true) => "pagination-item-prev-disabled",
            (EdgeSide::Next, false) => "pagination-item-next",
            (EdgeSide::Next, true) => "pagination-item-next-disabled",
        }
    }
}

/// One painted marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerItem {
    pub marker: PageMarker,
    /// Set only on the concrete marker equal to the current page
    pub active: bool,
}

impl MarkerItem {
    pub fn click(&self) -> Option<PageClick> {
        PageClick::from_marker(self.marker)
    }

    pub fn class(&self) -> &'static str {
        match self.marker {
            PageMarker::Ellipsis => "pagination-item-dot",
            PageMarker::Page(_) if self.active => "pagination-item-active",
            PageMarker::Page(_) => "pagination-item",
        }
    }
}

/// Everything the display layer paints for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    pub prev: EdgeControl,
    /// Empty when the control shows only its edge controls
    pub items: Vec<MarkerItem>,
    pub next: EdgeControl,
}

impl PagerView {
    pub(crate) fn build(state: &PaginationState, only_edges: bool) -> Self {
        let current = state.current_page();
        let total = state.total_pages();

        let items = if only_edges {
            Vec::new()
        } else {
            state
                .markers()
                .iter()
                .map(|&marker| MarkerItem { marker, active: marker.page() == Some(current) })
                .collect()
        };

        Self {
            prev: EdgeControl {
                side: EdgeSide::Prev,
                target: PageClick::Prev.target(current),
                disabled: current <= 1,
            },
            items,
            next: EdgeControl {
                side: EdgeSide::Next,
                target: PageClick::Next.target(current),
                disabled: current >= total,
            },
        }
    }

    /// The highlighted marker, if markers are shown.
    pub fn active_page(&self) -> Option<usize> {
        self.items.iter().find(|item| item.active).and_then(|item| item.marker.page())
    }
}
