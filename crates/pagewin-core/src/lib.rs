//! # pagewin core
//!
//! Pagination window calculator and page state holder.
//!
//! ```text
//! pagewin-core/src/
//! ├── window.rs     # pure marker calculator
//! ├── state.rs      # immutable (current page, markers) snapshot
//! ├── paginator.rs  # state holder: validate → recompute → notify
//! └── view.rs       # render model read by the display layer
//! ```
//!
//! The display layer feeds clicks into [`Paginator::click`] and repaints from
//! [`Paginator::view`] after each call. Everything is synchronous: a request
//! has either fully applied (state replaced, listener notified) or been
//! dropped by the time it returns.

// Test-only lints: allow panic!, unwrap, etc. in test code
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
    )
)]

pub mod paginator;
pub mod state;
pub mod view;
pub mod window;

pub use paginator::{NoopListener, PageChangeListener, Paginator};
pub use state::{page_item_range, PaginationState};
pub use view::{EdgeControl, EdgeSide, MarkerItem, PageClick, PagerView};
pub use window::{compute_markers, default_markers};

pub use pagewin_types::{ConfigError, PageError, PageMarker, PaginationConfig};
