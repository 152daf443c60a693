//! Pagination control configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ConfigError;

/// Maximum number of page markers shown before the row collapses.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Pages shown on each side of the current page.
pub const DEFAULT_SURROUND_COUNT: usize = 2;

/// Construction-time options for a pagination control.
///
/// Field names follow the control's option names on the wire
/// (`pageSize`, `hideOnSinglePage`, ...). `total` is the only required key.
/// The page-change callback is not part of the config; it is handed to the
/// paginator separately.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaginationConfig {
    /// Page shown on first render (clamped into range by the paginator)
    #[serde(default = "default_current")]
    pub current: usize,
    /// Items per page
    #[validate(range(min = 1_usize, message = "must be at least 1"))]
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Total item count
    pub total: usize,
    /// Markers shown before the row collapses into ellipses
    #[validate(range(min = 1_usize, message = "must be at least 1"))]
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    /// Pages shown before and after the current page
    #[serde(default = "default_surround_count")]
    pub surround_count: usize,
    /// Show only the prev/next controls
    #[serde(default)]
    pub only_edges: bool,
    /// Render nothing when there is a single page
    #[serde(default = "default_true")]
    pub hide_on_single_page: bool,
}

impl PaginationConfig {
    /// Create a config with default options for `total` items.
    pub fn new(total: usize) -> Self {
        Self { total, ..Self::default() }
    }

    /// Parse a JSON config blob and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))?;
        config.validated()
    }

    /// Validate field ranges, returning the config unchanged on success.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;
        Ok(self)
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    pub fn with_current(mut self, current: usize) -> Self {
        self.current = current;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_surround_count(mut self, surround_count: usize) -> Self {
        self.surround_count = surround_count;
        self
    }

    pub fn with_only_edges(mut self, only_edges: bool) -> Self {
        self.only_edges = only_edges;
        self
    }

    pub fn with_hide_on_single_page(mut self, hide: bool) -> Self {
        self.hide_on_single_page = hide;
        self
    }

    /// Number of pages, never less than one.
    ///
    /// An unvalidated zero page size is treated as one item per page.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size.max(1)).max(1)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            current: default_current(),
            page_size: default_page_size(),
            total: 0,
            window_size: default_window_size(),
            surround_count: default_surround_count(),
            only_edges: false,
            hide_on_single_page: default_true(),
        }
    }
}

const fn default_current() -> usize {
    1
}

const fn default_page_size() -> usize {
    10
}

const fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

const fn default_surround_count() -> usize {
    DEFAULT_SURROUND_COUNT
}

const fn default_true() -> bool {
    true
}
