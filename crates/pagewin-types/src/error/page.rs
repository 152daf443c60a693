//! Page-change request errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when requesting a page change.
///
/// A paginator absorbs these at its boundary; they only surface through
/// the explicit `try_` entry points.
#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum PageError {
    /// Requested page lies outside `1..=total_pages`
    #[error("Page {requested} is out of range 1..={total_pages}")]
    OutOfRange {
        /// Page number that was requested
        requested: usize,
        /// Number of pages at the time of the request
        total_pages: usize,
    },
}

impl PageError {
    /// Page number carried by the rejected request.
    pub fn requested(&self) -> usize {
        match *self {
            Self::OutOfRange { requested, .. } => requested,
        }
    }
}
