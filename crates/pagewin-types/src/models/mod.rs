//! Core domain models for pagewin.
//!
//! This module contains the data structures shared by the calculator,
//! the state holder, and the rendering layer.

mod config;
mod marker;


pub use config::{PaginationConfig, DEFAULT_SURROUND_COUNT, DEFAULT_WINDOW_SIZE};
pub use marker::PageMarker;
