//! # pagewin types
//!
//! Page markers, pagination configuration, and error definitions for pagewin.
//!
//! This crate provides the foundational type system for the pagewin workspace:
//!
//! - **`error`** - Typed error hierarchy for configuration and page requests
//! - **`models`** - Domain models (`PageMarker`, `PaginationConfig`)
//!
//! ## Architecture Role
//!
//! `pagewin-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!        pagewin-types (this crate)
//!                │
//!                ▼
//!          pagewin-core
//!                │
//!                ▼
//!         pagewin-leptos
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for config blobs and IPC
//! - **Clone** for cheap copies into reactive signals
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, PageError, Result, TypedError};

// Re-export core model types
pub use models::{PageMarker, PaginationConfig, DEFAULT_SURROUND_COUNT, DEFAULT_WINDOW_SIZE};
