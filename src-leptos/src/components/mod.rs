//! Reusable UI components

mod pagination;

pub use pagination::Pagination;
