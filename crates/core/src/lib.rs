//! Shared primitives for the Cheese Island backend.
//!
//! Holds the types and pure helpers every other crate builds on, with no
//! database dependency.

pub mod error;
pub mod pagination;
pub mod types;
