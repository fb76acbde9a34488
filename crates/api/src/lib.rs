//! Cheese Island server library.
//!
//! Exposes config, state, and the router builder so integration tests and
//! the binary entrypoint share one middleware stack. Only the health route
//! is mounted; entity routes are left to the consuming application.

pub mod app;
pub mod config;
pub mod routes;
pub mod state;
