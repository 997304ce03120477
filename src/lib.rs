//! fvctl: interactive front end for formal-verification tooling.
//!
//! Tracks per-action flag state and readiness, assembles command lines for
//! the external clone/build/compile/verify scripts, streams their output,
//! and keeps a counter-example directory listing in sync with the tracked
//! environment location.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::AppError;
