//! Shared helpers for cross-crate integration tests.

pub mod capture;
pub mod convergence;
