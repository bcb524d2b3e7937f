//! Core traits and types for fixed-step ODE integration.
//!
//! This crate defines the shared abstractions that step methods, solvers, and
//! observers build on:
//!
//! - [`StepIntegrable`]: a state that can be advanced by `state + dt * derivative`
//! - [`TimeGrid`]: a validated, strictly increasing sequence of time points
//! - [`OdeProblem`]: the right-hand side `y' = f(y, t)`
//! - [`StepMethod`]: a rule that produces the next state from the history
//! - [`Observer`]: receives solver events and optionally returns control actions

mod grid;
mod method;
mod observer;
mod problem;
mod step;

pub use grid::{GridError, TimeGrid};
pub use method::StepMethod;
pub use observer::Observer;
pub use problem::{FnProblem, OdeProblem, from_fn};
pub use step::{Shape, StepIntegrable};
