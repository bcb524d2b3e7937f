//! Fixed-step ODE solvers and step methods.
//!
//! # Modules
//!
//! - [`fixed_step`]: drives a [`StepMethod`] across a [`TimeGrid`] and
//!   returns the full state history
//! - [`methods`]: Euler, RK2, RK4, and two-step Adams–Bashforth
//! - [`sweep`](mod@sweep): independent solves for a list of parameters, run in parallel
//!
//! [`StepMethod`]: fixstep_core::StepMethod
//! [`TimeGrid`]: fixstep_core::TimeGrid

pub mod fixed_step;
pub mod methods;
pub mod sweep;

pub use sweep::sweep;
