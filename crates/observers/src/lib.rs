//! Reusable observers for fixstep solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasStep`], [`HasTime`], [`HasState`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`DivergenceGuard`]: stops a run at the first non-finite or oversized state
//! - [`Recorder`]: keeps a thinned copy of the trajectory
//! - [`StepLogger`]: reports progress through the `log` facade
//!
//! [`Observer`]: fixstep_core::Observer
//! [`HasStep`]: traits::HasStep
//! [`HasTime`]: traits::HasTime
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod divergence;
mod logger;
mod recorder;

pub use divergence::{Divergence, DivergenceGuard, DivergenceKind};
pub use logger::StepLogger;
pub use recorder::Recorder;
