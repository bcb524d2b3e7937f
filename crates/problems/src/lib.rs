//! Reference ODE problems for fixstep.
//!
//! Each problem implements [`OdeProblem`](fixstep_core::OdeProblem) and
//! exposes its closed-form solution, which makes them useful both as
//! examples and as accuracy baselines for step methods.
//!
//! - [`Decay`]: relaxation toward an equilibrium, `u' = rate * (eq - u)`
//! - [`ForcedDecay`]: unit-rate decay with a time-dependent forcing term
//! - [`Oscillator`]: undamped harmonic oscillator on a two-component state

mod decay;
mod oscillator;

pub use decay::{Decay, ForcedDecay};
pub use oscillator::Oscillator;
