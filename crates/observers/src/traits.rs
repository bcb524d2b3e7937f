//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasStep`]: events that carry a step index
//! - [`HasTime`]: events that carry a time value
//! - [`HasState`]: events that carry the current state
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use fixstep_core::Observer;
//! use fixstep_observers::traits::{CanStopEarly, HasTime};
//!
//! struct StopAt {
//!     time: f64,
//! }
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for StopAt {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.time).then(A::stop_early)
//!     }
//! }
//! ```

use fixstep_core::StepIntegrable;
use fixstep_solvers::fixed_step;

/// An event that carries a step index.
pub trait HasStep {
    /// Returns the step index (0 for the initial condition).
    fn step(&self) -> usize;
}

/// An event that carries a time value.
pub trait HasTime {
    /// Returns the time of this event.
    fn time(&self) -> f64;
}

/// An event that carries the current state.
pub trait HasState {
    /// The state type.
    type State: StepIntegrable;

    /// Returns the state for this event.
    fn state(&self) -> &Self::State;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- fixed_step::Event ---

impl<S> HasStep for fixed_step::Event<'_, S> {
    fn step(&self) -> usize {
        self.step
    }
}

impl<S> HasTime for fixed_step::Event<'_, S> {
    fn time(&self) -> f64 {
        self.time
    }
}

impl<S: StepIntegrable> HasState for fixed_step::Event<'_, S> {
    type State = S;

    fn state(&self) -> &S {
        self.state
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for fixed_step::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
