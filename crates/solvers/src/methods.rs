//! Step methods: rules that advance a state history by one grid step.
//!
//! Every method implements [`StepMethod`] and can drive the
//! [`fixed_step`](crate::fixed_step) solver.
//!
//! | Method              | Order | RHS calls/step | History read        |
//! |---------------------|-------|----------------|---------------------|
//! | [`Euler`]           | 1     | 1              | `history[k]`        |
//! | [`Rk2`]             | 2     | 2              | `history[k]`        |
//! | [`Rk4`]             | 4     | 4              | `history[k]`        |
//! | [`AdamsBashforth2`] | 2     | 2              | `history[k-1..=k]`  |
//!
//! [`Method`] selects one of these at runtime.

mod adams_bashforth;
mod euler;
mod rk2;
mod rk4;

pub use adams_bashforth::AdamsBashforth2;
pub use euler::Euler;
pub use rk2::Rk2;
pub use rk4::Rk4;

use fixstep_core::{OdeProblem, StepMethod, TimeGrid};

/// Runtime selection among the built-in step methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Explicit forward Euler.
    Euler,

    /// Explicit second-order Runge–Kutta (midpoint).
    #[default]
    Rk2,

    /// Classic fourth-order Runge–Kutta.
    Rk4,

    /// Two-step Adams–Bashforth, started with one RK2 step.
    AdamsBashforth2,
}

impl StepMethod for Method {
    fn order(&self) -> usize {
        match self {
            Method::Euler => Euler.order(),
            Method::Rk2 => Rk2.order(),
            Method::Rk4 => Rk4.order(),
            Method::AdamsBashforth2 => AdamsBashforth2.order(),
        }
    }

    fn advance<P: OdeProblem>(
        &self,
        history: &[P::State],
        k: usize,
        grid: &TimeGrid,
        problem: &P,
    ) -> Result<P::State, P::Error> {
        match self {
            Method::Euler => Euler.advance(history, k, grid, problem),
            Method::Rk2 => Rk2.advance(history, k, grid, problem),
            Method::Rk4 => Rk4.advance(history, k, grid, problem),
            Method::AdamsBashforth2 => AdamsBashforth2.advance(history, k, grid, problem),
        }
    }
}
