use fixstep_core::{OdeProblem, StepIntegrable, StepMethod, TimeGrid};

use super::Rk2;

/// Two-step Adams–Bashforth on a possibly non-uniform grid.
///
/// ```text
/// r = dt[k] / dt[k-1]
/// y[k+1] = y[k] + dt[k] * ((1 + r/2) f(y[k], t[k]) - (r/2) f(y[k-1], t[k-1]))
/// ```
///
/// The first step has no earlier point to draw on and is taken with [`Rk2`].
/// Both slopes are re-evaluated from the history on every call, so the method
/// holds no state between steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdamsBashforth2;

impl StepMethod for AdamsBashforth2 {
    fn order(&self) -> usize {
        2
    }

    fn advance<P: OdeProblem>(
        &self,
        history: &[P::State],
        k: usize,
        grid: &TimeGrid,
        problem: &P,
    ) -> Result<P::State, P::Error> {
        if k == 0 {
            return Rk2.advance(history, k, grid, problem);
        }

        let dt = grid.dt(k);
        let ratio = dt / grid.dt(k - 1);

        let current = problem.derivative(&history[k], grid[k])?;
        let previous = problem.derivative(&history[k - 1], grid[k - 1])?;

        Ok(history[k]
            .step(&current, dt * (1.0 + 0.5 * ratio))
            .step(&previous, -dt * 0.5 * ratio))
    }
}
