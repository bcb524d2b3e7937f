use fixstep_core::{OdeProblem, StepMethod, TimeGrid};
use fixstep_solvers::fixed_step;

/// Solves on a uniform grid and returns the largest absolute error against
/// `exact` at the final time.
///
/// # Panics
///
/// Panics if the grid is invalid or the solve fails.
pub fn final_error<P, M>(
    problem: &P,
    initial: P::State,
    stop: f64,
    steps: usize,
    method: &M,
    exact: impl Fn(f64) -> P::State,
    error: impl Fn(&P::State, &P::State) -> f64,
) -> f64
where
    P: OdeProblem,
    M: StepMethod,
{
    let grid = TimeGrid::uniform(0.0, stop, steps).expect("valid grid");
    let solution = fixed_step::solve_unobserved(problem, initial, grid, method).expect("solves");

    let (t, state) = solution.last();
    error(state, &exact(t))
}

/// Estimates the order of accuracy from errors at step sizes `dt` and `dt / 2`.
#[must_use]
pub fn observed_order(coarse: f64, fine: f64) -> f64 {
    (coarse / fine).log2()
}

/// Absolute difference between two scalars.
#[must_use]
pub fn scalar_error(a: &f64, b: &f64) -> f64 {
    (a - b).abs()
}

/// Largest componentwise absolute difference between two pairs.
#[must_use]
pub fn pair_error(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    (a[0] - b[0]).abs().max((a[1] - b[1]).abs())
}
