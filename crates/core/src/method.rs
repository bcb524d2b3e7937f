use crate::{OdeProblem, TimeGrid};

/// A rule for advancing an ODE solution by one step of a time grid.
///
/// Given the state history computed so far, the index `k` of the current
/// point, the time grid, and the problem, a step method returns the state at
/// `grid[k + 1]`. The solver guarantees `history.len() == k + 1`; a method may
/// read any of `history[..=k]` (multistep schemes use earlier entries) and
/// must return a value with the same shape as `history[k]`.
///
/// Methods take `&self` and keep no state between calls, so a single method
/// value can drive any number of independent solves.
pub trait StepMethod {
    /// Returns the global order of accuracy of the method.
    fn order(&self) -> usize;

    /// Computes the state at `grid[k + 1]`.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the problem.
    fn advance<P: OdeProblem>(
        &self,
        history: &[P::State],
        k: usize,
        grid: &TimeGrid,
        problem: &P,
    ) -> Result<P::State, P::Error>;
}

impl<M: StepMethod + ?Sized> StepMethod for &M {
    fn order(&self) -> usize {
        (**self).order()
    }

    fn advance<P: OdeProblem>(
        &self,
        history: &[P::State],
        k: usize,
        grid: &TimeGrid,
        problem: &P,
    ) -> Result<P::State, P::Error> {
        (**self).advance(history, k, grid, problem)
    }
}
