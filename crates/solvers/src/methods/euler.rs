use fixstep_core::{OdeProblem, StepIntegrable, StepMethod, TimeGrid};

/// Explicit forward Euler.
///
/// ```text
/// y[k+1] = y[k] + dt * f(y[k], t[k])
/// ```
///
/// First order; one derivative evaluation per step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl StepMethod for Euler {
    fn order(&self) -> usize {
        1
    }

    fn advance<P: OdeProblem>(
        &self,
        history: &[P::State],
        k: usize,
        grid: &TimeGrid,
        problem: &P,
    ) -> Result<P::State, P::Error> {
        let y = &history[k];
        let slope = problem.derivative(y, grid[k])?;
        Ok(y.step(&slope, grid.dt(k)))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use fixstep_core::from_fn;

    use super::*;

    #[test]
    fn takes_one_slope_step() {
        let grid = TimeGrid::new(vec![0.0, 0.5]).unwrap();
        let problem = from_fn(|u: &f64, _t| 2.0 * u);

        let next = Euler.advance(&[3.0], 0, &grid, &problem).unwrap();

        // 3 + 0.5 * 6
        assert_relative_eq!(next, 6.0);
    }
}
