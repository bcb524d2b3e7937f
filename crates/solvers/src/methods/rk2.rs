use fixstep_core::{OdeProblem, StepIntegrable, StepMethod, TimeGrid};

/// Explicit second-order Runge–Kutta (midpoint rule).
///
/// ```text
/// dt = t[k+1] - t[k]
/// K1 = dt * f(y[k], t[k])
/// K2 = dt * f(y[k] + K1 / 2, t[k] + dt / 2)
/// y[k+1] = y[k] + K2
/// ```
///
/// Local truncation error is O(dt³) and global error O(dt²). Two derivative
/// evaluations per step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk2;

impl StepMethod for Rk2 {
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
        let y = &history[k];
        let t = grid[k];
        let dt = grid.dt(k);

        let k1 = problem.derivative(y, t)?;
        let midpoint = y.step(&k1, 0.5 * dt);
        let k2 = problem.derivative(&midpoint, t + 0.5 * dt)?;

        Ok(y.step(&k2, dt))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use fixstep_core::from_fn;

    use super::*;

    #[test]
    fn uses_the_midpoint_slope() {
        // u' = t has the exact solution u = t²/2, which the midpoint rule
        // integrates without error.
        let grid = TimeGrid::new(vec![1.0, 3.0]).unwrap();
        let problem = from_fn(|_u: &f64, t| t);

        let next = Rk2.advance(&[0.5], 0, &grid, &problem).unwrap();

        assert_relative_eq!(next, 4.5);
    }

    #[test]
    fn only_reads_the_latest_state() {
        let grid = TimeGrid::new(vec![0.0, 0.1, 0.2]).unwrap();
        let problem = from_fn(|u: &f64, _t| -u + 1.0);

        let with_history = Rk2.advance(&[f64::NAN, 0.0], 1, &grid, &problem).unwrap();
        let fresh = Rk2.advance(&[0.0], 0, &grid, &problem).unwrap();

        assert_eq!(with_history.to_bits(), fresh.to_bits());
    }
}
