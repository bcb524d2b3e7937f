use fixstep_core::{OdeProblem, StepIntegrable, StepMethod, TimeGrid};

/// Classic fourth-order Runge–Kutta.
///
/// ```text
/// k1 = f(y, t)
/// k2 = f(y + dt/2 * k1, t + dt/2)
/// k3 = f(y + dt/2 * k2, t + dt/2)
/// k4 = f(y + dt * k3, t + dt)
/// y[k+1] = y + dt/6 * (k1 + 2 k2 + 2 k3 + k4)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl StepMethod for Rk4 {
    fn order(&self) -> usize {
        4
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
        let half = 0.5 * dt;

        let k1 = problem.derivative(y, t)?;
        let k2 = problem.derivative(&y.step(&k1, half), t + half)?;
        let k3 = problem.derivative(&y.step(&k2, half), t + half)?;
        let k4 = problem.derivative(&y.step(&k3, dt), t + dt)?;

        Ok(y.step(&k1, dt / 6.0)
            .step(&k2, dt / 3.0)
            .step(&k3, dt / 3.0)
            .step(&k4, dt / 6.0))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use fixstep_core::from_fn;

    use super::*;

    #[test]
    fn integrates_a_cubic_exactly() {
        // u' = 3t² gives u = t³; RK4 is exact for polynomials up to degree 4.
        let grid = TimeGrid::new(vec![0.0, 2.0]).unwrap();
        let problem = from_fn(|_u: &f64, t| 3.0 * t * t);

        let next = Rk4.advance(&[0.0], 0, &grid, &problem).unwrap();

        assert_relative_eq!(next, 8.0, epsilon = 1e-12);
    }
}
