use std::convert::Infallible;

use fixstep_core::OdeProblem;

/// An undamped harmonic oscillator written as a first-order system.
///
/// The state is `[position, velocity]`:
///
/// ```text
/// y' = [y[1], -omega² * y[0]]
/// ```
///
/// With the default `omega = 1` and `y(0) = [1, 0]` the trajectory is
/// `[cos t, -sin t]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    /// Angular frequency.
    pub omega: f64,
}

impl Default for Oscillator {
    fn default() -> Self {
        Self { omega: 1.0 }
    }
}

impl Oscillator {
    /// Creates an oscillator with the given angular frequency.
    #[must_use]
    pub fn new(omega: f64) -> Self {
        Self { omega }
    }

    /// Returns the exact state at `t` for `y(0) = initial`.
    #[must_use]
    pub fn solution(&self, initial: [f64; 2], t: f64) -> [f64; 2] {
        let [x0, v0] = initial;
        let w = self.omega;

        if w == 0.0 {
            return [x0 + v0 * t, v0];
        }

        let (sin, cos) = (w * t).sin_cos();
        [x0 * cos + v0 / w * sin, -x0 * w * sin + v0 * cos]
    }

    /// Returns the total energy per unit mass, `(v² + omega² x²) / 2`.
    #[must_use]
    pub fn energy(&self, state: &[f64; 2]) -> f64 {
        let [x, v] = *state;
        0.5 * (v * v + self.omega * self.omega * x * x)
    }
}

impl OdeProblem for Oscillator {
    type State = [f64; 2];
    type Error = Infallible;

    fn derivative(&self, state: &[f64; 2], _t: f64) -> Result<[f64; 2], Self::Error> {
        Ok([state[1], -self.omega * self.omega * state[0]])
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn unit_oscillator_rotates_the_state() {
        let oscillator = Oscillator::default();

        assert_eq!(oscillator.derivative(&[1.0, 0.0], 0.0).unwrap(), [0.0, -1.0]);
        assert_eq!(oscillator.derivative(&[2.0, 1.0], 0.0).unwrap(), [1.0, -2.0]);
    }

    #[test]
    fn closed_form_traces_cos_and_sin() {
        let oscillator = Oscillator::default();
        let [x, v] = oscillator.solution([1.0, 0.0], PI / 3.0);

        assert_relative_eq!(x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(v, -(3.0_f64.sqrt()) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn energy_is_constant_along_the_exact_solution() {
        let oscillator = Oscillator::new(2.0);
        let initial = [0.5, 1.0];
        let e0 = oscillator.energy(&initial);

        for t in [0.3, 1.7, 4.2] {
            let state = oscillator.solution(initial, t);
            assert_relative_eq!(oscillator.energy(&state), e0, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_frequency_drifts_linearly() {
        let oscillator = Oscillator::new(0.0);
        assert_eq!(oscillator.solution([1.0, 2.0], 3.0), [7.0, 2.0]);
    }
}
