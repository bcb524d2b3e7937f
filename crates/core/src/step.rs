use std::fmt;

/// The shape of an integrable state: a scalar or a vector of fixed dimension.
///
/// A solver records the shape of the initial condition and requires every
/// derivative and every subsequent state to report the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// A single real value.
    Scalar,

    /// A vector with the given number of components.
    Vector(usize),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => write!(f, "scalar"),
            Shape::Vector(dim) => write!(f, "vector[{dim}]"),
        }
    }
}

/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait enables generic step methods to work with the type
/// by stepping it via `self + delta * derivative`. The derivative has the same
/// type (and must have the same [`Shape`]) as the state.
///
/// Implementations are provided for `f64`, `[f64; N]`, and `Vec<f64>`.
pub trait StepIntegrable: Clone {
    /// Returns the shape of this value.
    fn shape(&self) -> Shape;

    /// Returns the value after stepping with a derivative and step size.
    ///
    /// Callers are expected to pass a derivative with a matching shape.
    /// Solvers check shapes before calling this, so implementations may
    /// assume they agree.
    #[must_use]
    fn step(&self, derivative: &Self, delta: f64) -> Self;

    /// Returns `true` if every component is finite.
    fn is_finite(&self) -> bool;

    /// Returns the largest absolute component.
    fn max_abs(&self) -> f64;
}

impl StepIntegrable for f64 {
    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn step(&self, derivative: &Self, delta: f64) -> Self {
        self + delta * derivative
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn max_abs(&self) -> f64 {
        self.abs()
    }
}

impl<const N: usize> StepIntegrable for [f64; N] {
    fn shape(&self) -> Shape {
        Shape::Vector(N)
    }

    fn step(&self, derivative: &Self, delta: f64) -> Self {
        std::array::from_fn(|i| self[i] + delta * derivative[i])
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|v| v.is_finite())
    }

    fn max_abs(&self) -> f64 {
        self.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }
}

impl StepIntegrable for Vec<f64> {
    fn shape(&self) -> Shape {
        Shape::Vector(self.len())
    }

    fn step(&self, derivative: &Self, delta: f64) -> Self {
        debug_assert_eq!(self.len(), derivative.len());
        self.iter()
            .zip(derivative)
            .map(|(s, d)| s + delta * d)
            .collect()
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|v| v.is_finite())
    }

    fn max_abs(&self) -> f64 {
        self.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_scalar_state() {
        let next = 0.0_f64.step(&2.0, 0.5);
        assert_eq!(next, 1.0);
        assert_eq!(next.shape(), Shape::Scalar);
    }

    #[test]
    fn step_array_state() {
        let state: [f64; 3] = [1.0, 2.0, 3.0];
        let next = state.step(&[0.1, 0.2, 0.3], 10.0);

        assert_eq!(next, [2.0, 4.0, 6.0]);
        assert_eq!(next.shape(), Shape::Vector(3));
    }

    #[test]
    fn step_vec_state() {
        let state = vec![1.0, -1.0];
        let next = state.step(&vec![2.0, 2.0], 0.25);

        assert_eq!(next, vec![1.5, -0.5]);
        assert_eq!(next.shape(), Shape::Vector(2));
    }

    #[test]
    fn finiteness_and_magnitude() {
        assert!(StepIntegrable::is_finite(&[1.0_f64, -4.0]));
        assert!(!vec![1.0, f64::NAN].is_finite());
        assert!(!StepIntegrable::is_finite(&f64::INFINITY));

        assert_eq!([1.0_f64, -4.0, 2.0].max_abs(), 4.0);
        assert_eq!((-3.5_f64).max_abs(), 3.5);
    }

    #[test]
    fn shape_display() {
        assert_eq!(Shape::Scalar.to_string(), "scalar");
        assert_eq!(Shape::Vector(2).to_string(), "vector[2]");
    }
}
