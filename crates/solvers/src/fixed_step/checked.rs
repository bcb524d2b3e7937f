use std::cell::Cell;

use fixstep_core::{OdeProblem, Shape, StepIntegrable};
use thiserror::Error;

/// Wraps a problem so that every derivative is shape-checked and counted.
pub(super) struct Checked<'a, P> {
    problem: &'a P,
    shape: Shape,
    evaluations: Cell<usize>,
}

#[derive(Debug, Error)]
pub(super) enum CheckedError<E> {
    #[error("derivative has shape {found}, expected {expected}")]
    ShapeMismatch { expected: Shape, found: Shape },

    #[error(transparent)]
    Problem(E),
}

impl<'a, P: OdeProblem> Checked<'a, P> {
    pub(super) fn new(problem: &'a P, shape: Shape) -> Self {
        Self {
            problem,
            shape,
            evaluations: Cell::new(0),
        }
    }

    pub(super) fn evaluations(&self) -> usize {
        self.evaluations.get()
    }
}

impl<P: OdeProblem> OdeProblem for Checked<'_, P> {
    type State = P::State;
    type Error = CheckedError<P::Error>;

    fn derivative(&self, state: &Self::State, t: f64) -> Result<Self::State, Self::Error> {
        self.evaluations.set(self.evaluations.get() + 1);

        let derivative = self
            .problem
            .derivative(state, t)
            .map_err(CheckedError::Problem)?;

        let found = derivative.shape();
        if found != self.shape {
            return Err(CheckedError::ShapeMismatch {
                expected: self.shape,
                found,
            });
        }

        Ok(derivative)
    }
}

#[cfg(test)]
mod tests {
    use fixstep_core::from_fn;

    use super::*;

    #[test]
    fn counts_and_passes_matching_derivatives() {
        let problem = from_fn(|y: &Vec<f64>, _t| y.iter().map(|v| -v).collect());
        let checked = Checked::new(&problem, Shape::Vector(2));

        let d = checked.derivative(&vec![1.0, 2.0], 0.0).unwrap();
        let _ = checked.derivative(&vec![0.0, 0.0], 0.0).unwrap();

        assert_eq!(d, vec![-1.0, -2.0]);
        assert_eq!(checked.evaluations(), 2);
    }

    #[test]
    fn rejects_mismatched_derivatives() {
        let problem = from_fn(|_y: &Vec<f64>, _t| vec![0.0; 3]);
        let checked = Checked::new(&problem, Shape::Vector(2));

        let err = checked.derivative(&vec![1.0, 2.0], 0.0).unwrap_err();

        assert!(matches!(
            err,
            CheckedError::ShapeMismatch {
                expected: Shape::Vector(2),
                found: Shape::Vector(3),
            }
        ));
    }
}
