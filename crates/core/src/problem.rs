use std::{convert::Infallible, marker::PhantomData};

use crate::StepIntegrable;

/// Defines the right-hand side of an ODE `y' = f(y, t)`.
///
/// A problem maps the current state and time to the state's derivative. The
/// derivative must have the same [`Shape`] as the state; solvers check this on
/// every call and fail at the first mismatch.
///
/// Derivatives are returned by value. An implementation may reuse internal
/// buffers to build them, but the returned value belongs to the caller and is
/// never changed by a later call.
///
/// [`Shape`]: crate::Shape
pub trait OdeProblem {
    /// The integrated state (and derivative) type.
    type State: StepIntegrable;

    /// The error returned if the derivative cannot be evaluated.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the derivative at `state` and time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(&self, state: &Self::State, t: f64) -> Result<Self::State, Self::Error>;
}

impl<P: OdeProblem + ?Sized> OdeProblem for &P {
    type State = P::State;
    type Error = P::Error;

    fn derivative(&self, state: &Self::State, t: f64) -> Result<Self::State, Self::Error> {
        (**self).derivative(state, t)
    }
}

/// An infallible problem backed by a closure.
///
/// Created with [`from_fn`].
pub struct FnProblem<S, F> {
    f: F,
    _state: PhantomData<fn(&S) -> S>,
}

/// Wraps a closure `f(&state, t) -> derivative` as an [`OdeProblem`].
///
/// # Example
///
/// ```rust
/// use fixstep_core::{OdeProblem, from_fn};
///
/// let decay = from_fn(|u: &f64, _t| -u + 1.0);
/// assert_eq!(decay.derivative(&0.0, 0.0).unwrap(), 1.0);
/// ```
pub fn from_fn<S, F>(f: F) -> FnProblem<S, F>
where
    S: StepIntegrable,
    F: Fn(&S, f64) -> S,
{
    FnProblem {
        f,
        _state: PhantomData,
    }
}

impl<S, F> OdeProblem for FnProblem<S, F>
where
    S: StepIntegrable,
    F: Fn(&S, f64) -> S,
{
    type State = S;
    type Error = Infallible;

    fn derivative(&self, state: &S, t: f64) -> Result<S, Infallible> {
        Ok((self.f)(state, t))
    }
}
