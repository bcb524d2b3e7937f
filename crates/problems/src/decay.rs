use std::convert::Infallible;

use fixstep_core::OdeProblem;

/// Linear relaxation toward an equilibrium value.
///
/// ```text
/// u' = rate * (equilibrium - u)
/// ```
///
/// The default (`rate = 1`, `equilibrium = 1`) is `u' = -u + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decay {
    /// Relaxation rate; larger values approach equilibrium faster.
    pub rate: f64,

    /// Value the state relaxes toward.
    pub equilibrium: f64,
}

impl Default for Decay {
    fn default() -> Self {
        Self {
            rate: 1.0,
            equilibrium: 1.0,
        }
    }
}

impl Decay {
    /// Creates a decay problem with the given rate and equilibrium.
    #[must_use]
    pub fn new(rate: f64, equilibrium: f64) -> Self {
        Self { rate, equilibrium }
    }

    /// Returns the exact solution at `t` for `u(0) = initial`.
    #[must_use]
    pub fn solution(&self, initial: f64, t: f64) -> f64 {
        self.equilibrium + (initial - self.equilibrium) * (-self.rate * t).exp()
    }
}

impl OdeProblem for Decay {
    type State = f64;
    type Error = Infallible;

    fn derivative(&self, state: &f64, _t: f64) -> Result<f64, Self::Error> {
        Ok(self.rate * (self.equilibrium - state))
    }
}

/// Unit-rate decay driven by a forcing function.
///
/// ```text
/// u' = -u + f(t)
/// ```
pub struct ForcedDecay<F> {
    forcing: F,
}

impl<F: Fn(f64) -> f64> ForcedDecay<F> {
    /// Creates a forced decay problem from a forcing function.
    pub fn new(forcing: F) -> Self {
        Self { forcing }
    }

    /// Evaluates the forcing term at `t`.
    pub fn forcing(&self, t: f64) -> f64 {
        (self.forcing)(t)
    }
}

impl<F: Fn(f64) -> f64> OdeProblem for ForcedDecay<F> {
    type State = f64;
    type Error = Infallible;

    fn derivative(&self, state: &f64, t: f64) -> Result<f64, Self::Error> {
        Ok(-state + (self.forcing)(t))
    }
}
