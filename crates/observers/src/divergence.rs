use fixstep_core::{Observer, StepIntegrable};

use crate::traits::{CanStopEarly, HasState, HasStep, HasTime};

/// Why a [`DivergenceGuard`] stopped a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DivergenceKind {
    /// A state component became NaN or infinite.
    NonFinite,

    /// The largest state component exceeded the configured bound.
    Exceeded(f64),
}

/// The first state at which a run diverged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divergence {
    /// Step index of the diverged state.
    pub step: usize,

    /// Time of the diverged state.
    pub time: f64,

    /// What went wrong.
    pub kind: DivergenceKind,
}

/// Stops a run once its state blows up.
///
/// Fixed-step explicit methods do not detect their own instability; a step
/// size that is too large for the problem simply produces growing or
/// non-finite states. This observer stops the solver at the first state that
/// is non-finite or whose largest component exceeds `bound`, and records where
/// that happened.
///
/// Pass `&mut guard` to keep access to [`DivergenceGuard::divergence`] after
/// the solve.
#[derive(Debug, Clone, PartialEq)]
pub struct DivergenceGuard {
    bound: f64,
    divergence: Option<Divergence>,
}

impl Default for DivergenceGuard {
    fn default() -> Self {
        Self::new(f64::INFINITY)
    }
}

impl DivergenceGuard {
    /// Creates a guard that stops on non-finite states or states whose largest
    /// component exceeds `bound`.
    #[must_use]
    pub fn new(bound: f64) -> Self {
        Self {
            bound,
            divergence: None,
        }
    }

    /// Returns the first divergence seen, if any.
    #[must_use]
    pub fn divergence(&self) -> Option<Divergence> {
        self.divergence
    }

    fn check<E>(&mut self, event: &E) -> Option<Divergence>
    where
        E: HasStep + HasTime + HasState,
    {
        let state = event.state();

        let kind = if !state.is_finite() {
            DivergenceKind::NonFinite
        } else {
            let magnitude = state.max_abs();
            if magnitude <= self.bound {
                return None;
            }
            DivergenceKind::Exceeded(magnitude)
        };

        let divergence = Divergence {
            step: event.step(),
            time: event.time(),
            kind,
        };
        if self.divergence.is_none() {
            log::warn!(
                "diverged at step {} (t = {}): {:?}",
                divergence.step,
                divergence.time,
                divergence.kind
            );
            self.divergence = Some(divergence);
        }
        Some(divergence)
    }
}

impl<E, A> Observer<E, A> for DivergenceGuard
where
    E: HasStep + HasTime + HasState,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.check(event).map(|_| A::stop_early())
    }
}

/// Allows `&mut DivergenceGuard` to be passed to solvers that take an observer
/// by value, so the recorded divergence can be read after the solve.
impl<E, A> Observer<E, A> for &mut DivergenceGuard
where
    E: HasStep + HasTime + HasState,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
