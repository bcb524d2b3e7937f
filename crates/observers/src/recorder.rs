use fixstep_core::Observer;

use crate::traits::{HasState, HasStep, HasTime};

/// Records a thinned copy of a trajectory while it is being computed.
///
/// Every `stride`-th state (always including step 0) is cloned into
/// [`Recorder::samples`] as a `(time, state)` pair. Useful for streaming
/// consumers that only need a coarse view of a long run.
///
/// Pass `&mut recorder` to keep access to the samples after the solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder<S> {
    stride: usize,
    samples: Vec<(f64, S)>,
}

impl<S> Recorder<S> {
    /// Creates a recorder that keeps every `stride`-th state.
    ///
    /// A `stride` of zero is treated as one.
    #[must_use]
    pub fn new(stride: usize) -> Self {
        Self {
            stride: stride.max(1),
            samples: Vec::new(),
        }
    }

    /// Returns the recorded `(time, state)` samples.
    #[must_use]
    pub fn samples(&self) -> &[(f64, S)] {
        &self.samples
    }

    /// Consumes the recorder and returns its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<(f64, S)> {
        self.samples
    }
}

impl<S, E, A> Observer<E, A> for Recorder<S>
where
    E: HasStep + HasTime + HasState<State = S>,
    S: Clone,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.step() % self.stride == 0 {
            self.samples.push((event.time(), event.state().clone()));
        }
        None
    }
}

/// Allows `&mut Recorder` to be passed to solvers that take an observer by
/// value, so the samples can be read after the solve.
impl<S, E, A> Observer<E, A> for &mut Recorder<S>
where
    E: HasStep + HasTime + HasState<State = S>,
    S: Clone,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
