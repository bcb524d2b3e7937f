use std::fmt::Debug;

use fixstep_core::Observer;
use log::Level;

use crate::traits::{HasState, HasStep, HasTime};

/// Logs solver progress through the [`log`] facade.
///
/// Every `every`-th step (and always step 0) is logged at the configured
/// level with its time and state. The observer never returns an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepLogger {
    every: usize,
    level: Level,
}

impl Default for StepLogger {
    fn default() -> Self {
        Self::new(1)
    }
}

impl StepLogger {
    /// Creates a logger that reports every `every`-th step at `debug` level.
    ///
    /// An `every` of zero is treated as one.
    #[must_use]
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
            level: Level::Debug,
        }
    }

    /// Sets the log level.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns `true` if the given step would be logged.
    #[must_use]
    pub fn logs(&self, step: usize) -> bool {
        step % self.every == 0
    }
}

impl<E, A> Observer<E, A> for StepLogger
where
    E: HasStep + HasTime + HasState,
    E::State: Debug,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let step = event.step();
        if self.logs(step) {
            log::log!(
                self.level,
                "step {step}: t = {}, state = {:?}",
                event.time(),
                event.state()
            );
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use fixstep_core::TimeGrid;
    use fixstep_problems::Oscillator;
    use fixstep_solvers::{
        fixed_step::{self, Status},
        methods::Rk2,
    };

    use super::*;

    #[test]
    fn selects_steps_by_stride() {
        let logger = StepLogger::new(5).level(Level::Info);

        assert!(logger.logs(0));
        assert!(!logger.logs(3));
        assert!(logger.logs(10));
    }

    #[test]
    fn zero_stride_logs_everything() {
        let logger = StepLogger::new(0);
        assert!((0..4).all(|step| logger.logs(step)));
    }

    #[test]
    fn never_interrupts_a_run() {
        let grid = TimeGrid::uniform(0.0, 1.0, 10).unwrap();

        let solution = fixed_step::solve(
            &Oscillator::default(),
            [1.0, 0.0],
            grid,
            &Rk2,
            StepLogger::new(2),
        )
        .unwrap();

        assert_eq!(solution.status, Status::Complete);
    }
}
