use fixstep_core::TimeGrid;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed every step of the grid.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fixed-step integration.
///
/// `history[k]` is the state at `grid[k]`. When the run completes the history
/// has one entry per grid point; when an observer stops it early the history
/// ends at the last accepted step.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// The validated time grid the run was driven by.
    pub grid: TimeGrid,

    /// States from the initial condition up to the last accepted step.
    pub history: Vec<S>,

    /// Number of integration steps completed.
    pub steps: usize,

    /// Number of right-hand-side evaluations performed.
    pub evaluations: usize,
}

impl<S> Solution<S> {
    /// Returns the grid times that have a computed state.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.grid.points()[..self.history.len()]
    }

    /// Returns the time and state of the last accepted step.
    #[must_use]
    pub fn last(&self) -> (f64, &S) {
        let k = self.history.len() - 1;
        (self.grid[k], &self.history[k])
    }

    /// Iterates over `(time, state)` pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &S)> {
        self.times().iter().copied().zip(&self.history)
    }

    /// Splits the solution into its state history and time grid.
    #[must_use]
    pub fn into_parts(self) -> (Vec<S>, TimeGrid) {
        (self.history, self.grid)
    }
}
