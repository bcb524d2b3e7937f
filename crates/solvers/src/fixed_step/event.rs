/// Event emitted by the fixed-step solver for each accepted state.
///
/// Step 0 is the initial condition before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, S> {
    /// The step number, equal to the state's index in the history.
    pub step: usize,

    /// The grid time of this state.
    pub time: f64,

    /// The state at `time`.
    pub state: &'a S,
}
