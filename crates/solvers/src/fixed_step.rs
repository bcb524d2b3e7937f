//! Fixed-step solver for ODE problems.
//!
//! The solver drives a step method across a predetermined [`TimeGrid`]:
//!
//! ```text
//! history[0]   = initial
//! history[k+1] = method.advance(history[..=k], k, grid, problem)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixstep_core::{TimeGrid, from_fn};
//! use fixstep_solvers::{fixed_step, methods::Rk2};
//!
//! let problem = from_fn(|u: &f64, _t| -u + 1.0);
//! let grid = TimeGrid::uniform(0.0, 5.0, 50).unwrap();
//!
//! let solution = fixed_step::solve_unobserved(&problem, 0.0, grid, &Rk2).unwrap();
//!
//! let (t, u) = solution.last();
//! assert!((u - (1.0 - (-t).exp())).abs() < 1e-3);
//! ```
//!
//! # Shape checking
//!
//! The shape of the initial condition is recorded before the first step.
//! Every derivative the problem returns, and every state the method returns,
//! must have that shape; the first violation ends the run with
//! [`Error::ShapeMismatch`].
//!
//! # Observer
//!
//! The observer receives an [`Event`] for the initial condition (step 0) and
//! after each accepted step, and may return [`Action::StopEarly`] to end the
//! run with the history computed so far.

mod action;
mod checked;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use fixstep_core::{GridError, Observer, OdeProblem, StepIntegrable, StepMethod, TimeGrid};

use checked::{Checked, CheckedError};

/// Integrates a problem across a time grid using the given step method.
///
/// `grid` may be a [`TimeGrid`] or anything that converts into one, such as
/// a `Vec<f64>` or `&[f64]` of time points; raw points are validated first.
/// The returned [`Solution`] pairs the state history with the validated grid.
///
/// # Errors
///
/// - [`Error::InvalidGrid`] if the time points do not form a valid grid.
/// - [`Error::ShapeMismatch`] if a derivative or a stepped state does not
///   match the shape of `initial`.
/// - [`Error::Problem`] if the problem fails to evaluate a derivative.
pub fn solve<P, M, G, Obs>(
    problem: &P,
    initial: P::State,
    grid: G,
    method: &M,
    mut observer: Obs,
) -> Result<Solution<P::State>, Error>
where
    P: OdeProblem,
    M: StepMethod,
    G: TryInto<TimeGrid>,
    GridError: From<G::Error>,
    Obs: for<'a> Observer<Event<'a, P::State>, Action>,
{
    let grid: TimeGrid = grid.try_into().map_err(GridError::from)?;
    let shape = initial.shape();
    let checked = Checked::new(problem, shape);

    log::debug!(
        "fixed-step solve: {} steps on [{}, {}], {shape} state, order {} method",
        grid.steps(),
        grid.start(),
        grid.stop(),
        method.order(),
    );

    let mut history = Vec::with_capacity(grid.len());
    history.push(initial);

    let event = Event {
        step: 0,
        time: grid[0],
        state: &history[0],
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        log::warn!("fixed-step solve stopped by observer before the first step");
        return Ok(Solution {
            status: Status::StoppedByObserver,
            grid,
            history,
            steps: 0,
            evaluations: 0,
        });
    }

    for k in 0..grid.steps() {
        let step = k + 1;

        let next = method
            .advance(history.as_slice(), k, &grid, &checked)
            .map_err(|err| match err {
                CheckedError::ShapeMismatch { expected, found } => Error::ShapeMismatch {
                    step,
                    expected,
                    found,
                },
                CheckedError::Problem(source) => Error::Problem {
                    step,
                    source: Box::new(source),
                },
            })?;

        let found = next.shape();
        if found != shape {
            return Err(Error::ShapeMismatch {
                step,
                expected: shape,
                found,
            });
        }

        history.push(next);
        log::trace!("step {step}: t = {}", grid[step]);

        let event = Event {
            step,
            time: grid[step],
            state: &history[step],
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::warn!(
                "fixed-step solve stopped by observer at step {step} of {}",
                grid.steps()
            );
            return Ok(Solution {
                status: Status::StoppedByObserver,
                grid,
                history,
                steps: step,
                evaluations: checked.evaluations(),
            });
        }
    }

    let steps = grid.steps();
    let evaluations = checked.evaluations();
    log::debug!("fixed-step solve complete: {steps} steps, {evaluations} evaluations");

    Ok(Solution {
        status: Status::Complete,
        grid,
        history,
        steps,
        evaluations,
    })
}

/// Integrates a problem across a time grid without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<P, M, G>(
    problem: &P,
    initial: P::State,
    grid: G,
    method: &M,
) -> Result<Solution<P::State>, Error>
where
    P: OdeProblem,
    M: StepMethod,
    G: TryInto<TimeGrid>,
    GridError: From<G::Error>,
{
    solve(problem, initial, grid, method, ())
}
