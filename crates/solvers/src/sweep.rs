//! Parallel parameter sweeps over independent fixed-step solves.
//!
//! Each parameter gets its own problem, its own history, and its own call to
//! [`fixed_step::solve_unobserved`]; nothing is shared between runs except
//! read-only inputs. Work is split into contiguous chunks across scoped
//! threads and results are returned in parameter order.

use std::{num::NonZeroUsize, thread};

use fixstep_core::{OdeProblem, StepMethod, TimeGrid};

use crate::fixed_step::{self, Error, Solution};

/// Solves one problem per parameter, in parallel.
///
/// `build` turns a parameter into a problem. Every run starts from a clone of
/// `initial` and uses the same grid and method. The result at index `i`
/// belongs to `params[i]`; a failed run does not affect the others.
///
/// # Panics
///
/// Propagates a panic from any worker thread (for example, one raised inside
/// `build` or the problem).
pub fn sweep<T, P, F, M>(
    params: &[T],
    build: F,
    initial: &P::State,
    grid: &TimeGrid,
    method: &M,
) -> Vec<Result<Solution<P::State>, Error>>
where
    T: Sync,
    F: Fn(&T) -> P + Sync,
    P: OdeProblem,
    P::State: Send + Sync,
    M: StepMethod + Sync,
{
    if params.is_empty() {
        return Vec::new();
    }

    let workers = thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .min(params.len());
    let chunk_size = params.len().div_ceil(workers);

    log::debug!(
        "sweep: {} runs across {workers} workers, {} steps each",
        params.len(),
        grid.steps()
    );

    let solve_one = |param: &T| {
        let problem = build(param);
        fixed_step::solve_unobserved(&problem, initial.clone(), grid.clone(), method)
    };
    let solve_one = &solve_one;

    thread::scope(|scope| {
        let handles: Vec<_> = params
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || chunk.iter().map(solve_one).collect::<Vec<_>>()))
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(results) => results,
                Err(payload) => std::panic::resume_unwind(payload),
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use fixstep_problems::Decay;

    use crate::methods::Rk2;

    use super::*;

    #[test]
    fn matches_sequential_solves_in_order() {
        let rates: Vec<f64> = (1..=9_i32).map(|i| 0.25 * f64::from(i)).collect();
        let grid = TimeGrid::uniform(0.0, 2.0, 40).unwrap();

        let results = sweep(&rates, |&rate| Decay::new(rate, 1.0), &0.0, &grid, &Rk2);

        assert_eq!(results.len(), rates.len());
        for (rate, result) in rates.iter().zip(results) {
            let parallel = result.unwrap();
            let sequential =
                fixed_step::solve_unobserved(&Decay::new(*rate, 1.0), 0.0, grid.clone(), &Rk2)
                    .unwrap();
            assert_eq!(parallel.history, sequential.history);
        }
    }

    #[test]
    fn empty_sweep_returns_nothing() {
        let grid = TimeGrid::uniform(0.0, 1.0, 10).unwrap();
        let results = sweep(&[] as &[f64], |&rate| Decay::new(rate, 1.0), &0.0, &grid, &Rk2);
        assert!(results.is_empty());
    }
}
