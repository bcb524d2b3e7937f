//! Compares the fixed-step methods on problems with known solutions.
//!
//! # Usage
//!
//! ```text
//! cargo run --example compare -- decay
//! cargo run --example compare -- decay 0.5
//! cargo run --example compare -- oscillator 0.1
//! ```
//!
//! # Modes
//!
//! - **decay [dt]**: Relax `u' = -u + 1` from `u(0) = 0` over 5 seconds and
//!   report each method's final error against `1 - e^{-t}`.
//!
//! - **oscillator [dt]**: Integrate a unit harmonic oscillator over 10
//!   periods, report each method's final error, and print a coarse trace of
//!   the RK2 trajectory. Large step sizes make Euler blow up; the divergence
//!   guard stops it and reports where.

use std::{error::Error, f64::consts::PI};

use fixstep_core::TimeGrid;
use fixstep_observers::{DivergenceGuard, Recorder};
use fixstep_problems::{Decay, Oscillator};
use fixstep_solvers::{
    fixed_step::{self, Status},
    methods::Method,
};

const METHODS: [Method; 4] = [
    Method::Euler,
    Method::Rk2,
    Method::Rk4,
    Method::AdamsBashforth2,
];

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "decay".into());
    let dt = std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid step size, expected a number such as 0.1");
            std::process::exit(1);
        });

    match mode.as_str() {
        "decay" => decay(dt.unwrap_or(0.1)),
        "oscillator" => oscillator(dt.unwrap_or(0.05)),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: compare [decay|oscillator] [dt]");
            std::process::exit(1);
        }
    }
}

fn decay(dt: f64) -> Result<(), Box<dyn Error>> {
    let problem = Decay::default();
    let grid = TimeGrid::with_step(0.0, 5.0, dt)?;

    println!("u' = -u + 1, u(0) = 0, {} steps of {dt}", grid.steps());
    println!("{:<18} {:>14} {:>12}", "method", "u(5)", "error");

    for method in METHODS {
        let solution = fixed_step::solve_unobserved(&problem, 0.0, grid.clone(), &method)?;
        let (t, u) = solution.last();
        let error = (u - problem.solution(0.0, t)).abs();
        println!("{:<18} {u:>14.8} {error:>12.3e}", format!("{method:?}"));
    }

    Ok(())
}

fn oscillator(dt: f64) -> Result<(), Box<dyn Error>> {
    let problem = Oscillator::default();
    let initial = [1.0, 0.0];
    let grid = TimeGrid::with_step(0.0, 20.0 * PI, dt)?;

    println!("x'' = -x, x(0) = 1, {} steps of {dt}", grid.steps());
    println!("{:<18} {:>12} {:>12}", "method", "error", "energy");

    for method in METHODS {
        let mut guard = DivergenceGuard::new(1e3);
        let solution =
            fixed_step::solve(&problem, initial, grid.clone(), &method, &mut guard)?;

        let name = format!("{method:?}");
        if solution.status == Status::StoppedByObserver {
            if let Some(divergence) = guard.divergence() {
                println!(
                    "{name:<18} diverged at step {} (t = {:.2})",
                    divergence.step, divergence.time
                );
            }
            continue;
        }

        let (t, y) = solution.last();
        let exact = problem.solution(initial, t);
        let error = (y[0] - exact[0]).abs().max((y[1] - exact[1]).abs());
        println!("{name:<18} {error:>12.3e} {:>12.6}", problem.energy(y));
    }

    let stride = (grid.steps() / 20).max(1);
    let mut recorder = Recorder::new(stride);
    fixed_step::solve(&problem, initial, grid, &Method::Rk2, &mut recorder)?;

    println!();
    println!("{:>10} {:>12} {:>12}", "t", "x", "v");
    for (t, [x, v]) in recorder.samples() {
        println!("{t:>10.3} {x:>12.6} {v:>12.6}");
    }

    Ok(())
}
