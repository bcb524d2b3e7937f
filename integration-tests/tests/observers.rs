use fixstep_core::{Observer, TimeGrid};
use fixstep_observers::{DivergenceGuard, Recorder, StepLogger};
use fixstep_problems::{Decay, Oscillator};
use fixstep_solvers::{
    fixed_step::{self, Action, Event, Status},
    methods::{Euler, Rk2},
};

#[test]
fn observers_compose_inside_a_closure() {
    let grid = TimeGrid::uniform(0.0, 10.0, 1000).unwrap();
    let mut logger = StepLogger::new(100);
    let mut recorder = Recorder::new(250);
    let mut guard = DivergenceGuard::new(10.0);

    let solution = fixed_step::solve(
        &Oscillator::default(),
        [1.0, 0.0],
        grid,
        &Rk2,
        |event: &Event<'_, [f64; 2]>| {
            let _: Option<Action> = logger.observe(event);
            let _: Option<Action> = recorder.observe(event);
            guard.observe(event)
        },
    )
    .unwrap();

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(recorder.samples().len(), 5);
    assert_eq!(guard.divergence(), None);
}

#[test]
fn guard_turns_instability_into_an_early_stop() {
    // Euler is unstable on u' = -50 (u - 1) with dt = 0.1.
    let grid = TimeGrid::uniform(0.0, 5.0, 50).unwrap();
    let mut guard = DivergenceGuard::new(1e6);

    let solution =
        fixed_step::solve(&Decay::new(50.0, 1.0), 0.0, grid.clone(), &Euler, &mut guard).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert!(solution.steps < grid.steps());
    assert!(guard.divergence().is_some());

    // A smaller step on the same interval is stable.
    let fine = TimeGrid::uniform(0.0, 5.0, 500).unwrap();
    let mut guard = DivergenceGuard::new(1e6);
    let solution = fixed_step::solve(&Decay::new(50.0, 1.0), 0.0, fine, &Euler, &mut guard).unwrap();

    assert_eq!(solution.status, Status::Complete);
    assert!((solution.last().1 - 1.0).abs() < 1e-6);
}
