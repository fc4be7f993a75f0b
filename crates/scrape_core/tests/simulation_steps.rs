use pretty_assertions::assert_eq;
use scrape_core::{Simulation, Status, StepAdvance, StepRecord, STEP_DURATION_LABEL};

fn step(id: &str, status: Status) -> StepRecord {
    StepRecord::new(id, format!("Step {id}"), "simulated stage", status)
}

fn statuses(sim: &Simulation) -> Vec<Status> {
    sim.steps().iter().map(|s| s.status).collect()
}

#[test]
fn demo_steps_advance_strictly_in_order() {
    engine_logging::initialize_for_tests();
    let mut sim = Simulation::new();
    sim.start("Generator", "XG-2000");
    assert_eq!(sim.current_step(), 1);
    assert_eq!(sim.processing_step().unwrap().title, "Content Extraction");

    let first = sim.advance_step().unwrap();
    assert_eq!(
        first,
        StepAdvance {
            completed: "2".to_string(),
            promoted: Some("3".to_string()),
        }
    );
    assert_eq!(
        statuses(&sim),
        vec![
            Status::Completed,
            Status::Completed,
            Status::Processing,
            Status::Pending
        ]
    );
    assert_eq!(sim.current_step(), 2);
    assert_eq!(sim.steps()[1].duration.as_deref(), Some(STEP_DURATION_LABEL));

    let second = sim.advance_step().unwrap();
    assert_eq!(second.promoted.as_deref(), Some("4"));
    assert_eq!(sim.current_step(), 3);

    let last = sim.advance_step().unwrap();
    assert_eq!(last.completed, "4");
    assert_eq!(last.promoted, None);
    assert_eq!(sim.current_step(), 3);
    assert!(sim.steps().iter().all(|s| s.status == Status::Completed));

    assert_eq!(sim.advance_step(), None);
}

#[test]
fn at_most_one_step_processing_and_predecessors_completed() {
    let mut sim = Simulation::from_records(
        Vec::new(),
        vec![
            step("a", Status::Processing),
            step("b", Status::Pending),
            step("c", Status::Pending),
            step("d", Status::Pending),
        ],
        Vec::new(),
    );

    while sim.advance_step().is_some() {
        let processing: Vec<_> = sim
            .steps()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.status == Status::Processing)
            .map(|(i, _)| i)
            .collect();
        assert!(processing.len() <= 1);
        if let Some(&index) = processing.first() {
            assert!(sim.steps()[..index]
                .iter()
                .all(|s| s.status == Status::Completed));
        }
    }
}

#[test]
fn completed_step_keeps_existing_details() {
    let mut sim = Simulation::new();
    sim.start("Generator", "XG-2000");
    let details = sim.steps()[1].details.clone();

    sim.advance_step();

    assert_eq!(sim.steps()[1].details, details);
    assert_eq!(sim.steps()[0].duration.as_deref(), Some("0.8s"));
}

#[test]
fn no_processing_step_means_no_advance() {
    let mut sim = Simulation::from_records(
        Vec::new(),
        vec![step("a", Status::Completed), step("b", Status::Pending)],
        Vec::new(),
    );

    assert_eq!(sim.advance_step(), None);
    assert_eq!(statuses(&sim), vec![Status::Completed, Status::Pending]);
}

#[test]
fn stopped_simulation_does_not_advance_steps() {
    let mut sim = Simulation::new();
    sim.start("Generator", "XG-2000");
    sim.stop();

    assert_eq!(sim.advance_step(), None);
    assert_eq!(sim.steps()[1].status, Status::Processing);
}

#[test]
fn failed_step_halts_the_sequence() {
    let mut sim = Simulation::new();
    sim.start("Generator", "XG-2000");

    assert!(sim.mark_step_failed("2"));
    assert!(!sim.mark_step_failed("1"));

    assert_eq!(sim.advance_step(), None);
    assert_eq!(
        statuses(&sim),
        vec![
            Status::Completed,
            Status::Failed,
            Status::Pending,
            Status::Pending
        ]
    );
}
