use site_motion::animation::{
    AnimationScheduler, CounterAnimation, CounterPreset, PROGRESS_RING_CIRCUMFERENCE,
    StaggerOffsets, StaggerSchedule, StaggerStage, ring_dash_offset,
};
use site_motion::core::ElementId;

use approx::assert_relative_eq;

fn counter(target: f64) -> CounterAnimation {
    CounterAnimation::new(CounterPreset::Kpi.spec(target, 1000.0)).expect("counter")
}

#[test]
fn stages_release_once_in_order() {
    let mut schedule = StaggerSchedule::arm(500.0, StaggerOffsets::default()).expect("arm");
    assert_eq!(schedule.next_deadline(), Some(700.0));
    assert!(schedule.due(699.0).is_empty());

    assert_eq!(schedule.due(700.0).as_slice(), &[StaggerStage::Ring]);
    assert_eq!(schedule.next_deadline(), Some(900.0));
    assert!(schedule.due(800.0).is_empty());
    assert_eq!(schedule.due(900.0).as_slice(), &[StaggerStage::Bar]);
    assert_eq!(schedule.due(1100.0).as_slice(), &[StaggerStage::SecondaryBar]);

    assert!(schedule.is_finished());
    assert_eq!(schedule.next_deadline(), None);
}

#[test]
fn late_frame_releases_all_overdue_stages() {
    let mut schedule = StaggerSchedule::arm(0.0, StaggerOffsets::default()).expect("arm");
    assert_eq!(
        schedule.due(10_000.0).as_slice(),
        &[StaggerStage::Ring, StaggerStage::Bar, StaggerStage::SecondaryBar]
    );
}

#[test]
fn offsets_must_be_strictly_increasing() {
    let equal = StaggerOffsets {
        ring_ms: 200.0,
        bar_ms: 200.0,
        secondary_bar_ms: 600.0,
    };
    assert!(equal.validate().is_err());
    let negative = StaggerOffsets {
        ring_ms: -1.0,
        bar_ms: 200.0,
        secondary_bar_ms: 600.0,
    };
    assert!(negative.validate().is_err());
    assert!(StaggerOffsets::default().validate().is_ok());
}

#[test]
fn scheduler_keeps_one_run_per_element() {
    let mut scheduler = AnimationScheduler::new();
    let id = ElementId::new("kpi-number#0");
    assert!(scheduler.start(id.clone(), counter(10.0), 0.0));
    assert!(!scheduler.start(id.clone(), counter(99.0), 10.0));
    assert_eq!(scheduler.active_count(), 1);

    let updates = scheduler.tick(1000.0);
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].text, "10");
    assert!(scheduler.is_idle());
    assert_eq!(scheduler.completed_count(), 1);

    assert!(scheduler.start(id, counter(5.0), 2000.0));
}

#[test]
fn scheduler_drops_runs_as_they_complete() {
    let mut scheduler = AnimationScheduler::new();
    scheduler.start(ElementId::new("a"), counter(10.0), 0.0);
    scheduler.start(
        ElementId::new("b"),
        CounterAnimation::new(CounterPreset::Kpi.spec(20.0, 3000.0)).expect("counter"),
        0.0,
    );

    let updates = scheduler.tick(1000.0);
    let elements: Vec<&str> = updates.iter().map(|u| u.element.as_str()).collect();
    assert_eq!(elements, vec!["a", "b"]);
    assert!(!scheduler.is_running(&ElementId::new("a")));
    assert!(scheduler.is_running(&ElementId::new("b")));

    let updates = scheduler.tick(3000.0);
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].text, "20");
    assert!(scheduler.is_idle());
}

#[test]
fn ring_offset_reveals_percentage_of_circumference() {
    assert_relative_eq!(PROGRESS_RING_CIRCUMFERENCE, 2.0 * std::f64::consts::PI * 54.0);
    assert_relative_eq!(ring_dash_offset(0.0), PROGRESS_RING_CIRCUMFERENCE);
    assert_relative_eq!(ring_dash_offset(100.0), 0.0);
    assert_relative_eq!(
        ring_dash_offset(92.0),
        PROGRESS_RING_CIRCUMFERENCE * 0.08,
        epsilon = 1e-9
    );
}
