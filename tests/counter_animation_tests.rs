use approx::assert_relative_eq;
use site_motion::MotionError;
use site_motion::animation::{CounterAnimation, CounterPhase, CounterPreset, CounterSpec};
use site_motion::core::{Easing, NumberFormat};

fn run(preset: CounterPreset, target: f64, duration_ms: f64) -> CounterAnimation {
    CounterAnimation::new(preset.spec(target, duration_ms)).expect("counter")
}

#[test]
fn integer_target_ends_on_exact_integer_text() {
    let mut counter = run(CounterPreset::Kpi, 230.0, 2000.0);
    counter.start(0.0);
    counter.tick(500.0).expect("frame");
    assert_eq!(counter.tick(2000.0).as_deref(), Some("230"));
    assert!(counter.is_complete());
    assert_eq!(counter.tick(2100.0), None);
}

#[test]
fn whole_valued_decimal_target_renders_as_integer() {
    let mut counter = run(CounterPreset::Kpi, 23.0, 2000.0);
    counter.start(0.0);
    assert_eq!(counter.tick(5000.0).as_deref(), Some("23"));
}

#[test]
fn fractional_target_keeps_one_decimal_while_running_and_at_the_end() {
    let mut counter = run(CounterPreset::Kpi, 65.5, 2000.0);
    counter.start(0.0);
    assert_eq!(counter.tick(0.0).as_deref(), Some("0.0"));
    // ease-out cubic at half time: 1 - 0.5^3 = 0.875
    assert_eq!(counter.tick(1000.0).as_deref(), Some("57.3"));
    assert_eq!(counter.tick(2000.0).as_deref(), Some("65.5"));
}

#[test]
fn count_preset_is_linear_with_integer_bias() {
    let mut counter = run(CounterPreset::Count, 230.0, 1400.0);
    counter.start(100.0);
    assert_eq!(counter.tick(100.0).as_deref(), Some("1"));
    assert_eq!(counter.tick(800.0).as_deref(), Some("116"));
    assert_eq!(counter.tick(1500.0).as_deref(), Some("230"));
}

#[test]
fn integer_bias_is_skipped_for_fractional_targets() {
    let spec = CounterPreset::Count.spec(4.2, 1400.0);
    assert!(spec.integer_bias);
    let mut counter = CounterAnimation::new(spec).expect("counter");
    counter.start(0.0);
    assert_eq!(counter.tick(700.0).as_deref(), Some("2.1"));
}

#[test]
fn count_without_bias_starts_at_zero() {
    let spec = CounterPreset::Count.spec(230.0, 1400.0).with_integer_bias(false);
    let mut counter = CounterAnimation::new(spec).expect("counter");
    assert_eq!(counter.tick(0.0).as_deref(), Some("0"));
}

#[test]
fn progress_number_runs_whole_and_ends_on_target_format() {
    let mut counter = run(CounterPreset::ProgressNumber, 92.5, 1800.0);
    counter.start(0.0);
    let mid = counter.tick(900.0).expect("frame");
    assert!(!mid.contains('.'), "running text `{mid}` must be whole");
    assert_eq!(counter.tick(1800.0).as_deref(), Some("92.5"));
}

#[test]
fn first_tick_establishes_start_time() {
    let mut counter = run(CounterPreset::Kpi, 100.0, 2000.0);
    assert_eq!(counter.phase(), CounterPhase::Pending);
    assert_eq!(counter.tick(4000.0).as_deref(), Some("0"));
    assert_eq!(counter.phase(), CounterPhase::Running { start_ms: 4000.0 });
}

#[test]
fn presets_pick_their_easing() {
    assert_eq!(CounterPreset::Count.easing(), Easing::Linear);
    assert_eq!(CounterPreset::Kpi.easing(), Easing::EaseOutCubic);
    assert_eq!(CounterPreset::ProgressNumber.easing(), Easing::EaseOutCubic);
    assert_eq!(
        CounterPreset::ProgressNumber.spec(65.5, 1800.0).running_format,
        NumberFormat::Integer
    );
}

#[test]
fn eased_value_matches_closed_form() {
    let spec = CounterSpec::new(200.0, 1000.0, Easing::EaseOutCubic);
    let progress = spec.progress_at(250.0);
    assert_relative_eq!(progress, 0.25);
    assert_relative_eq!(
        spec.value_at(progress),
        200.0 * (1.0 - 0.75_f64.powi(3)),
        epsilon = 1e-9
    );
}

#[test]
fn invalid_specs_are_rejected() {
    for spec in [
        CounterSpec::new(f64::NAN, 1000.0, Easing::Linear),
        CounterSpec::new(10.0, 0.0, Easing::Linear),
        CounterSpec::new(10.0, -5.0, Easing::Linear),
    ] {
        let err = CounterAnimation::new(spec).expect_err("spec must fail");
        assert!(matches!(err, MotionError::InvalidData(_)));
    }
}
