use site_motion::telemetry::init_default_tracing;

#[test]
fn second_tracing_init_reports_false() {
    let _first = init_default_tracing();
    assert!(!init_default_tracing());
}
