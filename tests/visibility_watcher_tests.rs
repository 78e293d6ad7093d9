use site_motion::MotionError;
use site_motion::core::ElementId;
use site_motion::visibility::{IntersectionSample, VisibilityWatcher, WatchState, key_for};

#[test]
fn element_fires_once_when_ratio_reaches_threshold() {
    let mut watcher = VisibilityWatcher::new(0.3).expect("watcher");
    assert!(watcher.register("card"));

    let fired = watcher.observe(&[IntersectionSample::new("card", true, 0.2)]);
    assert!(fired.is_empty());
    assert!(watcher.is_registered(&ElementId::new("card")));

    let fired = watcher.observe(&[IntersectionSample::new("card", true, 0.3)]);
    assert_eq!(fired.as_slice(), &[ElementId::new("card")]);
    assert!(watcher.has_fired(&ElementId::new("card")));
    assert!(!watcher.is_registered(&ElementId::new("card")));

    let fired = watcher.observe(&[IntersectionSample::visible("card")]);
    assert!(fired.is_empty());
    assert_eq!(watcher.state(&ElementId::new("card")), Some(WatchState::Fired));
}

#[test]
fn non_intersecting_samples_never_fire() {
    let mut watcher = VisibilityWatcher::new(0.12).expect("watcher");
    watcher.register("hero");

    let fired = watcher.observe(&[
        IntersectionSample::new("hero", false, 0.9),
        IntersectionSample::hidden("hero"),
    ]);
    assert!(fired.is_empty());
    assert_eq!(watcher.armed_count(), 1);
}

#[test]
fn repeated_registration_is_a_noop() {
    let mut watcher = VisibilityWatcher::new(0.12).expect("watcher");
    assert!(watcher.register("a"));
    assert!(!watcher.register("a"));
    assert_eq!(watcher.armed_count(), 1);

    watcher.observe(&[IntersectionSample::visible("a")]);
    assert!(!watcher.register("a"));
    assert!(watcher.has_fired(&ElementId::new("a")));
}

#[test]
fn unknown_elements_are_ignored() {
    let mut watcher = VisibilityWatcher::new(0.5).expect("watcher");
    watcher.register("known");

    let fired = watcher.observe(&[IntersectionSample::visible("stranger")]);
    assert!(fired.is_empty());
    assert_eq!(watcher.state(&ElementId::new("stranger")), None);
}

#[test]
fn batch_fires_in_sample_order() {
    let mut watcher = VisibilityWatcher::new(0.12).expect("watcher");
    for id in ["reveal#0", "reveal#1", "reveal#2"] {
        watcher.register(id);
    }

    let fired = watcher.observe(&[
        IntersectionSample::visible("reveal#2"),
        IntersectionSample::hidden("reveal#1"),
        IntersectionSample::visible("reveal#0"),
        IntersectionSample::visible("reveal#2"),
    ]);
    assert_eq!(
        fired.as_slice(),
        &[ElementId::new("reveal#2"), ElementId::new("reveal#0")]
    );
    let armed: Vec<&ElementId> = watcher.armed().collect();
    assert_eq!(armed, vec![&ElementId::new("reveal#1")]);
}

#[test]
fn watchers_with_distinct_thresholds_coexist() {
    let mut reveal = VisibilityWatcher::new(0.12).expect("reveal watcher");
    let mut cards = VisibilityWatcher::new(0.3).expect("card watcher");
    reveal.register("shared");
    cards.register("shared");

    let samples = [IntersectionSample::new("shared", true, 0.2)];
    assert_eq!(reveal.observe(&samples).len(), 1);
    assert!(cards.observe(&samples).is_empty());
    assert!(cards.is_registered(&ElementId::new("shared")));
}

#[test]
fn ratio_just_below_threshold_is_tolerated() {
    let mut watcher = VisibilityWatcher::new(0.3).expect("watcher");
    watcher.register("card");
    let fired = watcher.observe(&[IntersectionSample::new("card", true, 0.2999)]);
    assert_eq!(fired.len(), 1);
}

#[test]
fn invalid_thresholds_are_rejected() {
    for threshold in [0.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
        let err = VisibilityWatcher::new(threshold).expect_err("threshold must fail");
        assert!(matches!(err, MotionError::InvalidData(_)));
    }
    assert!(VisibilityWatcher::new(1.0).is_ok());
}

#[test]
fn non_finite_ratio_does_not_fire() {
    let mut watcher = VisibilityWatcher::new(0.12).expect("watcher");
    watcher.register("x");
    assert!(watcher.observe(&[IntersectionSample::new("x", true, f64::NAN)]).is_empty());
    assert!(watcher.is_registered(&ElementId::new("x")));
}

#[test]
fn node_with_two_roles_resolves_per_watcher_list() {
    // One section node carries both the reveal class and the stats id.
    let section = "section-node";
    let reveal_targets = vec![
        ("hero-node", ElementId::new("reveal#0")),
        (section, ElementId::new("reveal#1")),
    ];
    let stats_targets = vec![(section, ElementId::new("stats-ii"))];

    assert_eq!(
        key_for(&reveal_targets, &section),
        Some(&ElementId::new("reveal#1"))
    );
    assert_eq!(
        key_for(&stats_targets, &section),
        Some(&ElementId::new("stats-ii"))
    );
    assert_eq!(key_for(&stats_targets, &"hero-node"), None);

    let mut stats = VisibilityWatcher::new(0.3).expect("watcher");
    stats.register("stats-ii");
    let key = key_for(&stats_targets, &section).expect("stats key").clone();
    let fired = stats.observe(&[IntersectionSample::visible(key)]);
    assert_eq!(fired.as_slice(), &[ElementId::new("stats-ii")]);
}
