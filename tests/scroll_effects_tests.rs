use site_motion::render::DomMutation;
use site_motion::ui::{ScrollEffects, ScrollThresholds};

fn nav(background: &str, shadow: &str) -> [DomMutation; 2] {
    [
        DomMutation::set_style(".nav", "background", background),
        DomMutation::set_style(".nav", "box-shadow", shadow),
    ]
}

#[test]
fn back_to_top_threshold_is_exclusive() {
    let mut effects = ScrollEffects::new(ScrollThresholds::default());

    let first = effects.on_scroll(599.0);
    assert_eq!(first[0], DomMutation::remove_class("toTop", "show"));
    assert!(!effects.to_top_visible());

    assert!(effects.on_scroll(600.0).is_empty());
    assert!(!effects.to_top_visible());

    let shown = effects.on_scroll(601.0);
    assert_eq!(shown.as_slice(), &[DomMutation::add_class("toTop", "show")]);
    assert!(effects.to_top_visible());
}

#[test]
fn navbar_turns_solid_past_fifty_pixels() {
    let mut effects = ScrollEffects::new(ScrollThresholds::default());

    let top = effects.on_scroll(0.0);
    assert_eq!(&top[1..], &nav("rgba(10, 15, 28, 0.8)", "none"));
    assert!(!effects.nav_solid());

    assert!(effects.on_scroll(50.0).is_empty());

    let solid = effects.on_scroll(51.0);
    assert_eq!(
        solid.as_slice(),
        &nav("rgba(10, 15, 28, 0.95)", "var(--shadow-sm)")
    );
    assert!(effects.nav_solid());
}

#[test]
fn only_state_changes_emit_mutations() {
    let mut effects = ScrollEffects::new(ScrollThresholds::default());
    effects.on_scroll(700.0);
    for y in [650.0, 900.0, 1200.0] {
        assert!(effects.on_scroll(y).is_empty());
    }

    let back = effects.on_scroll(10.0);
    let mut expected = vec![DomMutation::remove_class("toTop", "show")];
    expected.extend(nav("rgba(10, 15, 28, 0.8)", "none"));
    assert_eq!(back.to_vec(), expected);
}

#[test]
fn custom_thresholds_are_honored() {
    let mut effects = ScrollEffects::new(ScrollThresholds {
        to_top_px: 100.0,
        nav_solid_px: 10.0,
    });
    effects.on_scroll(101.0);
    assert!(effects.to_top_visible());
    assert!(effects.nav_solid());
}
