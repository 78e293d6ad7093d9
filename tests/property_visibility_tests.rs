use proptest::prelude::*;
use site_motion::core::ElementId;
use site_motion::visibility::{IntersectionSample, VisibilityWatcher};

fn sample() -> impl Strategy<Value = IntersectionSample> {
    (0usize..6, any::<bool>(), 0.0f64..=1.0).prop_map(|(index, intersecting, ratio)| {
        IntersectionSample::new(ElementId::indexed("reveal", index), intersecting, ratio)
    })
}

proptest! {
    #[test]
    fn each_element_fires_at_most_once(
        threshold in 0.01f64..=1.0,
        batches in prop::collection::vec(prop::collection::vec(sample(), 0..8), 0..20)
    ) {
        let mut watcher = VisibilityWatcher::new(threshold).expect("watcher");
        for index in 0..6 {
            watcher.register(ElementId::indexed("reveal", index));
        }

        let mut fired = Vec::new();
        for batch in &batches {
            fired.extend(watcher.observe(batch));
        }

        let mut unique = fired.clone();
        unique.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        unique.dedup();
        prop_assert_eq!(unique.len(), fired.len());
        prop_assert_eq!(watcher.armed_count() + fired.len(), 6);
        for element in &fired {
            prop_assert!(watcher.has_fired(element));
        }
    }

    #[test]
    fn fired_elements_had_a_qualifying_sample(
        threshold in 0.01f64..=1.0,
        batch in prop::collection::vec(sample(), 0..16)
    ) {
        let mut watcher = VisibilityWatcher::new(threshold).expect("watcher");
        for index in 0..6 {
            watcher.register(ElementId::indexed("reveal", index));
        }
        for element in watcher.observe(&batch) {
            let qualifying = batch.iter().any(|s| {
                s.element == element
                    && s.is_intersecting
                    && s.intersection_ratio + 1e-3 >= threshold
            });
            prop_assert!(qualifying);
        }
    }
}
