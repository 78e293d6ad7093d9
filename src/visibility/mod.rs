//! One-shot viewport visibility tracking.
//!
//! The host reports intersection samples (from `IntersectionObserver` in the
//! browser, synthetic values in tests); the watcher decides which elements fire
//! and forgets them afterwards.

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::ElementId;
use crate::error::{MotionError, MotionResult};

/// Ratios reported by browsers can land a hair under the configured threshold
/// on the crossing callback.
const RATIO_TOLERANCE: f64 = 1e-3;

/// One intersection observation for a registered element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionSample {
    pub element: ElementId,
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

impl IntersectionSample {
    #[must_use]
    pub fn new(
        element: impl Into<ElementId>,
        is_intersecting: bool,
        intersection_ratio: f64,
    ) -> Self {
        Self {
            element: element.into(),
            is_intersecting,
            intersection_ratio,
        }
    }

    /// Fully visible sample.
    #[must_use]
    pub fn visible(element: impl Into<ElementId>) -> Self {
        Self::new(element, true, 1.0)
    }

    /// Sample for an element outside the viewport.
    #[must_use]
    pub fn hidden(element: impl Into<ElementId>) -> Self {
        Self::new(element, false, 0.0)
    }
}

/// Per-element watch state. `Fired` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WatchState {
    Armed,
    Fired,
}

/// Fires each registered element at most once, the first time its visible
/// fraction reaches the threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityWatcher {
    threshold: OrderedFloat<f64>,
    targets: IndexMap<ElementId, WatchState>,
}

impl VisibilityWatcher {
    pub fn new(threshold: f64) -> MotionResult<Self> {
        validate_threshold(threshold)?;
        Ok(Self {
            threshold: OrderedFloat(threshold),
            targets: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold.into_inner()
    }

    /// Starts watching `element`. Returns `false` when it was already known,
    /// armed or fired; fired elements are never re-armed.
    pub fn register(&mut self, element: impl Into<ElementId>) -> bool {
        let element = element.into();
        if self.targets.contains_key(&element) {
            trace!(%element, "ignoring repeated visibility registration");
            return false;
        }
        self.targets.insert(element, WatchState::Armed);
        true
    }

    /// Consumes one batch of samples and returns the elements that fired, in
    /// sample order.
    pub fn observe<'a, I>(&mut self, samples: I) -> SmallVec<[ElementId; 4]>
    where
        I: IntoIterator<Item = &'a IntersectionSample>,
    {
        let threshold = self.threshold();
        let mut fired = SmallVec::new();
        for sample in samples {
            let Some(state) = self.targets.get_mut(&sample.element) else {
                continue;
            };
            if *state == WatchState::Fired || !crosses(sample, threshold) {
                continue;
            }
            *state = WatchState::Fired;
            debug!(
                element = %sample.element,
                ratio = sample.intersection_ratio,
                threshold,
                "element became visible"
            );
            fired.push(sample.element.clone());
        }
        fired
    }

    #[must_use]
    pub fn state(&self, element: &ElementId) -> Option<WatchState> {
        self.targets.get(element).copied()
    }

    #[must_use]
    pub fn is_registered(&self, element: &ElementId) -> bool {
        self.state(element) == Some(WatchState::Armed)
    }

    #[must_use]
    pub fn has_fired(&self, element: &ElementId) -> bool {
        self.state(element) == Some(WatchState::Fired)
    }

    /// Elements still waiting to become visible, in registration order.
    pub fn armed(&self) -> impl Iterator<Item = &ElementId> {
        self.targets
            .iter()
            .filter(|(_, state)| **state == WatchState::Armed)
            .map(|(element, _)| element)
    }

    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.armed().count()
    }
}

/// Key a watcher knows `target` by, from that watcher's own target list.
///
/// Hosts keep one list per watcher: the same node may be registered with
/// several watchers under different keys.
#[must_use]
pub fn key_for<'a, T: PartialEq>(
    targets: &'a [(T, ElementId)],
    target: &T,
) -> Option<&'a ElementId> {
    targets
        .iter()
        .find(|(candidate, _)| candidate == target)
        .map(|(_, key)| key)
}

fn crosses(sample: &IntersectionSample, threshold: f64) -> bool {
    sample.is_intersecting
        && sample.intersection_ratio.is_finite()
        && sample.intersection_ratio + RATIO_TOLERANCE >= threshold
}

pub(crate) fn validate_threshold(threshold: f64) -> MotionResult<()> {
    if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
        return Err(MotionError::InvalidData(format!(
            "visibility threshold must be finite and in (0, 1], got {threshold}"
        )));
    }
    Ok(())
}
