use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ElementId, Millis};

use super::CounterAnimation;

/// Text produced for one element on one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameUpdate {
    pub element: ElementId,
    pub text: String,
}

/// Owns every in-flight counter and advances them from one frame clock.
///
/// Runs are independent; insertion order is kept so frame output is stable.
#[derive(Debug, Clone, Default)]
pub struct AnimationScheduler {
    runs: IndexMap<ElementId, CounterAnimation>,
    completed: usize,
}

impl AnimationScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `animation` for `element` at `now_ms`.
    ///
    /// Returns `false` when the element already has a run in flight; the
    /// existing run is kept.
    pub fn start(
        &mut self,
        element: ElementId,
        mut animation: CounterAnimation,
        now_ms: Millis,
    ) -> bool {
        if self.runs.contains_key(&element) {
            trace!(%element, "counter already running");
            return false;
        }
        animation.start(now_ms);
        debug!(
            %element,
            target_value = animation.spec().target,
            duration_ms = animation.spec().duration_ms,
            easing = ?animation.spec().easing,
            "counter started"
        );
        self.runs.insert(element, animation);
        true
    }

    /// Advances every run to `now_ms`; completed runs emit their final text
    /// and are dropped.
    pub fn tick(&mut self, now_ms: Millis) -> Vec<FrameUpdate> {
        let mut updates = Vec::with_capacity(self.runs.len());
        for (element, run) in &mut self.runs {
            if let Some(text) = run.tick(now_ms) {
                updates.push(FrameUpdate {
                    element: element.clone(),
                    text,
                });
            }
        }
        let before = self.runs.len();
        self.runs.retain(|_, run| !run.is_complete());
        self.completed += before - self.runs.len();
        updates
    }

    #[must_use]
    pub fn is_running(&self, element: &ElementId) -> bool {
        self.runs.contains_key(element)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.runs.len()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed
    }

    /// `true` when the host can stop requesting frames.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.runs.is_empty()
    }
}
