use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::Millis;
use crate::error::{MotionError, MotionResult};

/// Dependent groups of the stats section, in start order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaggerStage {
    /// Circular progress rings and their numbers.
    Ring,
    /// `.bar-fill` widths.
    Bar,
    /// `.industry-bar` widths.
    SecondaryBar,
}

/// Fixed delays, relative to the section becoming visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaggerOffsets {
    pub ring_ms: f64,
    pub bar_ms: f64,
    pub secondary_bar_ms: f64,
}

impl Default for StaggerOffsets {
    fn default() -> Self {
        Self {
            ring_ms: 200.0,
            bar_ms: 400.0,
            secondary_bar_ms: 600.0,
        }
    }
}

impl StaggerOffsets {
    pub fn validate(self) -> MotionResult<()> {
        let ordered = [self.ring_ms, self.bar_ms, self.secondary_bar_ms];
        if ordered.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(MotionError::InvalidData(
                "stagger offsets must be finite and >= 0".to_owned(),
            ));
        }
        if !(self.ring_ms < self.bar_ms && self.bar_ms < self.secondary_bar_ms) {
            return Err(MotionError::InvalidData(
                "stagger offsets must be strictly increasing (ring < bar < secondary bar)"
                    .to_owned(),
            ));
        }
        Ok(())
    }

    fn stages(self) -> [(StaggerStage, f64); 3] {
        [
            (StaggerStage::Ring, self.ring_ms),
            (StaggerStage::Bar, self.bar_ms),
            (StaggerStage::SecondaryBar, self.secondary_bar_ms),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingStage {
    stage: StaggerStage,
    due_ms: Millis,
}

/// One-shot choreography: each stage is released once, strictly in order.
#[derive(Debug, Clone, PartialEq)]
pub struct StaggerSchedule {
    pending: SmallVec<[PendingStage; 3]>,
}

impl StaggerSchedule {
    pub fn arm(armed_at_ms: Millis, offsets: StaggerOffsets) -> MotionResult<Self> {
        offsets.validate()?;
        let pending = offsets
            .stages()
            .into_iter()
            .map(|(stage, offset)| PendingStage {
                stage,
                due_ms: armed_at_ms + offset,
            })
            .collect();
        Ok(Self { pending })
    }

    /// Releases every stage whose deadline is at or before `now_ms`.
    pub fn due(&mut self, now_ms: Millis) -> SmallVec<[StaggerStage; 3]> {
        let ready = self
            .pending
            .iter()
            .take_while(|pending| pending.due_ms <= now_ms)
            .count();
        let released: SmallVec<[StaggerStage; 3]> =
            self.pending.drain(..ready).map(|pending| pending.stage).collect();
        for stage in &released {
            debug!(?stage, now_ms, "stagger stage released");
        }
        released
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending.first().map(|pending| pending.due_ms)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_release_in_fixed_order() {
        let mut schedule = StaggerSchedule::arm(1_000.0, StaggerOffsets::default()).expect("arm");
        assert!(schedule.due(1_199.0).is_empty());
        assert_eq!(schedule.due(1_200.0).as_slice(), &[StaggerStage::Ring]);
        assert_eq!(
            schedule.due(5_000.0).as_slice(),
            &[StaggerStage::Bar, StaggerStage::SecondaryBar]
        );
        assert!(schedule.is_finished());
        assert!(schedule.due(9_000.0).is_empty());
    }

    #[test]
    fn rejects_unordered_offsets() {
        let offsets = StaggerOffsets {
            ring_ms: 400.0,
            bar_ms: 200.0,
            secondary_bar_ms: 600.0,
        };
        assert!(StaggerSchedule::arm(0.0, offsets).is_err());
    }
}
