use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::animation::{CounterPreset, StaggerSchedule};
use crate::charts::ChartBackend;
use crate::core::Millis;
use crate::core::dom::VISIBLE_CLASS;
use crate::error::MotionResult;
use crate::render::{DomMutation, MutationBatch};
use crate::visibility::IntersectionSample;

use super::PageController;

/// The independent watchers a page runs, one per threshold/purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatcherKind {
    /// `.reveal` elements.
    Reveal,
    /// `.stat-card` elements hosting charts.
    StatCard,
    /// The `#stats-ii` section.
    StatsSection,
}

impl<B: ChartBackend> PageController<B> {
    /// Threshold the host must configure its observer with for `kind`.
    #[must_use]
    pub fn watcher_threshold(&self, kind: WatcherKind) -> f64 {
        match kind {
            WatcherKind::Reveal => self.reveal.threshold(),
            WatcherKind::StatCard => self.stat_cards.threshold(),
            WatcherKind::StatsSection => self.stats_section.threshold(),
        }
    }

    /// Handles one observer callback batch.
    ///
    /// Each element reacts at most once over the page lifetime, however often
    /// the host reports it.
    pub fn on_intersections(
        &mut self,
        kind: WatcherKind,
        samples: &[IntersectionSample],
        now_ms: Millis,
    ) -> MotionResult<MutationBatch> {
        let mut batch = MutationBatch::new();
        match kind {
            WatcherKind::Reveal => {
                for element in self.reveal.observe(samples) {
                    batch.push(DomMutation::add_class(element, VISIBLE_CLASS));
                }
            }
            WatcherKind::StatCard => {
                for card in self.stat_cards.observe(samples) {
                    let canvas_id = self
                        .markup
                        .stat_cards
                        .iter()
                        .find(|entry| entry.card == card)
                        .and_then(|entry| entry.canvas_id.clone());
                    let Some(canvas_id) = canvas_id else {
                        trace!(%card, "stat card has no chart canvas");
                        continue;
                    };
                    if let Err(err) = self.charts.render_once(&canvas_id, &mut self.backend) {
                        warn!(
                            %card,
                            canvas_id = %canvas_id,
                            error = %err,
                            "stat card chart not created"
                        );
                    }
                }
            }
            WatcherKind::StatsSection => {
                if !self.stats_section.observe(samples).is_empty() {
                    self.animate_stats(now_ms)?;
                }
            }
        }
        Ok(batch)
    }

    /// Starts the stats section: KPI counters now, rings and bars staggered.
    fn animate_stats(&mut self, now_ms: Millis) -> MotionResult<()> {
        if self.stats_animated {
            return Ok(());
        }
        self.stats_animated = true;
        debug!(now_ms, "stats section animation triggered");

        let kpis = self.markup.kpi_numbers.clone();
        for kpi in &kpis {
            self.start_counter(kpi, CounterPreset::Kpi, now_ms);
        }
        self.stagger = Some(StaggerSchedule::arm(now_ms, self.config.stagger)?);
        Ok(())
    }
}
