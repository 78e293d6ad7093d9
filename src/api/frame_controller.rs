use tracing::trace;

use crate::animation::{CounterPreset, StaggerStage, parse_target, ring_dash_offset};
use crate::charts::ChartBackend;
use crate::core::Millis;
use crate::core::dom::{BAR_FILL_CLASS, INDUSTRY_BAR_CLASS};
use crate::render::{DomMutation, MutationBatch};

use super::{NumericElement, PageController};

impl<B: ChartBackend> PageController<B> {
    /// Advances everything time-driven to `now_ms`: staggered stages, running
    /// counters, and contact form deadlines.
    pub fn on_frame(&mut self, now_ms: Millis) -> MutationBatch {
        let mut batch = MutationBatch::new();

        let released = self
            .stagger
            .as_mut()
            .map(|schedule| schedule.due(now_ms))
            .unwrap_or_default();
        for stage in released {
            batch.extend(self.run_stage(stage, now_ms));
        }
        if self.stagger.as_ref().is_some_and(|s| s.is_finished()) {
            self.stagger = None;
        }

        for update in self.counters.tick(now_ms) {
            batch.push(DomMutation::set_text(update.element, update.text));
        }

        batch.extend(self.form.tick(now_ms));
        batch
    }

    /// `true` while counters need per-frame ticks.
    #[must_use]
    pub fn needs_animation_frame(&self) -> bool {
        !self.counters.is_idle()
    }

    /// Earliest timer deadline (stagger stage, form settle or status hide).
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        let stagger = self.stagger.as_ref().and_then(|s| s.next_deadline());
        match (stagger, self.form.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn run_stage(&mut self, stage: StaggerStage, now_ms: Millis) -> MutationBatch {
        trace!(?stage, now_ms, "running stagger stage");
        match stage {
            StaggerStage::Ring => self.run_ring_stage(now_ms),
            StaggerStage::Bar => width_fills(&self.markup.bar_fills, BAR_FILL_CLASS),
            StaggerStage::SecondaryBar => {
                width_fills(&self.markup.industry_bars, INDUSTRY_BAR_CLASS)
            }
        }
    }

    fn run_ring_stage(&mut self, now_ms: Millis) -> MutationBatch {
        let mut batch = MutationBatch::new();
        let rings = self.markup.progress_rings.clone();
        for ring in &rings {
            let Ok(percentage) = parse_target(&ring.raw_percentage) else {
                trace!(ring = %ring.ring, "skipping ring with bad percentage");
                continue;
            };
            batch.push(DomMutation::set_style(
                ring.ring.clone(),
                "--percentage",
                ring.raw_percentage.trim(),
            ));
            batch.push(DomMutation::set_style(
                ring.ring.clone(),
                "stroke-dashoffset",
                ring_dash_offset(percentage).to_string(),
            ));
            let number = NumericElement {
                element: ring.number.clone(),
                raw_value: ring.raw_percentage.clone(),
            };
            self.start_counter(&number, CounterPreset::ProgressNumber, now_ms);
        }
        batch
    }
}

fn width_fills(bars: &[NumericElement], class_name: &str) -> MutationBatch {
    bars.iter()
        .filter(|bar| {
            let ok = parse_target(&bar.raw_value).is_ok();
            if !ok {
                trace!(bar = %bar.element, class_name, "skipping bar with bad width");
            }
            ok
        })
        .map(|bar| {
            DomMutation::set_style(
                bar.element.clone(),
                "width",
                format!("{}%", bar.raw_value.trim()),
            )
        })
        .collect()
}
