use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Easing, Millis, NumberFormat, clamp_progress, is_whole};
use crate::error::{MotionError, MotionResult};

/// Call-site presets used by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterPreset {
    /// `.count` elements: linear, integer values biased by +1 while running.
    Count,
    /// `.kpi-number` elements: cubic ease-out.
    Kpi,
    /// `.progress-number` inside a circular progress ring: cubic ease-out,
    /// whole numbers while running.
    ProgressNumber,
}

impl CounterPreset {
    #[must_use]
    pub fn easing(self) -> Easing {
        match self {
            Self::Count => Easing::Linear,
            Self::Kpi | Self::ProgressNumber => Easing::EaseOutCubic,
        }
    }

    /// Builds the spec for `target` with this preset's easing and formatting.
    #[must_use]
    pub fn spec(self, target: f64, duration_ms: f64) -> CounterSpec {
        let spec = CounterSpec::new(target, duration_ms, self.easing());
        match self {
            Self::Count => spec.with_integer_bias(true),
            Self::Kpi => spec,
            Self::ProgressNumber => spec.with_running_format(NumberFormat::Integer),
        }
    }
}

/// Immutable description of one count-up run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CounterSpec {
    pub target: f64,
    pub duration_ms: f64,
    pub easing: Easing,
    /// Adds 1 to the interpolated value of whole-number targets before
    /// truncation. Running frames can overshoot by up to 1; the final frame
    /// is always exact.
    pub integer_bias: bool,
    pub running_format: NumberFormat,
    pub final_format: NumberFormat,
}

impl CounterSpec {
    #[must_use]
    pub fn new(target: f64, duration_ms: f64, easing: Easing) -> Self {
        let format = NumberFormat::for_target(target);
        Self {
            target,
            duration_ms,
            easing,
            integer_bias: false,
            running_format: format,
            final_format: format,
        }
    }

    #[must_use]
    pub fn with_integer_bias(mut self, enabled: bool) -> Self {
        self.integer_bias = enabled;
        self
    }

    #[must_use]
    pub fn with_running_format(mut self, format: NumberFormat) -> Self {
        self.running_format = format;
        self
    }

    pub fn validate(&self) -> MotionResult<()> {
        if !self.target.is_finite() {
            return Err(MotionError::InvalidData(format!(
                "counter target must be finite, got {}",
                self.target
            )));
        }
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(MotionError::InvalidData(format!(
                "counter duration must be finite and > 0, got {}",
                self.duration_ms
            )));
        }
        Ok(())
    }

    /// Progress in `[0, 1]` after `elapsed_ms`.
    #[must_use]
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        clamp_progress(elapsed_ms / self.duration_ms)
    }

    /// Interpolated value at `progress`, including the integer bias.
    #[must_use]
    pub fn value_at(&self, progress: f64) -> f64 {
        let value = self.target * self.easing.apply(progress);
        if self.integer_bias && is_whole(self.target) {
            value + 1.0
        } else {
            value
        }
    }

    /// Text displayed once the run completes.
    #[must_use]
    pub fn final_text(&self) -> String {
        self.final_format.format(self.target)
    }
}

/// Parses a `data-target` / `data-percentage` attribute value.
pub fn parse_target(raw: &str) -> MotionResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| MotionError::InvalidData(format!("invalid numeric target `{raw}`: {e}")))?;
    if !value.is_finite() {
        return Err(MotionError::InvalidData(format!(
            "numeric target must be finite: `{raw}`"
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CounterPhase {
    Pending,
    Running { start_ms: Millis },
    Complete,
}

/// Frame-driven count-up state machine.
///
/// `tick` is called once per animation frame with the frame timestamp; it
/// never schedules anything itself.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    spec: CounterSpec,
    phase: CounterPhase,
}

impl CounterAnimation {
    pub fn new(spec: CounterSpec) -> MotionResult<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            phase: CounterPhase::Pending,
        })
    }

    #[must_use]
    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    #[must_use]
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == CounterPhase::Complete
    }

    /// Pins the start timestamp. Has no effect once running or complete.
    pub fn start(&mut self, now_ms: Millis) {
        if self.phase == CounterPhase::Pending {
            self.phase = CounterPhase::Running { start_ms: now_ms };
        }
    }

    /// Advances to `now_ms` and returns the text for this frame, or `None`
    /// after completion. A pending run starts on its first tick.
    pub fn tick(&mut self, now_ms: Millis) -> Option<String> {
        let start_ms = match self.phase {
            CounterPhase::Complete => return None,
            CounterPhase::Pending => {
                self.start(now_ms);
                now_ms
            }
            CounterPhase::Running { start_ms } => start_ms,
        };

        let progress = self.spec.progress_at(now_ms - start_ms);
        if progress >= 1.0 {
            self.phase = CounterPhase::Complete;
            trace!(target_value = self.spec.target, "counter complete");
            return Some(self.spec.final_text());
        }
        Some(self.spec.running_format.format(self.spec.value_at(progress)))
    }
}
