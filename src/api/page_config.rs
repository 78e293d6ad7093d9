use serde::{Deserialize, Serialize};

use crate::animation::StaggerOffsets;
use crate::charts::ChartStyle;
use crate::error::{MotionError, MotionResult};
use crate::ui::{FormTiming, ScrollThresholds};
use crate::visibility::validate_threshold;

/// Page behavior configuration.
///
/// Every field has a default matching the live site, so hosts can persist or
/// override a subset in JSON without restating the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    #[serde(default = "default_section_threshold")]
    pub stat_card_threshold: f64,
    #[serde(default = "default_section_threshold")]
    pub stats_section_threshold: f64,
    #[serde(default = "default_count_duration_ms")]
    pub count_duration_ms: f64,
    #[serde(default = "default_kpi_duration_ms")]
    pub kpi_duration_ms: f64,
    #[serde(default = "default_progress_number_duration_ms")]
    pub progress_number_duration_ms: f64,
    /// Keeps the +1 overshoot of whole-number `.count` values while running.
    #[serde(default = "default_count_integer_bias")]
    pub count_integer_bias: bool,
    #[serde(default)]
    pub stagger: StaggerOffsets,
    #[serde(default)]
    pub scroll: ScrollThresholds,
    #[serde(default)]
    pub form: FormTiming,
    #[serde(default)]
    pub chart_style: ChartStyle,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: default_reveal_threshold(),
            stat_card_threshold: default_section_threshold(),
            stats_section_threshold: default_section_threshold(),
            count_duration_ms: default_count_duration_ms(),
            kpi_duration_ms: default_kpi_duration_ms(),
            progress_number_duration_ms: default_progress_number_duration_ms(),
            count_integer_bias: default_count_integer_bias(),
            stagger: StaggerOffsets::default(),
            scroll: ScrollThresholds::default(),
            form: FormTiming::default(),
            chart_style: ChartStyle::default(),
        }
    }
}

impl PageConfig {
    /// Sets the reveal-on-scroll visibility threshold.
    #[must_use]
    pub fn with_reveal_threshold(mut self, threshold: f64) -> Self {
        self.reveal_threshold = threshold;
        self
    }

    /// Sets the stat-card and stats-section visibility thresholds.
    #[must_use]
    pub fn with_section_thresholds(mut self, stat_card: f64, stats_section: f64) -> Self {
        self.stat_card_threshold = stat_card;
        self.stats_section_threshold = stats_section;
        self
    }

    /// Sets count-up durations for `.count`, KPI and progress-ring numbers.
    #[must_use]
    pub fn with_counter_durations(mut self, count_ms: f64, kpi_ms: f64, progress_ms: f64) -> Self {
        self.count_duration_ms = count_ms;
        self.kpi_duration_ms = kpi_ms;
        self.progress_number_duration_ms = progress_ms;
        self
    }

    /// Enables or disables the +1 running bias of whole-number `.count` values.
    #[must_use]
    pub fn with_count_integer_bias(mut self, enabled: bool) -> Self {
        self.count_integer_bias = enabled;
        self
    }

    #[must_use]
    pub fn with_stagger(mut self, stagger: StaggerOffsets) -> Self {
        self.stagger = stagger;
        self
    }

    #[must_use]
    pub fn with_scroll_thresholds(mut self, scroll: ScrollThresholds) -> Self {
        self.scroll = scroll;
        self
    }

    #[must_use]
    pub fn with_form_timing(mut self, form: FormTiming) -> Self {
        self.form = form;
        self
    }

    #[must_use]
    pub fn with_chart_style(mut self, style: ChartStyle) -> Self {
        self.chart_style = style;
        self
    }

    pub fn validate(&self) -> MotionResult<()> {
        validate_threshold(self.reveal_threshold)?;
        validate_threshold(self.stat_card_threshold)?;
        validate_threshold(self.stats_section_threshold)?;
        for (name, value) in [
            ("count_duration_ms", self.count_duration_ms),
            ("kpi_duration_ms", self.kpi_duration_ms),
            ("progress_number_duration_ms", self.progress_number_duration_ms),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MotionError::InvalidData(format!(
                    "`{name}` must be finite and > 0, got {value}"
                )));
            }
        }
        self.stagger.validate()?;
        for (name, value) in [
            ("scroll.to_top_px", self.scroll.to_top_px),
            ("scroll.nav_solid_px", self.scroll.nav_solid_px),
            ("form.latency_ms", self.form.latency_ms),
            ("form.status_visible_ms", self.form.status_visible_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MotionError::InvalidData(format!(
                    "`{name}` must be finite and >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> MotionResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MotionError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> MotionResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| MotionError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_reveal_threshold() -> f64 {
    0.12
}

fn default_section_threshold() -> f64 {
    0.3
}

fn default_count_duration_ms() -> f64 {
    1400.0
}

fn default_kpi_duration_ms() -> f64 {
    2000.0
}

fn default_progress_number_duration_ms() -> f64 {
    1800.0
}

fn default_count_integer_bias() -> bool {
    true
}
