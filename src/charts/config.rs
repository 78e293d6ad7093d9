//! Declarative chart configuration in the shape Chart.js consumes.
//!
//! Function-valued options are modeled as closed enums, skipped by serde and
//! installed by the host adapter.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::CssColor;
use crate::error::{MotionError, MotionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Doughnut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexAxis {
    X,
    Y,
}

/// One color for the whole dataset or one per data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(CssColor),
    PerPoint(Vec<CssColor>),
}

impl ColorSpec {
    fn validate(&self, points: usize, field: &str) -> MotionResult<()> {
        match self {
            Self::Single(color) => color.validate(),
            Self::PerPoint(colors) => {
                if colors.len() != points {
                    return Err(MotionError::InvalidData(format!(
                        "`{field}` has {} colors for {points} data points",
                        colors.len()
                    )));
                }
                colors.iter().try_for_each(|color| color.validate())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: ColorSpec,
    pub border_color: ColorSpec,
    pub border_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<CssColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<IndexAxis>,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
    pub animation: AnimationOptions,
    pub plugins: PluginOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scales: Option<IndexMap<String, AxisOptions>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationOptions {
    pub duration: u32,
    pub easing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLabels {
    pub color: CssColor,
    pub padding: f64,
    pub font: FontOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontOptions {
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub background_color: CssColor,
    pub title_color: CssColor,
    pub body_color: CssColor,
    pub border_color: CssColor,
    pub border_width: f64,
    pub padding: f64,
    pub corner_radius: f64,
    /// Installed as `callbacks.label` by the host adapter.
    #[serde(skip)]
    pub label_format: Option<TooltipLabelFormat>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub grid: GridOptions,
    pub ticks: TickOptions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CssColor>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CssColor>,
    /// Installed as `ticks.callback` by the host adapter.
    #[serde(skip)]
    pub format: Option<TickFormat>,
}

/// Tooltip label text policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipLabelFormat {
    /// `"{label}: {raw}%"`
    LabelPercent,
    /// `"{dataset label}: {raw}%"`
    DatasetLabelPercent,
}

impl TooltipLabelFormat {
    #[must_use]
    pub fn format(self, label: &str, dataset_label: &str, raw: f64) -> String {
        let name = match self {
            Self::LabelPercent => label,
            Self::DatasetLabelPercent => dataset_label,
        };
        format!("{name}: {}%", js_number(raw))
    }

    /// Body of the `(context) => string` callback.
    #[must_use]
    pub fn js_body(self) -> &'static str {
        match self {
            Self::LabelPercent => "return `${context.label}: ${context.raw}%`;",
            Self::DatasetLabelPercent => "return `${context.dataset.label}: ${context.raw}%`;",
        }
    }
}

/// Axis tick text policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickFormat {
    /// `"{value}%"`
    PercentSuffix,
}

impl TickFormat {
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::PercentSuffix => format!("{}%", js_number(value)),
        }
    }

    /// Body of the `(value) => string` callback.
    #[must_use]
    pub fn js_body(self) -> &'static str {
        match self {
            Self::PercentSuffix => "return value + '%';",
        }
    }
}

/// Renders a number the way template literals do for the values used here.
fn js_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

impl ChartConfig {
    pub fn validate(&self) -> MotionResult<()> {
        if self.data.datasets.is_empty() {
            return Err(MotionError::InvalidData(
                "chart needs at least one dataset".to_owned(),
            ));
        }
        for dataset in &self.data.datasets {
            if dataset.data.len() != self.data.labels.len() {
                return Err(MotionError::InvalidData(format!(
                    "dataset has {} values for {} labels",
                    dataset.data.len(),
                    self.data.labels.len()
                )));
            }
            if dataset.data.iter().any(|value| !value.is_finite()) {
                return Err(MotionError::InvalidData(
                    "chart values must be finite".to_owned(),
                ));
            }
            let points = dataset.data.len();
            dataset
                .background_color
                .validate(points, "backgroundColor")?;
            dataset.border_color.validate(points, "borderColor")?;
        }
        Ok(())
    }

    /// Tooltip label callback to install, if any.
    #[must_use]
    pub fn tooltip_label_format(&self) -> Option<TooltipLabelFormat> {
        self.options.plugins.tooltip.label_format
    }

    /// Axes whose tick callback must be installed, in config order.
    pub fn tick_formats(&self) -> impl Iterator<Item = (&str, TickFormat)> {
        self.options
            .scales
            .iter()
            .flat_map(|scales| scales.iter())
            .filter_map(|(axis, options)| {
                options
                    .ticks
                    .format
                    .map(|format| (axis.as_str(), format))
            })
    }

    pub fn to_json_pretty(&self) -> MotionResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MotionError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    pub fn to_json_value(&self) -> MotionResult<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| MotionError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}
