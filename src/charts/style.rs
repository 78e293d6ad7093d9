use serde::{Deserialize, Serialize};

use crate::core::CssColor;

use super::config::{
    AnimationOptions, AxisOptions, FontOptions, GridOptions, LegendLabels, LegendOptions,
    LegendPosition, TickFormat, TickOptions, TooltipLabelFormat, TooltipOptions,
};

pub const BLUE: CssColor = CssColor::rgba(59, 130, 246, 1.0);
pub const CYAN: CssColor = CssColor::rgba(6, 182, 212, 1.0);
pub const AMBER: CssColor = CssColor::rgba(245, 158, 11, 1.0);
pub const EMERALD: CssColor = CssColor::rgba(16, 185, 129, 1.0);
pub const VIOLET: CssColor = CssColor::rgba(139, 92, 246, 1.0);

/// Presentation shared by every chart on the dark page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub animation_duration_ms: u32,
    pub animation_easing: String,
    pub tooltip_background: CssColor,
    pub tooltip_text: CssColor,
    pub tooltip_border: CssColor,
    pub tooltip_padding: f64,
    pub tooltip_corner_radius: f64,
    pub axis_text: CssColor,
    pub grid_line: CssColor,
    pub legend_padding: f64,
    pub legend_font_size: f64,
    pub doughnut_cutout: String,
    pub bar_border_radius: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            animation_duration_ms: 2000,
            animation_easing: "easeOutQuart".to_owned(),
            tooltip_background: CssColor::rgba(15, 22, 41, 0.9),
            tooltip_text: CssColor::WHITE,
            tooltip_border: BLUE.with_alpha(0.5),
            tooltip_padding: 10.0,
            tooltip_corner_radius: 8.0,
            axis_text: CssColor::rgba(255, 255, 255, 0.7),
            grid_line: CssColor::rgba(255, 255, 255, 0.1),
            legend_padding: 15.0,
            legend_font_size: 12.0,
            doughnut_cutout: "70%".to_owned(),
            bar_border_radius: 6.0,
        }
    }
}

impl ChartStyle {
    pub(crate) fn animation(&self) -> AnimationOptions {
        AnimationOptions {
            duration: self.animation_duration_ms,
            easing: self.animation_easing.clone(),
        }
    }

    pub(crate) fn tooltip(&self, label_format: Option<TooltipLabelFormat>) -> TooltipOptions {
        TooltipOptions {
            background_color: self.tooltip_background,
            title_color: self.tooltip_text,
            body_color: self.tooltip_text,
            border_color: self.tooltip_border,
            border_width: 1.0,
            padding: self.tooltip_padding,
            corner_radius: self.tooltip_corner_radius,
            label_format,
        }
    }

    pub(crate) fn hidden_legend(&self) -> LegendOptions {
        LegendOptions {
            display: Some(false),
            ..LegendOptions::default()
        }
    }

    pub(crate) fn bottom_legend(&self) -> LegendOptions {
        LegendOptions {
            display: None,
            position: Some(LegendPosition::Bottom),
            labels: Some(LegendLabels {
                color: self.axis_text,
                padding: self.legend_padding,
                font: FontOptions {
                    size: self.legend_font_size,
                },
            }),
        }
    }

    /// Value axis: starts at zero, faint grid lines.
    pub(crate) fn value_axis(&self, format: Option<TickFormat>) -> AxisOptions {
        AxisOptions {
            begin_at_zero: Some(true),
            grid: GridOptions {
                display: None,
                color: Some(self.grid_line),
            },
            ticks: TickOptions {
                color: Some(self.axis_text),
                format,
            },
        }
    }

    /// Category axis: no grid lines.
    pub(crate) fn category_axis(&self) -> AxisOptions {
        AxisOptions {
            begin_at_zero: None,
            grid: GridOptions {
                display: Some(false),
                color: None,
            },
            ticks: TickOptions {
                color: Some(self.axis_text),
                format: None,
            },
        }
    }
}
