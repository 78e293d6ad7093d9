use serde::{Deserialize, Serialize};

use crate::core::CssColor;
use crate::core::dom::{
    CLIENT_GROWTH_CANVAS_ID, EFFICIENCY_CANVAS_ID, INDUSTRY_CANVAS_ID, TAX_SAVINGS_CANVAS_ID,
};

use super::config::{ColorSpec, TickFormat, TooltipLabelFormat};
use super::style::{AMBER, BLUE, CYAN, EMERALD, VIOLET};

/// Closed set of chart renderings used on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Doughnut,
}

/// The single series drawn by a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDefinition {
    pub label: Option<String>,
    pub values: Vec<f64>,
    pub background: ColorSpec,
    pub border: ColorSpec,
    pub hover_background: Option<CssColor>,
}

/// Static, literal data behind one canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefinition {
    pub canvas_id: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: SeriesDefinition,
    pub tooltip_label: Option<TooltipLabelFormat>,
    pub value_ticks: Option<TickFormat>,
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// Yearly client count bar chart.
#[must_use]
pub fn client_growth() -> ChartDefinition {
    ChartDefinition {
        canvas_id: CLIENT_GROWTH_CANVAS_ID.to_owned(),
        kind: ChartKind::Bar,
        labels: labels(&["2020", "2021", "2022", "2023"]),
        series: SeriesDefinition {
            label: Some("Client Count".to_owned()),
            values: vec![120.0, 160.0, 190.0, 230.0],
            background: ColorSpec::PerPoint(vec![
                BLUE.with_alpha(0.7),
                BLUE.with_alpha(0.8),
                BLUE.with_alpha(0.9),
                BLUE,
            ]),
            border: ColorSpec::Single(BLUE),
            hover_background: Some(CYAN.with_alpha(0.8)),
        },
        tooltip_label: None,
        value_ticks: None,
    }
}

/// Share of tax saved versus paid.
#[must_use]
pub fn tax_savings() -> ChartDefinition {
    ChartDefinition {
        canvas_id: TAX_SAVINGS_CANVAS_ID.to_owned(),
        kind: ChartKind::Doughnut,
        labels: labels(&["Tax Saved", "Tax Paid"]),
        series: SeriesDefinition {
            label: None,
            values: vec![23.0, 77.0],
            background: ColorSpec::PerPoint(vec![EMERALD.with_alpha(0.8), BLUE.with_alpha(0.4)]),
            border: ColorSpec::PerPoint(vec![EMERALD, BLUE.with_alpha(0.7)]),
            hover_background: None,
        },
        tooltip_label: Some(TooltipLabelFormat::LabelPercent),
        value_ticks: None,
    }
}

/// Client distribution per industry.
#[must_use]
pub fn industry() -> ChartDefinition {
    let palette = [BLUE, CYAN, AMBER, EMERALD, VIOLET];
    ChartDefinition {
        canvas_id: INDUSTRY_CANVAS_ID.to_owned(),
        kind: ChartKind::HorizontalBar,
        labels: labels(&[
            "Technology",
            "Retail",
            "Manufacturing",
            "Healthcare",
            "Real Estate",
        ]),
        series: SeriesDefinition {
            label: Some("Client Distribution".to_owned()),
            values: vec![35.0, 25.0, 20.0, 15.0, 5.0],
            background: ColorSpec::PerPoint(palette.iter().map(|c| c.with_alpha(0.8)).collect()),
            border: ColorSpec::PerPoint(palette.to_vec()),
            hover_background: None,
        },
        tooltip_label: Some(TooltipLabelFormat::DatasetLabelPercent),
        value_ticks: Some(TickFormat::PercentSuffix),
    }
}

/// Process time saved through automation.
#[must_use]
pub fn efficiency() -> ChartDefinition {
    ChartDefinition {
        canvas_id: EFFICIENCY_CANVAS_ID.to_owned(),
        kind: ChartKind::Doughnut,
        labels: labels(&["Time Saved", "Remaining Process"]),
        series: SeriesDefinition {
            label: None,
            values: vec![65.0, 35.0],
            background: ColorSpec::PerPoint(vec![AMBER.with_alpha(0.8), BLUE.with_alpha(0.4)]),
            border: ColorSpec::PerPoint(vec![AMBER, BLUE.with_alpha(0.7)]),
            hover_background: None,
        },
        tooltip_label: Some(TooltipLabelFormat::LabelPercent),
        value_ticks: None,
    }
}

/// The four charts of the stats section, in page order.
#[must_use]
pub fn site_charts() -> Vec<ChartDefinition> {
    vec![client_growth(), tax_savings(), industry(), efficiency()]
}
