use serde::{Deserialize, Serialize};

use crate::core::ElementId;

/// Numeric element read from the page, with its raw data attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericElement {
    pub element: ElementId,
    pub raw_value: String,
}

impl NumericElement {
    #[must_use]
    pub fn new(element: impl Into<ElementId>, raw_value: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            raw_value: raw_value.into(),
        }
    }
}

/// Stat card and the canvas it hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub card: ElementId,
    pub canvas_id: Option<String>,
}

impl StatCard {
    #[must_use]
    pub fn new(card: impl Into<ElementId>, canvas_id: impl Into<String>) -> Self {
        Self {
            card: card.into(),
            canvas_id: Some(canvas_id.into()),
        }
    }
}

/// `.circular-progress` entry: ring stroke and centered number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRing {
    pub ring: ElementId,
    pub number: ElementId,
    pub raw_percentage: String,
}

/// Elements discovered by the host at startup.
///
/// The browser adapter fills this from DOM queries; headless hosts and tests
/// build it literally.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageMarkup {
    #[serde(default)]
    pub reveal: Vec<ElementId>,
    /// `.count[data-target]`
    #[serde(default)]
    pub counters: Vec<NumericElement>,
    #[serde(default)]
    pub stat_cards: Vec<StatCard>,
    /// `#stats-ii`, when present on the page.
    #[serde(default)]
    pub stats_section: Option<ElementId>,
    /// `.kpi-number[data-target]`
    #[serde(default)]
    pub kpi_numbers: Vec<NumericElement>,
    #[serde(default)]
    pub progress_rings: Vec<ProgressRing>,
    /// `.bar-fill[data-width]`
    #[serde(default)]
    pub bar_fills: Vec<NumericElement>,
    /// `.industry-bar[data-width]`
    #[serde(default)]
    pub industry_bars: Vec<NumericElement>,
}
