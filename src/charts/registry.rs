use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{MotionError, MotionResult};

use super::backend::ChartBackend;
use super::definition::ChartDefinition;
use super::style::ChartStyle;

#[derive(Debug, Clone, PartialEq)]
struct RegisteredChart {
    definition: ChartDefinition,
    rendered: bool,
}

/// Canvas id → chart definition table with create-once semantics.
#[derive(Debug, Clone, Default)]
pub struct ChartRegistry {
    style: ChartStyle,
    charts: IndexMap<String, RegisteredChart>,
}

impl ChartRegistry {
    #[must_use]
    pub fn new(style: ChartStyle) -> Self {
        Self {
            style,
            charts: IndexMap::new(),
        }
    }

    /// Registry pre-loaded with the page's four charts.
    pub fn with_site_charts(style: ChartStyle) -> MotionResult<Self> {
        let mut registry = Self::new(style);
        for definition in super::site_charts() {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Registers a definition under its canvas id.
    pub fn register(&mut self, definition: ChartDefinition) -> MotionResult<()> {
        let canvas_id = definition.canvas_id.clone();
        if canvas_id.is_empty() {
            return Err(MotionError::InvalidData(
                "chart canvas id must not be empty".to_owned(),
            ));
        }
        if self.charts.contains_key(&canvas_id) {
            return Err(MotionError::DuplicateChart(canvas_id));
        }
        // Reject bad literal data at setup, not on first scroll.
        definition.kind.build_config(&definition, &self.style)?;
        self.charts.insert(
            canvas_id,
            RegisteredChart {
                definition,
                rendered: false,
            },
        );
        Ok(())
    }

    /// Instantiates the chart for `canvas_id` the first time it is asked for.
    ///
    /// Returns `Ok(true)` when the backend was called and `Ok(false)` when the
    /// chart already exists.
    pub fn render_once<B: ChartBackend>(
        &mut self,
        canvas_id: &str,
        backend: &mut B,
    ) -> MotionResult<bool> {
        let entry = self
            .charts
            .get_mut(canvas_id)
            .ok_or_else(|| MotionError::UnknownChart(canvas_id.to_owned()))?;
        if entry.rendered {
            trace!(canvas_id, "chart already instantiated");
            return Ok(false);
        }
        let config = entry.definition.kind.build_config(&entry.definition, &self.style)?;
        backend.instantiate(canvas_id, &config)?;
        entry.rendered = true;
        debug!(canvas_id, kind = ?entry.definition.kind, "chart instantiated");
        Ok(true)
    }

    #[must_use]
    pub fn is_rendered(&self, canvas_id: &str) -> bool {
        self.charts
            .get(canvas_id)
            .is_some_and(|entry| entry.rendered)
    }

    #[must_use]
    pub fn definition(&self, canvas_id: &str) -> Option<&ChartDefinition> {
        self.charts.get(canvas_id).map(|entry| &entry.definition)
    }

    pub fn canvas_ids(&self) -> impl Iterator<Item = &str> {
        self.charts.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
