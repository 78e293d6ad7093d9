use crate::error::MotionResult;

use super::config::ChartConfig;

/// Contract implemented by the charting engine bridge.
///
/// Backends receive a fully built, validated configuration; they own nothing
/// of the page state and are called at most once per canvas.
pub trait ChartBackend {
    fn instantiate(&mut self, canvas_id: &str, config: &ChartConfig) -> MotionResult<()>;
}

/// Headless backend used by tests and native hosts.
///
/// It still validates the configuration and keeps every instantiation so
/// tests can assert on what would have been drawn.
#[derive(Debug, Default)]
pub struct NullChartBackend {
    pub instantiated: Vec<(String, ChartConfig)>,
}

impl NullChartBackend {
    #[must_use]
    pub fn count_for(&self, canvas_id: &str) -> usize {
        self.instantiated
            .iter()
            .filter(|(id, _)| id == canvas_id)
            .count()
    }
}

impl ChartBackend for NullChartBackend {
    fn instantiate(&mut self, canvas_id: &str, config: &ChartConfig) -> MotionResult<()> {
        config.validate()?;
        self.instantiated.push((canvas_id.to_owned(), config.clone()));
        Ok(())
    }
}
