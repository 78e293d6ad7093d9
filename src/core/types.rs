use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a DOM node as seen by the controller.
///
/// Hosts pick the key: the element `id` attribute when present, otherwise any
/// stable synthetic key (for example `kpi-number#2`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Synthetic key for the `index`-th member of a class selection.
    #[must_use]
    pub fn indexed(class_name: &str, index: usize) -> Self {
        Self(format!("{class_name}#{index}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Timestamp in milliseconds on the host's monotonic clock
/// (`performance.now()` / `requestAnimationFrame` time base).
pub type Millis = f64;
