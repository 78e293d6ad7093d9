use crate::error::MotionResult;

use super::{DomMutation, DomSink};

/// Sink that only records, used by tests and headless hosts.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub applied: Vec<DomMutation>,
}

impl RecordingSink {
    /// Last text written to `element`.
    #[must_use]
    pub fn last_text(&self, element: &str) -> Option<&str> {
        self.applied.iter().rev().find_map(|mutation| match mutation {
            DomMutation::SetText { element: key, text } if key.as_str() == element => {
                Some(text.as_str())
            }
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.applied.clear();
    }
}

impl DomSink for RecordingSink {
    fn apply(&mut self, mutation: &DomMutation) -> MotionResult<()> {
        self.applied.push(mutation.clone());
        Ok(())
    }
}
