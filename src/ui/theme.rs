use tracing::debug;

use crate::core::dom::DARK_CLASS;
use crate::render::{DOCUMENT_ELEMENT_KEY, DomMutation, MutationBatch};

/// Dark mode follows the system color-scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    dark: bool,
}

impl ThemeState {
    /// Initial state from `matchMedia('(prefers-color-scheme: dark)')`.
    #[must_use]
    pub fn from_system(prefers_dark: bool) -> (Self, MutationBatch) {
        let mut batch = MutationBatch::new();
        if prefers_dark {
            batch.push(DomMutation::add_class(DOCUMENT_ELEMENT_KEY, DARK_CLASS));
        }
        (Self { dark: prefers_dark }, batch)
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self.dark
    }

    /// Reacts to a preference change event.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> MutationBatch {
        let mut batch = MutationBatch::new();
        if self.dark == prefers_dark {
            return batch;
        }
        self.dark = prefers_dark;
        debug!(dark = prefers_dark, "system color scheme changed");
        batch.push(DomMutation::toggle_class(
            DOCUMENT_ELEMENT_KEY,
            DARK_CLASS,
            prefers_dark,
        ));
        batch
    }
}
