use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ElementId;

/// Host key for `document.documentElement`.
pub const DOCUMENT_ELEMENT_KEY: &str = ":root";

/// One change the host must apply to the page.
///
/// Element keys are resolved by the host: keys it registered for class
/// selections first, then element ids, then CSS selectors (`.nav`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DomMutation {
    AddClass {
        element: ElementId,
        class: String,
    },
    RemoveClass {
        element: ElementId,
        class: String,
    },
    /// Replaces the whole `class` attribute.
    SetClassName {
        element: ElementId,
        class_name: String,
    },
    SetText {
        element: ElementId,
        text: String,
    },
    /// Inline style property; custom properties keep their `--` prefix.
    SetStyle {
        element: ElementId,
        property: String,
        value: String,
    },
    SetAttribute {
        element: ElementId,
        name: String,
        value: String,
    },
    SetDisabled {
        element: ElementId,
        disabled: bool,
    },
    ResetForm {
        element: ElementId,
    },
    /// Smooth scroll to the first match of `selector`.
    ScrollIntoView {
        selector: String,
    },
}

impl DomMutation {
    pub fn add_class(element: impl Into<ElementId>, class: &str) -> Self {
        Self::AddClass {
            element: element.into(),
            class: class.to_owned(),
        }
    }

    pub fn remove_class(element: impl Into<ElementId>, class: &str) -> Self {
        Self::RemoveClass {
            element: element.into(),
            class: class.to_owned(),
        }
    }

    /// `add_class` or `remove_class` depending on `present`.
    pub fn toggle_class(element: impl Into<ElementId>, class: &str, present: bool) -> Self {
        if present {
            Self::add_class(element, class)
        } else {
            Self::remove_class(element, class)
        }
    }

    pub fn set_text(element: impl Into<ElementId>, text: impl Into<String>) -> Self {
        Self::SetText {
            element: element.into(),
            text: text.into(),
        }
    }

    pub fn set_style(
        element: impl Into<ElementId>,
        property: &str,
        value: impl Into<String>,
    ) -> Self {
        Self::SetStyle {
            element: element.into(),
            property: property.to_owned(),
            value: value.into(),
        }
    }

    pub fn set_attribute(
        element: impl Into<ElementId>,
        name: &str,
        value: impl Into<String>,
    ) -> Self {
        Self::SetAttribute {
            element: element.into(),
            name: name.to_owned(),
            value: value.into(),
        }
    }

    /// Key of the element this mutation touches, if any.
    #[must_use]
    pub fn element(&self) -> Option<&ElementId> {
        match self {
            Self::AddClass { element, .. }
            | Self::RemoveClass { element, .. }
            | Self::SetClassName { element, .. }
            | Self::SetText { element, .. }
            | Self::SetStyle { element, .. }
            | Self::SetAttribute { element, .. }
            | Self::SetDisabled { element, .. }
            | Self::ResetForm { element } => Some(element),
            Self::ScrollIntoView { .. } => None,
        }
    }
}

/// Mutations produced by a single event, in application order.
pub type MutationBatch = SmallVec<[DomMutation; 4]>;
