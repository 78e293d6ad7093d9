use indexmap::IndexMap;
use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlFormElement, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::core::ElementId;
use crate::error::{MotionError, MotionResult};
use crate::render::{DOCUMENT_ELEMENT_KEY, DomMutation, DomSink};

use super::chart_js::host_error;

/// Applies mutations to the live document.
pub struct WebDomSink {
    document: Document,
    registered: IndexMap<ElementId, Element>,
}

impl WebDomSink {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            registered: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Binds a synthetic key (class selection member) to its element.
    pub fn register(&mut self, key: ElementId, element: Element) {
        self.registered.insert(key, element);
    }

    fn resolve(&self, key: &ElementId) -> MotionResult<Element> {
        if let Some(element) = self.registered.get(key) {
            return Ok(element.clone());
        }
        let raw = key.as_str();
        let found = if raw == DOCUMENT_ELEMENT_KEY {
            self.document.document_element()
        } else if raw.starts_with('.') || raw.starts_with('#') {
            self.document.query_selector(raw).map_err(host_error)?
        } else {
            self.document.get_element_by_id(raw)
        };
        found.ok_or_else(|| MotionError::MissingElement(raw.to_owned()))
    }
}

fn style_of(element: &Element) -> MotionResult<CssStyleDeclaration> {
    // `style` lives on HTMLElement and SVGElement alike; progress rings are SVG.
    Reflect::get(element, &JsValue::from_str("style"))
        .map_err(host_error)?
        .dyn_into::<CssStyleDeclaration>()
        .map_err(|_| MotionError::Host("element has no inline style".to_owned()))
}

impl DomSink for WebDomSink {
    fn apply(&mut self, mutation: &DomMutation) -> MotionResult<()> {
        match mutation {
            DomMutation::AddClass { element, class } => self
                .resolve(element)?
                .class_list()
                .add_1(class)
                .map_err(host_error),
            DomMutation::RemoveClass { element, class } => self
                .resolve(element)?
                .class_list()
                .remove_1(class)
                .map_err(host_error),
            DomMutation::SetClassName {
                element,
                class_name,
            } => {
                self.resolve(element)?.set_class_name(class_name);
                Ok(())
            }
            DomMutation::SetText { element, text } => {
                self.resolve(element)?.set_text_content(Some(text));
                Ok(())
            }
            DomMutation::SetStyle {
                element,
                property,
                value,
            } => style_of(&self.resolve(element)?)?
                .set_property(property, value)
                .map_err(host_error),
            DomMutation::SetAttribute {
                element,
                name,
                value,
            } => self
                .resolve(element)?
                .set_attribute(name, value)
                .map_err(host_error),
            DomMutation::SetDisabled { element, disabled } => self
                .resolve(element)?
                .toggle_attribute_with_force("disabled", *disabled)
                .map(|_| ())
                .map_err(host_error),
            DomMutation::ResetForm { element } => {
                let form = self
                    .resolve(element)?
                    .dyn_into::<HtmlFormElement>()
                    .map_err(|_| MotionError::Host(format!("`{element}` is not a form")))?;
                form.reset();
                Ok(())
            }
            DomMutation::ScrollIntoView { selector } => {
                // Missing anchor targets are silently ignored, like the browser.
                if let Some(target) = self.document.query_selector(selector).map_err(host_error)? {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
                Ok(())
            }
        }
    }
}
