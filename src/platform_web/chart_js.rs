use js_sys::{Function, Object, Reflect};
use serde::Serialize;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement};

use crate::charts::{ChartBackend, ChartConfig};
use crate::error::{MotionError, MotionResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(context: &JsValue, config: &JsValue) -> Result<ChartJs, JsValue>;
}

/// Hands chart configurations to the global Chart.js constructor.
pub struct ChartJsBackend {
    document: Document,
}

impl ChartJsBackend {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn to_js(config: &ChartConfig) -> MotionResult<JsValue> {
        let value = config
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| MotionError::Host(format!("failed to convert chart config: {e}")))?;
        install_callbacks(config, &value).map_err(host_error)?;
        Ok(value)
    }
}

impl ChartBackend for ChartJsBackend {
    fn instantiate(&mut self, canvas_id: &str, config: &ChartConfig) -> MotionResult<()> {
        let canvas = self
            .document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| MotionError::MissingElement(canvas_id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| MotionError::Host(format!("`{canvas_id}` is not a canvas")))?;
        let context = canvas
            .get_context("2d")
            .map_err(host_error)?
            .ok_or_else(|| MotionError::Host(format!("no 2d context for `{canvas_id}`")))?;

        let js_config = Self::to_js(config)?;
        ChartJs::new(&context, &js_config).map_err(host_error)?;
        debug!(canvas_id, "Chart.js instance created");
        Ok(())
    }
}

/// Adds the function-valued options serde cannot express.
fn install_callbacks(config: &ChartConfig, js_config: &JsValue) -> Result<(), JsValue> {
    if let Some(format) = config.tooltip_label_format() {
        let tooltip = lookup(js_config, &["options", "plugins", "tooltip"])?;
        let callbacks = Object::new();
        Reflect::set(
            &callbacks,
            &JsValue::from_str("label"),
            &Function::new_with_args("context", format.js_body()),
        )?;
        Reflect::set(&tooltip, &JsValue::from_str("callbacks"), &callbacks)?;
    }
    for (axis, format) in config.tick_formats() {
        let ticks = lookup(js_config, &["options", "scales", axis, "ticks"])?;
        Reflect::set(
            &ticks,
            &JsValue::from_str("callback"),
            &Function::new_with_args("value", format.js_body()),
        )?;
    }
    Ok(())
}

fn lookup(root: &JsValue, path: &[&str]) -> Result<JsValue, JsValue> {
    path.iter().try_fold(root.clone(), |node, key| {
        let next = Reflect::get(&node, &JsValue::from_str(key))?;
        if next.is_undefined() {
            return Err(JsValue::from_str(&format!("missing chart option `{key}`")));
        }
        Ok(next)
    })
}

pub(super) fn host_error(err: JsValue) -> MotionError {
    MotionError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
