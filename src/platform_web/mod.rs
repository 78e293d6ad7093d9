//! Browser host: wires DOM events, observers, frames and timers to a
//! [`PageController`] and applies the mutations it returns.

mod chart_js;
mod dom_sink;
mod markup_scan;

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use js_sys::Array;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, EventTarget, FormData, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MediaQueryListEvent, TouchEvent, Window,
};

use crate::api::{PageConfig, PageController, WatcherKind};
use crate::core::ElementId;
use crate::core::dom::{
    BOOK_BUTTON_ID, CONTACT_FORM_ID, FORM_BUTTON_SELECTOR, HAMBURGER_ID, MOBILE_MENU_ID,
    PREFERS_DARK_QUERY,
};
use crate::error::{MotionError, MotionResult};
use crate::render::{DomMutation, DomSink};
use crate::ui::{ContactFields, SimulatedEndpoint};
use crate::visibility::{IntersectionSample, key_for};

pub use chart_js::ChartJsBackend;
pub use dom_sink::WebDomSink;

use chart_js::host_error;

struct Runtime {
    window: Window,
    controller: PageController<ChartJsBackend>,
    sink: WebDomSink,
    frame_pending: bool,
    timeout_handle: Option<i32>,
}

type Shared = Rc<RefCell<Runtime>>;

impl Runtime {
    fn now(&self) -> f64 {
        self.window.performance().map_or(0.0, |performance| performance.now())
    }

    fn apply<'a>(&mut self, mutations: impl IntoIterator<Item = &'a DomMutation>) {
        for mutation in mutations {
            if let Err(err) = self.sink.apply(mutation) {
                report(&err);
            }
        }
    }
}

fn report(err: &MotionError) {
    warn!(error = %err, "page behavior error");
    web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
}

fn today() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Mounts the page behavior on the current document.
///
/// Call once after the DOM is ready and Chart.js is loaded.
#[wasm_bindgen(js_name = mountSite)]
pub fn mount_site() -> Result<(), JsValue> {
    mount(PageConfig::default()).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Mounts with an explicit configuration.
pub fn mount(config: PageConfig) -> MotionResult<()> {
    let window = web_sys::window().ok_or_else(|| MotionError::Host("no window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| MotionError::Host("no document".to_owned()))?;

    let mut sink = WebDomSink::new(document.clone());
    let (markup, observed) = markup_scan::scan(&mut sink)?;
    let controller = PageController::new(
        ChartJsBackend::new(document.clone()),
        config,
        markup,
        Box::new(SimulatedEndpoint::default()),
    )?;

    let prefers_dark = window
        .match_media(PREFERS_DARK_QUERY)
        .map_err(host_error)?
        .is_some_and(|query| query.matches());

    let runtime: Shared = Rc::new(RefCell::new(Runtime {
        window: window.clone(),
        controller,
        sink,
        frame_pending: false,
        timeout_handle: None,
    }));

    {
        let mut rt = runtime.borrow_mut();
        let now = rt.now();
        let batch = rt.controller.start(now, prefers_dark, today());
        rt.apply(&batch);
    }

    observe(&runtime, WatcherKind::Reveal, &observed.reveal)?;
    observe(&runtime, WatcherKind::StatCard, &observed.stat_cards)?;
    observe(&runtime, WatcherKind::StatsSection, &observed.stats_section)?;
    bind_events(&runtime, &window)?;
    schedule(&runtime);
    Ok(())
}

fn listen<E, F>(target: &EventTarget, name: &str, mut handler: F) -> MotionResult<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    target
        .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        .map_err(host_error)?;
    closure.forget();
    Ok(())
}

fn element_by_id(runtime: &Shared, id: &str) -> MotionResult<Element> {
    runtime
        .borrow()
        .sink
        .document()
        .get_element_by_id(id)
        .ok_or_else(|| MotionError::MissingElement(id.to_owned()))
}

fn bind_events(runtime: &Shared, window: &Window) -> MotionResult<()> {
    let document = runtime.borrow().sink.document().clone();

    let rt = runtime.clone();
    listen(window, "scroll", move |_: Event| {
        let mut rt = rt.borrow_mut();
        let scroll_y = rt.window.scroll_y().unwrap_or(0.0);
        let batch = rt.controller.on_scroll(scroll_y);
        rt.apply(&batch);
    })?;

    let rt = runtime.clone();
    let hamburger = element_by_id(runtime, HAMBURGER_ID)?;
    listen(&hamburger, "click", move |_: Event| {
        let mut rt = rt.borrow_mut();
        let batch = rt.controller.on_hamburger_click();
        rt.apply(&batch);
    })?;

    let rt = runtime.clone();
    let mobile_menu = element_by_id(runtime, MOBILE_MENU_ID)?;
    listen(&mobile_menu, "click", move |event: Event| {
        let tag = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(|element| element.tag_name())
            .unwrap_or_default();
        let mut rt = rt.borrow_mut();
        let batch = rt.controller.on_menu_click(&tag);
        rt.apply(&batch);
    })?;

    let anchors = document
        .query_selector_all("a[href^=\"#\"]")
        .map_err(host_error)?;
    for index in 0..anchors.length() {
        let Some(anchor) = anchors.get(index).and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let rt = runtime.clone();
        let href_source = anchor.clone();
        listen(&anchor, "click", move |event: Event| {
            let href = href_source.get_attribute("href").unwrap_or_default();
            let mut rt = rt.borrow_mut();
            if let Some(scroll) = rt.controller.on_anchor_click(&href) {
                event.prevent_default();
                rt.apply([&scroll]);
            }
        })?;
    }

    let rt = runtime.clone();
    let book_button = element_by_id(runtime, BOOK_BUTTON_ID)?;
    listen(&book_button, "click", move |event: Event| {
        event.prevent_default();
        let mut rt = rt.borrow_mut();
        let scroll = rt.controller.on_book_click();
        rt.apply([&scroll]);
    })?;

    if let Some(query) = window.match_media(PREFERS_DARK_QUERY).map_err(host_error)? {
        let rt = runtime.clone();
        listen(&query, "change", move |event: MediaQueryListEvent| {
            let mut rt = rt.borrow_mut();
            let batch = rt.controller.on_color_scheme_change(event.matches());
            rt.apply(&batch);
        })?;
    }

    let rt = runtime.clone();
    listen(&document, "touchstart", move |event: TouchEvent| {
        if let Some(touch) = event.touches().get(0) {
            rt.borrow_mut().controller.on_touch_start(f64::from(touch.client_y()));
        }
    })?;
    let rt = runtime.clone();
    listen(&document, "touchend", move |event: TouchEvent| {
        if let Some(touch) = event.changed_touches().get(0) {
            let _ = rt.borrow_mut().controller.on_touch_end(f64::from(touch.client_y()));
        }
    })?;

    let form = element_by_id(runtime, CONTACT_FORM_ID)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| MotionError::Host(format!("`{CONTACT_FORM_ID}` is not a form")))?;
    let rt = runtime.clone();
    let form_source = form.clone();
    listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let fields = match read_fields(&form_source) {
            Ok(fields) => fields,
            Err(err) => {
                report(&err);
                return;
            }
        };
        let button_text = form_source
            .query_selector(FORM_BUTTON_SELECTOR)
            .ok()
            .flatten()
            .and_then(|button| button.text_content())
            .unwrap_or_default();
        {
            let mut rt = rt.borrow_mut();
            let now = rt.now();
            let (_, batch) = rt.controller.submit_contact(fields, &button_text, now);
            rt.apply(&batch);
        }
        schedule(&rt);
    })?;

    Ok(())
}

fn read_fields(form: &HtmlFormElement) -> MotionResult<ContactFields> {
    let data = FormData::new_with_form(form).map_err(host_error)?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Ok(ContactFields::new(field("name"), field("email"), field("message")))
}

fn observe(
    runtime: &Shared,
    kind: WatcherKind,
    elements: &[(Element, ElementId)],
) -> MotionResult<()> {
    if elements.is_empty() {
        return Ok(());
    }
    let threshold = runtime.borrow().controller.watcher_threshold(kind);
    let keys: Vec<(Element, ElementId)> = elements.to_vec();

    let rt = runtime.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            {
                let mut rt = rt.borrow_mut();
                let samples: Vec<IntersectionSample> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let key = key_for(&keys, &entry.target())?.clone();
                        Some(IntersectionSample::new(
                            key,
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        ))
                    })
                    .collect();
                let now = rt.now();
                match rt.controller.on_intersections(kind, &samples, now) {
                    Ok(batch) => rt.apply(&batch),
                    Err(err) => report(&err),
                }
            }
            schedule(&rt);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(host_error)?;
    callback.forget();
    for (element, _) in elements {
        observer.observe(element);
    }
    Ok(())
}

/// Requests the next frame while counters run, otherwise arms a timer for
/// the next stagger or form deadline.
fn schedule(runtime: &Shared) {
    let mut rt = runtime.borrow_mut();
    if rt.controller.needs_animation_frame() {
        if rt.frame_pending {
            return;
        }
        let next = runtime.clone();
        let callback = Closure::once_into_js(move |timestamp: f64| run_frame(&next, timestamp));
        match rt.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(_) => rt.frame_pending = true,
            Err(err) => report(&host_error(err)),
        }
        return;
    }

    let Some(deadline) = rt.controller.next_deadline() else {
        return;
    };
    if let Some(handle) = rt.timeout_handle.take() {
        rt.window.clear_timeout_with_handle(handle);
    }
    let delay = (deadline - rt.now()).max(0.0).ceil() as i32;
    let next = runtime.clone();
    let callback = Closure::once_into_js(move || {
        let now = {
            let mut rt = next.borrow_mut();
            rt.timeout_handle = None;
            rt.now()
        };
        run_frame(&next, now);
    });
    match rt
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
    {
        Ok(handle) => rt.timeout_handle = Some(handle),
        Err(err) => report(&host_error(err)),
    }
}

fn run_frame(runtime: &Shared, now: f64) {
    {
        let mut rt = runtime.borrow_mut();
        rt.frame_pending = false;
        let batch = rt.controller.on_frame(now);
        rt.apply(&batch);
    }
    schedule(runtime);
}
