//! Browser bindings.
//!
//! Every submodule is a thin adapter: it looks elements up, registers event
//! handlers that live for the page, and hands the decisions to the pure core
//! modules. Components start independently; one failing is logged and does
//! not stop the others.

pub mod alerts;
pub mod anchors;
pub mod cards;
pub mod navbar;
pub mod reveal;
pub mod storage;
pub mod theme;
pub mod toast;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::config::UiConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::UiError;
use crate::lifecycle::ReadyState;

pub(crate) fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::MissingWindow)
}

pub(crate) fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::MissingDocument)
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, UiError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .map(|node| node.unchecked_into::<Element>())
        .collect())
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Register a handler that runs at most once.
fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), UiError>
where
    F: FnOnce() + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::once(move |_event: Event| handler());
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub(crate) fn ready_state(document: &Document) -> ReadyState {
    ReadyState::parse(&document.ready_state())
}

/// Run `f` once the DOM is parsed, immediately if it already is.
pub(crate) fn on_dom_ready<F>(f: F) -> Result<(), UiError>
where
    F: FnOnce() + 'static,
{
    let document = document()?;
    if ready_state(&document).dom_ready() {
        f();
        return Ok(());
    }
    listen_once(&document, "DOMContentLoaded", f)
}

/// Run `f` once the window has loaded, immediately if it already has.
pub(crate) fn on_window_load<F>(f: F) -> Result<(), UiError>
where
    F: FnOnce() + 'static,
{
    let window = window()?;
    if ready_state(&document()?).loaded() {
        f();
        return Ok(());
    }
    listen_once(&window, "load", f)
}

fn load_config() -> Result<UiConfig, UiError> {
    let raw = document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    UiConfig::from_json(&raw)
}

fn init_logging(level: log::Level) {
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already installed: {err}")));
    }
}

fn report(component: &str, result: Result<(), UiError>) {
    match result {
        Ok(()) => log::debug!("{component} ready"),
        Err(err) => log::error!("{component} failed: {err}"),
    }
}

/// Start every component.
///
/// OS theme following starts immediately so the attribute is set as early as
/// possible; everything that needs page elements waits for the DOM.
pub fn boot() {
    console_error_panic_hook::set_once();

    let (config, config_err) = match load_config() {
        Ok(config) => (config, None),
        Err(err) => (UiConfig::default(), Some(err)),
    };
    init_logging(config.level());
    if let Some(err) = config_err {
        log::warn!("using default config: {err}");
    }

    report("system theme listener", theme::follow_system(&config));

    let ready = on_dom_ready(move || {
        report("theme toggle", theme::bind_toggle(&config));
        report("scroll reveal", reveal::bind());
        report("card hover", cards::bind());
        report("anchor scroll", anchors::bind());
        report("navbar", navbar::bind(config.throttle_scroll));
        report("alert dismiss", alerts::bind());
    });
    report("dom ready hook", ready);
}
