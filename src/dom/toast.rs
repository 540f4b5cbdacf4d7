//! Toast creation and the shared fade-then-remove scheduler.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Element, HtmlElement};

use super::document;
use crate::dismiss::{Dismissal, TOAST};
use crate::error::UiError;
use crate::toast::{TOAST_ROW_CLASS, Toast};

/// Show a toast from JavaScript: `showToast("Saved")`, `showToast("Oops", "error")`.
///
/// Failures are logged, never thrown.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) {
    if let Err(err) = show(&Toast::new(message, kind.as_deref())) {
        log::error!("toast not shown: {err}");
    }
}

/// Append `toast` to `<body>` and schedule its dismissal.
///
/// # Errors
///
/// Fails when there is no document body or a DOM call throws.
pub fn show(toast: &Toast) -> Result<HtmlElement, UiError> {
    let document = document()?;
    let body = document.body().ok_or(UiError::MissingElement("<body>"))?;
    let node = build(&document, toast)?;
    body.append_child(&node)?;
    schedule_dismissal(node.clone(), TOAST);
    Ok(node)
}

fn build(document: &Document, toast: &Toast) -> Result<HtmlElement, UiError> {
    let outer: HtmlElement = document.create_element("div")?.unchecked_into();
    outer.set_class_name(&toast.class_name());

    let row = document.create_element("div")?;
    row.set_class_name(TOAST_ROW_CLASS);

    let icon = document.create_element("i")?;
    icon.set_class_name(&toast.icon_class());

    // Text node, never markup.
    let text = document.create_element("span")?;
    text.set_text_content(Some(&toast.message));

    row.append_child(&icon)?;
    row.append_child(&text)?;
    outer.append_child(&row)?;
    Ok(outer)
}

fn remove(node: &Element) {
    if node.parent_node().is_none() {
        log::trace!("dismissed node already detached");
        return;
    }
    node.remove();
}

/// Arm the two chained timers of [`Dismissal::steps`]: fade, then remove.
///
/// Runs to completion even if the node was removed in the meantime.
pub fn schedule_dismissal(node: HtmlElement, dismissal: Dismissal) {
    let steps = dismissal.steps();
    Timeout::new(steps.fade_delay_ms, move || {
        let css = node.style();
        let faded = css
            .set_property("opacity", "0")
            .and_then(|()| css.set_property("transform", &dismissal.fade_transform()));
        if let Err(err) = faded {
            log::debug!("fade not applied: {}", UiError::from(err));
        }
        Timeout::new(steps.remove_delay_ms, move || remove(&node)).forget();
    })
    .forget();
}
