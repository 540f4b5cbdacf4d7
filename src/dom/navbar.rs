//! Navbar scroll styling, optionally coalesced to animation frames.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, Window};

use super::{document, listen, window};
use crate::consts::NAVBAR_SELECTOR;
use crate::error::UiError;
use crate::navbar::{FrameGate, NavbarStyle};

fn restyle(window: &Window, navbar: &HtmlElement) {
    let scroll_y = match window.scroll_y() {
        Ok(y) => y,
        Err(err) => {
            log::debug!("scrollY unavailable: {}", UiError::from(err));
            return;
        }
    };
    let style = NavbarStyle::for_offset(scroll_y);
    let css = navbar.style();
    let applied = css
        .set_property("backdrop-filter", style.backdrop_filter)
        .and_then(|()| css.set_property("box-shadow", style.box_shadow));
    if let Err(err) = applied {
        log::warn!("navbar style not applied: {}", UiError::from(err));
    }
}

fn bind_throttled(window: Window, navbar: HtmlElement) -> Result<(), UiError> {
    let gate = Rc::new(RefCell::new(FrameGate::default()));

    let on_frame = {
        let gate = Rc::clone(&gate);
        let window = window.clone();
        let navbar = navbar.clone();
        Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
            gate.borrow_mut().release();
            restyle(&window, &navbar);
        })
    };
    let frame: js_sys::Function = on_frame.as_ref().unchecked_ref::<js_sys::Function>().clone();
    on_frame.forget();

    let target = window.clone();
    listen(&target, "scroll", move |_event| {
        if !gate.borrow_mut().request() {
            return;
        }
        if let Err(err) = window.request_animation_frame(&frame) {
            log::debug!("requestAnimationFrame failed, restyling now: {}", UiError::from(err));
            gate.borrow_mut().release();
            restyle(&window, &navbar);
        }
    })
}

/// Restyle `.navbar-glass` on scroll. No navbar, nothing bound.
pub fn bind(throttle: bool) -> Result<(), UiError> {
    let Some(navbar) = document()?.query_selector(NAVBAR_SELECTOR)? else {
        log::debug!("no {NAVBAR_SELECTOR}; scroll styling not bound");
        return Ok(());
    };
    let navbar: HtmlElement = navbar.dyn_into().map_err(|_| UiError::MissingElement(NAVBAR_SELECTOR))?;
    let window = window()?;
    if throttle {
        return bind_throttled(window, navbar);
    }
    let target = window.clone();
    listen(&target, "scroll", move |_event| restyle(&window, &navbar))
}
