//! Scroll-reveal bindings: one shared intersection observer plus the
//! staggered replay after window load.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{document, on_window_load, query_all};
use crate::consts::{BODY_LOADED_CLASS, REVEAL_ACTIVE_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::error::UiError;
use crate::reveal::{RevealSet, replay_schedule};

/// Reveal targets and their shared state.
struct Targets {
    elements: Vec<Element>,
    state: RefCell<RevealSet>,
}

impl Targets {
    fn index_of(&self, element: &Element) -> Option<usize> {
        self.elements.iter().position(|el| el.is_same_node(Some(element)))
    }

    /// Activate target `index`; the class is only written on the transition.
    fn activate(&self, index: usize) {
        if !self.state.borrow_mut().activate(index) {
            return;
        }
        let Some(element) = self.elements.get(index) else {
            return;
        };
        if let Err(err) = element.class_list().add_1(REVEAL_ACTIVE_CLASS) {
            log::warn!("reveal target {index} not activated: {}", UiError::from(err));
        }
    }
}

fn observer_options() -> IntersectionObserverInit {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    options
}

fn observe(targets: &Rc<Targets>) -> Result<(), UiError> {
    let shared = Rc::clone(targets);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(index) = shared.index_of(&target) {
                    shared.activate(index);
                }
                // Active never reverts; nothing left to watch for.
                observer.unobserve(&target);
            }
        },
    );
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &observer_options())?;
    callback.forget();
    for element in &targets.elements {
        observer.observe(element);
    }
    Ok(())
}

fn replay(targets: &Rc<Targets>) {
    match document().map(|doc| doc.body()) {
        Ok(Some(body)) => {
            if let Err(err) = body.class_list().add_1(BODY_LOADED_CLASS) {
                log::warn!("body not marked loaded: {}", UiError::from(err));
            }
        }
        Ok(None) => log::debug!("no <body> to mark loaded"),
        Err(err) => log::warn!("body not marked loaded: {err}"),
    }
    for (index, delay_ms) in replay_schedule(targets.elements.len()) {
        let targets = Rc::clone(targets);
        Timeout::new(delay_ms, move || targets.activate(index)).forget();
    }
}

/// Observe every reveal target and schedule the load replay.
pub fn bind() -> Result<(), UiError> {
    let elements = query_all(&document()?, REVEAL_SELECTOR)?;
    let count = elements.len();
    let targets = Rc::new(Targets { state: RefCell::new(RevealSet::new(count)), elements });
    if count > 0 {
        observe(&targets)?;
    }
    on_window_load(move || replay(&targets))?;
    log::debug!("watching {count} reveal targets");
    Ok(())
}
