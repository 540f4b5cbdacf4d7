//! Smooth scrolling for in-page `#` links.

use web_sys::{Document, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{document, listen, query_all};
use crate::anchor::target_selector;
use crate::consts::ANCHOR_SELECTOR;
use crate::error::UiError;

fn scroll_to(document: &Document, href: &str) {
    let Some(selector) = target_selector(href) else {
        log::debug!("anchor {href:?} has no target");
        return;
    };
    match document.query_selector(selector) {
        Ok(Some(target)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Ok(None) => log::debug!("no element matches {selector}"),
        Err(err) => log::debug!("unusable anchor selector {selector}: {}", UiError::from(err)),
    }
}

/// Intercept every `#` link present now. Default navigation is always
/// suppressed, matched or not.
pub fn bind() -> Result<(), UiError> {
    let document = document()?;
    let anchors = query_all(&document, ANCHOR_SELECTOR)?;
    let count = anchors.len();
    for anchor in anchors {
        let link = anchor.clone();
        let doc = document.clone();
        listen(&anchor, "click", move |event: Event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            scroll_to(&doc, &href);
        })?;
    }
    log::debug!("bound smooth scroll on {count} anchors");
    Ok(())
}
