//! In-page anchor resolution for smooth scrolling.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Selector to look up for an anchor's `href`.
///
/// Only fragment links (`#...`) resolve. A bare `#` has no target. The
/// returned selector may still be rejected by the document (e.g. `#1st`);
/// callers treat that the same as no match.
pub fn target_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}
