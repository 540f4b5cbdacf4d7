//! Browser-side UI enhancements for the Xavier storefront.
//!
//! This crate is compiled to WebAssembly and loaded by the server-rendered
//! pages. It replaces the page script that handled theme switching, reveal
//! animations, navbar styling, toasts, and alert dismissal. The markup and
//! stylesheet stay on the server; this crate only binds DOM events to small
//! visual mutations.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme values, [`theme::ThemeController`], OS preference rules |
//! | [`reveal`] | Idempotent reveal state and the load replay schedule |
//! | [`card`] | Hover stacking order |
//! | [`anchor`] | In-page link target resolution |
//! | [`navbar`] | Navbar style by scroll offset, frame coalescing |
//! | [`toast`] | Toast content (class, icon, message) |
//! | [`dismiss`] | Fade-then-remove timelines for toasts and alerts |
//! | [`lifecycle`] | Document ready states |
//! | [`config`] | Inline JSON page config |
//! | [`error`] | [`error::UiError`] |
//! | [`consts`] | Selectors, class names, timings |
//! | `dom` | `wasm32` only: browser adapters and the start hook |
//!
//! Everything outside `dom` is plain Rust and tested natively.

pub mod anchor;
pub mod card;
pub mod config;
pub mod consts;
pub mod dismiss;
pub mod error;
pub mod lifecycle;
pub mod navbar;
pub mod reveal;
pub mod theme;
pub mod toast;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::toast::show_toast;

/// Module start hook, run by the `wasm-bindgen` glue once the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    dom::boot();
}
