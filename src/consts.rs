//! Shared selectors, class names, and timing constants.

// ── Theme ───────────────────────────────────────────────────────

/// Default `localStorage` key for the persisted theme.
pub const THEME_STORAGE_KEY: &str = "xavier-theme";

/// Attribute on `<html>` that the stylesheet keys its palette on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Element id of the theme toggle button.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Media query reporting the OS-level dark preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub const ICON_SUN: &str = "fas fa-sun";
pub const ICON_MOON: &str = "fas fa-moon";

// ── Reveal ──────────────────────────────────────────────────────

pub const REVEAL_SELECTOR: &str = ".reveal, .fade-in, .scale-in";

/// Class that triggers the stylesheet's entrance transition.
pub const REVEAL_ACTIVE_CLASS: &str = "active";

/// Fraction of a target that must be visible to count as intersecting.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport's bottom edge by 50px.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Delay before the load replay starts.
pub const REPLAY_BASE_DELAY_MS: u32 = 100;

/// Additional delay per target index during the load replay.
pub const REPLAY_STAGGER_MS: u32 = 100;

/// Added to `<body>` once the window `load` event fires.
pub const BODY_LOADED_CLASS: &str = "loaded";

// ── Cards ───────────────────────────────────────────────────────

pub const CARD_SELECTOR: &str = ".card-glass";
pub const CARD_RAISED_Z_INDEX: &str = "10";
pub const CARD_BASELINE_Z_INDEX: &str = "1";

// ── Anchors ─────────────────────────────────────────────────────

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// ── Navbar ──────────────────────────────────────────────────────

pub const NAVBAR_SELECTOR: &str = ".navbar-glass";

/// Scroll offset the page must exceed (strictly) for the scrolled style.
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const NAVBAR_BLUR_SCROLLED: &str = "blur(30px)";
pub const NAVBAR_BLUR_RESTING: &str = "blur(20px)";
pub const NAVBAR_SHADOW_SCROLLED: &str = "0 4px 30px rgba(0, 0, 0, 0.3)";
pub const NAVBAR_SHADOW_RESTING: &str = "none";

// ── Toasts & alerts ─────────────────────────────────────────────

pub const ALERT_SELECTOR: &str = ".alert-glass";
pub const ALERT_BASE_CLASS: &str = "alert-glass";
pub const DEFAULT_TOAST_KIND: &str = "success";

pub const TOAST_VISIBLE_MS: u32 = 3000;
pub const TOAST_LIFT_PX: u32 = 20;

pub const ALERT_VISIBLE_MS: u32 = 5000;
pub const ALERT_LIFT_PX: u32 = 10;

/// Length of the fade transition before a dismissed node is removed.
pub const DISMISS_FADE_MS: u32 = 300;

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "xavier-ui-config";
