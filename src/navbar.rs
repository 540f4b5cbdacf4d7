//! Navbar blur/shadow as a function of vertical scroll offset.

use crate::consts::{
    NAVBAR_BLUR_RESTING, NAVBAR_BLUR_SCROLLED, NAVBAR_SCROLL_THRESHOLD_PX, NAVBAR_SHADOW_RESTING,
    NAVBAR_SHADOW_SCROLLED,
};

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

/// Inline style values for the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub backdrop_filter: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarStyle {
    pub const RESTING: Self = Self { backdrop_filter: NAVBAR_BLUR_RESTING, box_shadow: NAVBAR_SHADOW_RESTING };
    pub const SCROLLED: Self = Self { backdrop_filter: NAVBAR_BLUR_SCROLLED, box_shadow: NAVBAR_SHADOW_SCROLLED };

    /// Style for a `scrollY` value. The threshold itself still rests.
    pub fn for_offset(scroll_y: f64) -> Self {
        if scroll_y > NAVBAR_SCROLL_THRESHOLD_PX { Self::SCROLLED } else { Self::RESTING }
    }
}

/// Coalesces bursts of scroll events into one update per animation frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` if the caller should schedule a frame; `false` when one
    /// is already queued.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called when the scheduled frame runs (or failed to schedule).
    pub fn release(&mut self) {
        self.pending = false;
    }
}
