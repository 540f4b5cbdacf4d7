//! Fade-then-remove timelines shared by toasts and alert banners.

use crate::consts::{ALERT_LIFT_PX, ALERT_VISIBLE_MS, DISMISS_FADE_MS, TOAST_LIFT_PX, TOAST_VISIBLE_MS};

#[cfg(test)]
#[path = "dismiss_test.rs"]
mod dismiss_test;

/// A fixed dismissal timeline: visible, then fade upward, then remove.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dismissal {
    pub visible_ms: u32,
    pub fade_ms: u32,
    pub lift_px: u32,
}

/// Toast timeline: 3000ms visible, 300ms fade, lifts 20px.
pub const TOAST: Dismissal = Dismissal { visible_ms: TOAST_VISIBLE_MS, fade_ms: DISMISS_FADE_MS, lift_px: TOAST_LIFT_PX };

/// Alert timeline: 5000ms visible, 300ms fade, lifts 10px.
pub const ALERT: Dismissal = Dismissal { visible_ms: ALERT_VISIBLE_MS, fade_ms: DISMISS_FADE_MS, lift_px: ALERT_LIFT_PX };

/// The two chained timer delays a scheduler arms for a [`Dismissal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Steps {
    /// From creation to the fade.
    pub fade_delay_ms: u32,
    /// From the fade to removal.
    pub remove_delay_ms: u32,
}

impl Steps {
    /// Milliseconds from creation to removal.
    pub fn total_ms(self) -> u64 {
        u64::from(self.fade_delay_ms) + u64::from(self.remove_delay_ms)
    }
}

impl Dismissal {
    pub fn steps(self) -> Steps {
        Steps { fade_delay_ms: self.visible_ms, remove_delay_ms: self.fade_ms }
    }

    /// Inline `transform` applied when the fade starts.
    pub fn fade_transform(self) -> String {
        format!("translateY(-{}px)", self.lift_px)
    }
}
