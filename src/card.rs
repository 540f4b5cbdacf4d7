//! Stacking order for hovered glass cards.

use crate::consts::{CARD_BASELINE_Z_INDEX, CARD_RAISED_Z_INDEX};

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

/// Pointer transitions a card reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hover {
    Enter,
    Leave,
}

impl Hover {
    /// DOM event name for this transition.
    pub fn event(self) -> &'static str {
        match self {
            Self::Enter => "mouseenter",
            Self::Leave => "mouseleave",
        }
    }

    /// `z-index` the card takes after this transition.
    pub fn z_index(self) -> &'static str {
        match self {
            Self::Enter => CARD_RAISED_Z_INDEX,
            Self::Leave => CARD_BASELINE_Z_INDEX,
        }
    }
}
