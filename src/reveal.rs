//! One-way activation state for scroll-reveal targets.
//!
//! Two producers feed [`RevealSet::activate`]: the intersection observer and
//! the staggered replay that runs once the window has loaded. Activation is
//! idempotent, so either producer may fire first, or both.

use crate::consts::{REPLAY_BASE_DELAY_MS, REPLAY_STAGGER_MS};

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Active,
}

/// Per-target reveal state, indexed in document order.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    states: Vec<RevealState>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self { states: vec![RevealState::Pending; len] }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[cfg(test)]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Mark a target active. Returns `true` only on the Pending→Active
    /// transition; unknown indices and already-active targets return `false`.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state @ RevealState::Pending) => {
                *state = RevealState::Active;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.states.iter().filter(|s| **s == RevealState::Active).count()
    }
}

/// Delay, from the load event, at which the replay activates target `index`.
pub fn replay_delay_ms(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    REPLAY_BASE_DELAY_MS.saturating_add(index.saturating_mul(REPLAY_STAGGER_MS))
}

/// The full replay schedule as `(index, delay_ms)` pairs.
pub fn replay_schedule(len: usize) -> impl Iterator<Item = (usize, u32)> {
    (0..len).map(|index| (index, replay_delay_ms(index)))
}
