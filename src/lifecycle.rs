//! Document load phases and when each start-up hook may run.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

/// `document.readyState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Parse the DOM string; unknown values are treated as still loading.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "interactive" => Self::Interactive,
            "complete" => Self::Complete,
            _ => Self::Loading,
        }
    }

    /// The DOM is parsed; `DOMContentLoaded` has fired or will never fire again.
    pub fn dom_ready(self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// The window `load` event has already fired.
    pub fn loaded(self) -> bool {
        matches!(self, Self::Complete)
    }
}
