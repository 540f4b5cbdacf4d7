//! Light/dark theme state, persistence, and OS preference following.
//!
//! The applied theme lives in a `data-theme` attribute on `<html>`; the
//! user's explicit choice lives in `localStorage`. Both are reached through
//! the [`ThemeSurface`] and [`PreferenceStore`] seams so the rules below run
//! without a browser.
//!
//! RULES
//! =====
//! - Initial theme is the stored one, or `dark` when nothing is stored.
//! - Toggling flips the applied theme (anything but `dark` becomes `dark`),
//!   stores it, applies it, and swaps the toggle icon.
//! - While nothing is stored, the OS dark preference is adopted at start
//!   (dark only) and every later OS change is applied and stored. The first
//!   stored value, from either path, ends OS following.

use std::fmt;
use std::str::FromStr;

use crate::consts::{ICON_MOON, ICON_SUN};
use crate::error::UiError;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// A named visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The attribute and storage value for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Theme that a toggle moves to from whatever is currently applied.
    ///
    /// Only an applied `dark` moves to `light`; a missing or unrecognized
    /// attribute moves to `dark`.
    pub fn next_after(applied: Option<Self>) -> Self {
        match applied {
            Some(Self::Dark) => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Theme matching the OS `prefers-color-scheme: dark` signal.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Icon class for the toggle: a sun while dark, a moon while light.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => ICON_SUN,
            Self::Light => ICON_MOON,
        }
    }
}

impl FromStr for Theme {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UiError::InvalidTheme(other.to_owned())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the document should show for a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeRender {
    pub attribute: &'static str,
    pub icon_class: &'static str,
}

/// Project a theme onto its attribute value and toggle icon.
pub fn render(theme: Theme) -> ThemeRender {
    ThemeRender { attribute: theme.as_str(), icon_class: theme.icon_class() }
}

/// Client-local storage for the single theme entry.
pub trait PreferenceStore {
    /// Raw stored value, `None` when the entry is absent.
    ///
    /// # Errors
    ///
    /// Fails when storage cannot be read.
    fn read(&self) -> Result<Option<String>, UiError>;

    /// Overwrite the stored value.
    ///
    /// # Errors
    ///
    /// Fails when storage rejects the write (disabled, full).
    fn write(&self, value: &str) -> Result<(), UiError>;
}

/// The document-side view of the theme.
pub trait ThemeSurface {
    /// Currently applied theme, `None` if unset or unrecognized.
    fn applied(&self) -> Option<Theme>;

    /// Set the document-level theme attribute.
    ///
    /// # Errors
    ///
    /// Fails when the document rejects the attribute write.
    fn set_attribute(&self, value: &str) -> Result<(), UiError>;

    /// Set the toggle icon's class. A missing toggle or icon is not an error.
    ///
    /// # Errors
    ///
    /// Fails when the icon element rejects the class write.
    fn set_icon(&self, class: &str) -> Result<(), UiError>;
}

/// Theme rules bound to a store and a surface.
pub struct ThemeController<S, V> {
    store: S,
    surface: V,
}

impl<S: PreferenceStore, V: ThemeSurface> ThemeController<S, V> {
    pub fn new(store: S, surface: V) -> Self {
        Self { store, surface }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Whether an explicit preference exists. Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// Propagates storage read failures.
    pub fn has_stored(&self) -> Result<bool, UiError> {
        Ok(self.store.read()?.is_some_and(|value| !value.is_empty()))
    }

    /// The stored theme, ignoring values that are not a known theme.
    ///
    /// # Errors
    ///
    /// Propagates storage read failures.
    pub fn stored(&self) -> Result<Option<Theme>, UiError> {
        let Some(raw) = self.store.read()? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse() {
            Ok(theme) => Ok(Some(theme)),
            Err(err) => {
                log::warn!("ignoring stored theme: {err}");
                Ok(None)
            }
        }
    }

    /// Apply attribute and icon for `theme`.
    ///
    /// # Errors
    ///
    /// Propagates surface write failures.
    pub fn apply(&self, theme: Theme) -> Result<(), UiError> {
        let view = render(theme);
        self.surface.set_attribute(view.attribute)?;
        self.surface.set_icon(view.icon_class)
    }

    /// Apply the stored theme, or the default when none is stored.
    ///
    /// # Errors
    ///
    /// Propagates storage and surface failures.
    pub fn initialize(&self) -> Result<Theme, UiError> {
        let theme = self.stored()?.unwrap_or_default();
        self.apply(theme)?;
        log::debug!("theme initialized to {theme}");
        Ok(theme)
    }

    /// Flip the applied theme and persist the user's explicit choice.
    ///
    /// # Errors
    ///
    /// Propagates storage and surface failures. Nothing is applied when the
    /// write fails.
    pub fn toggle(&self) -> Result<Theme, UiError> {
        let next = Theme::next_after(self.surface.applied());
        self.store.write(next.as_str())?;
        self.apply(next)?;
        log::debug!("theme toggled to {next}");
        Ok(next)
    }

    /// Start-up half of OS preference following.
    ///
    /// Only a dark OS preference is applied and stored; a light one leaves
    /// both the document and storage untouched. Returns the adopted theme.
    ///
    /// # Errors
    ///
    /// Propagates storage and surface failures.
    pub fn adopt_system_on_start(&self, prefers_dark: bool) -> Result<Option<Theme>, UiError> {
        if self.has_stored()? || !prefers_dark {
            return Ok(None);
        }
        self.surface.set_attribute(Theme::Dark.as_str())?;
        self.store.write(Theme::Dark.as_str())?;
        Ok(Some(Theme::Dark))
    }

    /// React to an OS preference change.
    ///
    /// Applies and stores the OS-derived theme while no preference is
    /// stored; a no-op afterwards. Returns the adopted theme.
    ///
    /// # Errors
    ///
    /// Propagates storage and surface failures.
    pub fn on_system_change(&self, prefers_dark: bool) -> Result<Option<Theme>, UiError> {
        if self.has_stored()? {
            return Ok(None);
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.apply(theme)?;
        self.store.write(theme.as_str())?;
        log::debug!("theme follows system: {theme}");
        Ok(Some(theme))
    }
}
