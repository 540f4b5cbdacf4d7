//! Theme toggle and OS color-scheme bindings.

use web_sys::{Document, Element};

use super::storage::LocalStorage;
use super::{document, listen, window};
use crate::config::UiConfig;
use crate::consts::{PREFERS_DARK_QUERY, THEME_ATTRIBUTE, THEME_TOGGLE_ID};
use crate::error::UiError;
use crate::theme::{Theme, ThemeController, ThemeSurface};

/// `<html data-theme>` plus the `<i>` inside `#theme-toggle`.
///
/// The toggle is looked up on every icon write so the surface works before
/// the DOM is parsed and after the toggle is re-rendered.
#[derive(Clone, Debug)]
pub struct DocumentTheme {
    document: Document,
}

impl DocumentTheme {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn toggle(&self) -> Option<Element> {
        self.document.get_element_by_id(THEME_TOGGLE_ID)
    }

    fn root(&self) -> Result<Element, UiError> {
        self.document.document_element().ok_or(UiError::MissingElement("<html>"))
    }
}

impl ThemeSurface for DocumentTheme {
    fn applied(&self) -> Option<Theme> {
        let raw = self.document.document_element()?.get_attribute(THEME_ATTRIBUTE)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::debug!("unrecognized applied theme: {err}");
                None
            }
        }
    }

    fn set_attribute(&self, value: &str) -> Result<(), UiError> {
        self.root()?.set_attribute(THEME_ATTRIBUTE, value)?;
        Ok(())
    }

    fn set_icon(&self, class: &str) -> Result<(), UiError> {
        let Some(toggle) = self.toggle() else {
            log::debug!("no #{THEME_TOGGLE_ID}; icon not updated");
            return Ok(());
        };
        match toggle.query_selector("i")? {
            Some(icon) => icon.set_class_name(class),
            None => log::debug!("#{THEME_TOGGLE_ID} has no icon"),
        }
        Ok(())
    }
}

pub type DomThemeController = ThemeController<LocalStorage, DocumentTheme>;

pub fn controller(config: &UiConfig) -> Result<DomThemeController, UiError> {
    Ok(ThemeController::new(LocalStorage::open(&config.storage_key)?, DocumentTheme::new(document()?)))
}

/// Apply the stored theme and bind the toggle button.
pub fn bind_toggle(config: &UiConfig) -> Result<(), UiError> {
    let controller = controller(config)?;
    controller.initialize()?;
    let Some(toggle) = controller.surface().toggle() else {
        log::debug!("no #{THEME_TOGGLE_ID}; theme toggle not bound");
        return Ok(());
    };
    listen(&toggle, "click", move |_event| {
        if let Err(err) = controller.toggle() {
            log::error!("theme toggle failed: {err}");
        }
    })
}

/// Follow `prefers-color-scheme` until a theme is stored.
///
/// Nothing is subscribed when a preference already exists at start.
pub fn follow_system(config: &UiConfig) -> Result<(), UiError> {
    let controller = controller(config)?;
    if controller.has_stored()? {
        return Ok(());
    }
    let Some(query) = window()?.match_media(PREFERS_DARK_QUERY)? else {
        log::debug!("matchMedia unsupported; not following system theme");
        return Ok(());
    };
    if let Some(theme) = controller.adopt_system_on_start(query.matches())? {
        log::debug!("adopted system theme {theme}");
    }
    let source = query.clone();
    listen(&query, "change", move |_event| {
        if let Err(err) = controller.on_system_change(source.matches()) {
            log::warn!("system theme change not applied: {err}");
        }
    })
}
