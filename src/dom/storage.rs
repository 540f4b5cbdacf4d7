//! `localStorage` as a [`PreferenceStore`].

use web_sys::Storage;

use super::window;
use crate::error::UiError;
use crate::theme::PreferenceStore;

/// One `localStorage` entry.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: Storage,
    key: String,
}

impl LocalStorage {
    /// Open the entry under `key`.
    ///
    /// # Errors
    ///
    /// [`UiError::StorageUnavailable`] when the browser exposes no storage
    /// (disabled, sandboxed frame); [`UiError::Js`] when access throws.
    pub fn open(key: &str) -> Result<Self, UiError> {
        let storage = window()?.local_storage()?.ok_or(UiError::StorageUnavailable)?;
        Ok(Self { storage, key: key.to_owned() })
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self) -> Result<Option<String>, UiError> {
        Ok(self.storage.get_item(&self.key)?)
    }

    fn write(&self, value: &str) -> Result<(), UiError> {
        self.storage.set_item(&self.key, value)?;
        Ok(())
    }
}
