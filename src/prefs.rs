//! Best-effort persistence for user preferences and the document-root side
//! effects that go with them.
//!
//! Both seams are traits so the stores built on top of them can run on the
//! server and in unit tests, where there is no `localStorage` and no `<html>`
//! element to touch.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use thiserror::Error;

pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("couldn't read preference {0}")]
    Read(String),
    #[error("couldn't write preference {0}")]
    Write(String),
}

/// String key/value storage that outlives a page load.
pub trait Preferences: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Attributes and class flags on the document root (`<html>`).
pub trait RootElement: Send + Sync {
    fn set_attribute(&self, name: &str, value: &str);
    fn set_class(&self, class: &str, enabled: bool);
}

/// In-memory preferences, used on the server and in tests.
///
/// Clones share the same backing map, so a second store built from a clone
/// sees what the first one persisted (which is how a reload is simulated).
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let prefs = Self::default();
        // fresh map, nothing else can hold the lock
        let _ = prefs.set(key, value);
        prefs
    }
}

impl Preferences for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let values = self
            .values
            .lock()
            .map_err(|_| PreferenceError::Read(key.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| PreferenceError::Write(key.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Root element for environments without a DOM.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedRoot;

impl RootElement for DetachedRoot {
    fn set_attribute(&self, _name: &str, _value: &str) {}
    fn set_class(&self, _class: &str, _enabled: bool) {}
}

/// Reads a preference, logging and discarding any storage failure.
pub(crate) fn read_or_none(prefs: &dyn Preferences, key: &str) -> Option<String> {
    match prefs.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("{e}, using default");
            None
        }
    }
}

/// Writes a preference, logging and discarding any storage failure.
pub(crate) fn write_best_effort(prefs: &dyn Preferences, key: &str, value: &str) {
    if let Err(e) = prefs.set(key, value) {
        log::warn!("{e}, keeping in-memory value only");
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{BrowserPreferences, BrowserRoot};

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::{document, window};

    use super::{PreferenceError, Preferences, RootElement};

    /// `window.localStorage`, looked up on every call so the handle never has
    /// to be held across threads.
    ///
    /// Not `leptos_use::storage::use_local_storage`: that hook needs a reactive
    /// owner and hands back signals, while the stores read once at load and
    /// write on toggle from plain Rust, so they can run under host tests.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserPreferences;

    impl BrowserPreferences {
        fn storage() -> Result<web_sys::Storage, PreferenceError> {
            window()
                .local_storage()
                .ok()
                .flatten()
                .ok_or(PreferenceError::Unavailable)
        }
    }

    impl Preferences for BrowserPreferences {
        fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
            Self::storage()?
                .get_item(key)
                .map_err(|_| PreferenceError::Read(key.to_string()))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|_| PreferenceError::Write(key.to_string()))
        }
    }

    /// `document.documentElement`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserRoot;

    impl RootElement for BrowserRoot {
        fn set_attribute(&self, name: &str, value: &str) {
            if let Some(root) = document().document_element() {
                if root.set_attribute(name, value).is_err() {
                    log::warn!("couldn't set root attribute {name}");
                }
            }
        }

        fn set_class(&self, class: &str, enabled: bool) {
            if let Some(root) = document().document_element() {
                let classes = root.class_list();
                let res = if enabled {
                    classes.add_1(class)
                } else {
                    classes.remove_1(class)
                };
                if res.is_err() {
                    log::warn!("couldn't update root class {class}");
                }
            }
        }
    }
}
