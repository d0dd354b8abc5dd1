use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::{
    locale::{Direction, Language, LocaleStore},
    theme::{Theme, ThemeStore},
};

/// Reactive handle to the [`LocaleStore`], provided once by [`provide_stores`].
///
/// The signal starts at the default language on both server and client so
/// hydration matches; the stored preference is applied right after mount.
#[derive(Clone, Copy)]
pub struct Locale {
    language: RwSignal<Language>,
    store: StoredValue<Arc<Mutex<LocaleStore>>>,
}

impl Locale {
    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn direction(&self) -> Direction {
        self.language().direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }

    /// Tracked lookup; re-runs the caller when the language changes.
    pub fn t(&self, key: &str) -> String {
        let lang = self.language.get();
        self.store.with_value(|s| {
            s.lock()
                .expect("should be able to lock locale store")
                .translate_in(lang, key)
                .to_string()
        })
    }

    pub fn set_language(&self, lang: Language) {
        self.store.with_value(|s| {
            s.lock()
                .expect("should be able to lock locale store")
                .set_language(lang)
        });
        // outside the lock: setting the signal may re-run views that call t()
        self.language.set(lang);
    }

    pub fn toggle(&self) {
        self.set_language(self.language.get_untracked().toggled());
    }

    fn sync_from_store(&self) {
        let lang = self.store.with_value(|s| {
            let store = s.lock().expect("should be able to lock locale store");
            store.apply_to_root();
            store.language()
        });
        self.language.set(lang);
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    theme: RwSignal<Theme>,
    store: StoredValue<Arc<Mutex<ThemeStore>>>,
}

impl ThemeState {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme() == Theme::Dark
    }

    pub fn toggle(&self) {
        let next = self.store.with_value(|s| {
            s.lock()
                .expect("should be able to lock theme store")
                .toggle()
        });
        self.theme.set(next);
    }

    fn sync_from_store(&self) {
        let theme = self.store.with_value(|s| {
            let store = s.lock().expect("should be able to lock theme store");
            store.apply_to_root();
            store.theme()
        });
        self.theme.set(theme);
    }
}

#[cfg(feature = "hydrate")]
fn load_stores() -> (LocaleStore, ThemeStore) {
    use crate::prefs::{BrowserPreferences, BrowserRoot};
    (
        LocaleStore::load(BrowserPreferences, BrowserRoot),
        ThemeStore::load(BrowserPreferences, BrowserRoot),
    )
}

#[cfg(not(feature = "hydrate"))]
fn load_stores() -> (LocaleStore, ThemeStore) {
    use crate::prefs::{DetachedRoot, MemoryPreferences};
    (
        LocaleStore::load(MemoryPreferences::new(), DetachedRoot),
        ThemeStore::load(MemoryPreferences::new(), DetachedRoot),
    )
}

/// Loads both stores and provides them as context for the whole app.
pub fn provide_stores() -> (Locale, ThemeState) {
    let (mut locale_store, theme_store) = load_stores();
    locale_store.subscribe(|lang| {
        log::debug!("language set to {lang} ({})", lang.direction().as_str())
    });

    let locale = Locale {
        language: RwSignal::new(Language::default()),
        store: StoredValue::new(Arc::new(Mutex::new(locale_store))),
    };
    let theme = ThemeState {
        theme: RwSignal::new(Theme::default()),
        store: StoredValue::new(Arc::new(Mutex::new(theme_store))),
    };

    // effects only run in the browser, after hydration
    Effect::new(move |_| {
        locale.sync_from_store();
        theme.sync_from_store();
    });

    provide_context(locale);
    provide_context(theme);
    (locale, theme)
}

pub fn use_locale() -> Locale {
    expect_context::<Locale>()
}

pub fn use_theme() -> ThemeState {
    expect_context::<ThemeState>()
}
