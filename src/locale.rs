use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    sync::{Arc, LazyLock},
};

use rust_embed::Embed;
use thiserror::Error;

use crate::prefs::{read_or_none, write_best_effort, Preferences, RootElement, LANGUAGE_KEY};

static BUILTIN_TABLE: LazyLock<Arc<TranslationTable>> =
    LazyLock::new(|| Arc::new(TranslationTable::embedded()));

#[derive(Embed)]
#[folder = "locales"]
struct LocaleAssets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Self::Ar => Direction::Rtl,
            Self::En => Direction::Ltr,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            other => Err(LocaleError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Writing direction. Always derived from a [`Language`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
    #[error("missing translation file for {0}")]
    MissingTable(Language),
    #[error("couldn't parse translations for {lang}: {reason}")]
    Parse { lang: Language, reason: String },
}

/// Per-language key to string maps.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl TranslationTable {
    /// The table compiled into the binary from `locales/*.json`.
    pub fn builtin() -> Arc<TranslationTable> {
        BUILTIN_TABLE.clone()
    }

    fn embedded() -> Self {
        Self::from_sources(Language::ALL.map(|lang| {
            let file = LocaleAssets::get(&format!("{lang}.json"));
            (lang, file.map(|f| f.data.into_owned()))
        }))
    }

    /// Builds a table from each language's raw JSON. A language whose source
    /// is absent or malformed is logged and left out, so lookups in it fall
    /// back to the key.
    pub fn from_sources(sources: impl IntoIterator<Item = (Language, Option<Vec<u8>>)>) -> Self {
        let mut table = Self::default();
        for (lang, data) in sources {
            match Self::parse_source(lang, data.as_deref()) {
                Ok(entries) => {
                    table.tables.insert(lang, entries);
                }
                Err(e) => log::error!("{e}"),
            }
        }
        table
    }

    fn parse_source(
        lang: Language,
        data: Option<&[u8]>,
    ) -> Result<HashMap<String, String>, LocaleError> {
        let data = data.ok_or(LocaleError::MissingTable(lang))?;
        serde_json::from_slice(data).map_err(|e| LocaleError::Parse {
            lang,
            reason: e.to_string(),
        })
    }

    pub fn has_language(&self, lang: Language) -> bool {
        self.tables.contains_key(&lang)
    }

    pub fn from_json(lang: Language, json: &str) -> Result<Self, LocaleError> {
        let mut table = Self::default();
        table.insert_json(lang, json)?;
        Ok(table)
    }

    pub fn insert_json(&mut self, lang: Language, json: &str) -> Result<(), LocaleError> {
        let entries = Self::parse_source(lang, Some(json.as_bytes()))?;
        self.tables.insert(lang, entries);
        Ok(())
    }

    pub fn get(&self, lang: Language, key: &str) -> Option<&str> {
        self.tables
            .get(&lang)
            .and_then(|t| t.get(key))
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn keys(&self, lang: Language) -> impl Iterator<Item = &str> {
        self.tables
            .get(&lang)
            .into_iter()
            .flat_map(|t| t.keys().map(String::as_str))
    }

    /// Keys present for `reference` that `lang` can't resolve, sorted.
    pub fn missing_keys(&self, lang: Language, reference: Language) -> Vec<&str> {
        let mut missing = self
            .keys(reference)
            .filter(|k| self.get(lang, k).is_none())
            .collect::<Vec<_>>();
        missing.sort_unstable();
        missing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn Fn(Language) + Send + Sync>;

/// The active language, its persistence and its lookups.
pub struct LocaleStore {
    language: Language,
    table: Arc<TranslationTable>,
    prefs: Box<dyn Preferences>,
    root: Box<dyn RootElement>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: usize,
}

impl LocaleStore {
    /// Reads the persisted language once; falls back to English when the
    /// value is missing, unknown, or storage can't be read.
    pub fn load(prefs: impl Preferences + 'static, root: impl RootElement + 'static) -> Self {
        Self::with_table(TranslationTable::builtin(), prefs, root)
    }

    pub fn with_table(
        table: Arc<TranslationTable>,
        prefs: impl Preferences + 'static,
        root: impl RootElement + 'static,
    ) -> Self {
        let language = read_or_none(&prefs, LANGUAGE_KEY)
            .and_then(|s| match s.parse::<Language>() {
                Ok(lang) => Some(lang),
                Err(e) => {
                    log::warn!("ignoring stored language: {e}");
                    None
                }
            })
            .unwrap_or_default();
        Self {
            language,
            table,
            prefs: Box::new(prefs),
            root: Box::new(root),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }

    pub fn set_language(&mut self, lang: Language) {
        self.language = lang;
        write_best_effort(self.prefs.as_ref(), LANGUAGE_KEY, lang.code());
        self.apply_to_root();
        for (_, listener) in &self.listeners {
            listener(lang);
        }
    }

    pub fn toggle(&mut self) -> Language {
        let next = self.language.toggled();
        self.set_language(next);
        next
    }

    /// Looks `key` up for the active language, returning the key itself when
    /// there's no translation.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.translate_in(self.language, key)
    }

    pub fn translate_in<'a>(&'a self, lang: Language, key: &'a str) -> &'a str {
        self.table.get(lang, key).unwrap_or(key)
    }

    /// Writes `dir` and `lang` on the document root without persisting.
    pub fn apply_to_root(&self) {
        self.root.set_attribute("dir", self.direction().as_str());
        self.root.set_attribute("lang", self.language.code());
    }

    pub fn subscribe(
        &mut self,
        listener: impl Fn(Language) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(i, _)| *i != id);
        self.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::prefs::{
        testing::{BrokenPreferences, RecordingRoot},
        DetachedRoot, MemoryPreferences,
    };

    fn small_table() -> Arc<TranslationTable> {
        let mut table = TranslationTable::from_json(Language::En, r#"{"nav.about": "About"}"#)
            .expect("valid json");
        table
            .insert_json(Language::Ar, r#"{"nav.about": "نبذة عني"}"#)
            .expect("valid json");
        Arc::new(table)
    }

    #[test]
    fn test_defaults_to_english_without_stored_value() {
        let store = LocaleStore::load(MemoryPreferences::new(), DetachedRoot);
        assert_eq!(store.language(), Language::En);
        assert!(!store.is_rtl());
        assert_eq!(store.direction(), Direction::Ltr);
    }

    #[test]
    fn test_invalid_stored_value_falls_back_to_english() {
        for stored in ["fr", "", "AR", "arabic"] {
            let prefs = MemoryPreferences::with_value(LANGUAGE_KEY, stored);
            let store = LocaleStore::load(prefs, DetachedRoot);
            assert_eq!(store.language(), Language::En, "stored {stored:?}");
        }
    }

    #[test]
    fn test_unreadable_storage_falls_back_and_keeps_memory_state() {
        let mut store = LocaleStore::load(BrokenPreferences, DetachedRoot);
        assert_eq!(store.language(), Language::En);

        store.set_language(Language::Ar);
        assert_eq!(store.language(), Language::Ar);
        assert!(store.is_rtl());
    }

    #[test]
    fn test_translate_follows_language_switch() {
        let mut store =
            LocaleStore::with_table(small_table(), MemoryPreferences::new(), DetachedRoot);
        assert_eq!(store.translate("nav.about"), "About");

        store.set_language(Language::Ar);
        assert_eq!(store.translate("nav.about"), "نبذة عني");

        store.set_language(Language::En);
        assert_eq!(store.translate("nav.about"), "About");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let mut store =
            LocaleStore::with_table(small_table(), MemoryPreferences::new(), DetachedRoot);
        for lang in Language::ALL {
            store.set_language(lang);
            assert_eq!(store.translate("nav.nowhere"), "nav.nowhere");
            assert_eq!(store.translate(""), "");
        }
    }

    #[test]
    fn test_empty_translation_falls_back_to_key() {
        let table = TranslationTable::from_json(Language::En, r#"{"blank": ""}"#).unwrap();
        let store =
            LocaleStore::with_table(Arc::new(table), MemoryPreferences::new(), DetachedRoot);
        assert_eq!(store.translate("blank"), "blank");
    }

    #[test]
    fn test_rtl_tracks_every_set() {
        let mut store = LocaleStore::load(MemoryPreferences::new(), DetachedRoot);
        for lang in [Language::Ar, Language::Ar, Language::En, Language::Ar, Language::En] {
            store.set_language(lang);
            assert_eq!(store.is_rtl(), lang == Language::Ar);
        }
    }

    #[test]
    fn test_language_survives_reload() {
        for lang in Language::ALL {
            let prefs = MemoryPreferences::new();
            let mut store = LocaleStore::load(prefs.clone(), DetachedRoot);
            store.set_language(lang);
            drop(store);

            let reloaded = LocaleStore::load(prefs, DetachedRoot);
            assert_eq!(reloaded.language(), lang);
        }
    }

    #[test]
    fn test_set_same_language_still_persists() {
        let prefs = MemoryPreferences::new();
        let mut store = LocaleStore::load(prefs.clone(), DetachedRoot);
        assert_eq!(prefs.get(LANGUAGE_KEY), Ok(None));

        store.set_language(Language::En);
        assert_eq!(store.language(), Language::En);
        assert_eq!(prefs.get(LANGUAGE_KEY), Ok(Some("en".to_string())));
    }

    #[test]
    fn test_load_has_no_root_side_effects() {
        let root = RecordingRoot::default();
        let prefs = MemoryPreferences::with_value(LANGUAGE_KEY, "ar");
        let store = LocaleStore::load(prefs, root.clone());
        assert_eq!(store.language(), Language::Ar);
        assert!(root.changes().is_empty());

        store.apply_to_root();
        assert_eq!(root.attribute("dir").as_deref(), Some("rtl"));
        assert_eq!(root.attribute("lang").as_deref(), Some("ar"));
    }

    #[test]
    fn test_set_language_updates_root() {
        let root = RecordingRoot::default();
        let mut store = LocaleStore::load(MemoryPreferences::new(), root.clone());

        store.toggle();
        assert_eq!(root.attribute("dir").as_deref(), Some("rtl"));
        assert_eq!(root.attribute("lang").as_deref(), Some("ar"));

        store.toggle();
        assert_eq!(root.attribute("dir").as_deref(), Some("ltr"));
        assert_eq!(root.attribute("lang").as_deref(), Some("en"));
    }

    #[test]
    fn test_subscribers_notified_until_unsubscribed() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = LocaleStore::load(MemoryPreferences::new(), DetachedRoot);
        let id = {
            let seen = seen.clone();
            store.subscribe(move |lang| seen.lock().unwrap().push(lang))
        };

        store.set_language(Language::Ar);
        store.set_language(Language::Ar);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_language(Language::En);

        assert_eq!(*seen.lock().unwrap(), vec![Language::Ar, Language::Ar]);
    }

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>(), Ok(lang));
        }
        assert_eq!("de".parse::<Language>(), Err(LocaleError::UnknownLanguage("de".to_string())));
    }

    #[test]
    fn test_builtin_tables_have_same_keys() {
        let table = TranslationTable::builtin();
        assert!(table.keys(Language::En).count() > 0);
        assert_eq!(table.missing_keys(Language::Ar, Language::En), Vec::<&str>::new());
        assert_eq!(table.missing_keys(Language::En, Language::Ar), Vec::<&str>::new());
    }

    #[test]
    fn test_builtin_store_translates_nav() {
        let mut store = LocaleStore::load(MemoryPreferences::new(), DetachedRoot);
        assert_eq!(store.translate("nav.about"), "About");
        store.set_language(Language::Ar);
        assert_eq!(store.translate("nav.about"), "نبذة عني");
        assert_eq!(store.translate("language.toggle"), "EN");
    }

    #[test]
    fn test_language_without_table_translates_to_key() {
        let table = TranslationTable::from_json(Language::En, r#"{"k": "value"}"#).unwrap();
        let mut store =
            LocaleStore::with_table(Arc::new(table), MemoryPreferences::new(), DetachedRoot);
        assert_eq!(store.translate("k"), "value");

        store.set_language(Language::Ar);
        assert!(store.is_rtl());
        assert_eq!(store.translate("k"), "k");
    }

    #[test]
    fn test_sources_skip_missing_and_malformed_tables() {
        let table = TranslationTable::from_sources([
            (Language::En, Some(br#"{"nav.about": "About"}"#.to_vec())),
            (Language::Ar, None),
        ]);
        assert!(table.has_language(Language::En));
        assert!(!table.has_language(Language::Ar));
        assert_eq!(table.get(Language::En, "nav.about"), Some("About"));

        let table = TranslationTable::from_sources([
            (Language::En, Some(b"[1, 2".to_vec())),
            (Language::Ar, Some(r#"{"nav.about": "نبذة عني"}"#.as_bytes().to_vec())),
        ]);
        assert!(!table.has_language(Language::En));
        assert_eq!(table.get(Language::Ar, "nav.about"), Some("نبذة عني"));

        let mut store =
            LocaleStore::with_table(Arc::new(table), MemoryPreferences::new(), DetachedRoot);
        assert_eq!(store.translate("nav.about"), "nav.about");
        store.set_language(Language::Ar);
        assert_eq!(store.translate("nav.about"), "نبذة عني");
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let err = TranslationTable::from_json(Language::Ar, "{not json").unwrap_err();
        assert!(matches!(err, LocaleError::Parse { lang: Language::Ar, .. }));
    }
}
