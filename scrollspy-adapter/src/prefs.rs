use alloc::collections::BTreeMap;
use alloc::string::String;

/// Default storage key for the dark mode flag.
pub const DARK_MODE_KEY: &str = "scrollspy.dark_mode";
/// Default storage key for the locale tag.
pub const LOCALE_KEY: &str = "scrollspy.locale";

/// Pluggable persistence for UI preferences (browser `localStorage`, a config file, ..).
///
/// The interface is infallible: backends that can fail (quota, privacy mode, missing file)
/// swallow the error and report a missing value instead. Preference persistence is best-effort
/// and never interrupts the page.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// An in-memory [`PreferenceStorage`], for tests and hosts without persistence.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(String::from(key), String::from(value));
    }
}

/// Persisted UI preferences: dark mode and locale.
///
/// Values are read from storage once at load time and kept in memory afterwards; every change is
/// written through immediately. The dark mode flag is stored as `"1"`/`"0"`; a missing or
/// malformed value falls back to the caller's default. The locale is stored verbatim.
#[derive(Clone, Debug)]
pub struct Preferences<S> {
    storage: S,
    dark_mode_key: String,
    locale_key: String,
    dark_mode: bool,
    locale: String,
}

impl<S: PreferenceStorage> Preferences<S> {
    /// Loads preferences under the default keys.
    pub fn load(storage: S, default_dark_mode: bool, default_locale: &str) -> Self {
        Self::load_with_keys(
            storage,
            DARK_MODE_KEY,
            LOCALE_KEY,
            default_dark_mode,
            default_locale,
        )
    }

    /// Loads preferences stored under custom keys, e.g. to namespace per app.
    pub fn load_with_keys(
        storage: S,
        dark_mode_key: &str,
        locale_key: &str,
        default_dark_mode: bool,
        default_locale: &str,
    ) -> Self {
        let dark_mode = match storage.get(dark_mode_key).as_deref() {
            Some("1") => true,
            Some("0") => false,
            _ => default_dark_mode,
        };
        let locale = storage
            .get(locale_key)
            .unwrap_or_else(|| String::from(default_locale));
        Self {
            storage,
            dark_mode_key: String::from(dark_mode_key),
            locale_key: String::from(locale_key),
            dark_mode,
            locale,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
        self.storage
            .set(&self.dark_mode_key, if dark_mode { "1" } else { "0" });
    }

    /// Flips dark mode and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        let next = !self.dark_mode;
        self.set_dark_mode(next);
        next
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: &str) {
        self.locale = String::from(locale);
        self.storage.set(&self.locale_key, locale);
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Releases the backend, e.g. to hand it to the next page.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
