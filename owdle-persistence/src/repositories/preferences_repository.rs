use owdle_types::{Locale, Theme};
use tracing::warn;

use crate::storage::KeyValueStore;

pub const LOCALE_KEY: &str = "owdle-locale";
pub const THEME_KEY: &str = "owdle-theme";

/// Saved interface language and color theme.
pub struct PreferencesRepository<K: KeyValueStore> {
    storage: K,
}

impl<K: KeyValueStore> PreferencesRepository<K> {
    pub fn new(storage: K) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Failed to read preference");
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            warn!(key, error = %e, "Failed to save preference");
        }
    }

    /// Saved locale, then the `lang` URL parameter, then English.
    pub fn initial_locale(&self, url_lang: Option<&str>) -> Locale {
        self.read(LOCALE_KEY)
            .and_then(|saved| saved.parse().ok())
            .or_else(|| url_lang.and_then(|lang| lang.parse().ok()))
            .unwrap_or_default()
    }

    pub fn initial_theme(&self) -> Theme {
        match self.read(THEME_KEY).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn save_locale(&mut self, locale: Locale) {
        self.write(LOCALE_KEY, locale.as_str());
    }

    /// Saves `locale` unless it is already the one a fresh load would pick.
    /// Returns whether anything was written.
    pub fn set_locale(&mut self, locale: Locale, url_lang: Option<&str>) -> bool {
        if self.initial_locale(url_lang) == locale {
            return false;
        }
        self.save_locale(locale);
        true
    }

    pub fn save_theme(&mut self, theme: Theme) {
        self.write(THEME_KEY, theme.as_str());
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.initial_theme().toggled();
        self.save_theme(theme);
        theme
    }
}
