//! Active-locale container.

use crate::config::StoreConfig;
use crate::i18n::{Locale, Translations};
use crate::money::Money;
use bazaar_cache::{Cache, Store};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Key of the persisted locale code.
pub const LOCALE_KEY: &str = "locale";

/// Whether the shopper has picked a locale yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleStatus {
    /// No locale has been chosen on this install; show the picker.
    Prompting,
    /// A locale was chosen and persisted.
    Confirmed,
}

/// Owns the active locale and translates UI strings for it.
///
/// `Prompting -> Confirmed` happens once, on the first [`set_locale`]. There
/// is no way back short of clearing the persisted store.
///
/// [`set_locale`]: LocaleState::set_locale
pub struct LocaleState<S> {
    cache: Cache<S>,
    translations: Arc<Translations>,
    locale: Locale,
    status: LocaleStatus,
}

impl<S: Store> LocaleState<S> {
    /// Rehydrate from `store`.
    ///
    /// A missing or unrecognised persisted code (anything but the exact
    /// lowercase codes) falls back to the configured default locale and
    /// leaves the container `Prompting`.
    pub fn load(store: S, config: &StoreConfig, translations: Arc<Translations>) -> Self {
        let cache = Cache::new(store, config.namespace.clone());
        let persisted = match cache.get_raw(LOCALE_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "failed to read persisted locale");
                None
            }
        };

        let (locale, status) = match persisted.as_deref().map(Locale::from_exact_code) {
            Some(Some(locale)) => (locale, LocaleStatus::Confirmed),
            Some(None) => {
                warn!(
                    value = persisted.as_deref().unwrap_or_default(),
                    "ignoring unrecognised persisted locale"
                );
                (config.default_locale, LocaleStatus::Prompting)
            }
            None => (config.default_locale, LocaleStatus::Prompting),
        };

        info!(locale = %locale, ?status, "locale state loaded");
        Self {
            cache,
            translations,
            locale,
            status,
        }
    }

    /// The active locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Current prompt status.
    pub fn status(&self) -> LocaleStatus {
        self.status
    }

    /// Whether the locale picker should be shown.
    pub fn needs_prompt(&self) -> bool {
        self.status == LocaleStatus::Prompting
    }

    /// Switch to `locale`, persist it and confirm the choice.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.status = LocaleStatus::Confirmed;
        if let Err(e) = self.cache.set_raw(LOCALE_KEY, locale.code()) {
            warn!(error = %e, locale = %locale, "failed to persist locale");
        }
        debug!(locale = %locale, "locale set");
    }

    /// Translate `key` into the active locale, echoing the key when the
    /// table has no entry for it.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.translate(self.locale, key)
    }

    /// Format a price for the active locale.
    pub fn format_price(&self, amount: Money) -> String {
        amount.display(self.locale)
    }

    /// The translation table.
    pub fn translations(&self) -> &Translations {
        &self.translations
    }
}
