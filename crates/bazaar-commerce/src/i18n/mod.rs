//! Localization module.
//!
//! Contains the locale set, the translation store and the active-locale
//! container.

mod locale;
mod messages;
mod state;

pub use locale::Locale;
pub use messages::{TranslationEntry, Translations};
pub use state::{LocaleState, LocaleStatus, LOCALE_KEY};
