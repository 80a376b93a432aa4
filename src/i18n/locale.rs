//! Locale type: Flexible, validated locale representation.
//!
//! This module provides the `Locale` type, a small copyable value that is
//! guaranteed to refer to a registry entry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};

/// A validated locale.
///
/// This type represents a locale that has been validated against the
/// registry. Only supported locales can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 language tag (e.g., "en", "ru", "uz")
    tag: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { tag: "en" };
    pub const RUSSIAN: Locale = Locale { tag: "ru" };
    pub const UZBEK: Locale = Locale { tag: "uz" };

    /// Create a Locale from a language tag.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the tag is a supported locale
    /// * `Err` if the tag is unknown
    pub fn from_code(tag: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_tag(tag) {
            // Use the static str from the registry
            Some(config) => Ok(Locale { tag: config.tag }),
            None => bail!("Unknown locale tag: '{}'", tag),
        }
    }

    /// Get the default locale, to which unprefixed requests resolve.
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { tag: config.tag }
    }

    /// Get the ISO 639-1 language tag.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the tag is not found in the registry. This cannot happen for
    /// a Locale constructed via `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_tag(self.tag)
            .expect("Locale tag should always be valid")
    }

    /// Native name of the language (e.g., "Русский").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// All supported locales, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Locale { tag: config.tag })
            .collect()
    }
}
