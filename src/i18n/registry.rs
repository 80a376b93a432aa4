//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of all locales served by the
//! site. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported locale.
///
/// Contains all metadata for a specific locale, including its tag, names,
/// and whether it is the default for unprefixed requests.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language tag (e.g., "en", "ru", "uz")
    pub tag: &'static str,

    /// English name of the language (e.g., "English", "Russian", "Uzbek")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Русский", "O'zbekcha")
    pub native_name: &'static str,

    /// Whether this is the default locale (exactly one should be true)
    pub is_default: bool,
}

/// Global locale registry singleton.
///
/// Contains all supported locales and provides methods to query them.
/// Initialized once on first access and immutable thereafter.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: supported_locales(),
        })
    }

    /// Get a locale configuration by its tag.
    pub fn get_by_tag(&self, tag: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.tag == tag)
    }

    /// List all supported locales in registry order.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// Unprefixed request paths are rewritten to this locale. There must be
    /// exactly one default.
    ///
    /// # Panics
    /// Panics if zero or multiple defaults are defined (a configuration error
    /// caught at first access, not per request).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self.locales.iter().filter(|l| l.is_default).collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a tag belongs to a supported locale.
    pub fn is_supported(&self, tag: &str) -> bool {
        self.get_by_tag(tag).is_some()
    }
}

/// The closed set of locales the site is published in.
fn supported_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            tag: "en",
            name: "English",
            native_name: "English",
            is_default: true,
        },
        LocaleConfig {
            tag: "ru",
            name: "Russian",
            native_name: "Русский",
            is_default: false,
        },
        LocaleConfig {
            tag: "uz",
            name: "Uzbek",
            native_name: "O'zbekcha",
            is_default: false,
        },
    ]
}
