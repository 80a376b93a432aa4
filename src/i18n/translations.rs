//! Per-locale translation documents.
//!
//! Documents are embedded at compile time and parsed once into a global map,
//! so a missing translation file is a build error rather than a runtime
//! fault. Lookups use dotted paths ("contact.form.name") and every call site
//! supplies a literal default; key presence is not validated at load time.

use crate::i18n::Locale;
use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::warn;

/// Raw translation sources, one per supported locale.
const SOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("ru", include_str!("../../locales/ru.json")),
    ("uz", include_str!("../../locales/uz.json")),
];

/// The tree-shaped mapping holding all user-facing text for one locale.
///
/// Immutable after load; shared by every request for the locale.
#[derive(Debug)]
pub struct TranslationDocument {
    root: Map<String, Value>,
}

impl TranslationDocument {
    fn parse(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).context("Invalid translation JSON")?;

        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => bail!("Translation document root must be an object"),
        }
    }

    /// Look up a value by dotted path ("contact.form.name").
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.root.get(first)?;

        for segment in segments {
            current = current.get(segment)?;
        }

        Some(current)
    }

    /// Look up a string by dotted path, falling back to the supplied literal
    /// when the path is absent or not a string.
    pub fn text<'a>(&'a self, path: &str, default: &'a str) -> &'a str {
        match self.get(path) {
            Some(Value::String(s)) => s.as_str(),
            _ => default,
        }
    }
}

/// Global document map (initialized lazily)
static DOCUMENTS: OnceLock<HashMap<&'static str, TranslationDocument>> = OnceLock::new();

fn documents() -> &'static HashMap<&'static str, TranslationDocument> {
    DOCUMENTS.get_or_init(|| {
        let mut map = HashMap::new();
        for (tag, raw) in SOURCES {
            match TranslationDocument::parse(raw) {
                Ok(doc) => {
                    map.insert(*tag, doc);
                }
                Err(e) => {
                    // The locale falls back to the default document
                    warn!("Failed to parse translations for '{}': {}", tag, e);
                }
            }
        }
        map
    })
}

/// Resolve the translation document for a locale.
///
/// Falls back to the default locale's document if the requested one is
/// unavailable; errors only when the default document itself is missing,
/// which the page layer surfaces as a not-found condition.
pub fn resolve(locale: Locale) -> Result<&'static TranslationDocument> {
    let docs = documents();

    if let Some(doc) = docs.get(locale.tag()) {
        return Ok(doc);
    }

    let default = Locale::default_locale();
    match docs.get(default.tag()) {
        Some(doc) => Ok(doc),
        None => bail!("No translation document for default locale '{}'", default.tag()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_every_supported_locale() {
        for locale in Locale::all() {
            let doc = resolve(locale).expect("Every supported locale has a document");
            assert!(doc.get("nav").is_some(), "missing nav for {}", locale.tag());
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let first = resolve(Locale::RUSSIAN).unwrap();
        let second = resolve(Locale::RUSSIAN).unwrap();

        // Same shared instance, no caller-visible mutation
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_text_lookup() {
        let doc = resolve(Locale::ENGLISH).unwrap();
        assert_eq!(doc.text("nav.home", "?"), "Home");
        assert_eq!(doc.text("contact.form.name", "?"), "Name");
    }

    #[test]
    fn test_text_lookup_localized() {
        let ru = resolve(Locale::RUSSIAN).unwrap();
        assert_eq!(ru.text("nav.home", "?"), "Главная");

        let uz = resolve(Locale::UZBEK).unwrap();
        assert_eq!(uz.text("nav.home", "?"), "Bosh sahifa");
    }

    #[test]
    fn test_text_missing_path_returns_default() {
        let doc = resolve(Locale::ENGLISH).unwrap();
        assert_eq!(doc.text("nav.nonexistent", "fallback"), "fallback");
        assert_eq!(doc.text("no.such.path.at.all", "x"), "x");
    }

    #[test]
    fn test_text_non_string_node_returns_default() {
        let doc = resolve(Locale::ENGLISH).unwrap();
        // "nav" is an object, not a string
        assert_eq!(doc.text("nav", "fallback"), "fallback");
    }

    #[test]
    fn test_get_nested_object() {
        let doc = resolve(Locale::ENGLISH).unwrap();
        let address = doc.get("contact.info.address").unwrap();
        assert!(address.get("city").is_some());
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        assert!(TranslationDocument::parse("[1, 2, 3]").is_err());
        assert!(TranslationDocument::parse("\"just a string\"").is_err());
        assert!(TranslationDocument::parse("not json at all").is_err());
    }

    #[test]
    fn test_all_locales_share_key_structure_for_nav() {
        // The nav section drives the layout on every page; every locale must
        // carry all five entries.
        for locale in Locale::all() {
            let doc = resolve(locale).unwrap();
            for key in ["home", "about", "services", "projects", "contact"] {
                let path = format!("nav.{}", key);
                assert!(
                    matches!(doc.get(&path), Some(Value::String(_))),
                    "missing {} for {}",
                    path,
                    locale.tag()
                );
            }
        }
    }
}
