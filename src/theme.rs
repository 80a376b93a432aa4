//! Light/dark theme preference.
//!
//! The preference lives in the client's `theme` cookie. Server rendering
//! reads it to decide the `dark` class on `<html>`; with no cookie the page
//! renders light. The store is a narrow state container over a storage
//! trait so persistence can be mocked in tests; the production storage is
//! the cookie pair (request `Cookie` header in, `Set-Cookie` out).

use serde::{Deserialize, Serialize};

/// Name of the persistence cookie.
pub const THEME_COOKIE: &str = "theme";

/// The persisted display mode chosen by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl Default for ThemePreference {
    fn default() -> Self {
        ThemePreference::Light
    }
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<ThemePreference> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> ThemePreference {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Class emitted on `<html>` so styling layers can react.
    /// Light mode is the unmarked state.
    pub fn html_class(&self) -> &'static str {
        match self {
            ThemePreference::Light => "",
            ThemePreference::Dark => "dark",
        }
    }
}

/// Persistence boundary for the theme preference.
pub trait ThemeStorage {
    fn load(&self) -> Option<ThemePreference>;
    fn store(&mut self, preference: ThemePreference);
}

/// State container binding the current preference to its storage.
///
/// Mutation and persistence happen synchronously inside one handler
/// invocation, so toggles cannot interleave.
pub struct ThemeStore<S: ThemeStorage> {
    current: ThemePreference,
    storage: S,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Read storage once; an absent value initializes to light and writes
    /// the default back, establishing the persisted value for subsequent
    /// visits.
    pub fn init(mut storage: S) -> Self {
        let current = match storage.load() {
            Some(preference) => preference,
            None => {
                storage.store(ThemePreference::Light);
                ThemePreference::Light
            }
        };

        Self { current, storage }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Flip the preference and persist the new value.
    pub fn toggle(&mut self) -> ThemePreference {
        self.current = self.current.toggled();
        self.storage.store(self.current);
        self.current
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// Cookie-backed storage: loads from the request's `Cookie` header, stores
/// by queueing a `Set-Cookie` value for the response.
#[derive(Debug, Default)]
pub struct CookieStorage {
    loaded: Option<ThemePreference>,
    pending: Option<ThemePreference>,
}

impl CookieStorage {
    /// One year; the preference should survive between visits.
    const MAX_AGE_SECS: u32 = 31_536_000;

    pub fn from_cookie_header(header: Option<&str>) -> Self {
        Self {
            loaded: header.and_then(parse_theme_cookie),
            pending: None,
        }
    }

    /// The `Set-Cookie` header value for a stored preference, if any write
    /// happened.
    pub fn set_cookie_value(&self) -> Option<String> {
        self.pending.map(|preference| {
            format!(
                "{}={}; Path=/; Max-Age={}; SameSite=Lax",
                THEME_COOKIE,
                preference.as_str(),
                Self::MAX_AGE_SECS
            )
        })
    }
}

impl ThemeStorage for CookieStorage {
    fn load(&self) -> Option<ThemePreference> {
        self.loaded
    }

    fn store(&mut self, preference: ThemePreference) {
        self.pending = Some(preference);
    }
}

/// Extract the theme preference from a `Cookie` header value.
fn parse_theme_cookie(header: &str) -> Option<ThemePreference> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == THEME_COOKIE {
            ThemePreference::parse(value.trim())
        } else {
            None
        }
    })
}

/// Effective preference for rendering a page: the cookie's value, or light.
pub fn preference_from_cookie_header(header: Option<&str>) -> ThemePreference {
    header
        .and_then(parse_theme_cookie)
        .unwrap_or_default()
}
