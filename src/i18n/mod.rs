//! Internationalization (i18n) module for multi-language support.
//!
//! This module provides a centralized architecture for the site's locales.
//! All locale-related logic and translation infrastructure is contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe Locale type validated against the registry
//! - `translations`: Per-locale translation documents with dotted-path lookup
//!
//! # Example
//!
//! ```rust,ignore
//! use trusttech_site::i18n::{Locale, resolve};
//!
//! let locale = Locale::from_code("ru").unwrap_or_else(|_| Locale::default_locale());
//! let doc = resolve(locale)?;
//! let label = doc.text("nav.home", "Home");
//! ```

mod locale;
mod registry;
mod translations;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use translations::{resolve, TranslationDocument};
