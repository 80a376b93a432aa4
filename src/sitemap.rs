//! Sitemap generation.
//!
//! One entry per (locale × route) combination. The home route changes more
//! often and carries the highest priority weight.

use crate::i18n::Locale;
use chrono::Utc;

/// Route suffixes of the published pages ("" is the home page).
pub const ROUTES: &[&str] = &["", "/about", "/services", "/projects", "/contact"];

/// A single sitemap URL entry.
#[derive(Debug, Clone)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: String,
    pub change_frequency: &'static str,
    pub priority: f32,
}

/// Generate entries for every locale and route combination.
pub fn entries(base_url: &str) -> Vec<SitemapEntry> {
    let last_modified = Utc::now().format("%Y-%m-%d").to_string();
    let base = base_url.trim_end_matches('/');

    let mut entries = Vec::with_capacity(Locale::all().len() * ROUTES.len());

    for locale in Locale::all() {
        for route in ROUTES {
            let is_home = route.is_empty();
            entries.push(SitemapEntry {
                url: format!("{}/{}{}", base, locale.tag(), route),
                last_modified: last_modified.clone(),
                change_frequency: if is_home { "weekly" } else { "monthly" },
                priority: if is_home { 1.0 } else { 0.8 },
            });
        }
    }

    entries
}

/// Render the sitemap as XML.
pub fn render_xml(base_url: &str) -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for entry in entries(base_url) {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", entry.url));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", entry.last_modified));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
