//! Page composition.
//!
//! Assembles translated content into full HTML documents: shared layout
//! (navbar, main, footer) plus one body per page. All user-facing text comes
//! from the locale's translation document via dotted-path lookups with
//! literal defaults.

use crate::i18n::{Locale, TranslationDocument};
use crate::theme::ThemePreference;

/// The published pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Services,
    Projects,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Projects,
        Page::Contact,
    ];

    /// Parse the second path segment ("" or missing means home).
    pub fn from_slug(slug: &str) -> Option<Page> {
        match slug {
            "" => Some(Page::Home),
            "about" => Some(Page::About),
            "services" => Some(Page::Services),
            "projects" => Some(Page::Projects),
            "contact" => Some(Page::Contact),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "",
            Page::About => "about",
            Page::Services => "services",
            Page::Projects => "projects",
            Page::Contact => "contact",
        }
    }

    /// Translation key of the navigation label.
    fn nav_key(&self) -> &'static str {
        match self {
            Page::Home => "nav.home",
            Page::About => "nav.about",
            Page::Services => "nav.services",
            Page::Projects => "nav.projects",
            Page::Contact => "nav.contact",
        }
    }

    /// Locale-prefixed path of the page.
    pub fn path(&self, locale: Locale) -> String {
        if self.slug().is_empty() {
            format!("/{}", locale.tag())
        } else {
            format!("/{}/{}", locale.tag(), self.slug())
        }
    }
}

/// Project portfolio filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    All,
    Web,
    Mobile,
    Design,
}

impl ProjectCategory {
    pub const ALL_FILTERS: [ProjectCategory; 4] = [
        ProjectCategory::All,
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Design,
    ];

    /// Parse the `?category=` query value; unknown values fall back to All.
    pub fn from_query(value: Option<&str>) -> ProjectCategory {
        match value {
            Some("web") => ProjectCategory::Web,
            Some("mobile") => ProjectCategory::Mobile,
            Some("design") => ProjectCategory::Design,
            _ => ProjectCategory::All,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ProjectCategory::All => "all",
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Design => "design",
        }
    }
}

/// Portfolio entries: translation key prefix and category.
/// Titles and descriptions live in the translation documents.
const PROJECTS: &[(&str, ProjectCategory)] = &[
    ("banking", ProjectCategory::Web),
    ("ecommerce", ProjectCategory::Web),
    ("healthcare", ProjectCategory::Web),
    ("fitness", ProjectCategory::Mobile),
    ("realestate", ProjectCategory::Mobile),
    ("supplychain", ProjectCategory::Design),
];

/// Project keys visible under a filter.
pub fn visible_projects(filter: ProjectCategory) -> Vec<&'static str> {
    PROJECTS
        .iter()
        .filter(|(_, category)| filter == ProjectCategory::All || *category == filter)
        .map(|(key, _)| *key)
        .collect()
}

/// Render a full HTML document for a page.
pub fn render(
    page: Page,
    locale: Locale,
    doc: &TranslationDocument,
    theme: ThemePreference,
    category: ProjectCategory,
) -> String {
    let main = match page {
        Page::Home => home_main(locale, doc),
        Page::About => about_main(doc),
        Page::Services => services_main(doc),
        Page::Projects => projects_main(locale, doc, category),
        Page::Contact => contact_main(doc),
    };

    layout(page, locale, doc, theme, &main)
}

fn layout(
    active: Page,
    locale: Locale,
    doc: &TranslationDocument,
    theme: ThemePreference,
    main: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" class="{theme_class}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>OS TrustTech</title>
<meta name="description" content="{description}">
</head>
<body>
{nav}
<main>
{main}
</main>
{footer}
</body>
</html>
"#,
        lang = locale.tag(),
        theme_class = theme.html_class(),
        description = doc.text(
            "footer.description",
            "Innovative software development company based in Uzbekistan."
        ),
        nav = navbar(active, locale, doc),
        main = main,
        footer = footer(locale, doc),
    )
}

fn navbar(active: Page, locale: Locale, doc: &TranslationDocument) -> String {
    let links: String = Page::ALL
        .iter()
        .map(|page| {
            let class = if *page == active { " class=\"active\"" } else { "" };
            format!(
                "<a href=\"{}\"{}>{}</a>",
                page.path(locale),
                class,
                doc.text(page.nav_key(), page.slug())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    // Locale switch links point at the same page in the other locales
    let switchers: String = Locale::all()
        .iter()
        .map(|other| {
            format!(
                "<a href=\"{}\" hreflang=\"{}\">{}</a>",
                active.path(*other),
                other.tag(),
                other.native_name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<nav>\n{}\n<div class=\"locales\">\n{}\n</div>\n<button id=\"theme-toggle\" data-endpoint=\"/api/theme/toggle\">&#9681;</button>\n</nav>",
        links, switchers
    )
}

fn footer(locale: Locale, doc: &TranslationDocument) -> String {
    format!(
        r#"<footer>
<p>{description}</p>
<p>{street}, {city}, {country}</p>
<p><a href="/{tag}/contact">{contact}</a> &middot; {privacy} &middot; {terms}</p>
<p>&copy; OS TrustTech. {rights}</p>
</footer>"#,
        description = doc.text("footer.description", ""),
        street = doc.text("contact.info.address.street", ""),
        city = doc.text("contact.info.address.city", "Tashkent"),
        country = doc.text("contact.info.address.country", "Uzbekistan"),
        tag = locale.tag(),
        contact = doc.text("nav.contact", "Contact"),
        privacy = doc.text("footer.privacy", "Privacy Policy"),
        terms = doc.text("footer.terms", "Terms of Service"),
        rights = doc.text("footer.rights", "All rights reserved."),
    )
}

fn home_main(locale: Locale, doc: &TranslationDocument) -> String {
    let services: String = ["webdev", "mobiledev", "uiux", "qa"]
        .iter()
        .map(|key| {
            format!(
                "<article><h3>{}</h3><p>{}</p></article>",
                doc.text(&format!("services.{}.title", key), key),
                doc.text(&format!("services.{}.description", key), ""),
            )
        })
        .collect();

    format!(
        r#"<section class="hero">
<h1>{title}</h1>
<p>{subtitle}</p>
<a class="cta" href="/{tag}/contact">{cta}</a>
</section>
<section class="services">
<span class="badge">{badge}</span>
<h2>{services_title}</h2>
<p>{services_description}</p>
{services}
</section>
<section class="cta">
<h2>{cta_title}</h2>
<p>{cta_description}</p>
</section>"#,
        title = doc.text("home.hero.title", "Innovative Software Solutions"),
        subtitle = doc.text("home.hero.subtitle", ""),
        tag = locale.tag(),
        cta = doc.text("home.hero.cta", "Start a project"),
        badge = doc.text("home.services.badge", ""),
        services_title = doc.text("home.services.title", "Our Services"),
        services_description = doc.text("home.services.description", ""),
        services = services,
        cta_title = doc.text("home.cta.title", ""),
        cta_description = doc.text("home.cta.description", ""),
    )
}

fn about_main(doc: &TranslationDocument) -> String {
    let values: String = ["quality", "transparency", "partnership"]
        .iter()
        .map(|key| format!("<li>{}</li>", doc.text(&format!("about.values.{}", key), key)))
        .collect();

    format!(
        "<section>\n<h1>{}</h1>\n<h2>{}</h2>\n<p>{}</p>\n<ul>{}</ul>\n</section>",
        doc.text("about.title", "About Us"),
        doc.text("about.subtitle", ""),
        doc.text("about.description", ""),
        values,
    )
}

fn services_main(doc: &TranslationDocument) -> String {
    let services: String = ["webdev", "mobiledev", "uiux", "qa"]
        .iter()
        .map(|key| {
            format!(
                "<article><h2>{}</h2><p>{}</p></article>",
                doc.text(&format!("services.{}.title", key), key),
                doc.text(&format!("services.{}.description", key), ""),
            )
        })
        .collect();

    format!(
        "<section>\n<h1>{}</h1>\n{}\n</section>",
        doc.text("services.title", "Services"),
        services,
    )
}

fn projects_main(locale: Locale, doc: &TranslationDocument, category: ProjectCategory) -> String {
    let filters: String = ProjectCategory::ALL_FILTERS
        .iter()
        .map(|filter| {
            let class = if *filter == category { " class=\"active\"" } else { "" };
            format!(
                "<a href=\"/{}/projects?category={}\"{}>{}</a>",
                locale.tag(),
                filter.key(),
                class,
                doc.text(&format!("projects.filters.{}", filter.key()), filter.key()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let cards: String = visible_projects(category)
        .iter()
        .map(|key| {
            format!(
                "<article data-project=\"{key}\"><h2>{}</h2><p>{}</p></article>",
                doc.text(&format!("projects.{}.title", key), key),
                doc.text(&format!("projects.{}.description", key), ""),
                key = key,
            )
        })
        .collect();

    format!(
        "<section>\n<h1>{}</h1>\n<p>{}</p>\n<div class=\"filters\">\n{}\n</div>\n{}\n</section>",
        doc.text("projects.title", "Projects"),
        doc.text("projects.subtitle", ""),
        filters,
        cards,
    )
}

fn contact_main(doc: &TranslationDocument) -> String {
    format!(
        r#"<section>
<h1>{title}</h1>
<form id="contact-form" method="post" action="/api/contact">
<h2>{form_title}</h2>
<label for="name">{name}</label>
<input id="name" name="name" type="text" required>
<label for="email">{email}</label>
<input id="email" name="email" type="email" required>
<label for="phone">{phone}</label>
<input id="phone" name="phone" type="tel">
<label for="message">{message}</label>
<textarea id="message" name="message" rows="5"></textarea>
<button type="submit">{submit}</button>
</form>
<aside>
<h2>{info_title}</h2>
<p>{email_title}: {email_value}</p>
<p>{phone_title}: {phone_value}</p>
<p>{address_title}: {street}, {city}, {country}</p>
<p>{hours_title}: {weekdays}; {saturday}; {sunday}</p>
</aside>
</section>"#,
        title = doc.text("contact.title", "Contact Us"),
        form_title = doc.text("contact.form.title", ""),
        name = doc.text("contact.form.name", "Name"),
        email = doc.text("contact.form.email", "Email"),
        phone = doc.text("contact.form.phone", "Phone"),
        message = doc.text("contact.form.message", "Message"),
        submit = doc.text("contact.form.submit", "Send"),
        info_title = doc.text("contact.info.title", ""),
        email_title = doc.text("contact.info.email.title", "Email"),
        email_value = doc.text("contact.info.email.value", ""),
        phone_title = doc.text("contact.info.phone.title", "Phone"),
        phone_value = doc.text("contact.info.phone.value", ""),
        address_title = doc.text("contact.info.address.title", "Address"),
        street = doc.text("contact.info.address.street", ""),
        city = doc.text("contact.info.address.city", ""),
        country = doc.text("contact.info.address.country", ""),
        hours_title = doc.text("contact.info.hours.title", ""),
        weekdays = doc.text("contact.info.hours.weekdays", ""),
        saturday = doc.text("contact.info.hours.saturday", ""),
        sunday = doc.text("contact.info.hours.sunday", ""),
    )
}
