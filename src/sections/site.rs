//! Section builders for business sites.

pub use super::text;

use super::{css_value, present, script_safe};
use crate::record::is_blank;
use crate::record::site::{SiteData, Vertical};
use maud::{Markup, PreEscaped, html};
use serde_json::json;

/// Logo image when one is set, otherwise up to two upper-case initials taken
/// from the first two words of the site name.
pub fn logo_mark(site: &SiteData) -> String {
    if present(&site.brand.logo) {
        return html! {
            img src=(site.brand.logo) alt={ (site.meta.site_name) " logo" };
        }
        .into_string();
    }
    text(&initials(&site.meta.site_name))
}

/// `"Joe Smith Plumbing"` → `"JS"`. Repeated whitespace is ignored.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// `<title>`, description, canonical/OpenGraph tags and the JSON-LD block.
pub fn seo_meta(site: &SiteData) -> String {
    let m = &site.meta;
    let json_ld = json_ld(site);
    let has_meta = [&m.title, &m.description, &m.canonical_url, &m.favicon, &m.og_image]
        .iter()
        .any(|v| present(v));
    if !has_meta && json_ld.is_none() {
        return String::new();
    }

    html! {
        title { (m.title) }
        meta name="description" content=(m.description);
        @if present(&m.canonical_url) {
            link rel="canonical" href=(m.canonical_url);
        }
        @if present(&m.favicon) {
            link rel="icon" href=(m.favicon);
        }
        meta property="og:title" content=(m.title);
        meta property="og:description" content=(m.description);
        @if present(&m.og_image) {
            meta property="og:image" content=(m.og_image);
        }
        @if present(&m.canonical_url) {
            meta property="og:url" content=(m.canonical_url);
        }
        meta property="og:type" content="website";
        @if let Some(ld) = json_ld {
            script type="application/ld+json" { (PreEscaped(ld)) }
        }
    }
    .into_string()
}

/// schema.org type for the structured-data block.
///
/// Restaurant wins over real estate; everything else is a `LocalBusiness`.
pub fn schema_type(site: &SiteData) -> &'static str {
    match site.vertical {
        Some(Vertical::Restaurant(_)) => "Restaurant",
        Some(Vertical::RealEstate(_)) => "RealEstateAgent",
        _ => "LocalBusiness",
    }
}

/// Compact JSON-LD object, ready for a `<script>` element, or `None` when the
/// site has no name. `url`, `telephone` and `address` are added when set.
pub fn json_ld(site: &SiteData) -> Option<String> {
    let name = &site.meta.site_name;
    if is_blank(name) {
        return None;
    }

    let mut ld = json!({
        "@context": "https://schema.org",
        "@type": schema_type(site),
        "name": name,
    });
    if present(&site.meta.canonical_url) {
        ld["url"] = json!(site.meta.canonical_url);
    }
    if present(&site.contact.phone) {
        ld["telephone"] = json!(site.contact.phone);
    }
    if let Some(location) = site.locations.first().filter(|l| present(&l.address)) {
        ld["address"] = json!(location.address);
    }
    let json = serde_json::to_string(&ld).ok()?;
    Some(script_safe(&json))
}

/// Brand colours and fonts as CSS custom properties. Blank values are skipped;
/// values are written as CSS, so a quoted font family stays quoted.
pub fn theme_vars(site: &SiteData) -> String {
    let colors = &site.brand.colors;
    let fonts = &site.brand.fonts;
    let vars = [
        ("--primary", &colors.primary),
        ("--secondary", &colors.secondary),
        ("--accent", &colors.accent),
        ("--bg", &colors.background),
        ("--text", &colors.text),
        ("--heading-font", &fonts.heading),
        ("--body-font", &fonts.body),
    ];

    let lines: Vec<String> = vars
        .iter()
        .filter(|(_, value)| present(value))
        .map(|(name, value)| format!("  {name}: {};", css_value(value)))
        .collect();
    if lines.is_empty() {
        return String::new();
    }
    format!("<style>\n:root {{\n{}\n}}\n</style>", lines.join("\n"))
}

pub fn hero(site: &SiteData) -> String {
    let hero = &site.hero;
    if is_blank(&hero.headline) && is_blank(&hero.subheadline) {
        return String::new();
    }

    html! {
        section.hero.reveal {
            div.hero-content {
                @if present(&site.meta.tagline) {
                    p.eyebrow { (site.meta.tagline) }
                }
                h1 { (hero.headline) }
                @if present(&hero.subheadline) {
                    p.lead { (hero.subheadline) }
                }
                div.hero-actions {
                    @if present(&hero.cta_text) {
                        a.btn.primary href=(hero.cta_link) { (hero.cta_text) }
                    }
                }
            }
            div.hero-media {
                @if present(&hero.image) {
                    img src=(hero.image) alt={ (site.meta.site_name) " hero" } loading="lazy";
                }
            }
        }
    }
    .into_string()
}

pub fn about(site: &SiteData) -> String {
    let about = &site.about;
    if is_blank(&about.title) && is_blank(&about.body) {
        return String::new();
    }

    html! {
        section.about.reveal {
            div.about-text {
                h2 { (about.title) }
                p { (about.body) }
            }
            div.about-media {
                @if present(&about.image) {
                    img src=(about.image) alt={ "About " (site.meta.site_name) } loading="lazy";
                }
            }
        }
    }
    .into_string()
}

pub fn services(site: &SiteData) -> String {
    if site.services.is_empty() {
        return String::new();
    }

    html! {
        section.services.reveal {
            h2 { "Services" }
            div.cards {
                @for service in &site.services {
                    div.card {
                        div.icon {
                            @if present(&service.icon) {
                                img src=(service.icon) alt="";
                            }
                        }
                        h3 { (service.title) }
                        p { (service.description) }
                    }
                }
            }
        }
    }
    .into_string()
}

pub fn testimonials(site: &SiteData) -> String {
    if site.testimonials.is_empty() {
        return String::new();
    }

    html! {
        section.testimonials.reveal {
            h2 { "What people say" }
            div.cards {
                @for t in &site.testimonials {
                    blockquote.card {
                        p { "\"" (t.quote) "\"" }
                        div.person {
                            @if present(&t.image) {
                                img src=(t.image) alt=(t.name) loading="lazy";
                            }
                            div {
                                strong { (t.name) }
                                span { (t.role) }
                            }
                        }
                    }
                }
            }
        }
    }
    .into_string()
}

pub fn cta(site: &SiteData) -> String {
    let cta = &site.cta;
    if is_blank(&cta.title) {
        return String::new();
    }

    html! {
        section.cta.reveal {
            div.cta-inner {
                h2 { (cta.title) }
                @if present(&cta.body) {
                    p { (cta.body) }
                }
                @if present(&cta.button_text) {
                    a.btn.primary href=(cta.button_link) { (cta.button_text) }
                }
            }
        }
    }
    .into_string()
}

/// Contact details. Only non-blank rows are shown; the map embed is raw HTML.
pub fn contact(site: &SiteData) -> String {
    let contact = &site.contact;
    let rows: Vec<(&str, &str)> = [
        ("Phone", contact.phone.as_str()),
        ("Email", contact.email.as_str()),
        ("Address", contact.address.as_str()),
        ("Hours", contact.hours.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| present(value))
    .collect();

    if rows.is_empty() && is_blank(&contact.map_embed) {
        return String::new();
    }

    html! {
        section.contact.reveal id="contact" {
            div.contact-info {
                h2 { "Contact" }
                @for (label, value) in &rows {
                    p.contact-row { strong { (label) } " " (value) }
                }
            }
            @if present(&contact.map_embed) {
                div.map { (PreEscaped(&contact.map_embed)) }
            }
        }
    }
    .into_string()
}

pub fn locations(site: &SiteData) -> String {
    if site.locations.is_empty() {
        return String::new();
    }

    html! {
        section.locations.reveal {
            h2 { "Locations" }
            div.cards {
                @for location in &site.locations {
                    div.card {
                        h3 { (location.label) }
                        p { (location.address) }
                        p { (location.phone) }
                    }
                }
            }
        }
    }
    .into_string()
}

pub fn social_links(site: &SiteData) -> String {
    if site.social.is_empty() {
        return String::new();
    }

    html! {
        div.social {
            @for link in &site.social {
                a href=(link.url) target="_blank" rel="noopener" { (link.label) }
            }
        }
    }
    .into_string()
}

/// Render a vertical-specific section, or nothing when the site has no
/// matching vertical or `build` has nothing to show.
fn vertical_section<T>(data: Option<&T>, build: impl FnOnce(&T) -> Option<Markup>) -> String {
    data.and_then(build)
        .map(Markup::into_string)
        .unwrap_or_default()
}

pub fn restaurant_menu(site: &SiteData) -> String {
    vertical_section(site.restaurant(), |r| {
        if r.menu_sections.is_empty() {
            return None;
        }
        Some(html! {
            section.menu.reveal id="menu" {
                h2 { "Menu Highlights" }
                @for section in &r.menu_sections {
                    div.menu-section {
                        h3 { (section.title) }
                        ul {
                            @for item in &section.items {
                                li {
                                    div.menu-title {
                                        strong { (item.name) }
                                        span { (item.price) }
                                    }
                                    @if present(&item.description) {
                                        p { (item.description) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        })
    })
}

pub fn restaurant_gallery(site: &SiteData) -> String {
    vertical_section(site.restaurant(), |r| {
        if r.gallery.is_empty() {
            return None;
        }
        Some(html! {
            section.gallery.reveal {
                h2 { "Gallery" }
                div.grid {
                    @for image in &r.gallery {
                        img src=(image.image) alt=(image.alt) loading="lazy";
                    }
                }
            }
        })
    })
}

pub fn restaurant_reservations(site: &SiteData) -> String {
    vertical_section(site.restaurant(), |r| {
        let reservations = r.reservations.as_ref()?;
        if is_blank(&reservations.cta_text) {
            return None;
        }
        Some(html! {
            section.reservations.reveal id="reservations" {
                h2 { "Reservations" }
                p { "Book your table in just a few clicks." }
                a.btn.primary href=(reservations.cta_link) { (reservations.cta_text) }
            }
        })
    })
}

pub fn contractor_before_after(site: &SiteData) -> String {
    vertical_section(site.contractor(), |c| {
        if c.before_after.is_empty() {
            return None;
        }
        Some(html! {
            section.before-after.reveal id="work" {
                h2 { "Before & After" }
                div.ba-grid {
                    @for pair in &c.before_after {
                        div.ba-item {
                            img src=(pair.before_image) alt="Before" loading="lazy";
                            img src=(pair.after_image) alt="After" loading="lazy";
                            p { (pair.caption) }
                        }
                    }
                }
            }
        })
    })
}

pub fn contractor_process(site: &SiteData) -> String {
    vertical_section(site.contractor(), |c| {
        if c.process.is_empty() {
            return None;
        }
        Some(html! {
            section.process.reveal id="process" {
                h2 { "Our Process" }
                ol {
                    @for step in &c.process {
                        li {
                            strong { (step.step) }
                            p { (step.detail) }
                        }
                    }
                }
            }
        })
    })
}

pub fn contractor_certifications(site: &SiteData) -> String {
    vertical_section(site.contractor(), |c| {
        if c.certifications.is_empty() {
            return None;
        }
        Some(html! {
            section.certifications.reveal {
                h2 { "Certifications" }
                ul {
                    @for cert in &c.certifications {
                        li {
                            strong { (cert.name) }
                            @if present(&cert.issuer) { " - " (cert.issuer) }
                            @if present(&cert.year) { " (" (cert.year) ")" }
                        }
                    }
                }
            }
        })
    })
}

pub fn real_estate_listings(site: &SiteData) -> String {
    vertical_section(site.real_estate(), |re| {
        if re.featured_listings.is_empty() {
            return None;
        }
        Some(html! {
            section.listings.reveal id="listings" {
                h2 { "Featured Listings" }
                div.cards {
                    @for listing in &re.featured_listings {
                        div.card.listing {
                            @if present(&listing.image) {
                                img src=(listing.image) alt=(listing.title) loading="lazy";
                            }
                            h3 { (listing.title) }
                            p.price { (listing.price) }
                            p { (listing.address) }
                            p.meta {
                                (listing.beds) " bd | " (listing.baths) " ba | " (listing.sqft) " sqft"
                            }
                        }
                    }
                }
            }
        })
    })
}

pub fn real_estate_agents(site: &SiteData) -> String {
    vertical_section(site.real_estate(), |re| {
        if re.agents.is_empty() {
            return None;
        }
        Some(html! {
            section.agents.reveal id="agents" {
                h2 { "Meet the Team" }
                div.cards {
                    @for agent in &re.agents {
                        div.card.agent {
                            @if present(&agent.image) {
                                img src=(agent.image) alt=(agent.name) loading="lazy";
                            }
                            h3 { (agent.name) }
                            p { (agent.role) }
                            p { (agent.phone) }
                            p { (agent.email) }
                        }
                    }
                }
            }
        })
    })
}

pub fn real_estate_neighborhoods(site: &SiteData) -> String {
    vertical_section(site.real_estate(), |re| {
        if re.neighborhoods.is_empty() {
            return None;
        }
        Some(html! {
            section.neighborhoods.reveal {
                h2 { "Neighborhoods" }
                div.cards {
                    @for hood in &re.neighborhoods {
                        div.card {
                            h3 { (hood.name) }
                            p { (hood.summary) }
                        }
                    }
                }
            }
        })
    })
}

pub fn service_pricing(site: &SiteData) -> String {
    vertical_section(site.service(), |s| {
        if s.pricing.is_empty() {
            return None;
        }
        Some(html! {
            section.pricing.reveal id="pricing" {
                h2 { "Pricing" }
                div.cards {
                    @for plan in &s.pricing {
                        div.card.plan {
                            h3 { (plan.name) }
                            p.price { (plan.price) }
                            ul {
                                @for feature in &plan.features {
                                    li { (feature) }
                                }
                            }
                        }
                    }
                }
            }
        })
    })
}

pub fn service_faqs(site: &SiteData) -> String {
    vertical_section(site.service(), |s| {
        if s.faqs.is_empty() {
            return None;
        }
        Some(html! {
            section.faqs.reveal id="faqs" {
                h2 { "FAQs" }
                div.faq-list {
                    @for faq in &s.faqs {
                        details {
                            summary { (faq.question) }
                            p { (faq.answer) }
                        }
                    }
                }
            }
        })
    })
}

pub fn service_coverage(site: &SiteData) -> String {
    vertical_section(site.service(), |s| {
        let areas: Vec<&str> = s
            .coverage
            .areas
            .iter()
            .map(String::as_str)
            .filter(|a| present(a))
            .collect();
        if areas.is_empty() && is_blank(&s.coverage.notes) {
            return None;
        }
        Some(html! {
            section.coverage.reveal {
                h2 { "Coverage Area" }
                @if !areas.is_empty() {
                    p { (areas.join(", ")) }
                }
                @if present(&s.coverage.notes) {
                    p { (s.coverage.notes) }
                }
            }
        })
    })
}
