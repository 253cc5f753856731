//! Business site record.
//!
//! A [`SiteData`] describes one small-business website: shared sections
//! (hero, about, services, contact, ...) plus at most one business-specific
//! [`Vertical`]. In JSON the vertical appears as one of four optional keys:
//!
//! ```json
//! {
//!   "meta": { "siteName": "Ava's Bistro", "title": "Ava's Bistro" },
//!   "hero": { "headline": "Fresh Daily" },
//!   "restaurant": { "menuSections": [] }
//! }
//! ```
//!
//! A document carrying more than one of `restaurant`, `contractor`,
//! `realEstate` or `service` is rejected when it is loaded.

use super::{Record, is_blank};
use crate::placeholder::Placeholders;
use crate::sections::site as sections;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteData {
    pub meta: Meta,
    pub brand: Brand,
    pub hero: Hero,
    pub about: About,
    pub services: Vec<ServiceItem>,
    pub testimonials: Vec<Testimonial>,
    pub cta: Cta,
    pub contact: Contact,
    pub locations: Vec<Location>,
    pub social: Vec<SocialLink>,
    #[serde(flatten, with = "vertical_keys")]
    pub vertical: Option<Vertical>,
}

impl SiteData {
    pub fn restaurant(&self) -> Option<&RestaurantData> {
        match &self.vertical {
            Some(Vertical::Restaurant(data)) => Some(data),
            _ => None,
        }
    }

    pub fn contractor(&self) -> Option<&ContractorData> {
        match &self.vertical {
            Some(Vertical::Contractor(data)) => Some(data),
            _ => None,
        }
    }

    pub fn real_estate(&self) -> Option<&RealEstateData> {
        match &self.vertical {
            Some(Vertical::RealEstate(data)) => Some(data),
            _ => None,
        }
    }

    pub fn service(&self) -> Option<&ServiceBusinessData> {
        match &self.vertical {
            Some(Vertical::Service(data)) => Some(data),
            _ => None,
        }
    }
}

impl Record for SiteData {
    const KIND: &'static str = "site";
    const FILE_NAME: &'static str = "site.json";

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if is_blank(&self.meta.site_name) {
            errors.push("meta.siteName is required.".to_string());
        }
        if is_blank(&self.meta.title) {
            errors.push("meta.title is required.".to_string());
        }
        if is_blank(&self.meta.description) {
            errors.push("meta.description is required.".to_string());
        }
        if is_blank(&self.hero.headline) {
            errors.push("hero.headline is required.".to_string());
        }
        if is_blank(&self.cta.button_text) {
            errors.push("cta.buttonText is required.".to_string());
        }
        if is_blank(&self.contact.email) && is_blank(&self.contact.phone) {
            errors.push("contact.phone or contact.email is required.".to_string());
        }

        errors
    }

    fn placeholders(&self) -> Placeholders {
        let mut p = Placeholders::new();
        p.insert("LANG", sections::text(&self.meta.language));
        p.insert("SITE_NAME", sections::text(&self.meta.site_name));
        p.insert("TAGLINE", sections::text(&self.meta.tagline));
        p.insert("LOGO_MARK", sections::logo_mark(self));
        p.insert("SEO_META", sections::seo_meta(self));
        p.insert("THEME_VARS", sections::theme_vars(self));
        p.insert("HERO_SECTION", sections::hero(self));
        p.insert("ABOUT_SECTION", sections::about(self));
        p.insert("SERVICES_SECTION", sections::services(self));
        p.insert("TESTIMONIALS_SECTION", sections::testimonials(self));
        p.insert("CTA_SECTION", sections::cta(self));
        p.insert("CONTACT_SECTION", sections::contact(self));
        p.insert("LOCATIONS_SECTION", sections::locations(self));
        p.insert("SOCIAL_SECTION", sections::social_links(self));
        p.insert("RESTAURANT_MENU", sections::restaurant_menu(self));
        p.insert("RESTAURANT_GALLERY", sections::restaurant_gallery(self));
        p.insert(
            "RESTAURANT_RESERVATIONS",
            sections::restaurant_reservations(self),
        );
        p.insert(
            "CONTRACTOR_BEFORE_AFTER",
            sections::contractor_before_after(self),
        );
        p.insert("CONTRACTOR_PROCESS", sections::contractor_process(self));
        p.insert(
            "CONTRACTOR_CERTIFICATIONS",
            sections::contractor_certifications(self),
        );
        p.insert("REALESTATE_LISTINGS", sections::real_estate_listings(self));
        p.insert("REALESTATE_AGENTS", sections::real_estate_agents(self));
        p.insert(
            "REALESTATE_NEIGHBORHOODS",
            sections::real_estate_neighborhoods(self),
        );
        p.insert("SERVICE_PRICING", sections::service_pricing(self));
        p.insert("SERVICE_FAQS", sections::service_faqs(self));
        p.insert("SERVICE_COVERAGE", sections::service_coverage(self));
        p
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    pub site_name: String,
    pub tagline: String,
    pub domain: String,
    pub language: String,
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub og_image: String,
    pub favicon: String,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            site_name: String::new(),
            tagline: String::new(),
            domain: String::new(),
            language: "en".to_string(),
            title: String::new(),
            description: String::new(),
            canonical_url: String::new(),
            og_image: String::new(),
            favicon: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Brand {
    pub logo: String,
    pub colors: BrandColors,
    pub fonts: BrandFonts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: "#111827".to_string(),
            secondary: "#94A3B8".to_string(),
            accent: "#F59E0B".to_string(),
            background: "#F8FAFC".to_string(),
            text: "#0F172A".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandFonts {
    pub heading: String,
    pub body: String,
}

impl Default for BrandFonts {
    fn default() -> Self {
        Self {
            heading: "serif".to_string(),
            body: "sans-serif".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub cta_link: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    pub title: String,
    pub body: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Testimonial {
    pub name: String,
    pub quote: String,
    pub role: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cta {
    pub title: String,
    pub body: String,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub hours: String,
    /// Raw HTML (usually a map iframe). Inserted without escaping.
    pub map_embed: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    pub label: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Business-specific content. A site has at most one.
#[derive(Debug, Clone, PartialEq)]
pub enum Vertical {
    Restaurant(RestaurantData),
    Contractor(ContractorData),
    RealEstate(RealEstateData),
    Service(ServiceBusinessData),
}

impl Vertical {
    /// JSON key the vertical is stored under.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Restaurant(_) => "restaurant",
            Self::Contractor(_) => "contractor",
            Self::RealEstate(_) => "realEstate",
            Self::Service(_) => "service",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RestaurantData {
    pub menu_sections: Vec<MenuSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservations: Option<Reservation>,
    pub gallery: Vec<ImageItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuSection {
    pub title: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reservation {
    pub cta_text: String,
    pub cta_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageItem {
    pub image: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContractorData {
    pub before_after: Vec<BeforeAfter>,
    pub process: Vec<ProcessStep>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BeforeAfter {
    pub before_image: String,
    pub after_image: String,
    pub caption: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessStep {
    pub step: String,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RealEstateData {
    pub featured_listings: Vec<Listing>,
    pub agents: Vec<Agent>,
    pub neighborhoods: Vec<Neighborhood>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Listing {
    pub title: String,
    pub price: String,
    pub address: String,
    pub beds: String,
    pub baths: String,
    pub sqft: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Agent {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Neighborhood {
    pub name: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceBusinessData {
    pub pricing: Vec<PricingPlan>,
    pub faqs: Vec<FaqItem>,
    pub coverage: Coverage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Coverage {
    pub areas: Vec<String>,
    pub notes: String,
}

/// Maps `Option<Vertical>` onto the four optional top-level JSON keys.
mod vertical_keys {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserializer, Serializer};

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct KeysRef<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        restaurant: Option<&'a RestaurantData>,
        #[serde(skip_serializing_if = "Option::is_none")]
        contractor: Option<&'a ContractorData>,
        #[serde(skip_serializing_if = "Option::is_none")]
        real_estate: Option<&'a RealEstateData>,
        #[serde(skip_serializing_if = "Option::is_none")]
        service: Option<&'a ServiceBusinessData>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Keys {
        #[serde(default)]
        restaurant: Option<RestaurantData>,
        #[serde(default)]
        contractor: Option<ContractorData>,
        #[serde(default)]
        real_estate: Option<RealEstateData>,
        #[serde(default)]
        service: Option<ServiceBusinessData>,
    }

    pub fn serialize<S: Serializer>(
        vertical: &Option<Vertical>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut keys = KeysRef {
            restaurant: None,
            contractor: None,
            real_estate: None,
            service: None,
        };
        match vertical {
            Some(Vertical::Restaurant(data)) => keys.restaurant = Some(data),
            Some(Vertical::Contractor(data)) => keys.contractor = Some(data),
            Some(Vertical::RealEstate(data)) => keys.real_estate = Some(data),
            Some(Vertical::Service(data)) => keys.service = Some(data),
            None => {}
        }
        keys.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vertical>, D::Error> {
        let keys = Keys::deserialize(deserializer)?;
        let mut present: Vec<Vertical> = [
            keys.restaurant.map(Vertical::Restaurant),
            keys.contractor.map(Vertical::Contractor),
            keys.real_estate.map(Vertical::RealEstate),
            keys.service.map(Vertical::Service),
        ]
        .into_iter()
        .flatten()
        .collect();

        if present.len() > 1 {
            let found: Vec<&str> = present.iter().map(Vertical::key).collect();
            return Err(D::Error::custom(format!(
                "site data may contain only one business vertical, found: {}",
                found.join(", ")
            )));
        }
        Ok(present.pop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{from_json, to_json};
    use crate::test_helpers::sample_site;

    #[test]
    fn empty_document_uses_defaults() {
        let site: SiteData = from_json("{}").unwrap();
        assert_eq!(site.meta.language, "en");
        assert_eq!(site.brand.colors.primary, "#111827");
        assert_eq!(site.brand.fonts.body, "sans-serif");
        assert!(site.services.is_empty());
        assert!(site.vertical.is_none());
    }

    #[test]
    fn restaurant_key_becomes_vertical() {
        let json = r#"{
            "meta": { "siteName": "Ava's Bistro" },
            "restaurant": {
                "menuSections": [
                    { "title": "Mains", "items": [ { "name": "Soup", "price": "$8" } ] }
                ],
                "reservations": { "ctaText": "Book", "ctaLink": "/book" }
            }
        }"#;
        let site: SiteData = from_json(json).unwrap();
        let restaurant = site.restaurant().expect("restaurant vertical");
        assert_eq!(restaurant.menu_sections[0].items[0].name, "Soup");
        assert_eq!(
            restaurant.reservations.as_ref().map(|r| r.cta_text.as_str()),
            Some("Book")
        );
        assert!(site.contractor().is_none());
        assert!(site.real_estate().is_none());
        assert!(site.service().is_none());
    }

    #[test]
    fn real_estate_key_is_camel_case() {
        let json = r#"{ "realEstate": { "agents": [ { "name": "Kim" } ] } }"#;
        let site: SiteData = from_json(json).unwrap();
        assert_eq!(site.real_estate().unwrap().agents[0].name, "Kim");
        assert_eq!(site.vertical.as_ref().map(Vertical::key), Some("realEstate"));
    }

    #[test]
    fn two_verticals_are_rejected() {
        let json = r#"{ "restaurant": {}, "realEstate": {} }"#;
        let err = from_json::<SiteData>(json).unwrap_err().to_string();
        assert!(err.contains("only one business vertical"), "{err}");
        assert!(err.contains("restaurant"));
        assert!(err.contains("realEstate"));
    }

    #[test]
    fn vertical_serializes_under_its_own_key_only() {
        let site = SiteData {
            vertical: Some(Vertical::Service(ServiceBusinessData::default())),
            ..SiteData::default()
        };
        let json = to_json(&site).unwrap();
        assert!(json.contains("\"service\""));
        assert!(!json.contains("\"restaurant\""));
        assert!(!json.contains("\"contractor\""));
        assert!(!json.contains("\"realEstate\""));
    }

    #[test]
    fn absent_reservation_is_omitted() {
        let site = SiteData {
            vertical: Some(Vertical::Restaurant(RestaurantData::default())),
            ..SiteData::default()
        };
        let json = to_json(&site).unwrap();
        assert!(!json.contains("reservations"));
    }

    #[test]
    fn round_trip_preserves_vertical_and_order() {
        let site = sample_site();
        let back: SiteData = from_json(&to_json(&site).unwrap()).unwrap();
        assert_eq!(back, site);
        assert_eq!(back.services.len(), site.services.len());
    }

    #[test]
    fn complete_site_validates() {
        assert!(sample_site().validate().is_empty());
    }

    #[test]
    fn blank_site_reports_every_required_field() {
        let errors = SiteData::default().validate();
        assert_eq!(
            errors,
            vec![
                "meta.siteName is required.",
                "meta.title is required.",
                "meta.description is required.",
                "hero.headline is required.",
                "cta.buttonText is required.",
                "contact.phone or contact.email is required.",
            ]
        );
    }

    #[test]
    fn phone_alone_satisfies_contact_rule() {
        let mut site = sample_site();
        site.contact.email = "   ".to_string();
        site.contact.phone = "555-0100".to_string();
        assert!(site.validate().is_empty());
    }

    #[test]
    fn whitespace_counts_as_blank() {
        let mut site = sample_site();
        site.hero.headline = "   ".to_string();
        assert_eq!(site.validate(), vec!["hero.headline is required."]);
    }
}
