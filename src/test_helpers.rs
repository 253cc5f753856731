//! Shared test utilities for the pagesmith test suite.
//!
//! Provides fully populated sample records and a builder for throwaway
//! template folders.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_template(tmp.path(), "bistro", &[
//!     ("index.html", "<h1>{{SITE_NAME}}</h1>"),
//!     ("styles.css", "body {}"),
//! ]);
//!
//! let site = sample_site();
//! assert!(site.validate().is_empty());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::record::resume::{EducationItem, ExperienceItem, ProjectItem, Resume, Skill};
use crate::record::site::*;

// =========================================================================
// Sample records
// =========================================================================

/// A complete restaurant site that passes validation.
pub fn sample_site() -> SiteData {
    SiteData {
        meta: Meta {
            site_name: "Ava's Bistro".to_string(),
            tagline: "Seasonal plates".to_string(),
            domain: "ava.example".to_string(),
            title: "Ava's Bistro | Seasonal plates".to_string(),
            description: "Neighbourhood bistro cooking with the seasons.".to_string(),
            canonical_url: "https://ava.example/".to_string(),
            ..Meta::default()
        },
        brand: Brand {
            logo: "img/logo.svg".to_string(),
            ..Brand::default()
        },
        hero: Hero {
            headline: "Fresh Daily".to_string(),
            subheadline: "Local produce, cooked simply.".to_string(),
            cta_text: "Book a table".to_string(),
            cta_link: "/book".to_string(),
            image: "img/hero.jpg".to_string(),
        },
        about: About {
            title: "Our kitchen".to_string(),
            body: "Family run since 2009.".to_string(),
            image: String::new(),
        },
        services: vec![
            ServiceItem {
                title: "Dine in".to_string(),
                description: "Lunch and dinner, six days a week.".to_string(),
                icon: String::new(),
            },
            ServiceItem {
                title: "Catering".to_string(),
                description: "Private events up to 80 guests.".to_string(),
                icon: String::new(),
            },
        ],
        testimonials: vec![Testimonial {
            name: "Sam".to_string(),
            quote: "Best soup in town.".to_string(),
            role: "Regular".to_string(),
            image: String::new(),
        }],
        cta: Cta {
            title: "Hungry?".to_string(),
            body: "Tables go fast on weekends.".to_string(),
            button_text: "Reserve".to_string(),
            button_link: "/book".to_string(),
        },
        contact: Contact {
            phone: "555-0100".to_string(),
            email: "hello@ava.example".to_string(),
            address: "1 Main St".to_string(),
            hours: "Tue-Sun 11-22".to_string(),
            map_embed: r#"<iframe src="https://maps.example/embed"></iframe>"#.to_string(),
        },
        locations: vec![Location {
            label: "Downtown".to_string(),
            address: "1 Main St".to_string(),
            phone: "555-0100".to_string(),
        }],
        social: vec![SocialLink {
            label: "Instagram".to_string(),
            url: "https://instagram.com/avasbistro".to_string(),
        }],
        vertical: Some(Vertical::Restaurant(RestaurantData {
            menu_sections: vec![MenuSection {
                title: "Mains".to_string(),
                items: vec![MenuItem {
                    name: "Soup".to_string(),
                    description: String::new(),
                    price: "$8".to_string(),
                }],
            }],
            reservations: Some(Reservation {
                cta_text: "Reserve a table".to_string(),
                cta_link: "/book".to_string(),
            }),
            gallery: vec![ImageItem {
                image: "img/room.jpg".to_string(),
                alt: "Dining room".to_string(),
            }],
        })),
    }
}

/// A complete resume that passes validation. Every optional value is set or
/// explicitly absent, never `null`.
pub fn sample_resume() -> Resume {
    let mut resume = Resume::new()
        .with_name("Ada Lovelace")
        .with_email("ada@example.com")
        .with_phone("555-0199")
        .with_bio("Mathematician and first programmer.")
        .with_profile_image("ada.jpg")
        .with_location("London")
        .with_job_title("Analyst")
        .add_skill(Skill {
            name: "Mathematics".to_string(),
            category: Some("Science".to_string()),
            proficiency_percent: Some(95),
        })
        .add_skill(Skill::new("Writing"))
        .add_experience(ExperienceItem {
            job_title: "Analyst".to_string(),
            company: "Babbage & Co".to_string(),
            description: "Notes on the Analytical Engine.".to_string(),
            start_date: "1842".to_string(),
            end_date: "Present".to_string(),
            highlights: vec!["Wrote the first program".to_string()],
        })
        .add_education(EducationItem {
            school_name: "University of London".to_string(),
            degree: "BSc".to_string(),
            major: "Mathematics".to_string(),
            graduation_year: "1835".to_string(),
            description: "Tutored by De Morgan.".to_string(),
        })
        .add_project(ProjectItem {
            title: "Analytical Engine".to_string(),
            description: "Bernoulli numbers by machine.".to_string(),
            technologies: vec!["Punch cards".to_string()],
            url: Some("https://example.com/engine".to_string()),
            image_file: Some("engine.png".to_string()),
        })
        .add_social_link("github", "https://github.com/ada")
        .add_social_link("linkedin", "https://linkedin.com/in/ada");
    resume.social_links[0].display_text = Some("GitHub".to_string());
    resume
}

// =========================================================================
// Template folders
// =========================================================================

/// Create `root/<name>/` and write each `(relative path, contents)` pair into
/// it, creating parent directories as needed. Returns the folder path.
pub fn write_template(root: &Path, name: &str, files: &[(&str, &str)]) -> PathBuf {
    let folder = root.join(name);
    fs::create_dir_all(&folder).unwrap();
    for (path, contents) in files {
        let path = folder.join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
    folder
}

/// A two-page business template using a handful of site tokens.
pub fn write_site_template(root: &Path, name: &str) -> PathBuf {
    write_template(
        root,
        name,
        &[
            (
                "template.json",
                r#"{
  "name": "Bistro",
  "description": "Warm restaurant layout",
  "pages": [
    { "fileName": "index.html", "outputName": "index" },
    { "fileName": "menu.html", "outputName": "menu", "title": "Menu" }
  ],
  "cssFiles": ["base.css"],
  "jsFiles": ["animations.js"],
  "staticFiles": ["favicon.ico"],
  "staticDirectories": ["assets"]
}"#,
            ),
            (
                "index.html",
                "<html lang=\"{{LANG}}\"><head>{{SEO_META}}{{THEME_VARS}}</head>\
                 <body class=\"site{{ANIMATIONS_CLASS}}\">{{HERO_SECTION}}{{SERVICES_SECTION}}\
                 {{CONTACT_SECTION}}<footer>&copy; {{YEAR}} {{SITE_NAME}}</footer>\
                 {{ANIMATIONS_SCRIPT}}</body></html>",
            ),
            (
                "menu.html",
                "<h1>{{SITE_NAME}}</h1>{{RESTAURANT_MENU}}{{RESTAURANT_RESERVATIONS}}",
            ),
            ("base.css", "body { margin: 0; }"),
            ("animations.js", "// reveal on scroll"),
            ("favicon.ico", "ico"),
            ("assets/fonts/body.woff2", "font"),
        ],
    )
}
