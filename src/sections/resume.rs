//! Section builders for resumes.
//!
//! Unlike the site builders, the list builders here never render an empty
//! string for an empty list: resume layouts keep their skills, experience,
//! education and project regions on screen, so an empty list renders as a
//! short "No … listed." note.

pub use super::text;

use super::present;
use crate::record::IMAGES_DIR;
use crate::record::resume::{Resume, Skill};
use maud::{Markup, PreEscaped, html};

const GENERAL_CATEGORY: &str = "General";

fn empty_note(what: &str) -> String {
    html! { p { em { "No " (what) " listed." } } }.into_string()
}

fn image_src(file: &str) -> String {
    format!("{IMAGES_DIR}/{file}")
}

pub fn bio(resume: &Resume) -> String {
    if !present(&resume.bio) {
        return String::new();
    }
    html! { p.bio { (resume.bio) } }.into_string()
}

pub fn profile_image(resume: &Resume) -> String {
    if !present(&resume.profile_image) {
        return html! { div.image-box { "No Image" } }.into_string();
    }
    html! {
        img src=(image_src(&resume.profile_image))
            alt={ (resume.name) " - Profile Photo" }
            class="profile-image"
            loading="lazy";
    }
    .into_string()
}

/// Flat `<li>` list. Skills with a proficiency get a progress bar.
pub fn skills(resume: &Resume) -> String {
    if resume.skills.is_empty() {
        return html! { li { em { "No skills listed." } } }.into_string();
    }
    html! {
        @for skill in &resume.skills {
            (skill_item(skill))
        }
    }
    .into_string()
}

fn skill_item(skill: &Skill) -> Markup {
    match skill.proficiency_percent {
        Some(percent) => html! {
            li.skill-item {
                span.skill-name { (skill.name) }
                div.skill-bar {
                    div.skill-progress style={ "width: " (percent.min(100)) "%" } {}
                }
            }
        },
        None => html! { li { (skill.name) } },
    }
}

/// Skills grouped by category, groups in order of first appearance.
pub fn skills_categorized(resume: &Resume) -> String {
    if resume.skills.is_empty() {
        return empty_note("skills");
    }
    html! {
        @for (category, names) in group_by_category(&resume.skills) {
            div.skill-category {
                h4 { (category) }
                ul.skills-list {
                    @for name in names {
                        li { (name) }
                    }
                }
            }
        }
    }
    .into_string()
}

fn group_by_category(skills: &[Skill]) -> Vec<(&str, Vec<&str>)> {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for skill in skills {
        let category = skill
            .category
            .as_deref()
            .filter(|c| present(c))
            .unwrap_or(GENERAL_CATEGORY);
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, names)) => names.push(&skill.name),
            None => groups.push((category, vec![skill.name.as_str()])),
        }
    }
    groups
}

pub fn experience(resume: &Resume) -> String {
    if resume.experiences.is_empty() {
        return empty_note("work experience");
    }
    html! {
        @for exp in &resume.experiences {
            div.experience-item {
                h3 { (exp.job_title) " — " (exp.company) }
                p.dates { (exp.start_date) " – " (exp.end_date) }
                p { (exp.description) }
                @if !exp.highlights.is_empty() {
                    ul.highlights {
                        @for highlight in &exp.highlights {
                            li { (highlight) }
                        }
                    }
                }
            }
        }
    }
    .into_string()
}

/// `EDUCATION` renders the detailed layout.
pub fn education(resume: &Resume) -> String {
    education_detailed(resume)
}

pub fn education_summary(resume: &Resume) -> String {
    if resume.education.is_empty() {
        return empty_note("education");
    }
    html! {
        @for edu in &resume.education {
            div.education-summary {
                strong { (edu.degree) } " in " (edu.major) br;
                (edu.school_name)
            }
        }
    }
    .into_string()
}

pub fn education_detailed(resume: &Resume) -> String {
    if resume.education.is_empty() {
        return empty_note("education");
    }
    html! {
        @for edu in &resume.education {
            div.education-item {
                h3 { (edu.degree) " — " (edu.major) }
                p.school { (edu.school_name) " (" (edu.graduation_year) ")" }
                @if present(&edu.description) {
                    p { (edu.description) }
                }
            }
        }
    }
    .into_string()
}

pub fn projects(resume: &Resume) -> String {
    if resume.projects.is_empty() {
        return empty_note("projects");
    }
    html! {
        @for project in &resume.projects {
            div.project-item {
                @match project.url.as_deref().filter(|u| present(u)) {
                    Some(url) => {
                        h3 { a href=(url) target="_blank" rel="noopener" { (project.title) } }
                    }
                    None => {
                        h3 { (project.title) }
                    }
                }
                @if let Some(file) = project.image_file.as_deref().filter(|f| present(f)) {
                    img src=(image_src(file)) alt=(project.title) class="project-image" loading="lazy";
                }
                p { (project.description) }
                @if !project.technologies.is_empty() {
                    div.tech-tags {
                        @for tech in &project.technologies {
                            span.tag { (tech) }
                        }
                    }
                }
            }
        }
    }
    .into_string()
}

pub fn social_links(resume: &Resume) -> String {
    if resume.social_links.is_empty() {
        return String::new();
    }
    html! {
        div.social-links {
            @for link in &resume.social_links {
                a href=(link.url)
                    class={ "social-link social-" (link.platform.to_lowercase()) }
                    target="_blank"
                    rel="noopener" { (link.label()) }
            }
        }
    }
    .into_string()
}

pub fn social_icons(resume: &Resume) -> String {
    if resume.social_links.is_empty() {
        return String::new();
    }
    html! {
        div.social-icons {
            @for link in &resume.social_links {
                a href=(link.url)
                    class="social-icon"
                    title=(link.platform)
                    target="_blank"
                    rel="noopener"
                    aria-label=(link.platform) { (PreEscaped(social_icon(&link.platform))) }
            }
        }
    }
    .into_string()
}

/// HTML entity used as the icon for a platform.
pub fn social_icon(platform: &str) -> &'static str {
    match platform.to_lowercase().as_str() {
        "github" => "&#128187;",
        "linkedin" => "&#128188;",
        "twitter" => "&#128038;",
        "email" => "&#9993;",
        "website" => "&#127760;",
        _ => "&#128279;",
    }
}
