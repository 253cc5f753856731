//! Personal resume record.
//!
//! Field names follow the camelCase JSON layout of `resume.json`. Optional
//! values (`category`, `url`, `displayText`, ...) are omitted from the
//! serialized form when absent rather than written as `null`.

use super::{Record, RequiredImage, is_blank};
use crate::placeholder::Placeholders;
use crate::sections::resume as sections;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub profile_image: String,
    pub location: String,
    pub job_title: String,

    pub skills: Vec<Skill>,
    pub experiences: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub projects: Vec<ProjectItem>,
    pub social_links: Vec<SocialLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_template: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// 0-100. Larger values are clamped when rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency_percent: Option<u32>,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceItem {
    pub job_title: String,
    pub company: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationItem {
    pub school_name: String,
    pub degree: String,
    pub major: String,
    pub graduation_year: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectItem {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// File name under `images/` in the output directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    /// Lower-case platform key: `github`, `linkedin`, `twitter`, `email`, `website`, ...
    pub platform: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

impl SocialLink {
    /// Link text: the display text when set, otherwise the platform name.
    pub fn label(&self) -> &str {
        self.display_text.as_deref().unwrap_or(&self.platform)
    }
}

// ============================================================================
// Fluent construction
// ============================================================================

impl Resume {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_profile_image(mut self, image: impl Into<String>) -> Self {
        self.profile_image = image.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_job_title(mut self, title: impl Into<String>) -> Self {
        self.job_title = title.into();
        self
    }

    pub fn add_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn add_experience(mut self, experience: ExperienceItem) -> Self {
        self.experiences.push(experience);
        self
    }

    pub fn add_education(mut self, education: EducationItem) -> Self {
        self.education.push(education);
        self
    }

    pub fn add_project(mut self, project: ProjectItem) -> Self {
        self.projects.push(project);
        self
    }

    pub fn add_social_link(mut self, platform: impl Into<String>, url: impl Into<String>) -> Self {
        self.social_links.push(SocialLink {
            platform: platform.into(),
            url: url.into(),
            display_text: None,
        });
        self
    }

    /// Stamp the record as modified now.
    pub fn touch(&mut self) {
        self.last_modified = Some(Utc::now());
    }
}

impl Record for Resume {
    const KIND: &'static str = "resume";
    const FILE_NAME: &'static str = "resume.json";

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if is_blank(&self.name) {
            errors.push("Name is required.".to_string());
        }
        if is_blank(&self.email) {
            errors.push("Email is required.".to_string());
        } else if !self.email.contains('@') {
            errors.push("Email appears to be invalid.".to_string());
        }
        if is_blank(&self.phone) {
            errors.push("Phone is required.".to_string());
        }

        errors
    }

    fn placeholders(&self) -> Placeholders {
        let mut p = Placeholders::new();
        p.insert("NAME", sections::text(&self.name));
        p.insert("EMAIL", sections::text(&self.email));
        p.insert("PHONE", sections::text(&self.phone));
        p.insert("BIO", sections::bio(self));
        p.insert("BIO_TEXT", sections::text(&self.bio));
        p.insert("LOCATION", sections::text(&self.location));
        p.insert("JOB_TITLE", sections::text(&self.job_title));
        p.insert("PROFILE_IMAGE", sections::profile_image(self));
        p.insert("SKILLS", sections::skills(self));
        p.insert("SKILLS_CATEGORIZED", sections::skills_categorized(self));
        p.insert("EXPERIENCE", sections::experience(self));
        p.insert("EDUCATION", sections::education(self));
        p.insert("EDUCATION_SUMMARY", sections::education_summary(self));
        p.insert("EDUCATION_DETAILED", sections::education_detailed(self));
        p.insert("PROJECTS", sections::projects(self));
        p.insert("SOCIAL_LINKS", sections::social_links(self));
        p.insert("SOCIAL_ICONS", sections::social_icons(self));
        p
    }

    fn required_images(&self) -> Vec<RequiredImage> {
        let mut images = Vec::new();
        if !is_blank(&self.profile_image) {
            images.push(RequiredImage {
                file: self.profile_image.clone(),
                purpose: "Profile photo".to_string(),
            });
        }
        for project in &self.projects {
            if let Some(file) = project.image_file.as_deref().filter(|f| !is_blank(f)) {
                images.push(RequiredImage {
                    file: file.to_string(),
                    purpose: format!("Project image for {}", project.title),
                });
            }
        }
        images
    }

    /// Saved copies record when they were written.
    fn before_save(&mut self) {
        self.touch();
    }
}

// ============================================================================
// Quick build
// ============================================================================

/// Answers for the minimal resume flow. Blank optional answers are skipped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuickResumeInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub location: String,
    pub profile_image: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub education: Option<EducationItem>,
    pub experience: Option<ExperienceItem>,
    pub project: Option<ProjectItem>,
    pub github: String,
    pub linkedin: String,
}

/// Build a resume from [`QuickResumeInput`].
///
/// Values are trimmed. A missing experience end date becomes `Present`, a
/// blank project URL is dropped and non-blank GitHub/LinkedIn URLs turn into
/// social links in that order.
pub fn build_quick_resume(input: QuickResumeInput) -> Resume {
    let mut resume = Resume::new()
        .with_name(input.name.trim())
        .with_email(input.email.trim())
        .with_phone(input.phone.trim())
        .with_job_title(input.job_title.trim())
        .with_location(input.location.trim())
        .with_profile_image(input.profile_image.trim())
        .with_bio(input.bio.trim());

    for skill in input.skills.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        resume = resume.add_skill(Skill::new(skill));
    }

    if let Some(education) = input.education {
        resume = resume.add_education(education);
    }
    if let Some(mut experience) = input.experience {
        if is_blank(&experience.end_date) {
            experience.end_date = "Present".to_string();
        }
        resume = resume.add_experience(experience);
    }
    if let Some(mut project) = input.project {
        project.url = project.url.filter(|u| !is_blank(u));
        project.image_file = project.image_file.filter(|f| !is_blank(f));
        resume = resume.add_project(project);
    }

    for (platform, url) in [("github", &input.github), ("linkedin", &input.linkedin)] {
        if !is_blank(url) {
            resume = resume.add_social_link(platform, url.trim());
        }
    }

    resume
}
