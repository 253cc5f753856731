//! Template descriptor (`template.json`).
//!
//! Every template folder may carry a `template.json` that makes it
//! self-describing: which HTML files are pages, what they are written out as,
//! and which assets travel with them.
//!
//! ```text
//! templates/
//! └── bistro/
//!     ├── template.json     # optional descriptor
//!     ├── index.html        # page template
//!     ├── menu.html
//!     ├── base.css          # copied verbatim
//!     ├── styles.css        # `cssFile`: loaded, themed, then written
//!     ├── animations.js
//!     └── assets/           # static directory, copied recursively
//! ```
//!
//! ## Descriptor Format
//!
//! ```json
//! {
//!   "name": "Bistro",
//!   "description": "Warm restaurant layout",
//!   "author": "",
//!   "version": "1.0",
//!   "pages": [
//!     { "fileName": "index.html", "outputName": "index" },
//!     { "fileName": "menu.html", "outputName": "menu", "title": "Menu" }
//!   ],
//!   "cssFiles": ["base.css", "styles.css"],
//!   "jsFiles": ["animations.js", "theme.js"],
//!   "cssFile": "styles.css",
//!   "staticFiles": [],
//!   "staticDirectories": ["assets"],
//!   "colors": { "primary": "#2563eb", "primarySoft": "#dbeafe" }
//! }
//! ```
//!
//! Every key is optional. A folder without `template.json` gets
//! [`TemplateConfig::default`]: a single `index.html` page written as `index`.

use crate::template::TemplateError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "template.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateConfig {
    pub name: String,
    pub description: String,
    pub author: String,
    pub version: String,
    pub pages: Vec<PageConfig>,
    pub css_files: Vec<String>,
    pub js_files: Vec<String>,
    /// Stylesheet loaded into memory so the colour theme can be prepended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_file: Option<String>,
    pub static_files: Vec<String>,
    pub static_directories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorTheme>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            name: "Unnamed Template".to_string(),
            description: "A website template".to_string(),
            author: String::new(),
            version: "1.0".to_string(),
            pages: vec![PageConfig {
                file_name: "index.html".to_string(),
                output_name: "index".to_string(),
                title: None,
            }],
            css_files: vec!["base.css".to_string(), "styles.css".to_string()],
            js_files: vec!["animations.js".to_string(), "theme.js".to_string()],
            css_file: None,
            static_files: Vec::new(),
            static_directories: vec!["assets".to_string()],
            colors: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Template file inside the folder, e.g. `page_profile.html`.
    pub file_name: String,
    /// Output name without extension: `index` becomes `index.html`.
    pub output_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Colour overrides rendered as CSS custom properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorTheme {
    pub primary: String,
    #[serde(alias = "secondary")]
    pub primary_soft: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    pub background: String,
    pub card: String,
    pub text: String,
    pub muted: String,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: "#2563eb".to_string(),
            primary_soft: "#dbeafe".to_string(),
            accent: None,
            background: "#f5f7fb".to_string(),
            card: "#ffffff".to_string(),
            text: "#1f2937".to_string(),
            muted: "#6b7280".to_string(),
        }
    }
}

impl ColorTheme {
    /// `:root { ... }` block. `--accent` is the explicit accent when set,
    /// otherwise the primary colour.
    pub fn to_css_variables(&self) -> String {
        format!(
            r#":root {{
    --primary: {primary};
    --accent: {accent};
    --accent-soft: {soft};
    --bg: {bg};
    --card: {card};
    --text: {text};
    --muted: {muted};
}}"#,
            primary = self.primary,
            accent = self.accent.as_deref().unwrap_or(&self.primary),
            soft = self.primary_soft,
            bg = self.background,
            card = self.card,
            text = self.text,
            muted = self.muted,
        )
    }
}

impl TemplateConfig {
    /// Read `template.json` from a template folder, or synthesise the default
    /// when the folder has none.
    pub fn load(folder: &Path) -> Result<Self, TemplateError> {
        let path = folder.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!(folder = %folder.display(), "no template.json, using default config");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Every page file name, in declaration order.
    pub fn page_files(&self) -> Vec<String> {
        self.pages.iter().map(|p| p.file_name.clone()).collect()
    }
}
