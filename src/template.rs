//! Template loading and discovery.
//!
//! A [`Template`] is one folder of page templates plus its
//! [`TemplateConfig`]. The [`TemplateManager`] scans a templates root and
//! keeps every folder that loads cleanly:
//!
//! ```text
//! templates/
//! ├── bistro/        # has index.html → template "bistro"
//! ├── Modern/        # has *.html     → template "modern" (keys are lower-case)
//! ├── broken/        # template.json is malformed → skipped with a warning
//! └── notes/         # no *.html      → not a template
//! ```
//!
//! Page texts are read eagerly when a template loads and never change
//! afterwards. Asset lists (`cssFiles`, `jsFiles`, `staticFiles`,
//! `staticDirectories`) are only existence-checked when the output writer
//! asks for them; missing entries are skipped.
//!
//! ## Rendering
//!
//! [`Template::generate_all_pages`] builds the token vocabulary once and
//! substitutes every page in parallel. Pages are independent and the
//! vocabulary is read-only, so this is a plain rayon `par_iter` over the page
//! map.

use crate::placeholder::{Placeholders, RenderOptions, unresolved_tokens, vocabulary};
use crate::record::Record;
use crate::template_config::TemplateConfig;
use chrono::Local;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Extension a file must have to count as a page template.
pub const PAGE_EXTENSION: &str = "html";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("templates folder not found: {}", .0.display())]
    TemplatesDirNotFound(PathBuf),
    #[error("template at '{}' is invalid, missing files: {}", .folder.display(), .expected.join(", "))]
    InvalidTemplate {
        folder: PathBuf,
        expected: Vec<String>,
    },
    #[error("template '{0}' not found")]
    NotFound(String),
    #[error("no template selected; available templates: {}", .0.join(", "))]
    NoneSelected(Vec<String>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A loaded template folder.
#[derive(Debug, Clone)]
pub struct Template {
    key: String,
    folder: PathBuf,
    config: TemplateConfig,
    /// Output name → raw page text.
    pages: BTreeMap<String, String>,
    css_content: Option<String>,
}

impl Template {
    /// Load a template folder: config, every page file that exists, and the
    /// themed stylesheet when `cssFile` is set.
    pub fn load(folder: &Path) -> Result<Self, TemplateError> {
        let config = TemplateConfig::load(folder)?;

        let mut pages = BTreeMap::new();
        for page in &config.pages {
            let path = folder.join(&page.file_name);
            if path.is_file() {
                pages.insert(page.output_name.clone(), fs::read_to_string(&path)?);
            } else {
                debug!(page = %page.file_name, folder = %folder.display(), "page file missing, skipped");
            }
        }
        if pages.is_empty() {
            return Err(TemplateError::InvalidTemplate {
                folder: folder.to_path_buf(),
                expected: config.page_files(),
            });
        }

        let css_content = match &config.css_file {
            Some(css_file) if folder.join(css_file).is_file() => {
                let css = fs::read_to_string(folder.join(css_file))?;
                Some(match &config.colors {
                    Some(colors) => format!("{}\n\n{css}", colors.to_css_variables()),
                    None => css,
                })
            }
            _ => None,
        };

        Ok(Self {
            key: folder_key(folder),
            folder: folder.to_path_buf(),
            config,
            pages,
            css_content,
        })
    }

    /// Lower-case folder name used for lookup.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display name from the config.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Output names of the pages that loaded, sorted.
    pub fn page_names(&self) -> Vec<&str> {
        self.pages.keys().map(String::as_str).collect()
    }

    pub fn page_template(&self, output_name: &str) -> Option<&str> {
        self.pages.get(output_name).map(String::as_str)
    }

    /// The `cssFile` stylesheet with the colour theme prepended, if any.
    pub fn css_content(&self) -> Option<&str> {
        self.css_content.as_deref()
    }

    /// Existing CSS, JS and static files to copy verbatim. The `cssFile`
    /// stylesheet is excluded when it was loaded, since it is written themed.
    pub fn static_file_paths(&self) -> Vec<PathBuf> {
        let themed = self
            .css_content
            .as_ref()
            .and(self.config.css_file.as_deref());

        let mut seen: Vec<&str> = Vec::new();
        let mut paths = Vec::new();
        for name in self
            .config
            .css_files
            .iter()
            .chain(&self.config.js_files)
            .chain(&self.config.static_files)
        {
            if Some(name.as_str()) == themed || seen.contains(&name.as_str()) {
                continue;
            }
            seen.push(name);
            let path = self.folder.join(name);
            if path.is_file() {
                paths.push(path);
            }
        }
        paths
    }

    /// Existing static directories, copied recursively.
    pub fn static_directories(&self) -> Vec<PathBuf> {
        self.config
            .static_directories
            .iter()
            .map(|dir| self.folder.join(dir))
            .filter(|path| path.is_dir())
            .collect()
    }

    /// Render every page against `record`. Returns output name → HTML.
    pub fn generate_all_pages<R: Record>(
        &self,
        record: &R,
        options: &RenderOptions,
    ) -> BTreeMap<String, String> {
        let vocabulary = vocabulary(record, options, Local::now());
        let pages = self.render_pages(&vocabulary);
        info!(
            template = %self.key,
            kind = R::KIND,
            pages = pages.len(),
            "rendered pages"
        );
        pages
    }

    /// Substitute every page with a prepared vocabulary. Leftover tokens are
    /// logged once per page; the output is not altered.
    pub fn render_pages(&self, vocabulary: &Placeholders) -> BTreeMap<String, String> {
        self.pages
            .par_iter()
            .map(|(name, text)| {
                let html = vocabulary.substitute(text);
                for token in unresolved_tokens(&html) {
                    warn!(template = %self.key, page = %name, token = %token, "unresolved placeholder");
                }
                (name.clone(), html)
            })
            .collect()
    }
}

fn folder_key(folder: &Path) -> String {
    folder
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// True when `dir` directly contains at least one `*.html` file.
fn has_page_files(dir: &Path) -> Result<bool, std::io::Error> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(PAGE_EXTENSION))
        {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Summary of one discovered template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub key: String,
    pub name: String,
    pub description: String,
    pub pages: Vec<String>,
}

/// Registry of the templates found under one root folder.
#[derive(Debug, Default)]
pub struct TemplateManager {
    root: PathBuf,
    templates: BTreeMap<String, Template>,
}

impl TemplateManager {
    /// Scan the immediate subdirectories of `root`. Folders with at least one
    /// `*.html` file are loaded; folders that fail to load are logged and
    /// skipped.
    pub fn discover(root: &Path) -> Result<Self, TemplateError> {
        if !root.is_dir() {
            return Err(TemplateError::TemplatesDirNotFound(root.to_path_buf()));
        }

        let mut templates = BTreeMap::new();
        for entry in fs::read_dir(root)? {
            let dir = entry?.path();
            if !dir.is_dir() {
                continue;
            }
            match has_page_files(&dir) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    warn!(folder = %dir.display(), error = %e, "could not read template folder");
                    continue;
                }
            }
            match Template::load(&dir) {
                Ok(template) => {
                    debug!(key = %template.key, pages = template.pages.len(), "loaded template");
                    templates.insert(template.key.clone(), template);
                }
                Err(e) => warn!(folder = %dir.display(), error = %e, "could not load template"),
            }
        }

        Ok(Self {
            root: root.to_path_buf(),
            templates,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Case-insensitive lookup by folder name.
    pub fn get(&self, name: &str) -> Result<&Template, TemplateError> {
        self.templates
            .get(&name.to_lowercase())
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))
    }

    /// Pick the template for a run: the requested name, else the configured
    /// default, else the only template installed.
    pub fn select(
        &self,
        requested: Option<&str>,
        default: Option<&str>,
    ) -> Result<&Template, TemplateError> {
        if let Some(name) = requested.or(default) {
            return self.get(name);
        }
        match self.templates.values().next() {
            Some(only) if self.templates.len() == 1 => Ok(only),
            _ => Err(TemplateError::NoneSelected(
                self.templates.keys().cloned().collect(),
            )),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(&name.to_lowercase())
    }

    /// Lookup keys, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    pub fn info(&self) -> Vec<TemplateInfo> {
        self.templates
            .values()
            .map(|t| TemplateInfo {
                key: t.key.clone(),
                name: t.config.name.clone(),
                description: t.config.description.clone(),
                pages: t.pages.keys().cloned().collect(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Resume;
    use crate::test_helpers::{sample_resume, sample_site, write_site_template, write_template};
    use tempfile::TempDir;

    // =========================================================================
    // Template::load
    // =========================================================================

    #[test]
    fn folder_without_config_gets_single_index_page() {
        let tmp = TempDir::new().unwrap();
        let folder = write_template(tmp.path(), "plain", &[("index.html", "<h1>{{SITE_NAME}}</h1>")]);

        let template = Template::load(&folder).unwrap();
        assert_eq!(template.name(), "Unnamed Template");
        assert_eq!(template.page_names(), vec!["index"]);

        let pages = template.generate_all_pages(&sample_site(), &RenderOptions::default());
        assert_eq!(pages.len(), 1);
        assert_eq!(pages["index"], "<h1>Ava's Bistro</h1>");
    }

    #[test]
    fn missing_pages_are_skipped() {
        let tmp = TempDir::new().unwrap();
        let folder = write_template(
            tmp.path(),
            "partial",
            &[
                (
                    "template.json",
                    r#"{ "pages": [
                        { "fileName": "a.html", "outputName": "a" },
                        { "fileName": "gone.html", "outputName": "gone" }
                    ] }"#,
                ),
                ("a.html", "A"),
            ],
        );
        let template = Template::load(&folder).unwrap();
        assert_eq!(template.page_names(), vec!["a"]);
        assert!(template.page_template("gone").is_none());
    }

    #[test]
    fn no_loadable_pages_is_invalid() {
        let tmp = TempDir::new().unwrap();
        let folder = write_template(
            tmp.path(),
            "empty",
            &[(
                "template.json",
                r#"{ "pages": [ { "fileName": "page_profile.html", "outputName": "index" } ] }"#,
            )],
        );
        match Template::load(&folder) {
            Err(TemplateError::InvalidTemplate { folder: f, expected }) => {
                assert_eq!(f, folder);
                assert_eq!(expected, vec!["page_profile.html"]);
            }
            other => panic!("expected InvalidTemplate, got {other:?}"),
        }
    }

    #[test]
    fn invalid_template_message_names_files() {
        let err = TemplateError::InvalidTemplate {
            folder: PathBuf::from("templates/x"),
            expected: vec!["a.html".to_string(), "b.html".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "template at 'templates/x' is invalid, missing files: a.html, b.html"
        );
    }

    #[test]
    fn theme_is_prepended_to_css_file() {
        let tmp = TempDir::new().unwrap();
        let folder = write_template(
            tmp.path(),
            "themed",
            &[
                (
                    "template.json",
                    r##"{ "cssFile": "style.css", "colors": { "primary": "#123456" } }"##,
                ),
                ("index.html", "x"),
                ("style.css", "body { color: var(--text); }"),
            ],
        );
        let template = Template::load(&folder).unwrap();
        let css = template.css_content().unwrap();
        assert!(css.starts_with(":root {\n    --primary: #123456;"));
        assert!(css.ends_with("}\n\nbody { color: var(--text); }"));
    }

    #[test]
    fn css_file_without_theme_is_unchanged() {
        let tmp = TempDir::new().unwrap();
        let folder = write_template(
            tmp.path(),
            "plain",
            &[
                ("template.json", r#"{ "cssFile": "style.css" }"#),
                ("index.html", "x"),
                ("style.css", "body {}"),
            ],
        );
        assert_eq!(Template::load(&folder).unwrap().css_content(), Some("body {}"));
    }

    #[test]
    fn static_paths_skip_missing_and_themed_files() {
        let tmp = TempDir::new().unwrap();
        let folder = write_template(
            tmp.path(),
            "assets",
            &[
                (
                    "template.json",
                    r#"{
                        "cssFiles": ["base.css", "styles.css"],
                        "jsFiles": ["animations.js", "theme.js"],
                        "cssFile": "styles.css",
                        "staticFiles": ["base.css", "robots.txt"],
                        "staticDirectories": ["assets", "fonts"]
                    }"#,
                ),
                ("index.html", "x"),
                ("base.css", ""),
                ("styles.css", ""),
                ("animations.js", ""),
                ("assets/logo.svg", ""),
            ],
        );
        let template = Template::load(&folder).unwrap();

        let names: Vec<String> = template
            .static_file_paths()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["base.css", "animations.js"]);
        assert_eq!(template.static_directories(), vec![folder.join("assets")]);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn generate_all_pages_renders_every_page() {
        let tmp = TempDir::new().unwrap();
        let folder = write_site_template(tmp.path(), "bistro");
        let template = Template::load(&folder).unwrap();

        let pages = template.generate_all_pages(&sample_site(), &RenderOptions { animations: false });
        assert_eq!(pages.keys().collect::<Vec<_>>(), vec!["index", "menu"]);
        assert!(pages["index"].contains("<body class=\"site no-motion\">"));
        assert!(!pages["index"].contains("animations.js"));
        assert!(pages["menu"].contains("Menu Highlights"));
        for html in pages.values() {
            assert!(unresolved_tokens(html).is_empty());
        }
    }

    #[test]
    fn zero_services_leaves_no_section_shell() {
        let tmp = TempDir::new().unwrap();
        let folder = write_site_template(tmp.path(), "bistro");
        let template = Template::load(&folder).unwrap();
        let mut site = sample_site();
        site.services.clear();

        let pages = template.generate_all_pages(&site, &RenderOptions::default());
        assert!(!pages["index"].contains("services"));
        assert!(pages["index"].contains("animations.js"));
    }

    #[test]
    fn unknown_tokens_survive_rendering() {
        let tmp = TempDir::new().unwrap();
        let folder = write_template(
            tmp.path(),
            "resume",
            &[("index.html", "<h1>{{NAME}}</h1>{{SITE_NAME}}{{TYPO}}")],
        );
        let template = Template::load(&folder).unwrap();
        let pages = template.generate_all_pages(&sample_resume(), &RenderOptions::default());
        assert_eq!(pages["index"], "<h1>Ada Lovelace</h1>{{SITE_NAME}}{{TYPO}}");
    }

    #[test]
    fn render_pages_with_fixed_vocabulary() {
        let tmp = TempDir::new().unwrap();
        let folder = write_template(tmp.path(), "t", &[("index.html", "{{A}}-{{B}}")]);
        let template = Template::load(&folder).unwrap();
        let mut vocabulary = Placeholders::new();
        vocabulary.insert("A", "1");
        vocabulary.insert("B", "2");
        assert_eq!(template.render_pages(&vocabulary)["index"], "1-2");
    }

    // =========================================================================
    // TemplateManager
    // =========================================================================

    #[test]
    fn discover_missing_root_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        assert!(matches!(
            TemplateManager::discover(&missing),
            Err(TemplateError::TemplatesDirNotFound(p)) if p == missing
        ));
    }

    #[test]
    fn discover_keeps_only_loadable_html_folders() {
        let tmp = TempDir::new().unwrap();
        write_site_template(tmp.path(), "Bistro");
        write_template(tmp.path(), "modern", &[("index.html", "{{NAME}}")]);
        write_template(tmp.path(), "notes", &[("readme.txt", "not a template")]);
        write_template(
            tmp.path(),
            "broken",
            &[("template.json", "{ oops"), ("index.html", "x")],
        );
        write_template(
            tmp.path(),
            "hollow",
            &[
                ("template.json", r#"{ "pages": [ { "fileName": "missing.html", "outputName": "index" } ] }"#),
                ("other.html", "x"),
            ],
        );
        fs::write(tmp.path().join("stray.html"), "x").unwrap();

        let manager = TemplateManager::discover(tmp.path()).unwrap();
        assert_eq!(manager.names(), vec!["bistro", "modern"]);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        write_site_template(tmp.path(), "Bistro");
        let manager = TemplateManager::discover(tmp.path()).unwrap();

        assert!(manager.contains("BISTRO"));
        assert_eq!(manager.get("bIsTrO").unwrap().name(), "Bistro");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let manager = TemplateManager::discover(tmp.path()).unwrap();
        assert!(manager.is_empty());
        match manager.get("Fancy") {
            Err(TemplateError::NotFound(name)) => assert_eq!(name, "Fancy"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn select_prefers_request_then_default_then_only() {
        let tmp = TempDir::new().unwrap();
        write_site_template(tmp.path(), "bistro");
        let one = TemplateManager::discover(tmp.path()).unwrap();
        assert_eq!(one.select(None, None).unwrap().key(), "bistro");
        assert!(matches!(
            one.select(Some("other"), None),
            Err(TemplateError::NotFound(_))
        ));

        write_template(tmp.path(), "modern", &[("index.html", "{{NAME}}")]);
        let two = TemplateManager::discover(tmp.path()).unwrap();
        assert_eq!(two.select(Some("Modern"), Some("bistro")).unwrap().key(), "modern");
        assert_eq!(two.select(None, Some("bistro")).unwrap().key(), "bistro");
        match two.select(None, None) {
            Err(e @ TemplateError::NoneSelected(_)) => {
                assert_eq!(
                    e.to_string(),
                    "no template selected; available templates: bistro, modern"
                );
            }
            other => panic!("expected NoneSelected, got {other:?}"),
        }
    }

    #[test]
    fn info_lists_config_details() {
        let tmp = TempDir::new().unwrap();
        write_site_template(tmp.path(), "bistro");
        let manager = TemplateManager::discover(tmp.path()).unwrap();
        assert_eq!(
            manager.info(),
            vec![TemplateInfo {
                key: "bistro".to_string(),
                name: "Bistro".to_string(),
                description: "Warm restaurant layout".to_string(),
                pages: vec!["index".to_string(), "menu".to_string()],
            }]
        );
    }

    #[test]
    fn same_template_renders_both_record_kinds() {
        let tmp = TempDir::new().unwrap();
        let folder = write_template(tmp.path(), "t", &[("index.html", "{{YEAR}}")]);
        let template = Template::load(&folder).unwrap();
        let site_pages = template.generate_all_pages(&sample_site(), &RenderOptions::default());
        let resume_pages = template.generate_all_pages(&Resume::default(), &RenderOptions::default());
        assert_eq!(site_pages, resume_pages);
    }
}
