//! Writing generated sites to disk, and CLI output formatting.
//!
//! # Output Layout
//!
//! ```text
//! output/
//! ├── index.html          # one file per rendered page: <outputName>.html
//! ├── menu.html
//! ├── styles.css          # cssFile, with the colour theme prepended
//! ├── base.css            # cssFiles / jsFiles / staticFiles, copied by name
//! ├── animations.js
//! ├── assets/             # staticDirectories, copied recursively
//! ├── images/
//! │   └── README.txt      # only when the record names images
//! └── site.json           # the record, re-serialized for later edits
//! ```
//!
//! # Architecture
//!
//! [`OutputWriter`] does the I/O and returns a [`WriteReport`] describing
//! what it did. Display goes through `format_*` functions (return
//! `Vec<String>`) for testability and `print_*` wrappers that write to
//! stdout. Format functions are pure: no I/O, no side effects.

use crate::record::{IMAGES_DIR, Record, RequiredImage, to_saved_json};
use crate::template::{Template, TemplateInfo};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

const IMAGES_README: &str = "README.txt";

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write output at '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn write_error(path: &Path) -> impl FnOnce(io::Error) -> OutputError + '_ {
    move |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    }
}

// ============================================================================
// Write report
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    /// Generated by pagesmith.
    Created,
    /// Copied from the template folder.
    Copied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteEntry {
    pub action: WriteAction,
    /// Path relative to the output root. Directories end with `/`.
    pub path: String,
}

/// Everything one [`OutputWriter::write_site`] call produced, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub output_dir: PathBuf,
    pub pages: usize,
    pub entries: Vec<WriteEntry>,
    pub required_images: Vec<RequiredImage>,
}

impl WriteReport {
    fn created(&mut self, path: impl Into<String>) {
        self.entries.push(WriteEntry {
            action: WriteAction::Created,
            path: path.into(),
        });
    }

    fn copied(&mut self, path: impl Into<String>) {
        self.entries.push(WriteEntry {
            action: WriteAction::Copied,
            path: path.into(),
        });
    }
}

// ============================================================================
// OutputWriter
// ============================================================================

/// Writes rendered pages and template assets under one output root.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the output directory, first removing it entirely when `clean`.
    pub fn prepare(&self, clean: bool) -> Result<(), OutputError> {
        if clean && self.root.exists() {
            debug!(dir = %self.root.display(), "cleaning output directory");
            fs::remove_dir_all(&self.root).map_err(write_error(&self.root))?;
        }
        fs::create_dir_all(&self.root).map_err(write_error(&self.root))
    }

    /// Write pages, themed CSS, copied assets, the images README and the
    /// record itself.
    pub fn write_site<R: Record>(
        &self,
        template: &Template,
        pages: &BTreeMap<String, String>,
        record: &R,
    ) -> Result<WriteReport, OutputError> {
        let mut report = WriteReport {
            output_dir: self.root.clone(),
            pages: pages.len(),
            ..WriteReport::default()
        };

        for (name, html) in pages {
            let file = format!("{name}.html");
            self.write_file(&file, html)?;
            report.created(file);
        }

        if let (Some(css), Some(css_file)) =
            (template.css_content(), template.config().css_file.as_deref())
        {
            self.write_file(css_file, css)?;
            report.created(css_file);
        }

        for src in template.static_file_paths() {
            let Some(name) = src.file_name() else {
                continue;
            };
            let dst = self.root.join(name);
            fs::copy(&src, &dst).map_err(write_error(&dst))?;
            report.copied(name.to_string_lossy());
        }

        for dir in template.static_directories() {
            let Some(name) = dir.file_name() else {
                continue;
            };
            copy_dir_recursive(&dir, &self.root.join(name))?;
            report.copied(format!("{}/", name.to_string_lossy()));
        }

        let images = record.required_images();
        if !images.is_empty() {
            let readme = Path::new(IMAGES_DIR).join(IMAGES_README);
            if !self.root.join(&readme).exists() {
                self.write_file(&readme.to_string_lossy(), &images_readme(&images))?;
                report.created(format!("{IMAGES_DIR}/{IMAGES_README}"));
            }
        }
        report.required_images = images;

        let json = to_saved_json(record).map_err(|e| OutputError::Write {
            path: self.root.join(R::FILE_NAME),
            source: io::Error::other(e),
        })?;
        self.write_file(R::FILE_NAME, &json)?;
        report.created(R::FILE_NAME);

        info!(
            dir = %self.root.display(),
            pages = report.pages,
            files = report.entries.len(),
            "site written"
        );
        Ok(report)
    }

    /// Write `contents` to `relative` under the root, creating parent directories.
    fn write_file(&self, relative: &str, contents: &str) -> Result<(), OutputError> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error(parent))?;
        }
        fs::write(&path, contents).map_err(write_error(&path))
    }
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<(), OutputError> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| OutputError::Write {
            path: e.path().unwrap_or(src).to_path_buf(),
            source: e.into(),
        })?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(write_error(&target))?;
        } else {
            fs::copy(entry.path(), &target).map_err(write_error(&target))?;
        }
    }
    Ok(())
}

fn images_readme(images: &[RequiredImage]) -> String {
    let mut lines = vec![
        "=== Images Folder ===".to_string(),
        String::new(),
        "Place your images in this folder.".to_string(),
        String::new(),
    ];
    lines.extend(
        images
            .iter()
            .map(|image| format!("Required: {} ({})", image.file, image.purpose)),
    );
    lines.push(String::new());
    lines.push("Supported formats: .jpg, .jpeg, .png, .gif, .webp".to_string());
    lines.join("\n") + "\n"
}

// ============================================================================
// Display
// ============================================================================

/// ```text
/// Created: index.html
/// Copied: assets/
/// Wrote 2 pages to output
/// ```
pub fn format_write_report(report: &WriteReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .entries
        .iter()
        .map(|entry| match entry.action {
            WriteAction::Created => format!("Created: {}", entry.path),
            WriteAction::Copied => format!("Copied: {}", entry.path),
        })
        .collect();

    if !report.required_images.is_empty() {
        lines.push(format!("Images expected in {IMAGES_DIR}/"));
        for image in &report.required_images {
            lines.push(format!("    {} ({})", image.file, image.purpose));
        }
    }

    let noun = if report.pages == 1 { "page" } else { "pages" };
    lines.push(format!(
        "Wrote {} {noun} to {}",
        report.pages,
        report.output_dir.display()
    ));
    lines
}

pub fn print_write_report(report: &WriteReport) {
    for line in format_write_report(report) {
        println!("{line}");
    }
}

/// Soft validation messages for a record, or a single OK line.
pub fn format_validation(kind: &str, errors: &[String]) -> Vec<String> {
    if errors.is_empty() {
        return vec![format!("{kind} data is valid")];
    }
    let mut lines = vec![format!("{kind} data has {} issue(s):", errors.len())];
    lines.extend(errors.iter().map(|e| format!("    - {e}")));
    lines
}

pub fn print_validation(kind: &str, errors: &[String]) {
    for line in format_validation(kind, errors) {
        println!("{line}");
    }
}

/// ```text
/// bistro  Bistro
///     Warm restaurant layout
///     Pages: index, menu
/// ```
pub fn format_template_list(templates: &[TemplateInfo]) -> Vec<String> {
    if templates.is_empty() {
        return vec!["No templates found".to_string()];
    }
    let mut lines = Vec::new();
    for info in templates {
        lines.push(format!("{}  {}", info.key, info.name));
        if !info.description.trim().is_empty() {
            lines.push(format!("    {}", info.description));
        }
        lines.push(format!("    Pages: {}", info.pages.join(", ")));
    }
    lines
}

pub fn print_template_list(templates: &[TemplateInfo]) {
    for line in format_template_list(templates) {
        println!("{line}");
    }
}
