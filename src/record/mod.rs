//! Data records consumed by the rendering engine.
//!
//! A record is the complete content of one generated site: either a business
//! site ([`SiteData`]) or a personal resume ([`Resume`]). Records are plain
//! value trees that round-trip through camelCase JSON. Once a record is handed
//! to a [`Template`](crate::template::Template) it is only ever read.
//!
//! ## Record Files
//!
//! ```text
//! site.json     → SiteData   (business generator)
//! resume.json   → Resume     (resume generator)
//! ```
//!
//! Both kinds implement [`Record`], which is all the placeholder engine and the
//! output writer need to know about them.

pub mod resume;
pub mod site;

pub use resume::{QuickResumeInput, Resume, build_quick_resume};
pub use site::{SiteData, Vertical};

use crate::placeholder::Placeholders;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("{} data file not found: {}", .kind, .path.display())]
    NotFound { kind: &'static str, path: PathBuf },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output sub-directory for images the user supplies. Pages reference
/// images under it and the writer leaves a README there.
pub const IMAGES_DIR: &str = "images";

/// An image the generated site expects the user to supply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredImage {
    pub file: String,
    pub purpose: String,
}

/// Behaviour shared by every record kind.
pub trait Record: Serialize + DeserializeOwned + Clone + Sync {
    /// Human-readable kind, used in messages ("site", "resume").
    const KIND: &'static str;
    /// File name of the re-serialized copy written next to the output.
    const FILE_NAME: &'static str;

    /// Soft validation. An empty list means the record is complete enough to
    /// publish; a non-empty list never blocks generation by itself.
    fn validate(&self) -> Vec<String>;

    /// Record-specific token vocabulary, keyed by bare token name.
    fn placeholders(&self) -> Placeholders;

    /// Images referenced by the record that live outside the template.
    fn required_images(&self) -> Vec<RequiredImage> {
        Vec::new()
    }

    /// Called on the copy that is about to be written to disk.
    fn before_save(&mut self) {}
}

/// Parse a record from JSON text.
pub fn from_json<R: Record>(json: &str) -> Result<R, RecordError> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a record as pretty-printed JSON. Absent optional fields are omitted.
pub fn to_json<R: Record>(record: &R) -> Result<String, RecordError> {
    Ok(serde_json::to_string_pretty(record)?)
}

pub fn load_record<R: Record>(path: &Path) -> Result<R, RecordError> {
    if !path.is_file() {
        return Err(RecordError::NotFound {
            kind: R::KIND,
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    from_json(&content)
}

/// JSON for the on-disk copy of a record: a clone with
/// [`Record::before_save`] applied. The caller's record is left as is.
pub fn to_saved_json<R: Record>(record: &R) -> Result<String, RecordError> {
    let mut saved = record.clone();
    saved.before_save();
    to_json(&saved)
}

pub fn save_record<R: Record>(record: &R, path: &Path) -> Result<(), RecordError> {
    fs::write(path, to_saved_json(record)?)?;
    Ok(())
}

/// True when the string is empty or whitespace only.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
