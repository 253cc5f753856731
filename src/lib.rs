//! # Pagesmith
//!
//! A static site generator for small-business websites and personal resumes.
//! A structured data record (JSON) is poured into a folder of HTML page
//! templates, and the finished pages plus the template's assets are written to
//! an output directory.
//!
//! # Architecture: Record → Vocabulary → Pages
//!
//! ```text
//! site.json / resume.json ──► Record ──► section builders ──► token vocabulary
//!                                                                   │
//! templates/<name>/ ──► TemplateManager ──► Template (page texts) ──┤
//!                                                                   ▼
//!                                             placeholder substitution per page
//!                                                                   │
//!                                                                   ▼
//!                                          OutputWriter ──► output/*.html + assets
//! ```
//!
//! Each stage is a plain function of its inputs. Section builders and the
//! placeholder engine never touch the filesystem, so almost everything can be
//! unit tested without I/O.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`record`] | `SiteData` and `Resume` records, JSON load/save, soft validation |
//! | [`sections`] | Pure builders turning a record into escaped HTML fragments |
//! | [`placeholder`] | `{{TOKEN}}` vocabulary and single-pass substitution |
//! | [`template_config`] | Per-template `template.json` descriptor and colour theme |
//! | [`template`] | Template loading, discovery, and page generation |
//! | [`output`] | Writing sites to disk and CLI output formatting |
//! | [`config`] | `pagesmith.toml` loading, validation, and merging |
//!
//! # Design Decisions
//!
//! ## Closed Token Vocabulary
//!
//! Templates contain nothing but literal `{{IDENT}}` tokens. There are no
//! loops or conditionals in the template syntax; repetition (one card per
//! service, one entry per job) happens inside the section builders. Tokens
//! the engine does not know are left in the output untouched and logged, so
//! a template written for a newer vocabulary degrades visibly instead of
//! failing the run.
//!
//! ## Maud For Fragments
//!
//! Section fragments are built with [Maud](https://maud.lambda.xyz/), so every
//! record value is HTML-escaped at the point it is interpolated. The contact
//! map embed is the only record field inserted raw.
//!
//! ## Self-Describing Templates
//!
//! Adding a template means dropping a folder into `templates/`. Its
//! `template.json` names the pages and assets; without one, the folder's
//! `index.html` becomes the single page.

pub mod config;
pub mod output;
pub mod placeholder;
pub mod record;
pub mod sections;
pub mod template;
pub mod template_config;

#[cfg(test)]
pub(crate) mod test_helpers;
