//! Placeholder substitution engine.
//!
//! Page templates are plain HTML files containing tokens of the form
//! `{{IDENT}}`. The engine replaces every token whose identifier is in a
//! closed vocabulary with a precomputed value and leaves everything else
//! untouched:
//!
//! ```text
//! <h1>{{SITE_NAME}}</h1>        →  <h1>Joe &amp; Sons</h1>
//! {{HERO_SECTION}}              →  <section class="hero reveal">…</section>
//! {{NOT_A_TOKEN}}               →  {{NOT_A_TOKEN}}   (left verbatim)
//! ```
//!
//! ## Vocabulary
//!
//! Each record kind contributes its own tokens through
//! [`Record::placeholders`]. The engine adds the tokens that depend on the
//! render run rather than the record: `YEAR`, `GENERATED_DATE`,
//! `ANIMATIONS_SCRIPT` and `ANIMATIONS_CLASS`.
//!
//! ## Matching Rules
//!
//! Substitution is one left-to-right pass. At every `{{` the engine reads up
//! to the next `}}` and replaces the whole token only when the identifier
//! between the delimiters is an exact vocabulary key. Because identifiers are
//! matched whole, `{{EDUCATION}}` can never clip `{{EDUCATION_SUMMARY}}`, and
//! the order in which tokens were registered does not matter. Replacement
//! values are emitted as-is and never rescanned.
//!
//! There is no control flow: repetition (one card per service, one item per
//! skill) happens inside the section builders before substitution.

use crate::record::Record;
use chrono::{DateTime, Datelike, Local};
use std::collections::BTreeMap;

pub const TOKEN_OPEN: &str = "{{";
pub const TOKEN_CLOSE: &str = "}}";

const ANIMATIONS_SCRIPT: &str = r#"<script src="animations.js" defer></script>"#;
const NO_MOTION_CLASS: &str = " no-motion";

/// Per-run rendering switches. Supplied by the caller, never stored on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Inject the animation script; when off, pages get a `no-motion` class.
    pub animations: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { animations: true }
    }
}

/// Token vocabulary: bare identifier (`SITE_NAME`) → replacement text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    values: BTreeMap<&'static str, String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token. A later insert for the same name wins.
    pub fn insert(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace every known token in `template`.
    pub fn substitute(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(TOKEN_OPEN) {
            out.push_str(&rest[..start]);
            rest = &rest[start..];
            match self.match_token(rest) {
                Some((value, consumed)) => {
                    out.push_str(value);
                    rest = &rest[consumed..];
                }
                None => {
                    // Step past a single brace so `{{{NAME}}` still finds `{{NAME}}`.
                    out.push('{');
                    rest = &rest[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// Match a known token at the start of `text` (which begins with `{{`).
    /// Returns the replacement and the number of bytes the token spans.
    fn match_token(&self, text: &str) -> Option<(&str, usize)> {
        let inner = &text[TOKEN_OPEN.len()..];
        let end = inner.find(TOKEN_CLOSE)?;
        let value = self.get(&inner[..end])?;
        Some((value, TOKEN_OPEN.len() + end + TOKEN_CLOSE.len()))
    }
}

/// Build the full vocabulary for one render run.
pub fn vocabulary<R: Record>(
    record: &R,
    options: &RenderOptions,
    now: DateTime<Local>,
) -> Placeholders {
    let mut placeholders = record.placeholders();
    placeholders.insert("YEAR", now.year().to_string());
    placeholders.insert("GENERATED_DATE", now.format("%B %d, %Y").to_string());
    placeholders.insert(
        "ANIMATIONS_SCRIPT",
        if options.animations { ANIMATIONS_SCRIPT } else { "" },
    );
    placeholders.insert(
        "ANIMATIONS_CLASS",
        if options.animations { "" } else { NO_MOTION_CLASS },
    );
    placeholders
}

/// Render one template against a record, reading the clock for date tokens.
pub fn process<R: Record>(template: &str, record: &R, options: &RenderOptions) -> String {
    vocabulary(record, options, Local::now()).substitute(template)
}

/// Identifiers of `{{IDENT}}` tokens still present in `text`, in first-seen
/// order without duplicates. Only identifier-shaped tokens (upper-case
/// letters, digits, underscores) count, so inline script braces are ignored.
pub fn unresolved_tokens(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(TOKEN_OPEN) {
        rest = &rest[start + TOKEN_OPEN.len()..];
        let Some(end) = rest.find(TOKEN_CLOSE) else {
            break;
        };
        let ident = &rest[..end];
        if is_token_ident(ident) && !found.iter().any(|f| f == ident) {
            found.push(ident.to_string());
            rest = &rest[end + TOKEN_CLOSE.len()..];
        }
    }

    found
}

fn is_token_ident(ident: &str) -> bool {
    !ident.is_empty()
        && ident
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
