//! Section builders.
//!
//! One pure function per content area. Each takes a record and returns an
//! HTML fragment as a `String`, ready to be dropped into a page template by
//! the [placeholder engine](crate::placeholder).
//!
//! Fragments are built with [Maud](https://maud.lambda.xyz/), so every
//! interpolated record value is HTML-escaped. The only raw insertions are the
//! contact map embed (raw HTML by contract), the JSON-LD block (serialized
//! by serde_json, see [`script_safe`]) and fixed entity icons.
//!
//! ## Empty States
//!
//! A section whose defining fields are blank, or whose collection is empty,
//! renders as the empty string: the template keeps no empty `<section>`
//! shell. The resume list builders are the exception; they feed page regions
//! that are always visible and render a "No … listed." placeholder instead.

pub mod resume;
pub mod site;

use crate::record::is_blank;
use maud::html;

/// HTML-escape a plain text value.
pub fn text(value: &str) -> String {
    html! { (value) }.into_string()
}

/// Make serialized JSON safe to embed in a `<script>` element. `<\/` is
/// still the same JSON string, but can no longer close the element.
pub fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// Make a value safe to embed in a `<style>` element. Entities are not decoded
/// there, so only `<` is rewritten (as a CSS escape) and quotes stay intact.
pub fn css_value(value: &str) -> String {
    value.replace('<', "\\3c ")
}

fn present(value: &str) -> bool {
    !is_blank(value)
}
