//! Subject placeholder substitution.
//!
//! Question and end texts refer to the thing being assessed through a
//! placeholder token. The lowercase token becomes the subject term verbatim,
//! the `_CAP` token becomes the term with its first letter capitalized.

use std::borrow::Cow;

use crate::OptionId;

pub const SUBJECT_TOKEN: &str = "{{ENTITY}}";
pub const SUBJECT_TOKEN_CAP: &str = "{{ENTITY_CAP}}";

/// Term used while no subject has been selected.
pub const DEFAULT_SUBJECT_TERM: &str = "this entity";

/// The subject picked at the start node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: OptionId,
    pub label: String,
    pub term: String,
}

/// Uppercase the first character of `term`, leaving the rest untouched.
#[must_use]
pub fn capitalize_first(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replace both placeholder forms in `template` with `term`.
///
/// The template is scanned once, so placeholder text inside `term` is
/// emitted literally. Returns the template unchanged (borrowed) when it holds
/// no token.
#[must_use]
pub fn substitute_subject<'a>(template: &'a str, term: &str) -> Cow<'a, str> {
    if !template.contains(SUBJECT_TOKEN) && !template.contains(SUBJECT_TOKEN_CAP) {
        return Cow::Borrowed(template);
    }

    let capitalized = capitalize_first(term);
    let mut out = String::with_capacity(template.len() + term.len());
    let mut rest = template;
    while let Some(pos) = rest.find("{{") {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix(SUBJECT_TOKEN_CAP) {
            out.push_str(&capitalized);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(SUBJECT_TOKEN) {
            out.push_str(term);
            rest = after;
        } else {
            out.push_str("{{");
            rest = &tail[2..];
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
