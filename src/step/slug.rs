//! Filesystem-safe slugs derived from step names.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Slug used when a name contains no ASCII letters or digits.
pub const SLUG_FALLBACK: &str = "step";

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid slug separator regex"));

/// Lowercase ASCII letters and digits joined by single internal hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive a slug from a human-readable step name.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single `-`, and strips hyphens at either end. Never empty: falls back to
/// [`SLUG_FALLBACK`].
pub fn slugify(name: &str) -> Slug {
    let lowered = name.trim().to_lowercase();
    let hyphenated = SEPARATOR_RUN.replace_all(&lowered, "-");
    let slug = hyphenated.trim_matches('-');

    if slug.is_empty() {
        Slug(SLUG_FALLBACK.to_string())
    } else {
        Slug(slug.to_string())
    }
}
