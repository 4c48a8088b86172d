//! Heading slugs.
//!
//! `slugify` folds arbitrary heading text to `[a-z0-9-]`, and `SlugRegistry`
//! hands out unique ids for one document by suffixing repeats with `-2`, `-3`, ...

use std::collections::{HashMap, HashSet};
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Slug used when nothing ASCII-mappable is left of the heading text
pub const FALLBACK_SLUG: &str = "section";

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref HYPHEN_RUN: Regex = Regex::new(r"-+").unwrap();
}

/// Combining Diacritical Marks block
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Map heading text to a lowercase, hyphenated, URL-safe base slug.
///
/// Accents are folded through NFKD (`Café` becomes `cafe`), anything that is
/// not an ASCII letter, digit, whitespace or hyphen is dropped, whitespace runs
/// become a single hyphen and hyphen runs are collapsed. Leading and trailing
/// hyphens are trimmed. An empty result yields [`FALLBACK_SLUG`].
pub fn slugify(text: &str) -> String {
    let folded = text
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    let kept: String = folded
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let hyphenated = WHITESPACE_RUN.replace_all(kept.trim(), "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    let slug = collapsed.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Occurrence counts of base slugs within a single document.
///
/// Never share one between documents: ids would drift between renders of the
/// same markdown.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    counts: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `base` the first time it is seen, `base-N` for the N-th time after that.
    ///
    /// A candidate that was already handed out (`Notes`, `Notes 2`, then
    /// `Notes` again) keeps counting up, so ids never repeat.
    pub fn make_unique(&mut self, base: &str) -> String {
        let count = self.counts.entry(base.to_string()).or_insert(0);
        *count += 1;

        let mut candidate = if *count == 1 {
            base.to_string()
        } else {
            format!("{}-{}", base, count)
        };

        while self.issued.contains(&candidate) {
            *count += 1;
            candidate = format!("{}-{}", base, count);
        }

        self.issued.insert(candidate.clone());
        candidate
    }

    /// Slugify `text` and make the result unique
    pub fn unique_slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        self.make_unique(&base)
    }
}
