//! Result types for conversion output.
//!
//! This module defines the frontmatter header and the converted document.

use std::fmt;

/// One entry of the translation list: visible label and link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Link text, e.g. `Українська`.
    pub label: String,

    /// Link target as found in the page (after link rewriting, if applied).
    pub href: String,
}

/// Metadata header placed in front of the Markdown body.
///
/// Renders (via `Display`) to a fixed-format block:
///
/// ```text
/// ---
/// title: News
/// last_updated: 2021-08-01
/// translations:
///   - Українська: /uk/News
/// ---
///
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// Page title.
    pub title: String,

    /// Last modification date, verbatim from the page info line.
    pub last_updated: String,

    /// Translation links in document order.
    pub translations: Vec<Translation>,
}

impl fmt::Display for Frontmatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---")?;
        writeln!(f, "title: {}", self.title)?;
        writeln!(f, "last_updated: {}", self.last_updated)?;
        if self.translations.is_empty() {
            writeln!(f, "translations: []")?;
        } else {
            writeln!(f, "translations:")?;
            for t in &self.translations {
                writeln!(f, "  - {}: {}", t.label, t.href)?;
            }
        }
        write!(f, "---\n\n")
    }
}

/// Output of converting one page.
#[derive(Debug, Clone, Default)]
pub struct ConvertResult {
    /// Extracted metadata header.
    pub frontmatter: Frontmatter,

    /// Markdown body, trimmed and terminated by one blank line.
    pub markdown: String,
}

impl ConvertResult {
    /// The output document: header followed by body.
    #[must_use]
    pub fn document(&self) -> String {
        format!("{}{}", self.frontmatter, self.markdown)
    }
}
