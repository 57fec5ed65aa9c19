//! Content region cleaning.
//!
//! Locates the article body and strips the non-content furniture the wiki
//! wraps it in: the translation links and the leading horizontal rule.
//! Definition terms are promoted to subheadings so they survive as Markdown
//! headings.

use tracing::debug;

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};
use crate::metadata::dom_extraction::TRANSLATIONS_TAG;
use crate::options::{MissingTranslations, Options};

/// Tag of the ornamental separator removed from the top of the region.
pub const SEPARATOR_TAG: &str = "hr";

/// Definition-term tag promoted to a heading.
pub const DEFINITION_TERM_TAG: &str = "dt";

/// Heading tag a definition term is renamed to.
pub const PROMOTED_HEADING_TAG: &str = "h3";

/// Locate the content region and clean it in place.
///
/// In order:
/// 1. remove the first `<small>` in the region (the translation links),
/// 2. rename every `<dt>` to `<h3>`,
/// 3. remove the first `<hr>`; any later ones stay.
///
/// The mutation is destructive: the removed nodes are gone from `doc` too.
pub fn extract_content<'a>(doc: &'a Document, opts: &Options) -> Result<Selection<'a>> {
    let content = dom::require_id(doc, &opts.content_id, "content region")?;

    remove_translations_block(&content, opts)?;
    let promoted = promote_definition_terms(&content);
    remove_leading_separator(&content)?;

    debug!(promoted, "cleaned content region");
    Ok(content)
}

/// Remove the first translation block inside the region.
///
/// Matched by tag alone. A region without one is a structural mismatch
/// unless the options tolerate missing translations.
pub fn remove_translations_block(content: &Selection, opts: &Options) -> Result<()> {
    if dom::remove_first(content, TRANSLATIONS_TAG) {
        return Ok(());
    }
    match opts.missing_translations {
        MissingTranslations::Fail => Err(Error::MissingElement {
            what: "translations block in content region",
            selector: TRANSLATIONS_TAG.to_string(),
        }),
        MissingTranslations::Empty => Ok(()),
    }
}

/// Retag every definition term as a level-3 heading, children untouched.
///
/// # Returns
/// * Number of terms promoted
pub fn promote_definition_terms(content: &Selection) -> usize {
    let terms = content.select(DEFINITION_TERM_TAG);
    let count = terms.length();
    terms.rename(PROMOTED_HEADING_TAG);
    count
}

/// Remove the first horizontal rule inside the region.
pub fn remove_leading_separator(content: &Selection) -> Result<()> {
    if dom::remove_first(content, SEPARATOR_TAG) {
        Ok(())
    } else {
        Err(Error::MissingElement {
            what: "ornamental separator in content region",
            selector: SEPARATOR_TAG.to_string(),
        })
    }
}
