//! Metadata extraction module.
//!
//! Builds the frontmatter header (title, last-updated date, translations)
//! from fixed locations in the page.

pub mod dom_extraction;

use dom_query::Document;
use tracing::debug;

use crate::error::Result;
use crate::result::Frontmatter;
use crate::Options;

pub use dom_extraction::{
    extract_last_updated, extract_title, extract_translations, find_translations_block,
    parse_last_updated,
};

/// Extract the frontmatter header from a parsed page.
///
/// Translations are read first so that the configured missing-block policy
/// applies before any other lookup fails.
///
/// # Arguments
/// * `doc` - The parsed page
/// * `opts` - Element ids, marker word and translation policy
pub fn extract_frontmatter(doc: &Document, opts: &Options) -> Result<Frontmatter> {
    let translations = extract_translations(doc, opts)?;
    let title = extract_title(doc, opts)?;
    let last_updated = extract_last_updated(doc, opts)?;

    debug!(
        title = %title,
        last_updated = %last_updated,
        translations = translations.len(),
        "extracted frontmatter"
    );

    Ok(Frontmatter {
        title,
        last_updated,
        translations,
    })
}
