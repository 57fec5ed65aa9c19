//! DOM operations adapter.
//!
//! Thin helpers over `dom_query` for the handful of lookups and mutations the
//! pipeline performs on a parsed page.

pub use dom_query::{Document, Selection};

use crate::error::{Error, Result};

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Select the single element carrying `id`, or fail with a structural error.
///
/// An id that does not form a usable selector is an option error, not a panic.
pub fn require_id<'a>(doc: &'a Document, id: &str, what: &'static str) -> Result<Selection<'a>> {
    let selector = crate::Options::id_selector(id);
    let Some(matched) = doc.try_select(&selector) else {
        return Err(Error::InvalidOption {
            option: "element id",
            reason: format!("{id:?} does not form a valid selector"),
        });
    };
    let sel = matched.first();
    if sel.exists() {
        Ok(sel)
    } else {
        Err(Error::MissingElement { what, selector })
    }
}

/// Trimmed text content of a selection.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

/// Remove the first descendant of `sel` matching `selector`, in document order.
///
/// # Returns
/// * `true` if an element was removed
pub fn remove_first(sel: &Selection, selector: &str) -> bool {
    let first = sel.select_single(selector);
    if first.is_empty() {
        return false;
    }
    first.remove();
    true
}

/// Whether every element child of `sel` is a `tag` element, and there is at least one.
#[must_use]
pub fn has_only_children_of(sel: &Selection, tag: &str) -> bool {
    let children = sel.children();
    !children.is_empty()
        && children
            .nodes()
            .iter()
            .all(|n| n.node_name().is_some_and(|name| &*name == tag))
}
