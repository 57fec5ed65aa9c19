//! DOM-based metadata extraction.
//!
//! Each field lives at a fixed location in the wiki page layout: the title in
//! the location line, the modification date in the page info footer, and the
//! translation links in the first `<small>` block made of links.

use dom_query::{Document, Selection};

use crate::dom;
use crate::error::{Error, Result};
use crate::options::MissingTranslations;
use crate::result::Translation;
use crate::Options;

/// Tag of the inline element wrapping the translation links.
pub const TRANSLATIONS_TAG: &str = "small";

/// Extract the page title from the location line.
pub fn extract_title(doc: &Document, opts: &Options) -> Result<String> {
    let line = dom::require_id(doc, &opts.title_id, "title location line")?;
    Ok(dom::trimmed_text(&line))
}

/// Extract the last-updated date from the page info footer.
pub fn extract_last_updated(doc: &Document, opts: &Options) -> Result<String> {
    let info = dom::require_id(doc, &opts.pageinfo_id, "page info")?;
    parse_last_updated(&info.text(), &opts.modified_marker)
}

/// Pull the date out of a page info line such as `(Last modified 2021-08-01)`.
///
/// Takes the text after the first `marker`, drops a trailing `)` and trims.
/// Any rewording of the footer upstream yields a wrong value, not an error;
/// only a line without the marker at all is rejected.
///
/// ```
/// use wikipage_md::metadata::parse_last_updated;
///
/// let date = parse_last_updated("(Last modified 2021-08-01)", "modified")?;
/// assert_eq!(date, "2021-08-01");
/// # Ok::<(), wikipage_md::Error>(())
/// ```
pub fn parse_last_updated(text: &str, marker: &str) -> Result<String> {
    if marker.is_empty() {
        return Err(Error::InvalidOption {
            option: "modified_marker",
            reason: "must not be empty".to_string(),
        });
    }
    let remainder = text
        .split(marker)
        .nth(1)
        .ok_or_else(|| Error::MissingModifiedMarker {
            text: text.trim().to_string(),
            marker: marker.to_string(),
        })?;

    Ok(remainder
        .trim()
        .trim_end_matches(')')
        .trim()
        .to_string())
}

/// Find the translation block: the first `<small>` whose children are all links.
#[must_use]
pub fn find_translations_block<'a>(doc: &'a Document) -> Option<Selection<'a>> {
    doc.select(TRANSLATIONS_TAG)
        .nodes()
        .iter()
        .map(|n| Selection::from(*n))
        .find(|sel| dom::has_only_children_of(sel, "a"))
}

/// Extract `(label, href)` pairs from the translation block, in document order.
///
/// Links without `href` are recorded with an empty target.
pub fn extract_translations(doc: &Document, opts: &Options) -> Result<Vec<Translation>> {
    let Some(block) = find_translations_block(doc) else {
        return match opts.missing_translations {
            MissingTranslations::Fail => Err(Error::MissingElement {
                what: "translations block",
                selector: TRANSLATIONS_TAG.to_string(),
            }),
            MissingTranslations::Empty => Ok(Vec::new()),
        };
    };

    Ok(block
        .select("a")
        .nodes()
        .iter()
        .map(|n| {
            let link = Selection::from(*n);
            Translation {
                label: link.text().to_string(),
                href: link.attr("href").map(|h| h.to_string()).unwrap_or_default(),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_last_updated_strips_paren() {
        let date = parse_last_updated("(Last modified 2021-08-01)", "modified").expect("marker");
        assert_eq!(date, "2021-08-01");
    }

    #[test]
    fn parse_last_updated_keeps_text_after_first_marker_only() {
        let date = parse_last_updated("News (last modified 2024-01-07 10:12:00)", "modified")
            .expect("marker");
        assert_eq!(date, "2024-01-07 10:12:00");
    }

    #[test]
    fn parse_last_updated_rejects_empty_marker() {
        let result = parse_last_updated("(Last modified 2021-08-01)", "");
        assert!(matches!(
            result,
            Err(Error::InvalidOption { option: "modified_marker", .. })
        ));
    }

    #[test]
    fn parse_last_updated_without_marker_fails() {
        let result = parse_last_updated("(last edited 2021-08-01)", "modified");
        assert!(matches!(result, Err(Error::MissingModifiedMarker { .. })));
    }

    #[test]
    fn translations_block_skips_small_with_other_children() {
        let doc = Document::from(
            r#"<small>Copyright</small>
               <small><a href="/fr/News">Français</a></small>"#,
        );
        let translations = extract_translations(&doc, &Options::default()).expect("block");
        assert_eq!(
            translations,
            vec![Translation {
                label: "Français".to_string(),
                href: "/fr/News".to_string(),
            }]
        );
    }

    #[test]
    fn missing_translations_fail_by_default() {
        let doc = Document::from("<div>no links</div>");
        let result = extract_translations(&doc, &Options::default());
        assert!(matches!(result, Err(Error::MissingElement { what: "translations block", .. })));
    }

    #[test]
    fn missing_translations_empty_when_tolerant() {
        let doc = Document::from("<div>no links</div>");
        let opts = Options {
            missing_translations: MissingTranslations::Empty,
            ..Options::default()
        };
        assert!(extract_translations(&doc, &opts).expect("tolerant").is_empty());
    }

    #[test]
    fn title_is_trimmed() {
        let doc = Document::from("<div id=\"locationline\">\n  News  \n</div>");
        assert_eq!(extract_title(&doc, &Options::default()).expect("title"), "News");
    }
}
