//! Markdown rendering.
//!
//! Converts the cleaned content region to Markdown with `htmd`. Headings use
//! the ATX style (`#`, `##`, ...); a horizontal rule renders as `---`.

use htmd::element_handler::{HandlerResult, Handlers};
use htmd::options::{HeadingStyle, Options as HtmdOptions};
use htmd::{Element, HtmlToMarkdown};

use crate::dom::Selection;
use crate::error::{Error, Result};

/// Markdown for a thematic break.
pub const THEMATIC_BREAK: &str = "---";

/// Build the converter used for every page.
#[must_use]
pub fn create_converter() -> HtmlToMarkdown {
    HtmlToMarkdown::builder()
        .options(HtmdOptions {
            heading_style: HeadingStyle::Atx,
            ..HtmdOptions::default()
        })
        .add_handler(vec!["hr"], hr_handler)
        .build()
}

fn hr_handler(_handlers: &dyn Handlers, _element: Element) -> Option<HandlerResult> {
    Some(HandlerResult::from(format!("\n\n{THEMATIC_BREAK}\n\n")))
}

/// Convert an HTML fragment to Markdown.
///
/// The result is trimmed and followed by exactly one blank line, so it can
/// be appended to the frontmatter header as is.
pub fn html_to_markdown(html: &str) -> Result<String> {
    let raw = create_converter().convert(html).map_err(Error::Markdown)?;
    Ok(finish_markdown(&raw))
}

/// Render a selection (outer HTML included) to Markdown.
pub fn render_markdown(sel: &Selection) -> Result<String> {
    html_to_markdown(&sel.html())
}

/// Trim surrounding whitespace and terminate with a single blank line.
///
/// ```
/// use wikipage_md::markdown::finish_markdown;
///
/// assert_eq!(finish_markdown("\n\n# Title\n\ntext \n\n\n"), "# Title\n\ntext\n\n");
/// ```
#[must_use]
pub fn finish_markdown(markdown: &str) -> String {
    let mut out = markdown.trim().to_string();
    out.push_str("\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_and_trailing_rule() {
        let md = html_to_markdown(r#"<div id="content"><b>Page content</b><hr></div>"#)
            .expect("convert");
        assert_eq!(md, "**Page content**\n\n---\n\n");
    }

    #[test]
    fn headings_use_atx_style() {
        let md = html_to_markdown("<h2>Section</h2><h3>Item</h3><p>Body</p>").expect("convert");
        assert!(md.starts_with("## Section\n\n### Item"));
        assert!(!md.contains("-----"));
        assert!(!md.contains("====="));
    }

    #[test]
    fn links_keep_their_targets() {
        let md = html_to_markdown(r#"<p><a href="https://wiki.debian.org/uk/News">Українська</a></p>"#)
            .expect("convert");
        assert_eq!(md, "[Українська](https://wiki.debian.org/uk/News)\n\n");
    }

    #[test]
    fn empty_input_is_just_the_terminator() {
        assert_eq!(html_to_markdown("").expect("convert"), "\n\n");
    }
}
