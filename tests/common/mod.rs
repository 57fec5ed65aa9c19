//! Shared fixtures: a minimal copy of the Debian wiki News page layout.

#![allow(dead_code)]

pub const LAST_UPDATED: &str = "2021-08-01";
pub const PAGE_TITLE: &str = "News";

pub const TRANSLATIONS: &str =
    r#"<small><a href="/uk/News">Українська</a> - <a href="/vi/News">tiếng Việt</a></small>"#;

pub const FRONTMATTER: &str = "---\ntitle: News\nlast_updated: 2021-08-01\ntranslations:\n  - Українська: /uk/News\n  - tiếng Việt: /vi/News\n---\n\n";

pub const FRONTMATTER_REWRITTEN: &str = "---\ntitle: News\nlast_updated: 2021-08-01\ntranslations:\n  - Українська: https://wiki.debian.org/uk/News\n  - tiếng Việt: https://wiki.debian.org/vi/News\n---\n\n";

pub const MARKDOWN: &str = "**Page content**\n\n---\n\n";

pub fn page_content_html() -> String {
    format!(r#"<div id="content"><hr>{TRANSLATIONS}<b>Page content</b><hr></div>"#)
}

pub fn page_html() -> String {
    format!(
        r#"
<html>
<body>
    <div id="locationline">{PAGE_TITLE}</div>
    {content}
    <div id="pageinfo">(Last modified {LAST_UPDATED})</div>
</body>
</html>
"#,
        content = page_content_html()
    )
}
