//! URL utility functions.
//!
//! Validation of configured URLs and rewriting of root-relative hyperlinks
//! into absolute ones.

use dom_query::Selection;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Like [`is_absolute_url`], but as an error for configuration checks.
pub fn require_absolute_url(s: &str) -> Result<Url> {
    match is_absolute_url(s) {
        (true, Some(url)) => Ok(url),
        _ => Err(Error::InvalidUrl {
            url: s.to_string(),
            reason: "expected an absolute http(s) URL".to_string(),
        }),
    }
}

/// A hyperlink target beginning with `/`, resolved against a known origin.
#[inline]
#[must_use]
pub fn is_root_relative(href: &str) -> bool {
    href.starts_with('/')
}

/// Resolve a root-relative `href` against `base_url`.
///
/// Plain concatenation: the path is kept byte for byte. Anything that is not
/// root-relative yields `None`.
///
/// ```
/// use wikipage_md::url_utils::resolve_root_relative;
///
/// assert_eq!(
///     resolve_root_relative("/uk/News", "https://wiki.debian.org"),
///     Some("https://wiki.debian.org/uk/News".to_string())
/// );
/// assert_eq!(resolve_root_relative("#top", "https://wiki.debian.org"), None);
/// ```
#[must_use]
pub fn resolve_root_relative(href: &str, base_url: &str) -> Option<String> {
    is_root_relative(href).then(|| format!("{base_url}{href}"))
}

/// Rewrite every `<a href="/...">` below `root` to an absolute URL.
///
/// Absolute, fragment and other relative links are left alone, as are
/// anchors without `href`. Running it twice changes nothing the second time.
///
/// # Returns
/// * Number of links rewritten
pub fn rewrite_internal_links(root: &Selection, base_url: &str) -> usize {
    let mut rewritten = 0;

    for node in root.select("a[href]").nodes() {
        let link = Selection::from(*node);
        let Some(href) = link.attr("href") else {
            continue;
        };
        if let Some(absolute) = resolve_root_relative(&href, base_url) {
            link.set_attr("href", &absolute);
            rewritten += 1;
        }
    }

    debug!(rewritten, base_url, "rewrote root-relative links");
    rewritten
}
