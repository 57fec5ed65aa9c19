//! Character encoding detection and transcoding.
//!
//! Turns a fetched response body into UTF-8 text. The charset comes from the
//! `Content-Type` header when present, else from the page's own meta tags.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `charset=...` in a Content-Type header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Only the head of the document is searched for a meta charset.
const SNIFF_LEN: usize = 1024;

fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Detect the encoding of a response body.
///
/// Looks, in order, at:
/// 1. `charset=` in the `Content-Type` header
/// 2. `<meta charset>` or `<meta http-equiv="Content-Type">` in the first 1024 bytes
/// 3. UTF-8
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    let from_header = content_type.and_then(|ct| capture(&HEADER_CHARSET_RE, ct));

    let from_meta = || {
        let head = String::from_utf8_lossy(&body[..body.len().min(SNIFF_LEN)]);
        capture(&CHARSET_META_RE, &head)
    };

    from_header
        .or_else(from_meta)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode a response body to a UTF-8 string.
///
/// Invalid sequences become U+FFFD instead of failing.
///
/// # Examples
///
/// ```
/// use wikipage_md::encoding::decode_body;
///
/// let text = decode_body(b"Caf\xE9", Some("text/html; charset=ISO-8859-1"));
/// assert_eq!(text, "Café");
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
