//! Configuration options for page conversion.
//!
//! The `Options` struct replaces the fixed identifiers a wiki page layout
//! carries (element ids, the base URL, the output path) with explicit values
//! passed into the pipeline.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::url_utils;

/// Default origin that root-relative links are resolved against.
pub const DEFAULT_BASE_URL: &str = "https://wiki.debian.org";

/// What to do when the page carries no translation block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MissingTranslations {
    /// Treat the missing block as a structural mismatch.
    #[default]
    Fail,
    /// Render an empty translation list and skip removing the block.
    Empty,
}

/// Configuration options for fetching and converting a page.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the Debian wiki News page.
///
/// # Example
///
/// ```rust
/// use wikipage_md::{MissingTranslations, Options};
///
/// let options = Options {
///     page_url: "https://wiki.debian.org/DebianEdu".to_string(),
///     missing_translations: MissingTranslations::Empty,
///     ..Options::default()
/// };
/// assert_eq!(options.content_id, "content");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Origin prepended to root-relative `href` values.
    ///
    /// Default: `https://wiki.debian.org`
    pub base_url: String,

    /// Page to fetch.
    ///
    /// Default: `https://wiki.debian.org/News`
    pub page_url: String,

    /// Destination of the Markdown document. Overwritten on every run.
    ///
    /// Default: `debian_news.md`
    pub output_path: PathBuf,

    /// `id` of the element holding the page title.
    ///
    /// Default: `locationline`
    pub title_id: String,

    /// `id` of the element holding the "last modified" line.
    ///
    /// Default: `pageinfo`
    pub pageinfo_id: String,

    /// `id` of the content region.
    ///
    /// Default: `content`
    pub content_id: String,

    /// Word the last-updated date follows in the page info text.
    ///
    /// Default: `modified`
    pub modified_marker: String,

    /// Policy for pages without a translation block.
    ///
    /// Default: `MissingTranslations::Fail`
    pub missing_translations: MissingTranslations,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_url: format!("{DEFAULT_BASE_URL}/News"),
            output_path: PathBuf::from("debian_news.md"),
            title_id: "locationline".to_string(),
            pageinfo_id: "pageinfo".to_string(),
            content_id: "content".to_string(),
            modified_marker: "modified".to_string(),
            missing_translations: MissingTranslations::Fail,
        }
    }
}

impl Options {
    /// Load options from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check URLs, ids and the marker; strip a trailing slash from `base_url`.
    ///
    /// `base_url` is concatenated with paths that already start with `/`,
    /// so a trailing slash would double it.
    pub fn validate(mut self) -> Result<Self> {
        url_utils::require_absolute_url(&self.base_url)?;
        url_utils::require_absolute_url(&self.page_url)?;
        require_non_empty("title_id", &self.title_id)?;
        require_non_empty("pageinfo_id", &self.pageinfo_id)?;
        require_non_empty("content_id", &self.content_id)?;
        require_non_empty("modified_marker", &self.modified_marker)?;
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        Ok(self)
    }

    /// CSS selector matching the element whose `id` attribute equals `id`.
    ///
    /// An attribute selector rather than `#id`, so ids that are not valid
    /// CSS identifiers (`1col`, `a.b`) still select.
    pub(crate) fn id_selector(id: &str) -> String {
        let mut escaped = String::with_capacity(id.len());
        for ch in id.chars() {
            match ch {
                '"' | '\\' => {
                    escaped.push('\\');
                    escaped.push(ch);
                }
                '\n' => escaped.push_str("\\a "),
                _ => escaped.push(ch),
            }
        }
        format!("[id=\"{escaped}\"]")
    }
}

fn require_non_empty(option: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidOption {
            option,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_debian_news() {
        let options = Options::default();
        assert_eq!(options.page_url, "https://wiki.debian.org/News");
        assert_eq!(options.output_path, PathBuf::from("debian_news.md"));
        assert_eq!(options.missing_translations, MissingTranslations::Fail);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let options: Options = serde_json::from_str(
            r#"{"page_url": "https://wiki.debian.org/DebianEdu", "missing_translations": "empty"}"#,
        )
        .expect("valid config");
        assert_eq!(options.page_url, "https://wiki.debian.org/DebianEdu");
        assert_eq!(options.missing_translations, MissingTranslations::Empty);
        assert_eq!(options.title_id, "locationline");
    }

    #[test]
    fn validate_strips_trailing_slash() {
        let options = Options {
            base_url: "https://wiki.debian.org/".to_string(),
            ..Options::default()
        }
        .validate()
        .expect("valid urls");
        assert_eq!(options.base_url, "https://wiki.debian.org");
    }

    #[test]
    fn validate_rejects_relative_page_url() {
        let result = Options {
            page_url: "/News".to_string(),
            ..Options::default()
        }
        .validate();
        assert!(matches!(result, Err(Error::InvalidUrl { .. })));
    }

    #[test]
    fn validate_rejects_empty_marker() {
        let result = Options {
            modified_marker: String::new(),
            ..Options::default()
        }
        .validate();
        assert!(matches!(
            result,
            Err(Error::InvalidOption { option: "modified_marker", .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_ids() {
        let result = Options {
            title_id: " ".to_string(),
            ..Options::default()
        }
        .validate();
        assert!(matches!(result, Err(Error::InvalidOption { option: "title_id", .. })));
    }

    #[test]
    fn id_selector_quotes_attribute_value() {
        assert_eq!(Options::id_selector("content"), r#"[id="content"]"#);
        assert_eq!(Options::id_selector("1col"), r#"[id="1col"]"#);
        assert_eq!(Options::id_selector(r#"a"b\c"#), r#"[id="a\"b\\c"]"#);
    }

    #[test]
    fn from_json_file_reports_bad_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").expect("write config");
        let result = Options::from_json_file(&path);
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
