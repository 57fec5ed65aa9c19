//! # wikipage-md
//!
//! Fetch a wiki page, extract its content region and convert it to a
//! Markdown file with a small frontmatter header.
//!
//! ## Quick Start
//!
//! ```rust
//! use wikipage_md::{convert, Options};
//!
//! let html = r#"<html><body>
//!     <div id="locationline">News</div>
//!     <div id="content"><hr><small><a href="/uk/News">Українська</a></small><b>Hi</b></div>
//!     <div id="pageinfo">(Last modified 2021-08-01)</div>
//! </body></html>"#;
//!
//! let result = convert(html, &Options::default())?;
//! assert_eq!(result.frontmatter.title, "News");
//! assert_eq!(result.markdown, "**Hi**\n\n");
//! # Ok::<(), wikipage_md::Error>(())
//! ```
//!
//! ## Stages
//!
//! - **Fetch**: one blocking GET ([`fetch::fetch_page`])
//! - **Link rewriting**: root-relative `href`s become absolute ([`url_utils`])
//! - **Metadata**: title, last-updated date, translations ([`metadata`])
//! - **Cleaning**: translation block and first separator removed, `<dt>` → `<h3>` ([`html_processing`])
//! - **Rendering**: ATX-style Markdown ([`markdown`])
//! - **Output**: header + body written in one go ([`output`])

mod error;
mod extract;
mod options;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Response body charset detection and decoding.
pub mod encoding;

/// Single-request page retrieval.
pub mod fetch;

/// Content region location and cleaning.
pub mod html_processing;

/// HTML to Markdown rendering.
pub mod markdown;

/// Frontmatter extraction.
pub mod metadata;

/// Output file writing.
pub mod output;

/// URL validation and link rewriting.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result, EXIT_CONNECT, EXIT_FAILURE, EXIT_STATUS};
pub use extract::PageConverter;
pub use options::{MissingTranslations, Options, DEFAULT_BASE_URL};
pub use result::{ConvertResult, Frontmatter, Translation};

/// Converts page markup to a frontmatter header and Markdown body.
///
/// # Arguments
///
/// * `html` - The full page markup
/// * `options` - Element ids, base URL and translation policy
///
/// # Returns
///
/// Returns `Ok(ConvertResult)`; [`ConvertResult::document`] gives the text
/// to write. Returns an `Error` when the page lacks an element the layout
/// is expected to carry.
pub fn convert(html: &str, options: &Options) -> Result<ConvertResult> {
    extract::convert_page(html, options)
}
