//! Conversion pipeline.
//!
//! Parsed page → link rewriting → frontmatter → content cleaning → Markdown.
//! Each stage consumes only what the one before produced.

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::dom;
use crate::error::Result;
use crate::fetch::fetch_page;
use crate::html_processing;
use crate::markdown;
use crate::metadata;
use crate::options::Options;
use crate::output::write_document;
use crate::result::ConvertResult;
use crate::url_utils;

/// Convert page markup to frontmatter and Markdown. No I/O.
///
/// Links are rewritten on the whole page before anything is extracted, so
/// translation targets in the header are absolute as well.
pub(crate) fn convert_page(html: &str, options: &Options) -> Result<ConvertResult> {
    let document = dom::parse(html);

    url_utils::rewrite_internal_links(&document.select("html"), &options.base_url);

    let frontmatter = metadata::extract_frontmatter(&document, options)?;
    let content = html_processing::extract_content(&document, options)?;
    let markdown = markdown::render_markdown(&content)?;

    debug!(markdown_len = markdown.len(), "rendered content region");
    Ok(ConvertResult {
        frontmatter,
        markdown,
    })
}

/// Fetches a page, converts it, and writes the result to a file.
///
/// Holds the options and the HTTP client for one run.
#[derive(Debug, Clone)]
pub struct PageConverter {
    options: Options,
    client: Client,
}

impl PageConverter {
    /// Create a converter with a default blocking client.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_client(options, Client::new())
    }

    /// Create a converter with a caller-supplied client.
    #[must_use]
    pub fn with_client(options: Options, client: Client) -> Self {
        Self { options, client }
    }

    /// Options this converter was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Fetch the configured page and convert it, without writing anything.
    pub fn fetch_and_convert(&self) -> Result<ConvertResult> {
        info!(url = %self.options.page_url, "fetching page");
        let html = fetch_page(&self.client, &self.options.page_url)?;
        convert_page(&html, &self.options)
    }

    /// Fetch, convert and write the output document.
    ///
    /// The output file is only touched once conversion has succeeded.
    ///
    /// # Returns
    /// * Number of bytes written
    pub fn run(&self) -> Result<usize> {
        let result = self.fetch_and_convert()?;
        write_document(&self.options.output_path, &result.document())
    }
}
