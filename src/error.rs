//! Error types for wikipage-md.
//!
//! This module defines the error types returned by the fetch, conversion and
//! write stages, and the process exit status each one maps to.

use std::path::PathBuf;

/// Exit status for a failure to reach the remote host.
pub const EXIT_CONNECT: u8 = 2;

/// Exit status for a response other than `200 OK`.
pub const EXIT_STATUS: u8 = 3;

/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Error type for the conversion pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The remote host could not be reached.
    #[error("Failed to connect to {url}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than `200 OK`.
    #[error("Failed to retrieve {url}. Status code: {status}")]
    Status { url: String, status: u16 },

    /// Any other transport failure (bad URL, body read).
    #[error("Request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// An element the page layout is expected to carry was not found.
    ///
    /// The page no longer matches the fixed identifiers the extractor
    /// depends on; there is no fallback rendering.
    #[error("Expected element not found: {what} ({selector})")]
    MissingElement {
        what: &'static str,
        selector: String,
    },

    /// The page info text did not contain the last-modified marker.
    #[error("Page info {text:?} does not contain marker {marker:?}")]
    MissingModifiedMarker { text: String, marker: String },

    /// HTML to Markdown conversion failed.
    #[error("Markdown conversion failed")]
    Markdown(#[source] std::io::Error),

    /// Reading or writing a local file failed.
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("Invalid configuration in {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A configured URL is not a valid absolute http(s) URL.
    #[error("Invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A configured value cannot be used (empty id, empty marker, unusable selector).
    #[error("Invalid option {option}: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Connection failures and unsuccessful responses get distinct codes so
    /// wrapping scripts can tell them apart from structural failures.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Connect { .. } => EXIT_CONNECT,
            Self::Status { .. } => EXIT_STATUS,
            _ => EXIT_FAILURE,
        }
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
