//! Page retrieval.
//!
//! One blocking GET per run. No retries, no custom headers, no timeout
//! beyond what the transport does by default; a server that never answers
//! blocks the process.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::debug;

use crate::encoding::decode_body;
use crate::error::{Error, Result};

/// Fetch `url` and return the decoded response body.
///
/// # Errors
/// * [`Error::Connect`] if the host cannot be reached
/// * [`Error::Status`] for any status other than `200 OK`
/// * [`Error::Request`] for other transport failures
pub fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().map_err(|source| {
        if source.is_connect() {
            Error::Connect {
                url: url.to_string(),
                source,
            }
        } else {
            Error::Request {
                url: url.to_string(),
                source,
            }
        }
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(Error::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.bytes().map_err(|source| Error::Request {
        url: url.to_string(),
        source,
    })?;

    debug!(url, bytes = body.len(), "fetched page");
    Ok(decode_body(&body, content_type.as_deref()))
}
