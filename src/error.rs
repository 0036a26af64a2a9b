//! Error types for content loading and binding.

use thiserror::Error;

/// Failure to obtain a parsed content document.
///
/// Every variant drives the loader into its failed state; there is no retry.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("content not found at {0}")]
    NotFound(String),

    #[error("fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("content document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failure while rewriting a page.
#[derive(Error, Debug)]
pub enum BindError {
    #[error("HTML rewrite failed: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),

    #[error("template render failed: {0}")]
    Template(#[from] askama::Error),
}

/// Failure while toggling the contact button group.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContactError {
    #[error("contact button {index} out of range ({len} buttons)")]
    OutOfRange { index: usize, len: usize },
}
