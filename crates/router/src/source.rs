//! Fragment loading capability.

use async_trait::async_trait;
use thiserror::Error;

/// Reasons a fragment fetch can fail.
///
/// The router treats every variant the same way (log and keep the current
/// content); the distinction only shows up in the diagnostic message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("unreadable response body: {0}")]
    Body(String),
}

/// Result type for fragment fetches.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Something that can fetch HTML fragment text by resource path.
///
/// Browser futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait FragmentSource {
    /// Fetch the text at `path`, e.g. `components/about.html`.
    async fn fetch(&self, path: &str) -> Result<String>;
}

/// Resource path of a named fragment inside `dir`.
pub fn fragment_path(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        format!("{name}.html")
    } else {
        format!("{dir}/{name}.html")
    }
}
