//! Fragment loading over HTTP.

use async_trait::async_trait;
use gloo_net::http::Request;
use router::{FetchError, FragmentSource};

/// Fetches fragments relative to the page with `fetch()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFragments;

impl HttpFragments {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl FragmentSource for HttpFragments {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let resp = Request::get(path)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: resp.status(),
            });
        }

        resp.text().await.map_err(|e| FetchError::Body(e.to_string()))
    }
}
