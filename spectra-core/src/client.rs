use tracing::debug;

use crate::media::MediaType;
use crate::models::{ErrorBody, SearchResultItem, TokenResponse};

/// Header carrying the access token on search requests.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// A client for the SpectraFlow `/api/tunes` API.
///
/// Used by the web frontend in the browser and by the server's end-to-end
/// tests natively.
#[derive(Clone, Debug)]
pub struct SpectraClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server error ({status}): {message}")]
    Status { status: u16, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

impl SpectraClient {
    /// `base_url` is the API root, e.g. `http://localhost:5000/api/tunes`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the server for a fresh access token.
    pub async fn generate_token(&self) -> Result<String, ClientError> {
        let url = format!("{}/generate-token", self.base_url);
        debug!("Requesting token from {url}");

        let resp = self.http.post(&url).send().await?;
        let body: TokenResponse = check_status(resp).await?.json().await?;
        Ok(body.token)
    }

    /// Search the catalog through the proxy.
    pub async fn search(
        &self,
        term: &str,
        media: MediaType,
        token: &str,
    ) -> Result<Vec<SearchResultItem>, ClientError> {
        let url = format!("{}/search", self.base_url);

        let resp = self
            .http
            .get(&url)
            .query(&[("term", term), ("media", media.as_str())])
            .header(ACCESS_TOKEN_HEADER, token)
            .send()
            .await?;

        let items: Vec<SearchResultItem> = check_status(resp).await?.json().await?;
        debug!("Search for {term:?} ({media}) returned {} items", items.len());
        Ok(items)
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
