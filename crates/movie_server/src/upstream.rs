use page_logging::page_debug;
use thiserror::Error;
use url::Url;

use crate::MovieDetails;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid upstream url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("upstream body is not movie json: {0}")]
    Body(#[from] serde_json::Error),
    #[error("movie not found: {0}")]
    NotFound(String),
}

#[async_trait::async_trait]
pub trait MovieSource: Send + Sync {
    async fn find(&self, title: &str) -> Result<MovieDetails, UpstreamError>;
}

/// OMDb-style JSON API: `GET {base}?t=<title>&apikey=<key>`.
#[derive(Debug, Clone)]
pub struct OmdbSource {
    base: Url,
    api_key: String,
    client: reqwest::Client,
}

impl OmdbSource {
    pub fn new(base: &str, api_key: impl Into<String>) -> Result<Self, UpstreamError> {
        Ok(Self {
            base: Url::parse(base)?,
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        })
    }

    fn lookup_url(&self, title: &str) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("t", title)
            .append_pair("apikey", &self.api_key);
        url
    }
}

#[async_trait::async_trait]
impl MovieSource for OmdbSource {
    async fn find(&self, title: &str) -> Result<MovieDetails, UpstreamError> {
        let url = self.lookup_url(title);
        page_debug!("upstream GET {}?t={}", self.base, title);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let movie: MovieDetails = serde_json::from_slice(&bytes)?;
        if !movie.is_found() {
            return Err(UpstreamError::NotFound(
                movie.error.unwrap_or_else(|| title.to_string()),
            ));
        }
        Ok(movie)
    }
}
