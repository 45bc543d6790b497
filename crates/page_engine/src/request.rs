use std::time::Duration;

use futures_util::StreamExt;
use page_logging::{page_debug, page_warn};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::{decode_text, FailureKind, FetchError, LoadedResponse};

#[derive(Debug, Clone)]
pub struct RequestSettings {
    /// Origin that relative request paths are resolved against.
    pub origin: String,
    pub connect_timeout: Option<Duration>,
    /// Whole-request deadline; `None` leaves it to the network stack.
    pub request_timeout: Option<Duration>,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            origin: "http://127.0.0.1:35000/".to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait Requester: Send + Sync {
    /// GET `url` (absolute, or relative to the page origin). Any HTTP status
    /// counts as loaded; only transport failures are errors.
    async fn get(&self, url: &str) -> Result<LoadedResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestRequester {
    origin: Url,
    client: reqwest::Client,
}

impl ReqwestRequester {
    pub fn new(settings: RequestSettings) -> Result<Self, FetchError> {
        let origin = Url::parse(&settings.origin)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { origin, client })
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    fn resolve(&self, url: &str) -> Result<Url, FetchError> {
        self.origin
            .join(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Requester for ReqwestRequester {
    async fn get(&self, url: &str) -> Result<LoadedResponse, FetchError> {
        let resolved = self.resolve(url)?;
        page_debug!("GET {}", resolved);

        let response = self
            .client
            .get(resolved)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            bytes.extend_from_slice(&chunk);
        }

        let (body, encoding_label) = match decode_text(&bytes, content_type.as_deref()) {
            Ok(decoded) => (decoded.text, decoded.encoding_label),
            Err(err) => {
                page_warn!("{} from {}; falling back to lossy UTF-8", err, final_url);
                (
                    String::from_utf8_lossy(&bytes).into_owned(),
                    "UTF-8".to_string(),
                )
            }
        };

        Ok(LoadedResponse {
            url: final_url,
            status,
            content_type,
            encoding_label,
            body,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
