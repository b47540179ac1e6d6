use crate::api::types::{ArticleRecord, ArticlesResponse, GenresResponse};
use crate::config::Config;
use futures::StreamExt;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Generic message surfaced when a transport-level failure has no better
/// text to show the user.
pub const FETCH_FALLBACK_MESSAGE: &str = "An error occurred while fetching articles.";

/// Errors that can end a request to the article server.
///
/// Three of these mirror the failure classes the UI distinguishes:
/// [`ApiError::Network`]/[`ApiError::Timeout`] (transport),
/// [`ApiError::HttpStatus`] (non-2xx), and [`ApiError::Application`]
/// (an `error` field inside a 2xx response). The rest guard the client
/// itself. Failures are never retried; each one surfaces immediately as a
/// screen-local error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Server reported a failure in the response body despite a 2xx status
    #[error("{0}")]
    Application(String),
    /// Response body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Decode(String),
    /// Response body exceeded the configured size limit
    #[error("Response too large")]
    ResponseTooLarge,
    /// Configured base URL could not be used
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// The message a screen shows when this failure ends its fetch.
    ///
    /// Server-reported errors keep their own text; transport faults
    /// collapse to [`FETCH_FALLBACK_MESSAGE`].
    pub fn screen_message(&self) -> String {
        match self {
            ApiError::Application(message) => message.clone(),
            ApiError::Network(_) | ApiError::Timeout => FETCH_FALLBACK_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Shared HTTP client for the EDUScroll server.
///
/// The base URL is injected via [`Config`] — never hardcoded. Cloning is
/// cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    max_response_bytes: usize,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(format!(
                "unsupported scheme '{}'",
                base_url.scheme()
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("eduscroll/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            timeout: Duration::from_secs(config.request_timeout_secs),
            max_response_bytes: config.max_response_bytes,
        })
    }

    /// Fetch the server's genre vocabulary.
    pub async fn fetch_genres(&self) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint("api/genres");
        let response = self.send(self.http.get(&url)).await?;
        let parsed: GenresResponse = self.read_json(response).await?;
        tracing::debug!(count = parsed.genres.len(), "Fetched genre catalog");
        Ok(parsed.genres)
    }

    /// Fetch all articles matching a set of genres.
    ///
    /// Sends `{"genres": [...]}` as the POST body; an empty set is sent
    /// as-is and yields an empty article list from the server.
    pub async fn fetch_articles(&self, genres: &[String]) -> Result<Vec<ArticleRecord>, ApiError> {
        let url = self.endpoint("api/articles");
        let request = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "genres": genres }));
        let response = self.send(request).await?;
        self.read_articles(response).await
    }

    /// Fetch all articles of one genre via the legacy per-genre route.
    pub async fn fetch_articles_by_genre(
        &self,
        genre: &str,
    ) -> Result<Vec<ArticleRecord>, ApiError> {
        let url = self.endpoint(&format!("api/articles/{genre}"));
        let response = self.send(self.http.get(&url)).await?;
        self.read_articles(response).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = tokio::time::timeout(self.timeout, request.send())
            .await
            .map_err(|_| ApiError::Timeout)?
            .map_err(ApiError::Network)?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status().as_u16()));
        }
        Ok(response)
    }

    async fn read_articles(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<ArticleRecord>, ApiError> {
        let envelope: ArticlesResponse = self.read_json(response).await?;
        if let Some(message) = envelope.error {
            return Err(ApiError::Application(message));
        }
        envelope
            .articles
            .ok_or_else(|| ApiError::Decode("response carried neither articles nor error".into()))
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let bytes = self.read_limited(response).await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Read a response body with a streaming size cap.
    async fn read_limited(&self, response: reqwest::Response) -> Result<Vec<u8>, ApiError> {
        // Fast path: check Content-Length header
        if let Some(len) = response.content_length() {
            if len as usize > self.max_response_bytes {
                return Err(ApiError::ResponseTooLarge);
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(ApiError::Network)?;
            if bytes.len().saturating_add(chunk.len()) > self.max_response_bytes {
                return Err(ApiError::ResponseTooLarge);
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}
