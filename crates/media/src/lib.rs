//! Photo materialization: best-effort upload of inline image data to an
//! external media host.
//!
//! [`MediaHost`] POSTs `data:image/...` payloads to a configured upload
//! endpoint and substitutes the hosted URL it returns. Per-item failures
//! keep the original entry; nothing here ever aborts a request.

use std::time::Duration;

use serde::Deserialize;

/// HTTP request timeout for a single upload attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Inline image payloads start with a `data:image/` scheme.
pub fn is_inline_image(entry: &str) -> bool {
    entry.starts_with("data:image/")
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for upload failures. Callers swallow these per item.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote host returned a non-2xx status code.
    #[error("Media host returned HTTP {0}")]
    HttpStatus(u16),

    /// The host answered 2xx but the body carried no usable URL.
    #[error("Media host response carried no URL")]
    MissingUrl,
}

/// Upload endpoint response. Hosts answer with `secure_url`, falling back
/// to `url`.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
}

// ---------------------------------------------------------------------------
// MediaHost
// ---------------------------------------------------------------------------

/// Media host client, configured once at startup from the environment.
pub struct MediaHost {
    client: reqwest::Client,
    upload_url: String,
    api_key: Option<String>,
}

impl MediaHost {
    /// Build a client from `MEDIA_UPLOAD_URL` plus an optional
    /// `MEDIA_API_KEY` bearer credential.
    ///
    /// Returns `None` when no upload endpoint is configured, which
    /// disables materialization entirely.
    pub fn from_env() -> Option<Self> {
        let upload_url = std::env::var("MEDIA_UPLOAD_URL").ok()?;
        let api_key = std::env::var("MEDIA_API_KEY").ok();
        Some(Self::new(upload_url, api_key))
    }

    pub fn new(upload_url: String, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            upload_url,
            api_key,
        }
    }

    /// Replace inline image entries with hosted URLs, best effort.
    ///
    /// Hosted URLs and other plain strings pass through unchanged. Upload
    /// failures keep the original entry and are logged, never returned.
    pub async fn materialize(&self, photos: Vec<String>) -> Vec<String> {
        let mut out = Vec::with_capacity(photos.len());
        for entry in photos {
            if !is_inline_image(&entry) {
                out.push(entry);
                continue;
            }
            match self.upload(&entry).await {
                Ok(url) => out.push(url),
                Err(e) => {
                    tracing::warn!(error = %e, "Photo upload failed, keeping inline entry");
                    out.push(entry);
                }
            }
        }
        out
    }

    /// Execute a single upload and extract the hosted URL.
    async fn upload(&self, data_uri: &str) -> Result<String, MediaError> {
        let payload = serde_json::json!({ "file": data_uri });
        let mut request = self.client.post(&self.upload_url).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(MediaError::HttpStatus(response.status().as_u16()));
        }
        let body: UploadResponse = response.json().await?;
        body.secure_url.or(body.url).ok_or(MediaError::MissingUrl)
    }
}

/// Run materialization when a host is configured; without one, photos pass
/// through untouched and no upload is ever attempted.
pub async fn materialize_photos(host: Option<&MediaHost>, photos: Vec<String>) -> Vec<String> {
    match host {
        Some(host) => host.materialize(photos).await,
        None => photos,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
