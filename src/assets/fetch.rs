use crate::foundation::error::{PawtrailError, PawtrailResult};

/// Default cap on fetched remote media bytes (16 MiB).
pub const MAX_FETCH_BYTES: usize = 16 * 1024 * 1024;

/// Allow-list of upstream storage hosts the media proxy will re-serve.
///
/// A URL is allowed when its host equals an entry or is a subdomain of one.
/// Only `http` and `https` schemes are considered.
#[derive(Clone, Debug, Default)]
pub struct HostAllowList {
    hosts: Vec<String>,
}

impl HostAllowList {
    /// Build from a list of hostnames (case-insensitive).
    pub fn new(hosts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            hosts: hosts
                .into_iter()
                .map(|h| h.into().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Validate `raw` as an allow-listed HTTP(S) URL and return it parsed.
    pub fn check(&self, raw: &str) -> PawtrailResult<url::Url> {
        let parsed = url::Url::parse(raw)
            .map_err(|_| PawtrailError::validation(format!("invalid url '{raw}'")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PawtrailError::validation(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        let host = parsed
            .host_str()
            .ok_or_else(|| PawtrailError::validation("url has no host"))?
            .to_ascii_lowercase();

        let allowed = self
            .hosts
            .iter()
            .any(|h| host == *h || host.ends_with(&format!(".{h}")));
        if !allowed {
            return Err(PawtrailError::forbidden(format!(
                "host '{host}' is not allow-listed"
            )));
        }

        Ok(parsed)
    }
}

/// Bytes plus the upstream-declared content type of a fetched resource.
#[derive(Clone, Debug)]
pub struct FetchedResource {
    /// Raw body bytes.
    pub bytes: bytes::Bytes,
    /// `Content-Type` header value, when the upstream sent one.
    pub content_type: Option<String>,
}

/// Size-bounded remote resource fetcher.
#[derive(Clone, Debug)]
pub struct RemoteFetcher {
    http: reqwest::Client,
    max_bytes: usize,
}

impl RemoteFetcher {
    /// Create a fetcher with the default size cap.
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            max_bytes: MAX_FETCH_BYTES,
        }
    }

    /// Override the per-resource size cap.
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// GET `url` and return its body. Upstream 404 maps to [`PawtrailError::NotFound`];
    /// other failures map to [`PawtrailError::Upstream`].
    pub async fn get(&self, url: &str) -> PawtrailResult<FetchedResource> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| PawtrailError::upstream(format!("fetch '{url}' failed: {e}")))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PawtrailError::not_found(format!("upstream 404 for '{url}'")));
        }
        if !status.is_success() {
            return Err(PawtrailError::upstream(format!(
                "upstream returned {status} for '{url}'"
            )));
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if let Some(len) = resp.content_length()
            && len as usize > self.max_bytes
        {
            return Err(PawtrailError::upstream(format!(
                "resource exceeds {} byte cap",
                self.max_bytes
            )));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| PawtrailError::upstream(format!("body read for '{url}' failed: {e}")))?;
        if bytes.len() > self.max_bytes {
            return Err(PawtrailError::upstream(format!(
                "resource exceeds {} byte cap",
                self.max_bytes
            )));
        }

        Ok(FetchedResource {
            bytes,
            content_type,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fetch.rs"]
mod tests;
