use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::foundation::error::{PawtrailError, PawtrailResult};
use crate::geo::point::LatLng;
use crate::geo::polyline::encode_polyline;

/// Client for the third-party static-map image API.
///
/// Requests carry only a size and an encoded route path; omitting center and
/// zoom makes the upstream fit the viewport to the path automatically.
#[derive(Clone, Debug)]
pub struct StaticMapClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl StaticMapClient {
    /// Create a client against `base_url` (no trailing query).
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Build the request URL for a rendered map of `route` at `width`×`height`.
    pub fn map_url(&self, route: &[LatLng], width: u32, height: u32) -> String {
        let path = encode_polyline(route);
        let encoded = utf8_percent_encode(&path, NON_ALPHANUMERIC);
        let mut url = format!(
            "{}?size={width}x{height}&path=enc%3A{encoded}",
            self.base_url
        );
        if let Some(key) = &self.api_key {
            url.push_str("&key=");
            url.push_str(key);
        }
        url
    }

    /// Fetch the rendered map image bytes for `route`.
    pub async fn fetch_map(
        &self,
        route: &[LatLng],
        width: u32,
        height: u32,
    ) -> PawtrailResult<Vec<u8>> {
        if route.is_empty() {
            return Err(PawtrailError::validation("route is empty"));
        }
        let url = self.map_url(route, width, height);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PawtrailError::upstream(format!("static map fetch failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(PawtrailError::upstream(format!(
                "static map service returned {}",
                resp.status()
            )));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| PawtrailError::upstream(format!("static map body read failed: {e}")))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/staticmap/client.rs"]
mod tests;
