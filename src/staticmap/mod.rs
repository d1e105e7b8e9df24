//! Static-map image API client.

/// Static-map HTTP client.
pub mod client;
