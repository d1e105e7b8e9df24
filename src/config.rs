use std::env;
use std::path::PathBuf;

use anyhow::Result;
use dotenvy::dotenv;

/// Runtime configuration loaded from the environment (with `.env` support).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to.
    pub bind_addr: String,
    /// Public origin used when minting media URLs, no trailing slash.
    pub public_base_url: String,
    /// Root directory for filesystem-backed stores.
    pub data_dir: PathBuf,
    /// Base URL of the weather API.
    pub weather_base_url: String,
    /// Base URL of the static-map image API.
    pub staticmap_base_url: String,
    /// Optional static-map API key.
    pub staticmap_api_key: Option<String>,
    /// Storage hosts the media proxy will re-serve.
    pub allowed_media_hosts: Vec<String>,
    /// Path to the TTF/OTF used for recap text.
    pub font_path: PathBuf,
    /// Tracing env-filter directive.
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from the environment.
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let bind_addr =
            env::var("PAWTRAIL_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let public_base_url = env::var("PAWTRAIL_PUBLIC_URL")
            .unwrap_or_else(|_| format!("http://{bind_addr}"))
            .trim_end_matches('/')
            .to_string();
        let data_dir = env::var("PAWTRAIL_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let weather_base_url = env::var("PAWTRAIL_WEATHER_URL")
            .unwrap_or_else(|_| "https://api.open-meteo.com".to_string());
        let staticmap_base_url = env::var("PAWTRAIL_STATICMAP_URL")
            .unwrap_or_else(|_| "https://maps.googleapis.com/maps/api/staticmap".to_string());
        let staticmap_api_key = env::var("PAWTRAIL_STATICMAP_KEY").ok().filter(|k| !k.is_empty());

        let allowed_media_hosts = env::var("PAWTRAIL_ALLOWED_MEDIA_HOSTS")
            .unwrap_or_else(|_| {
                "firebasestorage.googleapis.com,storage.googleapis.com".to_string()
            })
            .split(',')
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .collect();

        let font_path = env::var("PAWTRAIL_FONT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("assets/fonts/recap.ttf"));

        let log_filter = env::var("PAWTRAIL_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            bind_addr,
            public_base_url,
            data_dir,
            weather_base_url,
            staticmap_base_url,
            staticmap_api_key,
            allowed_media_hosts,
            font_path,
            log_filter,
        })
    }
}
