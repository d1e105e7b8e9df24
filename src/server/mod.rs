//! HTTP surface: a handful of JSON and image routes over the domain services.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

use crate::assets::fetch::{HostAllowList, RemoteFetcher};
use crate::assets::font::load_font_bytes;
use crate::config::AppConfig;
use crate::foundation::error::PawtrailResult;
use crate::staticmap::client::StaticMapClient;
use crate::store::objects::{FsObjectStore, ObjectStore};
use crate::store::walks::{FsWalkStore, WalkStore};
use crate::weather::client::WeatherClient;

pub mod error;
pub mod handlers;

/// Shared application state threaded through all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Walk record store.
    pub walks: Arc<dyn WalkStore>,
    /// Media object store.
    pub objects: Arc<dyn ObjectStore>,
    /// Weather API client.
    pub weather: WeatherClient,
    /// Static-map API client.
    pub maps: StaticMapClient,
    /// Bounded remote fetcher used by the proxy and the recap compositor.
    pub fetcher: RemoteFetcher,
    /// Hosts the media proxy will re-serve.
    pub allow_list: HostAllowList,
    /// Font bytes for recap text.
    pub recap_font: Arc<Vec<u8>>,
}

/// Build the application router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/walks",
            post(handlers::walks::create_walk).get(handlers::walks::list_walks),
        )
        .route("/api/walks/{id}", get(handlers::walks::get_walk))
        .route("/api/walks/{id}/media", post(handlers::media::upload_media))
        .route("/api/walks/{id}/recap.png", get(handlers::recap::recap_image))
        .route("/api/walks/{id}/og.png", get(handlers::recap::og_image))
        .route(
            "/api/walks/{id}/recap/share",
            post(handlers::recap::share_recap),
        )
        .route("/api/weather", get(handlers::weather::weather_lookup))
        .route("/api/media/proxy", get(handlers::media::media_proxy))
        .route("/media/{*path}", get(handlers::media::serve_media))
        .layer(TimeoutLayer::new(Duration::from_secs(60)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Construct state from config and run the server until shutdown.
pub async fn serve(config: AppConfig) -> PawtrailResult<()> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(20))
        .build()
        .context("build http client")?;

    let state = AppState {
        walks: Arc::new(FsWalkStore::new(config.data_dir.join("walks"))),
        objects: Arc::new(FsObjectStore::new(
            config.data_dir.join("objects"),
            config.public_base_url.clone(),
        )),
        weather: WeatherClient::new(http.clone(), config.weather_base_url.clone()),
        maps: StaticMapClient::new(
            http.clone(),
            config.staticmap_base_url.clone(),
            config.staticmap_api_key.clone(),
        ),
        fetcher: RemoteFetcher::new(http),
        allow_list: HostAllowList::new(config.allowed_media_hosts.clone()),
        recap_font: Arc::new(load_font_bytes(Some(&config.font_path))?),
    };

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("bind '{}'", config.bind_addr))?;
    info!(addr = %config.bind_addr, "pawtrail listening");

    axum::serve(listener, app).await.context("serve http")?;
    Ok(())
}
