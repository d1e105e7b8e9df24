//! Weather lookup proxy.

use axum::Json;
use axum::extract::{Query, State};

use crate::geo::point::LatLng;
use crate::server::AppState;
use crate::server::error::ApiError;
use crate::walk::model::WeatherSnapshot;

/// Query parameters for `GET /api/weather`.
#[derive(Debug, serde::Deserialize)]
pub struct WeatherQuery {
    /// Latitude in degrees.
    pub lat: Option<f64>,
    /// Longitude in degrees.
    pub lng: Option<f64>,
}

/// `GET /api/weather?lat=..&lng=..`: current conditions at a point.
pub async fn weather_lookup(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherSnapshot>, ApiError> {
    let (Some(lat), Some(lng)) = (query.lat, query.lng) else {
        return Err(ApiError::bad_request("lat and lng are required"));
    };
    let at = LatLng::new(lat, lng)?;
    let snapshot = state.weather.current(at).await?;
    Ok(Json(snapshot))
}
