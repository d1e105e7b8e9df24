//! Walk record CRUD.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::Utc;
use tracing::warn;

use crate::geo::point::{LatLng, MIN_ROUTE_SPACING_METERS, route_distance_meters, thin_route};
use crate::server::AppState;
use crate::server::error::ApiError;
use crate::walk::model::{Walk, WalkId, WeatherSnapshot};
use crate::walk::pay::{Money, amount_due};

/// Default and maximum page sizes for walk listing.
const DEFAULT_LIST_LIMIT: usize = 20;
const MAX_LIST_LIMIT: usize = 100;

/// Request body for `POST /api/walks`.
#[derive(Debug, serde::Deserialize)]
pub struct CreateWalkRequest {
    /// Names of the dogs walked.
    pub dogs: Vec<String>,
    /// Duration in minutes.
    pub duration_minutes: u32,
    /// Hourly rate in dollars.
    #[serde(default)]
    pub rate_per_hour: f64,
    /// Operator notes.
    #[serde(default)]
    pub notes: String,
    /// Raw recorded route, pre-thinning.
    #[serde(default)]
    pub route: Vec<LatLng>,
    /// Client-supplied weather snapshot; fetched server-side when absent.
    #[serde(default)]
    pub weather: Option<WeatherSnapshot>,
}

/// Query parameters for `GET /api/walks`.
#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    /// Page size, defaulting to 20 and capped at 100.
    pub limit: Option<usize>,
}

/// `POST /api/walks`: create a walk record.
///
/// The server thins the recorded route, derives distance and the amount due,
/// and best-effort fetches a weather snapshot for the route start when the
/// client did not supply one.
pub async fn create_walk(
    State(state): State<AppState>,
    Json(req): Json<CreateWalkRequest>,
) -> Result<(StatusCode, Json<Walk>), ApiError> {
    for p in &req.route {
        p.validate()?;
    }
    let route = thin_route(&req.route, MIN_ROUTE_SPACING_METERS);
    let distance_meters = route_distance_meters(&route);
    let rate = Money::from_dollars_f64(req.rate_per_hour)?;

    let weather = match req.weather {
        Some(snapshot) => Some(snapshot),
        None => match route.first() {
            Some(start) => match state.weather.current(*start).await {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    warn!(error = %e, "weather lookup failed; storing walk without snapshot");
                    None
                }
            },
            None => None,
        },
    };

    let walk = Walk {
        id: WalkId::generate(),
        dogs: req.dogs,
        duration_minutes: req.duration_minutes,
        route,
        distance_meters,
        rate_per_hour: rate,
        amount_due: amount_due(rate, req.duration_minutes),
        weather,
        notes: req.notes,
        media: Vec::new(),
        recap_url: None,
        created_at: Utc::now(),
    };
    walk.validate()?;

    state.walks.insert(&walk).await?;
    Ok((StatusCode::CREATED, Json(walk)))
}

/// `GET /api/walks`: list recent walks, newest first.
pub async fn list_walks(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Walk>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT);
    let walks = state.walks.list(limit).await?;
    Ok(Json(walks))
}

/// `GET /api/walks/{id}`: walk-detail JSON.
pub async fn get_walk(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Walk>, ApiError> {
    let id: WalkId = id.parse()?;
    let walk = state
        .walks
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("walk {id}")))?;
    Ok(Json(walk))
}
