//! Recap and open-graph image rendering.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::foundation::core::Canvas;
use crate::foundation::error::PawtrailError;
use crate::recap::assets::RecapAssets;
use crate::recap::compose::render_recap;
use crate::recap::encode::encode_png;
use crate::recap::layout::RecapLayout;
use crate::recap::model::{RecapInput, RecapTheme, RecapVariant};
use crate::server::AppState;
use crate::server::error::ApiError;
use crate::walk::model::{Walk, WalkId};

/// Default portrait recap canvas.
const RECAP_CANVAS: (u32, u32) = (1080, 1350);

/// Open-graph card canvas.
const OG_CANVAS: (u32, u32) = (1200, 630);

/// `GET /api/walks/{id}/recap.png`: render the shareable recap image.
pub async fn recap_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let walk = walk_for(&state, &id).await?;
    let canvas = Canvas::new(RECAP_CANVAS.0, RECAP_CANVAS.1)?;
    let input = RecapInput::from_walk(&walk);
    let etag = input.etag(canvas);

    if matches_etag(&headers, &etag) {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let png = render_png(&state, input, canvas, RecapVariant::Story).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::ETAG, etag),
        ],
        png,
    )
        .into_response())
}

/// `GET /api/walks/{id}/og.png`: render the open-graph card.
pub async fn og_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let walk = walk_for(&state, &id).await?;
    let canvas = Canvas::new(OG_CANVAS.0, OG_CANVAS.1)?;
    let input = RecapInput::from_walk(&walk);
    let etag = input.etag(canvas);

    if matches_etag(&headers, &etag) {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let png = render_png(&state, input, canvas, RecapVariant::Card).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::ETAG, etag),
        ],
        png,
    )
        .into_response())
}

/// `POST /api/walks/{id}/recap/share`: render the recap, persist it to the
/// object store, and record its public URL on the walk.
pub async fn share_recap(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Walk>), ApiError> {
    let walk = walk_for(&state, &id).await?;
    let canvas = Canvas::new(RECAP_CANVAS.0, RECAP_CANVAS.1)?;
    let input = RecapInput::from_walk(&walk);

    let png = render_png(&state, input, canvas, RecapVariant::Story).await?;
    let path = format!("walks/{}/recap.png", walk.id);
    let meta = state.objects.put(&path, &png, "image/png").await?;

    let url = state.objects.public_url(&meta.path);
    let updated = state.walks.set_recap_url(walk.id, url).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

async fn walk_for(state: &AppState, id: &str) -> Result<Walk, ApiError> {
    let id: WalkId = id.parse()?;
    state
        .walks
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("walk {id}")))
}

fn matches_etag(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == etag)
}

async fn render_png(
    state: &AppState,
    input: RecapInput,
    canvas: Canvas,
    variant: RecapVariant,
) -> Result<Vec<u8>, ApiError> {
    let layout = RecapLayout::solve(canvas, variant);
    let map_px = (
        layout.map.width().round() as u32,
        layout.map.height().round() as u32,
    );
    let assets = RecapAssets::prepare(&state.fetcher, &state.maps, &input, map_px).await;

    let theme = RecapTheme::new(canvas, state.recap_font.clone())?;
    let png = tokio::task::spawn_blocking(move || {
        let frame = render_recap(&input, &assets, &theme, variant)?;
        encode_png(&frame)
    })
    .await
    .map_err(|e| PawtrailError::render(format!("render task failed: {e}")))??;
    Ok(png)
}
