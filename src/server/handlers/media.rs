//! Media upload, same-origin proxy, and local object serving.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use chrono::Utc;

use crate::server::AppState;
use crate::server::error::ApiError;
use crate::walk::model::{MediaKind, MediaReference, Walk, WalkId, sanitize_file_name};

/// Query parameters for `POST /api/walks/{id}/media`.
#[derive(Debug, serde::Deserialize)]
pub struct UploadQuery {
    /// Original client filename.
    pub filename: Option<String>,
}

/// Query parameters for `GET /api/media/proxy`.
#[derive(Debug, serde::Deserialize)]
pub struct ProxyQuery {
    /// Remote URL to re-serve.
    pub url: Option<String>,
}

/// `POST /api/walks/{id}/media`: upload raw media bytes and attach the
/// resulting reference to the walk.
pub async fn upload_media(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<UploadQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Walk>), ApiError> {
    let id: WalkId = id.parse()?;
    if body.is_empty() {
        return Err(ApiError::bad_request("upload body is empty"));
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::bad_request("Content-Type header is required"))?
        .to_string();
    let kind = MediaKind::from_content_type(&content_type)?;

    // Reject uploads against unknown walks before touching storage.
    state
        .walks
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("walk {id}")))?;

    let file_name = sanitize_file_name(query.filename.as_deref().unwrap_or("upload"));
    let storage_path = format!("walks/{id}/{}_{file_name}", uuid::Uuid::new_v4());
    let meta = state.objects.put(&storage_path, &body, &content_type).await?;

    let media = MediaReference {
        url: state.objects.public_url(&meta.path),
        storage_path: meta.path,
        kind,
        content_type,
        file_name,
        size_bytes: meta.size,
        uploaded_at: Utc::now(),
    };
    let walk = state.walks.attach_media(id, media).await?;
    Ok((StatusCode::CREATED, Json(walk)))
}

/// `GET /api/media/proxy?url=..`: re-serve an allow-listed storage URL from
/// this origin so browsers can draw it onto a canvas.
pub async fn media_proxy(
    State(state): State<AppState>,
    Query(query): Query<ProxyQuery>,
) -> Result<Response, ApiError> {
    let raw = query
        .url
        .ok_or_else(|| ApiError::bad_request("url parameter is required"))?;
    let checked = state.allow_list.check(&raw)?;

    let fetched = state.fetcher.get(checked.as_str()).await?;
    let content_type = fetched
        .content_type
        .unwrap_or_else(|| "application/octet-stream".to_string());

    Ok(([(header::CONTENT_TYPE, content_type)], fetched.bytes).into_response())
}

/// `GET /media/{*path}`: serve local object-store content.
pub async fn serve_media(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let (data, meta) = state
        .objects
        .get(&path)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("media '{path}'")))?;

    Ok(([(header::CONTENT_TYPE, meta.content_type)], data).into_response())
}
