use std::sync::Arc;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{PawtrailError, PawtrailResult};
use crate::geo::point::{LatLng, format_miles};
use crate::walk::model::{MediaKind, Walk};

/// Maximum number of photo thumbnails shown in a recap grid.
pub const MAX_RECAP_PHOTOS: usize = 6;

/// One labeled value in the recap stats panel.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecapStat {
    /// Short uppercase-ish label, e.g. "Distance".
    pub label: String,
    /// Formatted value, e.g. "1.82 mi".
    pub value: String,
}

/// Which recap arrangement to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RecapVariant {
    /// Full portrait recap: header, map, stats, notes, photo grid.
    Story,
    /// Landscape open-graph card: header and stats beside the map, no notes
    /// or photo grid.
    Card,
}

/// Logical input to the recap compositor. Pure data; all remote resources are
/// resolved separately by [`crate::recap::assets::RecapAssets`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RecapInput {
    /// Header title, e.g. "Walk with Bella & Max".
    pub title: String,
    /// Header subtitle, e.g. the walk date.
    pub subtitle: String,
    /// Small stamp line, e.g. the start time.
    pub stamp: String,
    /// Stats panel entries, in display order.
    pub stats: Vec<RecapStat>,
    /// Free-text notes (may be empty).
    pub notes: String,
    /// Route polyline used for the map slot.
    pub route: Vec<LatLng>,
    /// Photo URLs, in display order.
    pub photo_urls: Vec<String>,
}

impl RecapInput {
    /// Build the recap input for a walk record.
    pub fn from_walk(walk: &Walk) -> Self {
        let mut stats = vec![
            RecapStat {
                label: "Duration".to_string(),
                value: format!("{} min", walk.duration_minutes),
            },
            RecapStat {
                label: "Distance".to_string(),
                value: format_miles(walk.distance_meters),
            },
        ];
        if let Some(w) = &walk.weather {
            stats.push(RecapStat {
                label: "Weather".to_string(),
                value: format!("{}°F {}", w.temperature_f, w.summary),
            });
        }
        if walk.rate_per_hour.cents() > 0 {
            stats.push(RecapStat {
                label: "Earned".to_string(),
                value: walk.amount_due.display(),
            });
        }

        Self {
            title: walk.title(),
            subtitle: walk.created_at.format("%A, %B %-d, %Y").to_string(),
            stamp: walk.created_at.format("%-I:%M %p").to_string(),
            stats,
            notes: walk.notes.clone(),
            route: walk.route.clone(),
            photo_urls: walk
                .media
                .iter()
                .filter(|m| m.kind == MediaKind::Image)
                .take(MAX_RECAP_PHOTOS)
                .map(|m| m.url.clone())
                .collect(),
        }
    }

    /// Stable content hash of the logical input at a given output size, used
    /// as an HTTP ETag for rendered recaps.
    pub fn etag(&self, canvas: Canvas) -> String {
        let payload = serde_json::to_vec(self).unwrap_or_default();
        let mut h = xxhash_rust::xxh3::Xxh3::new();
        h.update(&payload);
        h.update(&canvas.width.to_le_bytes());
        h.update(&canvas.height.to_le_bytes());
        format!("\"{:016x}\"", h.digest())
    }
}

/// Colors, type scale, and font used by the compositor.
#[derive(Clone)]
pub struct RecapTheme {
    /// Output canvas size.
    pub canvas: Canvas,
    /// Page background.
    pub background: Rgba8,
    /// Panel/card fill behind stats and notes.
    pub card: Rgba8,
    /// Neutral fill for missing map tiles and photo slots.
    pub placeholder: Rgba8,
    /// Primary text color.
    pub text_primary: Rgba8,
    /// Muted text color for labels and stamps.
    pub text_muted: Rgba8,
    /// Corner radius for the map and photo cells, in pixels.
    pub corner_radius: f64,
    /// Raw TTF/OTF bytes for all recap text.
    pub font: Arc<Vec<u8>>,
}

impl std::fmt::Debug for RecapTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecapTheme")
            .field("canvas", &self.canvas)
            .field("font_bytes_len", &self.font.len())
            .finish_non_exhaustive()
    }
}

impl RecapTheme {
    /// Default theme at `canvas` size using the given font bytes.
    pub fn new(canvas: Canvas, font: Arc<Vec<u8>>) -> PawtrailResult<Self> {
        if font.is_empty() {
            return Err(PawtrailError::validation("theme font bytes are empty"));
        }
        Ok(Self {
            canvas,
            background: Rgba8::opaque(248, 246, 241),
            card: Rgba8::opaque(255, 255, 255),
            placeholder: Rgba8::opaque(224, 221, 214),
            text_primary: Rgba8::opaque(36, 33, 28),
            text_muted: Rgba8::opaque(128, 122, 112),
            corner_radius: f64::from(canvas.width) * 0.02,
            font,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/recap/model.rs"]
mod tests;
