use chrono::{DateTime, Utc};

use crate::foundation::error::{PawtrailError, PawtrailResult};
use crate::geo::point::LatLng;
use crate::walk::pay::Money;

/// Maximum length of a sanitized upload filename.
const MAX_FILENAME_LEN: usize = 120;

/// Stable identifier for a [`Walk`] record.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct WalkId(pub uuid::Uuid);

impl WalkId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl std::fmt::Display for WalkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for WalkId {
    type Err = PawtrailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| PawtrailError::validation(format!("invalid walk id '{s}'")))
    }
}

/// Kind of an uploaded media object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Still image.
    Image,
    /// Video clip.
    Video,
}

impl MediaKind {
    /// Infer the media kind from a MIME type; unknown types are rejected.
    pub fn from_content_type(content_type: &str) -> PawtrailResult<Self> {
        let ct = content_type.trim().to_ascii_lowercase();
        if ct.starts_with("image/") {
            Ok(Self::Image)
        } else if ct.starts_with("video/") {
            Ok(Self::Video)
        } else {
            Err(PawtrailError::validation(format!(
                "unsupported media content type '{content_type}'"
            )))
        }
    }
}

/// Reference to a stored media object. Immutable once created; walks hold
/// references, never the bytes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MediaReference {
    /// Public URL the object is served from.
    pub url: String,
    /// Storage path within the object store.
    pub storage_path: String,
    /// Inferred media kind.
    pub kind: MediaKind,
    /// MIME content type supplied at upload.
    pub content_type: String,
    /// Sanitized original filename.
    pub file_name: String,
    /// Object size in bytes.
    pub size_bytes: u64,
    /// Upload timestamp.
    pub uploaded_at: DateTime<Utc>,
}

/// Weather observed at the start of a walk.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in degrees Fahrenheit, rounded to the nearest degree.
    pub temperature_f: i32,
    /// Short condition summary, e.g. "Partly cloudy".
    pub summary: String,
}

/// One recorded dog-walking session.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Walk {
    /// Record identifier.
    pub id: WalkId,
    /// Names of the dogs walked.
    pub dogs: Vec<String>,
    /// Walk duration in minutes.
    pub duration_minutes: u32,
    /// Thinned route polyline.
    pub route: Vec<LatLng>,
    /// Total route length in meters (derived from `route`).
    pub distance_meters: f64,
    /// Hourly rate in cents.
    pub rate_per_hour: Money,
    /// Computed amount due in cents.
    pub amount_due: Money,
    /// Weather snapshot, when one could be fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
    /// Free-text notes from the operator.
    #[serde(default)]
    pub notes: String,
    /// Uploaded media, in upload order.
    #[serde(default)]
    pub media: Vec<MediaReference>,
    /// Public URL of a shared recap image, once one was stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recap_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Walk {
    /// Validate record invariants after deserialization or construction.
    pub fn validate(&self) -> PawtrailResult<()> {
        if self.dogs.is_empty() || self.dogs.iter().any(|d| d.trim().is_empty()) {
            return Err(PawtrailError::validation(
                "walk must name at least one dog",
            ));
        }
        if self.duration_minutes == 0 {
            return Err(PawtrailError::validation("duration must be > 0 minutes"));
        }
        if self.rate_per_hour.cents() < 0 {
            return Err(PawtrailError::validation("rate must be >= 0"));
        }
        if !self.distance_meters.is_finite() || self.distance_meters < 0.0 {
            return Err(PawtrailError::validation("distance must be finite and >= 0"));
        }
        for p in &self.route {
            p.validate()?;
        }
        Ok(())
    }

    /// Title line used by list views and the recap header, e.g.
    /// `"Walk with Bella & Max"`.
    pub fn title(&self) -> String {
        format!("Walk with {}", join_names(&self.dogs))
    }
}

fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} & {last}", init.join(", ")),
    }
}

/// Sanitize an uploaded filename: strip any path components, collapse
/// whitespace to `_`, keep only `[A-Za-z0-9._-]`, and cap the length. The
/// result is never empty.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name);

    let mut out = String::with_capacity(base.len());
    for c in base.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            out.push(c);
        } else if c.is_whitespace() {
            out.push('_');
        }
    }

    let trimmed = out.trim_matches('.').to_string();
    let mut result = if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed
    };
    result.truncate(MAX_FILENAME_LEN);
    result
}

#[cfg(test)]
#[path = "../../tests/unit/walk/model.rs"]
mod tests;
