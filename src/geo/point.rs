use crate::foundation::error::{PawtrailError, PawtrailResult};

/// Mean Earth radius in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Meters per statute mile.
const METERS_PER_MILE: f64 = 1_609.344;

/// Default minimum spacing between consecutive recorded route points.
pub const MIN_ROUTE_SPACING_METERS: f64 = 5.0;

/// A latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LatLng {
    /// Latitude in degrees, `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, `[-180, 180]`.
    pub lng: f64,
}

impl LatLng {
    /// Create a validated coordinate pair.
    pub fn new(lat: f64, lng: f64) -> PawtrailResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(PawtrailError::validation(format!(
                "latitude out of range: {lat}"
            )));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(PawtrailError::validation(format!(
                "longitude out of range: {lng}"
            )));
        }
        Ok(Self { lat, lng })
    }

    /// Validate an already-deserialized coordinate.
    pub fn validate(self) -> PawtrailResult<Self> {
        Self::new(self.lat, self.lng)
    }
}

/// Great-circle distance between two points in meters (haversine).
pub fn haversine_meters(a: LatLng, b: LatLng) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin() * (dlat / 2.0).sin()
        + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Thin a recorded route so consecutive points are at least
/// `min_spacing_meters` apart.
///
/// The first point is always kept. The final recorded point is always
/// preserved: when it lands closer than the spacing to the last kept point it
/// replaces that point's successor rather than being dropped, so the polyline
/// still ends where the walk ended.
pub fn thin_route(points: &[LatLng], min_spacing_meters: f64) -> Vec<LatLng> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(points.len());
    out.push(points[0]);

    for p in &points[1..points.len() - 1] {
        let last = out[out.len() - 1];
        if haversine_meters(last, *p) >= min_spacing_meters {
            out.push(*p);
        }
    }

    let tail = points[points.len() - 1];
    let last = out[out.len() - 1];
    if out.len() > 1 && haversine_meters(last, tail) < min_spacing_meters {
        let n = out.len();
        out[n - 1] = tail;
    } else {
        out.push(tail);
    }

    out
}

/// Total polyline length in meters.
pub fn route_distance_meters(points: &[LatLng]) -> f64 {
    points
        .windows(2)
        .map(|w| haversine_meters(w[0], w[1]))
        .sum()
}

/// Convert meters to statute miles.
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

/// Format a distance in meters as miles with two decimals, e.g. `"1.82 mi"`.
pub fn format_miles(meters: f64) -> String {
    format!("{:.2} mi", meters_to_miles(meters))
}

#[cfg(test)]
#[path = "../../tests/unit/geo/point.rs"]
mod tests;
