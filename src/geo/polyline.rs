use crate::geo::point::LatLng;

/// Encode a route using the Google encoded-polyline algorithm format
/// (precision 1e-5).
///
/// Static-map services accept this as a compact `path` parameter and fit the
/// viewport to it automatically.
pub fn encode_polyline(points: &[LatLng]) -> String {
    let mut out = String::with_capacity(points.len() * 8);
    let mut prev_lat = 0i64;
    let mut prev_lng = 0i64;

    for p in points {
        let lat = (p.lat * 1e5).round() as i64;
        let lng = (p.lng * 1e5).round() as i64;
        encode_value(lat - prev_lat, &mut out);
        encode_value(lng - prev_lng, &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

fn encode_value(delta: i64, out: &mut String) {
    // Zigzag: left-shift and invert for negatives so small magnitudes stay small.
    let mut v = if delta < 0 { !(delta << 1) } else { delta << 1 } as u64;
    while v >= 0x20 {
        out.push((((0x20 | (v & 0x1f)) + 63) as u8) as char);
        v >>= 5;
    }
    out.push(((v + 63) as u8) as char);
}

#[cfg(test)]
#[path = "../../tests/unit/geo/polyline.rs"]
mod tests;
