use super::*;

fn p(lat: f64, lng: f64) -> LatLng {
    LatLng { lat, lng }
}

#[test]
fn latlng_validates_ranges() {
    assert!(LatLng::new(45.0, -122.0).is_ok());
    assert!(LatLng::new(90.1, 0.0).is_err());
    assert!(LatLng::new(0.0, -180.5).is_err());
    assert!(LatLng::new(f64::NAN, 0.0).is_err());
}

#[test]
fn haversine_matches_known_distance() {
    // One degree of longitude along the equator is ~111.19 km.
    let d = haversine_meters(p(0.0, 0.0), p(0.0, 1.0));
    assert!((d - 111_195.0).abs() < 200.0, "got {d}");
}

#[test]
fn haversine_is_symmetric_and_zero_on_identity() {
    let a = p(45.52, -122.68);
    let b = p(45.53, -122.70);
    assert_eq!(haversine_meters(a, a), 0.0);
    let ab = haversine_meters(a, b);
    let ba = haversine_meters(b, a);
    assert!((ab - ba).abs() < 1e-9);
}

#[test]
fn thinning_drops_clustered_points_and_keeps_endpoints() {
    // ~1.1 m per 1e-5 degree of latitude.
    let pts = vec![
        p(45.0, -122.0),
        p(45.000_01, -122.0), // ~1.1 m from start: dropped at 5 m spacing
        p(45.000_02, -122.0), // ~2.2 m: dropped
        p(45.001, -122.0),    // ~111 m: kept
        p(45.002, -122.0),    // kept as final point
    ];
    let thinned = thin_route(&pts, 5.0);
    assert_eq!(thinned.first(), Some(&pts[0]));
    assert_eq!(thinned.last(), Some(&pts[4]));
    assert_eq!(thinned.len(), 3);
    for w in thinned.windows(2).take(thinned.len().saturating_sub(2)) {
        assert!(haversine_meters(w[0], w[1]) >= 5.0);
    }
}

#[test]
fn thinning_preserves_tail_by_replacing_close_predecessor() {
    let pts = vec![
        p(45.0, -122.0),
        p(45.001, -122.0),
        p(45.001_01, -122.0), // ~1.1 m past the previous kept point
    ];
    let thinned = thin_route(&pts, 5.0);
    assert_eq!(thinned.last(), Some(&pts[2]));
    assert_eq!(thinned.len(), 2);
}

#[test]
fn thinning_passes_short_routes_through() {
    assert!(thin_route(&[], 5.0).is_empty());
    let one = vec![p(45.0, -122.0)];
    assert_eq!(thin_route(&one, 5.0), one);
    let two = vec![p(45.0, -122.0), p(45.000_001, -122.0)];
    assert_eq!(thin_route(&two, 5.0), two);
}

#[test]
fn route_distance_sums_segments() {
    assert_eq!(route_distance_meters(&[]), 0.0);
    assert_eq!(route_distance_meters(&[p(45.0, -122.0)]), 0.0);

    let pts = vec![p(0.0, 0.0), p(0.0, 0.5), p(0.0, 1.0)];
    let total = route_distance_meters(&pts);
    let direct = haversine_meters(pts[0], pts[2]);
    assert!((total - direct).abs() < 1.0);
}

#[test]
fn miles_formatting_rounds_to_two_decimals() {
    assert_eq!(format_miles(1_609.344), "1.00 mi");
    assert_eq!(format_miles(2_929.0), "1.82 mi");
    assert_eq!(format_miles(0.0), "0.00 mi");
}
