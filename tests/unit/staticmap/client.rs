use super::*;

fn client(key: Option<&str>) -> StaticMapClient {
    StaticMapClient::new(
        reqwest::Client::new(),
        "https://maps.example.com/staticmap",
        key.map(str::to_string),
    )
}

#[test]
fn map_url_carries_size_and_encoded_path() {
    let route = vec![
        LatLng {
            lat: 38.5,
            lng: -120.2,
        },
        LatLng {
            lat: 40.7,
            lng: -120.95,
        },
    ];
    let url = client(None).map_url(&route, 960, 405);
    assert!(url.starts_with("https://maps.example.com/staticmap?size=960x405&path=enc%3A"));
    assert!(!url.contains("key="));
    // No center or zoom: the upstream fits bounds to the path.
    assert!(!url.contains("center="));
    assert!(!url.contains("zoom="));
}

#[test]
fn map_url_appends_api_key_when_configured() {
    let route = vec![LatLng { lat: 1.0, lng: 2.0 }];
    let url = client(Some("secret123")).map_url(&route, 100, 100);
    assert!(url.ends_with("&key=secret123"));
}

#[test]
fn polyline_special_characters_are_percent_encoded() {
    // This route encodes to polyline text containing '~' and '|'.
    let route = vec![
        LatLng {
            lat: 38.5,
            lng: -120.2,
        },
        LatLng {
            lat: 40.7,
            lng: -120.95,
        },
        LatLng {
            lat: 43.252,
            lng: -126.453,
        },
    ];
    let url = client(None).map_url(&route, 100, 100);
    let query = url.split_once('?').map(|(_, q)| q).unwrap_or_default();
    assert!(!query.contains('~'));
    assert!(!query.contains('|'));
}
