use super::*;
use chrono::{TimeZone, Utc};

use crate::walk::model::{MediaKind, MediaReference, Walk, WalkId, WeatherSnapshot};
use crate::walk::pay::Money;

fn media(kind: MediaKind, url: &str) -> MediaReference {
    MediaReference {
        url: url.to_string(),
        storage_path: format!("walks/x/{url}"),
        kind,
        content_type: match kind {
            MediaKind::Image => "image/jpeg".to_string(),
            MediaKind::Video => "video/mp4".to_string(),
        },
        file_name: "f".to_string(),
        size_bytes: 1,
        uploaded_at: Utc::now(),
    }
}

fn walk() -> Walk {
    Walk {
        id: WalkId::generate(),
        dogs: vec!["Bella".to_string(), "Max".to_string()],
        duration_minutes: 45,
        route: vec![LatLng {
            lat: 45.52,
            lng: -122.68,
        }],
        distance_meters: 2_929.0,
        rate_per_hour: Money::from_dollars(30),
        amount_due: Money(2250),
        weather: Some(WeatherSnapshot {
            temperature_f: 62,
            summary: "Partly cloudy".to_string(),
        }),
        notes: "Good boy energy all around".to_string(),
        media: vec![
            media(MediaKind::Image, "https://cdn.example/a.jpg"),
            media(MediaKind::Video, "https://cdn.example/clip.mp4"),
            media(MediaKind::Image, "https://cdn.example/b.jpg"),
        ],
        recap_url: None,
        created_at: Utc.with_ymd_and_hms(2024, 5, 4, 17, 30, 0).unwrap(),
    }
}

#[test]
fn from_walk_builds_header_and_stats() {
    let input = RecapInput::from_walk(&walk());
    assert_eq!(input.title, "Walk with Bella & Max");
    assert_eq!(input.subtitle, "Saturday, May 4, 2024");

    let labels: Vec<&str> = input.stats.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["Duration", "Distance", "Weather", "Earned"]);

    let values: Vec<&str> = input.stats.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(values, ["45 min", "1.82 mi", "62°F Partly cloudy", "$22.50"]);
}

#[test]
fn from_walk_keeps_only_images_for_the_grid() {
    let input = RecapInput::from_walk(&walk());
    assert_eq!(
        input.photo_urls,
        ["https://cdn.example/a.jpg", "https://cdn.example/b.jpg"]
    );
}

#[test]
fn zero_rate_omits_the_pay_stat() {
    let mut w = walk();
    w.rate_per_hour = Money(0);
    let input = RecapInput::from_walk(&w);
    assert!(input.stats.iter().all(|s| s.label != "Earned"));
}

#[test]
fn etag_is_stable_and_size_sensitive() {
    let input = RecapInput::from_walk(&walk());
    let a = Canvas::new(1080, 1350).unwrap();
    let b = Canvas::new(1200, 630).unwrap();

    assert_eq!(input.etag(a), input.etag(a));
    assert_ne!(input.etag(a), input.etag(b));

    let mut other = input.clone();
    other.notes.push('!');
    assert_ne!(input.etag(a), other.etag(a));
}

#[test]
fn theme_rejects_empty_font() {
    let canvas = Canvas::new(1080, 1350).unwrap();
    assert!(RecapTheme::new(canvas, std::sync::Arc::new(Vec::new())).is_err());
    assert!(RecapTheme::new(canvas, std::sync::Arc::new(vec![0u8; 4])).is_ok());
}
