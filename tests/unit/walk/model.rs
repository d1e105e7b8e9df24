use super::*;
use crate::walk::pay::Money;

fn base_walk() -> Walk {
    Walk {
        id: WalkId::generate(),
        dogs: vec!["Bella".to_string()],
        duration_minutes: 45,
        route: Vec::new(),
        distance_meters: 0.0,
        rate_per_hour: Money::from_dollars(30),
        amount_due: Money(2250),
        weather: None,
        notes: String::new(),
        media: Vec::new(),
        recap_url: None,
        created_at: Utc::now(),
    }
}

#[test]
fn media_kind_inferred_from_content_type() {
    assert_eq!(
        MediaKind::from_content_type("image/jpeg").unwrap(),
        MediaKind::Image
    );
    assert_eq!(
        MediaKind::from_content_type("VIDEO/mp4").unwrap(),
        MediaKind::Video
    );
    assert!(MediaKind::from_content_type("text/plain").is_err());
    assert!(MediaKind::from_content_type("").is_err());
}

#[test]
fn title_joins_dog_names() {
    let mut walk = base_walk();
    assert_eq!(walk.title(), "Walk with Bella");

    walk.dogs.push("Max".to_string());
    assert_eq!(walk.title(), "Walk with Bella & Max");

    walk.dogs.insert(1, "Rex".to_string());
    assert_eq!(walk.title(), "Walk with Bella, Rex & Max");
}

#[test]
fn validate_rejects_bad_records() {
    let mut walk = base_walk();
    walk.dogs.clear();
    assert!(walk.validate().is_err());

    let mut walk = base_walk();
    walk.duration_minutes = 0;
    assert!(walk.validate().is_err());

    let mut walk = base_walk();
    walk.rate_per_hour = Money(-1);
    assert!(walk.validate().is_err());

    let mut walk = base_walk();
    walk.route.push(LatLng {
        lat: 95.0,
        lng: 0.0,
    });
    assert!(walk.validate().is_err());

    assert!(base_walk().validate().is_ok());
}

#[test]
fn walk_round_trips_through_json() {
    let walk = base_walk();
    let json = serde_json::to_string(&walk).unwrap();
    let back: Walk = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, walk.id);
    assert_eq!(back.dogs, walk.dogs);
    assert_eq!(back.amount_due, walk.amount_due);
}

#[test]
fn sanitize_strips_paths_and_odd_characters() {
    assert_eq!(sanitize_file_name("../etc/pass wd.png"), "pass_wd.png");
    assert_eq!(sanitize_file_name("C:\\photos\\dog pic.JPG"), "dog_pic.JPG");
    assert_eq!(sanitize_file_name("héllo❤.mov"), "hllo.mov");
    assert_eq!(sanitize_file_name("..."), "upload");
    assert_eq!(sanitize_file_name(""), "upload");
}

#[test]
fn sanitize_never_returns_empty_and_caps_length() {
    let long = "a".repeat(500);
    let out = sanitize_file_name(&long);
    assert!(!out.is_empty());
    assert!(out.len() <= 120);
}

#[test]
fn walk_id_parses_and_rejects_garbage() {
    let id = WalkId::generate();
    let parsed: WalkId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    assert!("not-a-uuid".parse::<WalkId>().is_err());
}
