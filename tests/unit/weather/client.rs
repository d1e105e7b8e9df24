use super::*;

#[test]
fn upstream_payload_parses_and_converts() {
    let json = r#"{
        "latitude": 45.52,
        "longitude": -122.68,
        "current_weather": {
            "temperature": 20.0,
            "windspeed": 7.2,
            "weathercode": 2,
            "time": "2024-05-04T17:00"
        }
    }"#;
    let parsed: WeatherResponse = serde_json::from_str(json).unwrap();
    let snapshot = snapshot_from(parsed.current_weather);
    assert_eq!(snapshot.temperature_f, 68);
    assert_eq!(snapshot.summary, "Partly cloudy");
}

#[test]
fn negative_temperatures_round_to_nearest_degree() {
    let current = CurrentWeather {
        temperature: -5.3,
        weathercode: 71,
    };
    let snapshot = snapshot_from(current);
    assert_eq!(snapshot.temperature_f, 22);
    assert_eq!(snapshot.summary, "Snow");
}

#[test]
fn missing_current_weather_is_a_parse_error() {
    let json = r#"{"latitude": 1.0, "longitude": 2.0}"#;
    assert!(serde_json::from_str::<WeatherResponse>(json).is_err());
}
