use super::*;

#[test]
fn temperature_conversion_hits_fixed_points() {
    assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
    assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
}

#[test]
fn known_codes_map_to_summaries() {
    assert_eq!(summary_for_code(0), "Clear sky");
    assert_eq!(summary_for_code(2), "Partly cloudy");
    assert_eq!(summary_for_code(45), "Fog");
    assert_eq!(summary_for_code(63), "Rain");
    assert_eq!(summary_for_code(75), "Snow");
    assert_eq!(summary_for_code(95), "Thunderstorm");
}

#[test]
fn unknown_codes_fall_back() {
    assert_eq!(summary_for_code(42), "Unknown conditions");
    assert_eq!(summary_for_code(255), "Unknown conditions");
}
