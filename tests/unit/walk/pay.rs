use super::*;

#[test]
fn amount_due_prorates_hourly_rate() {
    let rate = Money::from_dollars(30);
    assert_eq!(amount_due(rate, 60), Money(3000));
    assert_eq!(amount_due(rate, 45), Money(2250));
    assert_eq!(amount_due(rate, 30), Money(1500));
    assert_eq!(amount_due(rate, 0), Money(0));
}

#[test]
fn amount_due_rounds_half_up_to_the_cent() {
    // 10.01/hour for 30 minutes is 500.5 cents.
    assert_eq!(amount_due(Money(1001), 30), Money(501));
    // 0.01/hour for 1 minute is 0.0166 cents.
    assert_eq!(amount_due(Money(1), 1), Money(0));
    // 0.50/hour for 1 minute is 0.8333 cents.
    assert_eq!(amount_due(Money(50), 1), Money(1));
}

#[test]
fn from_dollars_f64_rounds_to_cents() {
    assert_eq!(Money::from_dollars_f64(22.5).unwrap(), Money(2250));
    assert_eq!(Money::from_dollars_f64(29.999).unwrap(), Money(3000));
    assert!(Money::from_dollars_f64(f64::NAN).is_err());
    assert!(Money::from_dollars_f64(f64::INFINITY).is_err());
}

#[test]
fn display_formats_dollars_and_cents() {
    assert_eq!(Money(2250).display(), "$22.50");
    assert_eq!(Money(5).display(), "$0.05");
    assert_eq!(Money(0).display(), "$0.00");
    assert_eq!(Money(-1999).display(), "-$19.99");
}
