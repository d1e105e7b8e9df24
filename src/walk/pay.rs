use crate::foundation::error::{PawtrailError, PawtrailResult};

/// An exact currency amount in integer cents.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Money(pub i64);

impl Money {
    /// Build from whole dollars.
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    /// Build from a floating-point dollar amount, rounding half-up to the cent.
    pub fn from_dollars_f64(dollars: f64) -> PawtrailResult<Self> {
        if !dollars.is_finite() {
            return Err(PawtrailError::validation("amount must be finite"));
        }
        let cents = (dollars * 100.0).round();
        if cents.abs() > i64::MAX as f64 {
            return Err(PawtrailError::validation("amount out of range"));
        }
        Ok(Self(cents as i64))
    }

    /// Cents value.
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Format as `$12.34` (negative amounts as `-$12.34`).
    pub fn display(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

/// Amount due for a walk: `rate_per_hour * minutes / 60`, rounded half-up to
/// the nearest cent.
pub fn amount_due(rate_per_hour: Money, duration_minutes: u32) -> Money {
    let numer = rate_per_hour.0 as i128 * i128::from(duration_minutes);
    // Half-up on the positive domain; rates are validated non-negative upstream.
    let cents = (numer * 2 + 60) / 120;
    Money(cents as i64)
}

#[cfg(test)]
#[path = "../../tests/unit/walk/pay.rs"]
mod tests;
