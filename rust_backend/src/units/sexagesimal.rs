//! Sexagesimal composition and decomposition.
//!
//! Works on decimal degrees or decimal hours; the caller decides which. The
//! sign of the angle lives on the leading component only.

use crate::core::domain::Sexagesimal;

/// Seconds closer than this to a full minute are carried over.
const CARRY_EPSILON: f64 = 1e-7;

/// Compose `(lead, minutes, seconds)` into a signed decimal value.
///
/// The magnitude is `|lead| + minutes/60 + seconds/3600`; the sign is taken
/// from `lead` (a negative zero counts as negative).
///
/// # Examples
///
/// ```
/// use astronomia_rust::core::domain::Sexagesimal;
/// use astronomia_rust::units::sexagesimal::compose;
///
/// assert_eq!(compose(&Sexagesimal::new(-12.0, 30.0, 0.0)), -12.5);
/// assert_eq!(compose(&Sexagesimal::new(-0.0, 30.0, 0.0)), -0.5);
/// ```
pub fn compose(s: &Sexagesimal) -> f64 {
    let magnitude = s.lead.abs() + s.minutes / 60.0 + s.seconds / 3600.0;
    if s.is_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Decompose a signed decimal value into `(lead, minutes, seconds)`.
///
/// The magnitude is truncated to an integer lead, then to integer minutes;
/// the remainder is kept as fractional seconds. The sign is reattached to
/// the lead only, using a negative zero when `|value| < 1`.
pub fn decompose(value: f64) -> Sexagesimal {
    let negative = value.is_sign_negative();
    let magnitude = value.abs();

    let mut lead = magnitude.trunc();
    let rem = (magnitude - lead) * 60.0;
    let mut minutes = rem.trunc();
    let mut seconds = (rem - minutes) * 60.0;

    // Truncation of values like 29.999999999999996 leaves ~60″ behind
    if seconds >= 60.0 - CARRY_EPSILON {
        seconds = 0.0;
        minutes += 1.0;
    }
    if minutes >= 60.0 {
        minutes -= 60.0;
        lead += 1.0;
    }

    Sexagesimal::new(if negative { -lead } else { lead }, minutes, seconds.max(0.0))
}
