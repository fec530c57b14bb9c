//! Conversion between external angular units and radians.
//!
//! Everything inside the engine is a radian `f64`; units only exist at the
//! boundary. Scaling goes through `qtty` quantities so the degree/hour
//! factors come from one place.
//!
//! | Unit   | Ingress                      | Egress                                 |
//! |--------|------------------------------|----------------------------------------|
//! | `rad`  | identity                     | identity                               |
//! | `deg`  | `v · π/180`                  | `v · 180/π`, range as computed         |
//! | `hour` | `v · 15 · π/180`             | hours taken modulo 24 into `[0, 24)`   |
//! | `dms`  | signed triplet → degrees     | signed degrees → triplet               |
//! | `hms`  | signed triplet → hours       | angle wrapped to `[0, 2π)` → triplet   |

pub mod sexagesimal;

use std::f64::consts::TAU;

use qtty::{Degree, Degrees, HourAngle, HourAngles, Radian, Radians};

use crate::core::domain::{AngleValue, Angles, Sexagesimal, Unit};
use crate::error::{TransformError, TransformResult};

/// Hours in a full turn.
const HOURS_PER_TURN: f64 = 24.0;

/// Wrap a radian angle into `[0, 2π)`.
///
/// # Examples
///
/// ```
/// use astronomia_rust::units::normalize_rad;
/// use std::f64::consts::PI;
///
/// assert!((normalize_rad(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
/// assert!(normalize_rad(-1e-18) < 2.0 * PI);
/// ```
#[inline]
pub fn normalize_rad(angle: f64) -> f64 {
    let wrapped = Radians::new(angle).wrap_pos().value();
    // rem_euclid of a tiny negative number rounds up to exactly TAU
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Convert one external value to radians.
///
/// Fails with [`TransformError::UnitMismatch`] when a triplet is given for a
/// decimal unit or a decimal number for a sexagesimal unit.
pub fn to_radians(value: &AngleValue, unit: Unit) -> TransformResult<f64> {
    match (unit, value) {
        (Unit::Radian, AngleValue::Decimal(v)) => Ok(*v),
        (Unit::Degree, AngleValue::Decimal(v)) => Ok(Degrees::new(*v).to::<Radian>().value()),
        (Unit::Hour, AngleValue::Decimal(v)) => Ok(HourAngles::new(*v).to::<Radian>().value()),
        (Unit::DegreeMinuteSecond, AngleValue::Sexagesimal(s)) => {
            Ok(Degrees::new(sexagesimal::compose(s)).to::<Radian>().value())
        }
        (Unit::HourMinuteSecond, AngleValue::Sexagesimal(s)) => {
            Ok(HourAngles::new(sexagesimal::compose(s)).to::<Radian>().value())
        }
        (unit, AngleValue::Sexagesimal(s)) => Err(TransformError::UnitMismatch {
            unit,
            reason: format!("got triplet {} for a decimal unit", s),
        }),
        (unit, AngleValue::Decimal(v)) => Err(TransformError::UnitMismatch {
            unit,
            reason: format!("got decimal {} where a (lead, minutes, seconds) triplet is required", v),
        }),
    }
}

/// Convert one radian value to the external representation of `unit`.
pub fn from_radians(angle: f64, unit: Unit) -> AngleValue {
    match unit {
        Unit::Radian => AngleValue::Decimal(angle),
        Unit::Degree => AngleValue::Decimal(Radians::new(angle).to::<Degree>().value()),
        Unit::Hour => AngleValue::Decimal(wrap_hours(
            Radians::new(angle).to::<HourAngle>().value(),
        )),
        Unit::DegreeMinuteSecond => AngleValue::Sexagesimal(sexagesimal::decompose(
            Radians::new(angle).to::<Degree>().value(),
        )),
        Unit::HourMinuteSecond => {
            let hours = Radians::new(normalize_rad(angle)).to::<HourAngle>().value();
            AngleValue::Sexagesimal(wrap_lead_hours(sexagesimal::decompose(hours)))
        }
    }
}

/// Convert every element of `angles` to radians, failing on the first bad one.
pub fn angles_to_radians(angles: &Angles, unit: Unit) -> TransformResult<Vec<f64>> {
    angles.iter().map(|v| to_radians(&v, unit)).collect()
}

/// Convert radians back to `unit`, keeping the scalar/batch shape requested.
pub fn radians_to_angles(values: &[f64], unit: Unit, batch: bool) -> Angles {
    let mut converted: Vec<AngleValue> = values.iter().map(|v| from_radians(*v, unit)).collect();
    if !batch && converted.len() == 1 {
        if let Some(single) = converted.pop() {
            return Angles::Single(single);
        }
    }
    Angles::Batch(converted)
}

fn wrap_hours(hours: f64) -> f64 {
    let wrapped = hours.rem_euclid(HOURS_PER_TURN);
    if wrapped >= HOURS_PER_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Carry in `decompose` can produce 24h00m00s from 23h59m59.99999999s.
fn wrap_lead_hours(s: Sexagesimal) -> Sexagesimal {
    if s.lead >= HOURS_PER_TURN {
        Sexagesimal::new(s.lead - HOURS_PER_TURN, s.minutes, s.seconds)
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn decimal(v: AngleValue) -> f64 {
        v.as_decimal().expect("decimal value")
    }

    #[test]
    fn test_radian_identity() {
        assert_eq!(to_radians(&AngleValue::Decimal(1.25), Unit::Radian).unwrap(), 1.25);
        assert_eq!(decimal(from_radians(-4.0, Unit::Radian)), -4.0);
    }

    #[test]
    fn test_degrees() {
        let r = to_radians(&AngleValue::Decimal(180.0), Unit::Degree).unwrap();
        assert_abs_diff_eq!(r, PI, epsilon = 1e-12);
        // Egress does not force a range
        assert_abs_diff_eq!(decimal(from_radians(-PI / 4.0, Unit::Degree)), -45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hours() {
        let r = to_radians(&AngleValue::Decimal(6.0), Unit::Hour).unwrap();
        assert_abs_diff_eq!(r, PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(decimal(from_radians(-PI / 2.0, Unit::Hour)), 18.0, epsilon = 1e-12);
        assert_abs_diff_eq!(decimal(from_radians(5.0 * PI, Unit::Hour)), 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dms_keeps_sign() {
        let r = to_radians(&AngleValue::from([-23.0, 26.0, 21.448]), Unit::DegreeMinuteSecond)
            .unwrap();
        assert!(r < 0.0);
        let back = from_radians(r, Unit::DegreeMinuteSecond).as_sexagesimal().unwrap();
        assert_eq!(back.lead, -23.0);
        assert_eq!(back.minutes, 26.0);
        assert_abs_diff_eq!(back.seconds, 21.448, epsilon = 1e-6);
    }

    #[test]
    fn test_hms_normalizes_range() {
        let s = from_radians(-PI / 12.0, Unit::HourMinuteSecond)
            .as_sexagesimal()
            .unwrap();
        assert_eq!(s.lead, 23.0);
        assert_eq!(s.minutes, 0.0);
        assert_abs_diff_eq!(s.seconds, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_hms_ingress() {
        let r = to_radians(&AngleValue::from([5.0, 30.0, 0.0]), Unit::HourMinuteSecond).unwrap();
        assert_abs_diff_eq!(r, (5.5_f64 * 15.0).to_radians(), epsilon = 1e-12);
    }

    #[test]
    fn test_shape_mismatch() {
        assert!(matches!(
            to_radians(&AngleValue::Decimal(1.0), Unit::DegreeMinuteSecond),
            Err(TransformError::UnitMismatch { unit: Unit::DegreeMinuteSecond, .. })
        ));
        assert!(matches!(
            to_radians(&AngleValue::from([1.0, 0.0, 0.0]), Unit::Degree),
            Err(TransformError::UnitMismatch { unit: Unit::Degree, .. })
        ));
    }

    #[test]
    fn test_normalize_rad() {
        assert_abs_diff_eq!(normalize_rad(3.0 * PI), PI, epsilon = 1e-12);
        assert_eq!(normalize_rad(0.0), 0.0);
        assert!(normalize_rad(-f64::EPSILON) < TAU);
    }

    #[test]
    fn test_batch_shape_preserved() {
        let angles = Angles::from(vec![0.0, 90.0]);
        let rad = angles_to_radians(&angles, Unit::Degree).unwrap();
        assert_eq!(rad.len(), 2);
        let back = radians_to_angles(&rad, Unit::Degree, true);
        assert!(back.is_batch());

        let single = radians_to_angles(&[0.5], Unit::Radian, false);
        assert_eq!(single, Angles::Single(AngleValue::Decimal(0.5)));
    }

    proptest! {
        #[test]
        fn prop_degree_roundtrip(angle in -720.0..720.0f64) {
            let r = to_radians(&AngleValue::Decimal(angle), Unit::Degree).unwrap();
            prop_assert!((decimal(from_radians(r, Unit::Degree)) - angle).abs() < 1e-9);
        }

        #[test]
        fn prop_hour_roundtrip(hours in 0.0..24.0f64) {
            let r = to_radians(&AngleValue::Decimal(hours), Unit::Hour).unwrap();
            let back = decimal(from_radians(r, Unit::Hour));
            let diff = (back - hours).abs();
            prop_assert!(diff < 1e-9 || (diff - 24.0).abs() < 1e-9);
        }

        #[test]
        fn prop_dms_roundtrip(angle in -360.0..360.0f64) {
            let r = to_radians(&AngleValue::Decimal(angle), Unit::Degree).unwrap();
            let dms = from_radians(r, Unit::DegreeMinuteSecond);
            let back = to_radians(&dms, Unit::DegreeMinuteSecond).unwrap();
            prop_assert!((back - r).abs() < 1e-9);
        }

        #[test]
        fn prop_hms_roundtrip(angle in 0.0..TAU) {
            let hms = from_radians(angle, Unit::HourMinuteSecond);
            let s = hms.as_sexagesimal().unwrap();
            prop_assert!(s.lead >= 0.0 && s.lead < 24.0);
            let back = to_radians(&hms, Unit::HourMinuteSecond).unwrap();
            let diff = (back - angle).abs();
            prop_assert!(diff < 1e-9 || (diff - TAU).abs() < 1e-9);
        }
    }
}
