//! End-to-end tests of the public `transform` entry point.
//!
//! Expected values are evaluated directly from the spherical-trigonometry
//! identities, independently of the library's routing.

use approx::assert_abs_diff_eq;
use std::f64::consts::TAU;

use astronomia_rust::constants::{GALACTIC_NODE_LON, GALACTIC_POLE_DEC, GALACTIC_POLE_RA};
use astronomia_rust::{
    transform, transform_request, AngleValue, Angles, ContextKey, ContextParams, Sexagesimal,
    System, TransformError, TransformRequest, Unit,
};

fn decimal(angles: &Angles) -> f64 {
    angles
        .as_single()
        .and_then(|v| v.as_decimal())
        .expect("single decimal value")
}

fn triplet(angles: &Angles) -> Sexagesimal {
    angles
        .as_single()
        .and_then(|v| v.as_sexagesimal())
        .expect("single sexagesimal value")
}

fn observer() -> ContextParams {
    ContextParams::from_pairs([("phi_deg", 40.0), ("TS_h", 5.0)])
}

#[test]
fn test_horizontal_to_equatorial_example() {
    let (ra, dec) = transform(
        &Angles::from(200.0),
        &Angles::from(30.0),
        System::Horizontal,
        System::Equatorial,
        Unit::Degree,
        Unit::Degree,
        &observer(),
    )
    .unwrap();

    let phi = 40.0_f64.to_radians();
    let z = 60.0_f64.to_radians();
    let a = 200.0_f64.to_radians();
    let ts = 75.0_f64.to_radians();
    let sin_dec = -z.sin() * a.cos() * phi.cos() + z.cos() * phi.sin();
    let h = (z.sin() * a.sin()).atan2(z.sin() * a.cos() * phi.sin() + z.cos() * phi.cos());
    let expected_ra = (ts - h).rem_euclid(TAU).to_degrees();
    let expected_dec = sin_dec.asin().to_degrees();

    assert_abs_diff_eq!(decimal(&ra), expected_ra, epsilon = 1e-9);
    assert_abs_diff_eq!(decimal(&dec), expected_dec, epsilon = 1e-9);

    // Reference values for this configuration
    assert_abs_diff_eq!(decimal(&ra), 190.310_217_546, epsilon = 1e-6);
    assert_abs_diff_eq!(decimal(&dec), 70.873_767_138, epsilon = 1e-6);
}

#[test]
fn test_equatorial_to_galactic_at_origin() {
    let (l, b) = transform(
        &Angles::from(0.0),
        &Angles::from(0.0),
        System::Equatorial,
        System::Galactic,
        Unit::Radian,
        Unit::Radian,
        &ContextParams::new(),
    )
    .unwrap();

    let expected_b = (GALACTIC_POLE_DEC.cos() * GALACTIC_POLE_RA.cos()).asin();
    let expected_l = (GALACTIC_NODE_LON
        - (-GALACTIC_POLE_RA.sin()).atan2(-GALACTIC_POLE_DEC.sin() * GALACTIC_POLE_RA.cos()))
    .rem_euclid(TAU);

    assert_abs_diff_eq!(decimal(&b), expected_b, epsilon = 1e-12);
    assert_abs_diff_eq!(decimal(&l), expected_l, epsilon = 1e-12);
    assert_abs_diff_eq!(decimal(&b).to_degrees(), -60.188_553, epsilon = 1e-5);
}

#[test]
fn test_missing_sidereal_time_names_ts() {
    let err = transform(
        &Angles::from(1.0),
        &Angles::from(0.5),
        System::Horary,
        System::Equatorial,
        Unit::Hour,
        Unit::Degree,
        &ContextParams::new(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        TransformError::MissingContextParameter {
            key: ContextKey::SiderealTime,
            system: System::Horary,
        }
    );
    assert!(err.to_string().contains("'TS'"));
}

#[test]
fn test_missing_latitude_for_horizontal_destination() {
    let err = transform(
        &Angles::from(0.0),
        &Angles::from(0.0),
        System::Ecliptic,
        System::Horizontal,
        Unit::Degree,
        Unit::Degree,
        &ContextParams::from_pairs([("TS", 1.0)]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        TransformError::MissingContextParameter {
            key: ContextKey::Latitude,
            system: System::Horizontal,
        }
    );
}

#[test]
fn test_identity_only_changes_units() {
    let (c1, c2) = transform(
        &Angles::from([12.0, 30.0, 0.0]),
        &Angles::from([-0.0, 30.0, 0.0]),
        System::Galactic,
        System::Galactic,
        Unit::DegreeMinuteSecond,
        Unit::Degree,
        &ContextParams::new(),
    )
    .unwrap();
    assert_abs_diff_eq!(decimal(&c1), 12.5, epsilon = 1e-12);
    assert_abs_diff_eq!(decimal(&c2), -0.5, epsilon = 1e-12);
}

#[test]
fn test_sexagesimal_in_and_out() {
    // α = 5h30m, TS = 6h30m → H = 1h
    let (h, dec) = transform(
        &Angles::from([5.0, 30.0, 0.0]),
        &Angles::from([-0.0, 45.0, 0.0]),
        System::Equatorial,
        System::Horary,
        Unit::HourMinuteSecond,
        Unit::HourMinuteSecond,
        &ContextParams::from_pairs([("TS_h", 6.5)]),
    )
    .unwrap();

    let h = triplet(&h);
    assert_eq!(h.lead, 1.0);
    assert_eq!(h.minutes, 0.0);
    assert_abs_diff_eq!(h.seconds, 0.0, epsilon = 1e-6);

    // A negative latitude in hms wraps into [0, 24h): −0h45m → 23h15m
    let dec = triplet(&dec);
    assert_eq!(dec.lead, 23.0);
    assert_eq!(dec.minutes, 15.0);
}

#[test]
fn test_dms_output_keeps_sign_of_latitude() {
    let (_, lat) = transform(
        &Angles::from(0.0),
        &Angles::from(-10.25),
        System::Equatorial,
        System::Equatorial,
        Unit::Degree,
        Unit::DegreeMinuteSecond,
        &ContextParams::new(),
    )
    .unwrap();
    let lat = triplet(&lat);
    assert_eq!(lat.lead, -10.0);
    assert_eq!(lat.minutes, 15.0);
    assert_abs_diff_eq!(lat.seconds, 0.0, epsilon = 1e-6);
}

#[test]
fn test_horizontal_altitude_roundtrip() {
    let params = observer();
    let (ra, dec) = transform(
        &Angles::from(123.0),
        &Angles::from(-12.0),
        System::Horizontal,
        System::Ecliptic,
        Unit::Degree,
        Unit::Degree,
        &params,
    )
    .unwrap();
    let (az, alt) = transform(
        &ra,
        &dec,
        System::Ecliptic,
        System::Horizontal,
        Unit::Degree,
        Unit::Degree,
        &params,
    )
    .unwrap();
    assert_abs_diff_eq!(decimal(&az), 123.0, epsilon = 1e-8);
    assert_abs_diff_eq!(decimal(&alt), -12.0, epsilon = 1e-8);
}

#[test]
fn test_batch_transform_matches_scalar_calls() {
    let lons = vec![10.0, 100.0, 250.0];
    let lats = vec![-20.0, 5.0, 60.0];
    let (out1, out2) = transform(
        &Angles::from(lons.clone()),
        &Angles::from(lats.clone()),
        System::Ecliptic,
        System::Galactic,
        Unit::Degree,
        Unit::Degree,
        &ContextParams::new(),
    )
    .unwrap();
    assert_eq!(out1.len(), 3);

    for (i, (lon, lat)) in lons.iter().zip(&lats).enumerate() {
        let (s1, s2) = transform(
            &Angles::from(*lon),
            &Angles::from(*lat),
            System::Ecliptic,
            System::Galactic,
            Unit::Degree,
            Unit::Degree,
            &ContextParams::new(),
        )
        .unwrap();
        assert_eq!(out1.get(i), s1.as_single());
        assert_eq!(out2.get(i), s2.as_single());
    }
}

#[test]
fn test_custom_obliquity_changes_result() {
    let run = |params: &ContextParams| {
        transform(
            &Angles::from(90.0),
            &Angles::from(0.0),
            System::Equatorial,
            System::Ecliptic,
            Unit::Degree,
            Unit::Degree,
            params,
        )
        .unwrap()
    };
    let (_, beta_default) = run(&ContextParams::new());
    let (_, beta_custom) = run(&ContextParams::new().with_obliquity_deg(10.0));
    assert_abs_diff_eq!(decimal(&beta_default), -23.439_291, epsilon = 1e-5);
    assert_abs_diff_eq!(decimal(&beta_custom), -10.0, epsilon = 1e-9);
}

#[test]
fn test_request_from_json() {
    let request: TransformRequest = serde_json::from_str(
        r#"{
            "c1": [200.0, 210.0],
            "c2": 30.0,
            "origin": "horizontal",
            "destination": "ecuatorial",
            "input_unit": "deg",
            "output_unit": "hour",
            "context": {"phi_deg": 40.0, "TS_h": 5.0}
        }"#,
    )
    .unwrap();

    let response = transform_request(&request).unwrap();
    assert_eq!(response.system, System::Equatorial);
    assert_eq!(response.unit, Unit::Hour);
    assert_eq!(response.c1.len(), 2);
    match response.c1.get(0) {
        Some(AngleValue::Decimal(hours)) => {
            assert_abs_diff_eq!(hours, 12.687_347_836, epsilon = 1e-6)
        }
        other => panic!("unexpected {:?}", other),
    }
}
