//! Pairwise spherical-trigonometry transformations.
//!
//! Every function works on radians and returns `(longitude-like,
//! latitude-like)`. Longitude-like outputs (H, A, α, λ, l) are wrapped into
//! `[0, 2π)`; latitude-like outputs (δ, β, b, z) are returned as produced by
//! the inverse trig function. Horizontal coordinates are `(A, z)` with the
//! azimuth counted from the south through the west and `z` the zenith
//! distance.

use crate::constants::{GALACTIC_NODE_LON, GALACTIC_POLE_DEC, GALACTIC_POLE_RA};
use crate::units::normalize_rad;

/// `asin` with its argument clamped into `[-1, 1]`.
///
/// Rounding can push a sine a few ulps past ±1 near the poles; plain `asin`
/// would return NaN there.
#[inline]
pub fn asin_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

/// `acos` with its argument clamped into `[-1, 1]`.
#[inline]
pub fn acos_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// Horizontal `(A, z)` → hour-angle `(H, δ)` at latitude `phi`.
pub fn horizontal_to_horary(azimuth: f64, zenith: f64, phi: f64) -> (f64, f64) {
    let (sin_a, cos_a) = azimuth.sin_cos();
    let (sin_z, cos_z) = zenith.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    let dec = asin_clamped(-sin_z * cos_a * cos_phi + cos_z * sin_phi);
    let hour_angle = (sin_z * sin_a).atan2(sin_z * cos_a * sin_phi + cos_z * cos_phi);

    (normalize_rad(hour_angle), dec)
}

/// Hour-angle `(H, δ)` → horizontal `(A, z)` at latitude `phi`.
pub fn horary_to_horizontal(hour_angle: f64, dec: f64, phi: f64) -> (f64, f64) {
    let (sin_h, cos_h) = hour_angle.sin_cos();
    let (sin_d, cos_d) = dec.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    let zenith = acos_clamped(cos_d * cos_h * cos_phi + sin_d * sin_phi);
    let azimuth = (cos_d * sin_h).atan2(cos_d * cos_h * sin_phi - sin_d * cos_phi);

    (normalize_rad(azimuth), zenith)
}

/// Hour-angle `(H, δ)` → equatorial `(α, δ)`: `α = TS − H`.
pub fn horary_to_equatorial(hour_angle: f64, dec: f64, sidereal_time: f64) -> (f64, f64) {
    (normalize_rad(sidereal_time - hour_angle), dec)
}

/// Equatorial `(α, δ)` → hour-angle `(H, δ)`: `H = TS − α`.
pub fn equatorial_to_horary(ra: f64, dec: f64, sidereal_time: f64) -> (f64, f64) {
    (normalize_rad(sidereal_time - ra), dec)
}

/// Equatorial `(α, δ)` → ecliptic `(λ, β)` for obliquity `epsilon`.
pub fn equatorial_to_ecliptic(ra: f64, dec: f64, epsilon: f64) -> (f64, f64) {
    let (sin_ra, cos_ra) = ra.sin_cos();
    let (sin_d, cos_d) = dec.sin_cos();
    let (sin_e, cos_e) = epsilon.sin_cos();

    let lat = asin_clamped(-cos_d * sin_ra * sin_e + sin_d * cos_e);
    let lon = (cos_d * sin_ra * cos_e + sin_d * sin_e).atan2(cos_d * cos_ra);

    (normalize_rad(lon), lat)
}

/// Ecliptic `(λ, β)` → equatorial `(α, δ)` for obliquity `epsilon`.
pub fn ecliptic_to_equatorial(lon: f64, lat: f64, epsilon: f64) -> (f64, f64) {
    let (sin_l, cos_l) = lon.sin_cos();
    let (sin_b, cos_b) = lat.sin_cos();
    let (sin_e, cos_e) = epsilon.sin_cos();

    let dec = asin_clamped(cos_b * sin_l * sin_e + sin_b * cos_e);
    let ra = (cos_b * sin_l * cos_e - sin_b * sin_e).atan2(cos_b * cos_l);

    (normalize_rad(ra), dec)
}

/// Equatorial `(α, δ)` → galactic `(l, b)` using the J2000 pole.
pub fn equatorial_to_galactic(ra: f64, dec: f64) -> (f64, f64) {
    let (sin_dp, cos_dp) = GALACTIC_POLE_DEC.sin_cos();
    let (sin_d, cos_d) = dec.sin_cos();
    let (sin_da, cos_da) = (ra - GALACTIC_POLE_RA).sin_cos();

    let lat = asin_clamped(sin_d * sin_dp + cos_d * cos_dp * cos_da);
    let lon = GALACTIC_NODE_LON - (cos_d * sin_da).atan2(sin_d * cos_dp - cos_d * sin_dp * cos_da);

    (normalize_rad(lon), lat)
}

/// Galactic `(l, b)` → equatorial `(α, δ)`, the exact inverse of
/// [`equatorial_to_galactic`].
///
/// The pole triangle is symmetric: with `θ = l_node − l` the roles of
/// `(α − αp, δ)` and `(θ, b)` swap.
pub fn galactic_to_equatorial(lon: f64, lat: f64) -> (f64, f64) {
    let (sin_dp, cos_dp) = GALACTIC_POLE_DEC.sin_cos();
    let (sin_b, cos_b) = lat.sin_cos();
    let (sin_t, cos_t) = (GALACTIC_NODE_LON - lon).sin_cos();

    let dec = asin_clamped(sin_b * sin_dp + cos_b * cos_dp * cos_t);
    let ra = GALACTIC_POLE_RA + (cos_b * sin_t).atan2(sin_b * cos_dp - cos_b * sin_dp * cos_t);

    (normalize_rad(ra), dec)
}
