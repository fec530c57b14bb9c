//! Observer position on the terrestrial ellipsoid.

use qtty::{Kilometer, Meters};
use serde::{Deserialize, Serialize};

use crate::constants::{EARTH_EQUATORIAL_RADIUS_KM, EARTH_FLATTENING};

/// Reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Equatorial radius, km.
    pub equatorial_radius_km: f64,
    pub flattening: f64,
}

impl Ellipsoid {
    /// IAU 1976 ellipsoid.
    pub const IAU_1976: Ellipsoid = Ellipsoid {
        equatorial_radius_km: EARTH_EQUATORIAL_RADIUS_KM,
        flattening: EARTH_FLATTENING,
    };

    /// First eccentricity squared, `f (2 − f)`.
    pub fn eccentricity_sq(&self) -> f64 {
        self.flattening * (2.0 - self.flattening)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::IAU_1976
    }
}

/// Geocentric position of an observer in the meridian plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeocentricPosition {
    /// Distance to the Earth's centre, km.
    pub rho_km: f64,
    /// Geocentric latitude φ′, radians.
    pub latitude: f64,
    /// Component in the equatorial plane, km (`ρ cos φ′`).
    pub x_km: f64,
    /// Component along the rotation axis, km (`ρ sin φ′`).
    pub z_km: f64,
}

/// Geocentric distance and latitude of an observer at geodetic latitude
/// `phi_geodetic` (radians) and height `height_m` (metres above the
/// ellipsoid), on the IAU 1976 ellipsoid.
pub fn terrestrial_radius(phi_geodetic: f64, height_m: f64) -> GeocentricPosition {
    terrestrial_radius_on(&Ellipsoid::IAU_1976, phi_geodetic, height_m)
}

/// [`terrestrial_radius`] on an arbitrary ellipsoid.
pub fn terrestrial_radius_on(
    ellipsoid: &Ellipsoid,
    phi_geodetic: f64,
    height_m: f64,
) -> GeocentricPosition {
    let a = ellipsoid.equatorial_radius_km;
    let f = ellipsoid.flattening;
    let (sin_phi, cos_phi) = phi_geodetic.sin_cos();

    let c = 1.0 / (1.0 - ellipsoid.eccentricity_sq() * sin_phi * sin_phi).sqrt();
    let s = c * (1.0 - f) * (1.0 - f);
    let h_km = Meters::new(height_m).to::<Kilometer>().value();

    let x_km = (a * c + h_km) * cos_phi;
    let z_km = (a * s + h_km) * sin_phi;

    GeocentricPosition {
        rho_km: x_km.hypot(z_km),
        latitude: z_km.atan2(x_km),
        x_km,
        z_km,
    }
}
