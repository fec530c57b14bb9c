//! Spherical ↔ rectangular coordinates for any of the spherical systems.

use serde::{Deserialize, Serialize};

use crate::transformations::spherical::asin_clamped;
use crate::units::normalize_rad;

/// Rectangular components. The x axis points to longitude 0, z to the pole.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Radius, longitude in `[0, 2π)` and latitude in `[−π/2, π/2]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SphericalPoint {
    pub r: f64,
    pub lon: f64,
    pub lat: f64,
}

pub fn spherical_to_cartesian(r: f64, lon: f64, lat: f64) -> Cartesian {
    let r_cos_lat = r * lat.cos();
    Cartesian {
        x: r_cos_lat * lon.cos(),
        y: r_cos_lat * lon.sin(),
        z: r * lat.sin(),
    }
}

/// Inverse of [`spherical_to_cartesian`]. The origin maps to all zeros.
pub fn cartesian_to_spherical(x: f64, y: f64, z: f64) -> SphericalPoint {
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return SphericalPoint::default();
    }
    SphericalPoint {
        r,
        lon: normalize_rad(y.atan2(x)),
        lat: asin_clamped(z / r),
    }
}

impl From<Cartesian> for SphericalPoint {
    fn from(c: Cartesian) -> Self {
        cartesian_to_spherical(c.x, c.y, c.z)
    }
}

impl From<SphericalPoint> for Cartesian {
    fn from(s: SphericalPoint) -> Self {
        spherical_to_cartesian(s.r, s.lon, s.lat)
    }
}
