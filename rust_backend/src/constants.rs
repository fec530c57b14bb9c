//! Fixed astronomical constants used by the transformation engine.
//!
//! All angles are stored in radians. The galactic pole values are the J2000
//! ones; the obliquity is the standard J2000 mean value.

use std::f64::consts::PI;

const DEG_TO_RAD: f64 = PI / 180.0;

/// Mean obliquity of the ecliptic at J2000.0, 23°26′21.448″, in radians.
pub const EPSILON_J2000: f64 = (23.0 + 26.0 / 60.0 + 21.448 / 3600.0) * DEG_TO_RAD;

/// Right ascension of the north galactic pole (J2000), 192.85948°.
pub const GALACTIC_POLE_RA: f64 = 192.85948 * DEG_TO_RAD;

/// Declination of the north galactic pole (J2000), 27.12825°.
pub const GALACTIC_POLE_DEC: f64 = 27.12825 * DEG_TO_RAD;

/// Galactic longitude of the ascending node of the galactic plane, 32.93192°.
pub const GALACTIC_NODE_LON: f64 = 32.93192 * DEG_TO_RAD;

/// Degrees of arc per hour of right ascension / hour angle.
pub const DEGREES_PER_HOUR: f64 = 15.0;

// Earth ellipsoid (IAU 1976)

/// Equatorial radius of the Earth in km.
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.140;

/// Flattening of the Earth ellipsoid.
pub const EARTH_FLATTENING: f64 = 1.0 / 298.257;

/// First eccentricity squared, `f (2 − f)`.
pub const EARTH_ECCENTRICITY_SQ: f64 = EARTH_FLATTENING * (2.0 - EARTH_FLATTENING);
