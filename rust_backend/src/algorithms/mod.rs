//! Standalone astronomical tools built on the transformation engine.
//!
//! # Components
//!
//! - [`astrotools`]: angular distance and rise/set visibility
//! - [`cartesian`]: spherical ↔ rectangular coordinates
//! - [`geodesy`]: geocentric radius and latitude of an observer
//!
//! # Example
//!
//! ```
//! use astronomia_rust::algorithms::{visibility, Visibility};
//!
//! let v = visibility(40.0_f64.to_radians(), 70.0_f64.to_radians());
//! assert_eq!(v, Visibility::AlwaysVisible);
//! ```

pub mod astrotools;
pub mod cartesian;
pub mod geodesy;

pub use astrotools::{angular_distance, visibility, Visibility};
pub use cartesian::{cartesian_to_spherical, spherical_to_cartesian, Cartesian, SphericalPoint};
pub use geodesy::{terrestrial_radius, terrestrial_radius_on, Ellipsoid, GeocentricPosition};
