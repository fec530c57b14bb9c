//! Coordinate transformations between the five spherical systems.
//!
//! # Modules
//!
//! - [`spherical`]: pairwise formulas (Horizontal↔Horary, Horary↔Equatorial,
//!   Equatorial↔Ecliptic, Equatorial↔Galactic)
//! - [`router`]: hub-and-spoke composition through the equatorial system
//!
//! # Example
//!
//! ```
//! use astronomia_rust::context::Context;
//! use astronomia_rust::core::domain::System;
//! use astronomia_rust::transformations::Route;
//!
//! let route = Route::plan(System::Ecliptic, System::Galactic, &Context::new()).unwrap();
//! let (l, b) = route.apply(1.0, 0.2);
//! assert!(l >= 0.0 && b.abs() <= std::f64::consts::FRAC_PI_2);
//! ```

pub mod router;
pub mod spherical;


pub use router::{pivot, Route};
pub use spherical::{acos_clamped, asin_clamped};
