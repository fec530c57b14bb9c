//! Core domain models for coordinate transformations.
//!
//! This module defines the closed set of coordinate systems and angular units
//! the engine understands, together with the value types that carry angles
//! across the public boundary.

pub mod domain;

pub use domain::{AngleValue, Angles, Sexagesimal, System, Unit};
