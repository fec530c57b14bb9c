//! Astronomia - astronomical coordinate transformations.
//!
//! Converts positions between the horizontal, hour-angle (`horario`),
//! equatorial (`ecuatorial`), ecliptic (`eclíptico`) and galactic
//! (`galáctico`) systems, accepting and producing radians, degrees, hours,
//! and sexagesimal triplets, for single values or batches.
//!
//! ```
//! use astronomia_rust::{transform, Angles, ContextParams, System, Unit};
//!
//! let (l, b) = transform(
//!     &Angles::from(0.0),
//!     &Angles::from(0.0),
//!     System::Equatorial,
//!     System::Galactic,
//!     Unit::Degree,
//!     Unit::Degree,
//!     &ContextParams::new(),
//! )?;
//! # let _ = (l, b);
//! # Ok::<(), astronomia_rust::TransformError>(())
//! ```

pub mod algorithms;
pub mod api;
pub mod config;
pub mod constants;
pub mod context;
pub mod core;
pub mod error;
pub mod transformations;
pub mod units;

pub use api::{transform, transform_request, TransformRequest, TransformResponse};
pub use context::{Context, ContextKey, ContextParams};
pub use crate::core::{AngleValue, Angles, Sexagesimal, System, Unit};
pub use error::{TransformError, TransformResult};
