//! Public transformation entry point.
//!
//! [`transform`] drives the whole pipeline for one request:
//!
//! 1. resolve the context parameters into radians;
//! 2. convert both input coordinates to radians (every element, before any
//!    routing starts);
//! 3. for a Horizontal origin, replace the altitude by the zenith distance;
//! 4. route origin → equatorial → destination;
//! 5. for a Horizontal destination, replace the zenith distance by the
//!    altitude;
//! 6. convert both outputs to the requested unit.
//!
//! A single value paired with a batch is broadcast to the batch length.

use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use crate::context::ContextParams;
use crate::core::domain::{Angles, System, Unit};
use crate::error::{TransformError, TransformResult};
use crate::transformations::Route;
use crate::units;

/// One transformation request, as accepted by [`transform_request`].
///
/// Units default to radians and the context to empty when omitted from the
/// serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRequest {
    pub c1: Angles,
    pub c2: Angles,
    pub origin: System,
    pub destination: System,
    #[serde(default)]
    pub input_unit: Unit,
    #[serde(default)]
    pub output_unit: Unit,
    #[serde(default)]
    pub context: ContextParams,
}

impl TransformRequest {
    pub fn new(
        c1: impl Into<Angles>,
        c2: impl Into<Angles>,
        origin: System,
        destination: System,
    ) -> Self {
        Self {
            c1: c1.into(),
            c2: c2.into(),
            origin,
            destination,
            input_unit: Unit::default(),
            output_unit: Unit::default(),
            context: ContextParams::default(),
        }
    }

    pub fn with_units(mut self, input_unit: Unit, output_unit: Unit) -> Self {
        self.input_unit = input_unit;
        self.output_unit = output_unit;
        self
    }

    pub fn with_context(mut self, context: ContextParams) -> Self {
        self.context = context;
        self
    }
}

/// Output coordinates, tagged with their system and unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformResponse {
    pub c1: Angles,
    pub c2: Angles,
    pub system: System,
    pub unit: Unit,
}

/// Run a [`TransformRequest`].
pub fn transform_request(request: &TransformRequest) -> TransformResult<TransformResponse> {
    let (c1, c2) = transform(
        &request.c1,
        &request.c2,
        request.origin,
        request.destination,
        request.input_unit,
        request.output_unit,
        &request.context,
    )?;
    Ok(TransformResponse {
        c1,
        c2,
        system: request.destination,
        unit: request.output_unit,
    })
}

/// Transform the coordinate pair `(c1, c2)` from `origin` to `destination`.
///
/// For Horizontal, `c2` is the altitude on both input and output.
///
/// # Arguments
/// * `c1`, `c2` - First and second coordinate, scalar or batch, in `input_unit`
/// * `origin`, `destination` - Coordinate systems
/// * `input_unit`, `output_unit` - External units of the inputs and outputs
/// * `params` - Context parameters (`phi`, `TS`, `epsilon` and their
///   suffixed forms)
///
/// # Returns
/// The transformed pair in `output_unit`; a batch if either input was a batch.
///
/// # Errors
/// * `MissingContextParameter` if φ or TS is needed but absent
/// * `UnitMismatch` if a value does not have the shape `input_unit` requires
/// * `LengthMismatch` if both inputs are batches of different lengths
///
/// # Examples
///
/// ```
/// use astronomia_rust::api::transform;
/// use astronomia_rust::context::ContextParams;
/// use astronomia_rust::core::domain::{Angles, System, Unit};
///
/// let params = ContextParams::new().with_latitude_deg(40.0).with_sidereal_time_hours(5.0);
/// let (ra, dec) = transform(
///     &Angles::from(200.0),
///     &Angles::from(30.0),
///     System::Horizontal,
///     System::Equatorial,
///     Unit::Degree,
///     Unit::Degree,
///     &params,
/// )
/// .unwrap();
/// assert!(!ra.is_batch() && !dec.is_batch());
/// ```
pub fn transform(
    c1: &Angles,
    c2: &Angles,
    origin: System,
    destination: System,
    input_unit: Unit,
    output_unit: Unit,
    params: &ContextParams,
) -> TransformResult<(Angles, Angles)> {
    let context = params.resolve();

    let len = broadcast_len(c1, c2)?;
    let batch = c1.is_batch() || c2.is_batch();

    let mut first = units::angles_to_radians(c1, input_unit)?;
    let mut second = units::angles_to_radians(c2, input_unit)?;
    broadcast(&mut first, len);
    broadcast(&mut second, len);

    let route = Route::plan(origin, destination, &context)?;

    if origin.is_time_like() {
        debug!("First coordinate of {} is time-like ({})", origin, input_unit);
    }
    if origin == System::Horizontal {
        complement(&mut second);
    }

    let (out1, mut out2) = route.apply_all(&first, &second);

    if destination == System::Horizontal {
        complement(&mut out2);
    }

    debug!(
        "Transformed {} value(s) {} -> {} ({} -> {})",
        len, origin, destination, input_unit, output_unit
    );

    Ok((
        units::radians_to_angles(&out1, output_unit, batch),
        units::radians_to_angles(&out2, output_unit, batch),
    ))
}

/// Common length of two coordinate inputs; a single value adapts to a batch.
fn broadcast_len(c1: &Angles, c2: &Angles) -> TransformResult<usize> {
    match (c1, c2) {
        (Angles::Batch(a), Angles::Batch(b)) if a.len() != b.len() => {
            Err(TransformError::LengthMismatch {
                left: a.len(),
                right: b.len(),
            })
        }
        (Angles::Batch(a), _) => Ok(a.len()),
        (_, Angles::Batch(b)) => Ok(b.len()),
        _ => Ok(1),
    }
}

fn broadcast(values: &mut Vec<f64>, len: usize) {
    if values.len() == 1 && len != 1 {
        let v = values[0];
        values.clear();
        values.resize(len, v);
    }
}

/// Altitude ↔ zenith distance, `x ↦ π/2 − x`.
fn complement(values: &mut [f64]) {
    for v in values {
        *v = FRAC_PI_2 - *v;
    }
}
