//! Hub-and-spoke routing through the equatorial system.
//!
//! Any origin is first brought to equatorial `(α, δ)`, then taken to the
//! destination. There are no direct formulas between non-adjacent systems.
//! Context requirements of both legs are checked when the route is planned,
//! so applying a planned route cannot fail.

use log::{debug, trace};

use super::spherical;
use crate::context::{Context, ContextKey};
use crate::core::domain::System;
use crate::error::TransformResult;

/// Context values one leg needs, already checked for presence.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Leg {
    Identity,
    Horizontal { phi: f64, sidereal_time: f64 },
    Horary { sidereal_time: f64 },
    Ecliptic { epsilon: f64 },
    Galactic,
}

impl Leg {
    fn plan(system: System, context: &Context) -> TransformResult<Leg> {
        Ok(match system {
            System::Equatorial => Leg::Identity,
            System::Horizontal => Leg::Horizontal {
                phi: context.require(ContextKey::Latitude, system)?,
                sidereal_time: context.require(ContextKey::SiderealTime, system)?,
            },
            System::Horary => Leg::Horary {
                sidereal_time: context.require(ContextKey::SiderealTime, system)?,
            },
            System::Ecliptic => Leg::Ecliptic {
                epsilon: context.obliquity(),
            },
            System::Galactic => Leg::Galactic,
        })
    }

    fn to_equatorial(&self, c1: f64, c2: f64) -> (f64, f64) {
        match *self {
            Leg::Identity => (c1, c2),
            Leg::Horizontal { phi, sidereal_time } => {
                let (hour_angle, dec) = spherical::horizontal_to_horary(c1, c2, phi);
                spherical::horary_to_equatorial(hour_angle, dec, sidereal_time)
            }
            Leg::Horary { sidereal_time } => spherical::horary_to_equatorial(c1, c2, sidereal_time),
            Leg::Ecliptic { epsilon } => spherical::ecliptic_to_equatorial(c1, c2, epsilon),
            Leg::Galactic => spherical::galactic_to_equatorial(c1, c2),
        }
    }

    fn from_equatorial(&self, ra: f64, dec: f64) -> (f64, f64) {
        match *self {
            Leg::Identity => (ra, dec),
            Leg::Horizontal { phi, sidereal_time } => {
                let (hour_angle, dec) = spherical::equatorial_to_horary(ra, dec, sidereal_time);
                spherical::horary_to_horizontal(hour_angle, dec, phi)
            }
            Leg::Horary { sidereal_time } => spherical::equatorial_to_horary(ra, dec, sidereal_time),
            Leg::Ecliptic { epsilon } => spherical::equatorial_to_ecliptic(ra, dec, epsilon),
            Leg::Galactic => spherical::equatorial_to_galactic(ra, dec),
        }
    }
}

/// A validated origin → destination route.
///
/// Horizontal coordinates are `(A, z)` here: the altitude complement is the
/// caller's business.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    origin: System,
    destination: System,
    inbound: Leg,
    outbound: Leg,
}

impl Route {
    /// Check the context for both legs and fix their parameters.
    ///
    /// Same origin and destination is an identity route and needs no context.
    pub fn plan(origin: System, destination: System, context: &Context) -> TransformResult<Route> {
        let (inbound, outbound) = if origin == destination {
            (Leg::Identity, Leg::Identity)
        } else {
            (Leg::plan(origin, context)?, Leg::plan(destination, context)?)
        };

        debug!(
            "Planned route {} -> {} -> {} ({:?}, {:?})",
            origin,
            System::Equatorial,
            destination,
            inbound,
            outbound
        );

        Ok(Route {
            origin,
            destination,
            inbound,
            outbound,
        })
    }

    pub fn origin(&self) -> System {
        self.origin
    }

    pub fn destination(&self) -> System {
        self.destination
    }

    /// Transform one coordinate pair, in radians.
    pub fn apply(&self, c1: f64, c2: f64) -> (f64, f64) {
        let (ra, dec) = self.inbound.to_equatorial(c1, c2);
        trace!("{} ({}, {}) -> equatorial ({}, {})", self.origin, c1, c2, ra, dec);
        self.outbound.from_equatorial(ra, dec)
    }

    /// Transform paired slices element-wise. Both slices must have the same
    /// length; extra elements of the longer one are ignored.
    pub fn apply_all(&self, c1: &[f64], c2: &[f64]) -> (Vec<f64>, Vec<f64>) {
        c1.iter().zip(c2).map(|(a, b)| self.apply(*a, *b)).unzip()
    }
}

/// Transform one pair from `origin` to `destination`, in radians.
///
/// # Examples
///
/// ```
/// use astronomia_rust::context::Context;
/// use astronomia_rust::core::domain::System;
/// use astronomia_rust::transformations::pivot;
///
/// let ctx = Context::new();
/// let (l, b) = pivot(0.0, 0.0, System::Equatorial, System::Galactic, &ctx).unwrap();
/// assert!((0.0..std::f64::consts::TAU).contains(&l));
/// assert!(b.abs() < std::f64::consts::FRAC_PI_2);
///
/// // Horary needs the sidereal time
/// assert!(pivot(0.0, 0.0, System::Horary, System::Equatorial, &ctx).is_err());
/// ```
pub fn pivot(
    c1: f64,
    c2: f64,
    origin: System,
    destination: System,
    context: &Context,
) -> TransformResult<(f64, f64)> {
    Ok(Route::plan(origin, destination, context)?.apply(c1, c2))
}
