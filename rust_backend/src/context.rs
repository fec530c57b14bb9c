//! Observer/epoch context: latitude φ, local sidereal time TS and obliquity ε.
//!
//! Callers supply the context as loose keyword parameters, either in radians
//! (`phi`, `TS`, `epsilon`) or with a unit suffix (`phi_deg`, `TS_h`,
//! `TS_deg`, `epsilon_deg`). [`ContextParams::resolve`] folds them into a
//! [`Context`] holding radians only. A context is built per call and never
//! shared.

use log::{debug, warn};
use qtty::{Degrees, HourAngles, Radian};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::EPSILON_J2000;
use crate::core::domain::System;
use crate::error::{TransformError, TransformResult};

/// Semantic context key, named by its canonical (radian) parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKey {
    /// Observer latitude φ.
    Latitude,
    /// Local sidereal time TS.
    SiderealTime,
    /// Obliquity of the ecliptic ε.
    Obliquity,
}

impl ContextKey {
    pub fn tag(&self) -> &'static str {
        match self {
            ContextKey::Latitude => "phi",
            ContextKey::SiderealTime => "TS",
            ContextKey::Obliquity => "epsilon",
        }
    }

    /// Keys that have no default and must be present whenever `system` takes
    /// part in a transformation.
    ///
    /// Horizontal needs φ and TS (it reaches the hub through the hour-angle
    /// system), Horary needs TS. The obliquity is always defaulted.
    pub fn required_by(system: System) -> &'static [ContextKey] {
        match system {
            System::Horizontal => &[ContextKey::Latitude, ContextKey::SiderealTime],
            System::Horary => &[ContextKey::SiderealTime],
            System::Equatorial | System::Ecliptic | System::Galactic => &[],
        }
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Raw context parameters as supplied by a caller.
///
/// Field names on the wire match the keyword names (`phi`, `phi_deg`, `TS`,
/// `TS_h`, `TS_deg`, `epsilon`, `epsilon_deg`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phi_deg: Option<f64>,
    #[serde(rename = "TS", default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<f64>,
    #[serde(rename = "TS_h", default, skip_serializing_if = "Option::is_none")]
    pub ts_h: Option<f64>,
    #[serde(rename = "TS_deg", default, skip_serializing_if = "Option::is_none")]
    pub ts_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epsilon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epsilon_deg: Option<f64>,
}

impl ContextParams {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, value)` pairs. Unknown keys are logged and ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use astronomia_rust::context::ContextParams;
    ///
    /// let params = ContextParams::from_pairs([("phi_deg", 40.0), ("TS_h", 5.0)]);
    /// assert_eq!(params.phi_deg, Some(40.0));
    /// assert_eq!(params.ts_h, Some(5.0));
    /// ```
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            params.set(key.as_ref(), value);
        }
        params
    }

    /// Set one parameter by keyword. Returns `false` (and logs a warning) if
    /// the keyword is not a context parameter.
    pub fn set(&mut self, key: &str, value: f64) -> bool {
        let slot = match key {
            "phi" => &mut self.phi,
            "phi_deg" => &mut self.phi_deg,
            "TS" => &mut self.ts,
            "TS_h" => &mut self.ts_h,
            "TS_deg" => &mut self.ts_deg,
            "epsilon" => &mut self.epsilon,
            "epsilon_deg" => &mut self.epsilon_deg,
            _ => {
                warn!("Ignoring unknown context parameter '{}' = {}", key, value);
                return false;
            }
        };
        *slot = Some(value);
        true
    }

    pub fn with_latitude_deg(mut self, phi_deg: f64) -> Self {
        self.phi_deg = Some(phi_deg);
        self
    }

    pub fn with_sidereal_time_hours(mut self, ts_h: f64) -> Self {
        self.ts_h = Some(ts_h);
        self
    }

    pub fn with_obliquity_deg(mut self, epsilon_deg: f64) -> Self {
        self.epsilon_deg = Some(epsilon_deg);
        self
    }

    /// Layer `overrides` on top of `self`, one semantic key at a time.
    ///
    /// If `overrides` gives any form of a key (e.g. `TS`), every form of that
    /// key in `self` is discarded, so a base `TS_h` cannot shadow an override
    /// given as `TS`.
    pub fn merged_with(&self, overrides: &ContextParams) -> ContextParams {
        let mut merged = self.clone();
        if overrides.phi.is_some() || overrides.phi_deg.is_some() {
            merged.phi = overrides.phi;
            merged.phi_deg = overrides.phi_deg;
        }
        if overrides.ts.is_some() || overrides.ts_h.is_some() || overrides.ts_deg.is_some() {
            merged.ts = overrides.ts;
            merged.ts_h = overrides.ts_h;
            merged.ts_deg = overrides.ts_deg;
        }
        if overrides.epsilon.is_some() || overrides.epsilon_deg.is_some() {
            merged.epsilon = overrides.epsilon;
            merged.epsilon_deg = overrides.epsilon_deg;
        }
        merged
    }

    /// Convert to radians. Suffixed keys take precedence over the radian
    /// ones (`TS_h` over `TS_deg` over `TS`). Absent keys stay absent.
    pub fn resolve(&self) -> Context {
        let phi = self
            .phi_deg
            .map(|v| Degrees::new(v).to::<Radian>().value())
            .or(self.phi);
        let sidereal_time = self
            .ts_h
            .map(|v| HourAngles::new(v).to::<Radian>().value())
            .or_else(|| self.ts_deg.map(|v| Degrees::new(v).to::<Radian>().value()))
            .or(self.ts);
        let epsilon = self
            .epsilon_deg
            .map(|v| Degrees::new(v).to::<Radian>().value())
            .or(self.epsilon);

        let context = Context {
            phi,
            sidereal_time,
            epsilon,
        };
        debug!("Resolved context: {:?}", context);
        context
    }
}

/// Resolved context, radians only.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Context {
    pub phi: Option<f64>,
    pub sidereal_time: Option<f64>,
    pub epsilon: Option<f64>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latitude(mut self, phi: f64) -> Self {
        self.phi = Some(phi);
        self
    }

    pub fn with_sidereal_time(mut self, ts: f64) -> Self {
        self.sidereal_time = Some(ts);
        self
    }

    pub fn with_obliquity(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    pub fn get(&self, key: ContextKey) -> Option<f64> {
        match key {
            ContextKey::Latitude => self.phi,
            ContextKey::SiderealTime => self.sidereal_time,
            ContextKey::Obliquity => self.epsilon,
        }
    }

    /// Value of `key`, or `MissingContextParameter` naming `key` and `system`.
    pub fn require(&self, key: ContextKey, system: System) -> TransformResult<f64> {
        self.get(key)
            .ok_or_else(|| TransformError::missing(key, system))
    }

    /// Check that every key `system` needs is present.
    pub fn require_for(&self, system: System) -> TransformResult<()> {
        for key in ContextKey::required_by(system) {
            self.require(*key, system)?;
        }
        Ok(())
    }

    /// ε, falling back to the J2000 mean obliquity.
    pub fn obliquity(&self) -> f64 {
        self.epsilon.unwrap_or(EPSILON_J2000)
    }
}
