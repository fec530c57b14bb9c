use serde::{Deserialize, Serialize};

use crate::transformations::spherical::acos_clamped;

/// Angular separation between two points given as `(longitude, latitude)`
/// pairs in the same system, by the spherical law of cosines.
///
/// # Arguments
/// * `ra1`, `dec1` - First point, radians
/// * `ra2`, `dec2` - Second point, radians
///
/// # Returns
/// Separation in `[0, π]` radians
pub fn angular_distance(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
    let cos_theta = dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * (ra1 - ra2).cos();
    acos_clamped(cos_theta)
}

/// Rise/set classification of an object for an observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "semi_diurnal_arc", rename_all = "snake_case")]
pub enum Visibility {
    /// Never rises above the horizon.
    NeverVisible,
    /// Circumpolar: never sets.
    AlwaysVisible,
    /// Rises and sets; carries the semi-diurnal arc `H0` in radians, the
    /// hour angle of setting.
    Normal(f64),
}

impl Visibility {
    /// Semi-diurnal arc, 0 for objects that never cross the horizon.
    pub fn semi_diurnal_arc(&self) -> f64 {
        match self {
            Visibility::Normal(h0) => *h0,
            Visibility::NeverVisible | Visibility::AlwaysVisible => 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Visibility::NeverVisible => "never visible",
            Visibility::AlwaysVisible => "always visible",
            Visibility::Normal(_) => "rises and sets",
        }
    }
}

/// Classify an object of declination `dec` seen from latitude `phi` (radians)
/// using `cos H0 = −tan φ tan δ`.
pub fn visibility(phi: f64, dec: f64) -> Visibility {
    let cos_h0 = -phi.tan() * dec.tan();
    if cos_h0 >= 1.0 {
        Visibility::NeverVisible
    } else if cos_h0 <= -1.0 {
        Visibility::AlwaysVisible
    } else {
        Visibility::Normal(cos_h0.acos())
    }
}
