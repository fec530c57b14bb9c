//! Domain models for coordinate systems, angular units and angle values.
//!
//! Systems and units are closed enumerations: textual tags are parsed once at
//! the boundary (`FromStr`) and invalid tags are rejected there, so the
//! engine itself never sees an unknown system or unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TransformError;

/// Astronomical spherical coordinate system.
///
/// | System       | First component     | Second component (external) |
/// |--------------|---------------------|-----------------------------|
/// | `Horizontal` | azimuth (from south)| altitude                    |
/// | `Horary`     | hour angle          | declination                 |
/// | `Equatorial` | right ascension     | declination                 |
/// | `Ecliptic`   | ecliptic longitude  | ecliptic latitude           |
/// | `Galactic`   | galactic longitude  | galactic latitude           |
///
/// # Examples
///
/// ```
/// use astronomia_rust::core::domain::System;
///
/// let s: System = "horario".parse().unwrap();
/// assert_eq!(s, System::Horary);
/// assert_eq!(System::Ecliptic.to_string(), "eclíptico");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum System {
    #[serde(rename = "horizontal")]
    Horizontal,
    #[serde(rename = "horario", alias = "horary")]
    Horary,
    #[serde(rename = "ecuatorial", alias = "equatorial")]
    Equatorial,
    #[serde(rename = "eclíptico", alias = "ecliptico", alias = "ecliptic")]
    Ecliptic,
    #[serde(rename = "galáctico", alias = "galactico", alias = "galactic")]
    Galactic,
}

impl System {
    /// Every supported system, in hub order.
    pub const ALL: [System; 5] = [
        System::Horizontal,
        System::Horary,
        System::Equatorial,
        System::Ecliptic,
        System::Galactic,
    ];

    /// Canonical textual tag.
    pub fn tag(&self) -> &'static str {
        match self {
            System::Horizontal => "horizontal",
            System::Horary => "horario",
            System::Equatorial => "ecuatorial",
            System::Ecliptic => "eclíptico",
            System::Galactic => "galáctico",
        }
    }

    /// Whether the first component is conventionally expressed as time
    /// (hour angle, right ascension).
    pub fn is_time_like(&self) -> bool {
        matches!(self, System::Horary | System::Equatorial)
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for System {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "horizontal" => Ok(System::Horizontal),
            "horario" | "horary" => Ok(System::Horary),
            "ecuatorial" | "equatorial" => Ok(System::Equatorial),
            "eclíptico" | "ecliptico" | "ecliptic" => Ok(System::Ecliptic),
            "galáctico" | "galactico" | "galactic" => Ok(System::Galactic),
            _ => Err(TransformError::UnsupportedSystem(s.to_string())),
        }
    }
}

/// External angular unit.
///
/// Sexagesimal units (`dms`, `hms`) exchange [`Sexagesimal`] triplets; the
/// other units exchange plain decimal numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "rad")]
    Radian,
    #[serde(rename = "deg")]
    Degree,
    #[serde(rename = "hour")]
    Hour,
    #[serde(rename = "dms")]
    DegreeMinuteSecond,
    #[serde(rename = "hms")]
    HourMinuteSecond,
}

impl Unit {
    /// Every supported unit.
    pub const ALL: [Unit; 5] = [
        Unit::Radian,
        Unit::Degree,
        Unit::Hour,
        Unit::DegreeMinuteSecond,
        Unit::HourMinuteSecond,
    ];

    /// Canonical textual tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Unit::Radian => "rad",
            Unit::Degree => "deg",
            Unit::Hour => "hour",
            Unit::DegreeMinuteSecond => "dms",
            Unit::HourMinuteSecond => "hms",
        }
    }

    /// Whether values in this unit are `(lead, minutes, seconds)` triplets.
    pub fn is_sexagesimal(&self) -> bool {
        matches!(self, Unit::DegreeMinuteSecond | Unit::HourMinuteSecond)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Unit {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rad" => Ok(Unit::Radian),
            "deg" => Ok(Unit::Degree),
            "hour" => Ok(Unit::Hour),
            "dms" => Ok(Unit::DegreeMinuteSecond),
            "hms" => Ok(Unit::HourMinuteSecond),
            _ => Err(TransformError::InvalidUnit(s.to_string())),
        }
    }
}

/// A `(degrees|hours, minutes, seconds)` triplet.
///
/// The sign of the whole angle is carried by `lead` only; `minutes` and
/// `seconds` are magnitudes. A negative zero in `lead` marks a negative angle
/// smaller than one degree (or hour), e.g. `−0° 30′ 00″`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Sexagesimal {
    pub lead: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Sexagesimal {
    pub fn new(lead: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            lead,
            minutes,
            seconds,
        }
    }

    /// `true` when the triplet denotes a negative angle.
    pub fn is_negative(&self) -> bool {
        self.lead.is_sign_negative()
    }
}

impl From<[f64; 3]> for Sexagesimal {
    fn from(v: [f64; 3]) -> Self {
        Sexagesimal::new(v[0], v[1], v[2])
    }
}

impl From<Sexagesimal> for [f64; 3] {
    fn from(s: Sexagesimal) -> Self {
        [s.lead, s.minutes, s.seconds]
    }
}

impl fmt::Display for Sexagesimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}{}:{:02}:{:06.3}",
            sign,
            self.lead.abs(),
            self.minutes,
            self.seconds
        )
    }
}

/// One angle as exchanged with callers: a decimal number or a triplet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AngleValue {
    Decimal(f64),
    Sexagesimal(Sexagesimal),
}

impl AngleValue {
    /// Decimal content, if this is not a triplet.
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            AngleValue::Decimal(v) => Some(*v),
            AngleValue::Sexagesimal(_) => None,
        }
    }

    /// Triplet content, if this is a sexagesimal value.
    pub fn as_sexagesimal(&self) -> Option<Sexagesimal> {
        match self {
            AngleValue::Decimal(_) => None,
            AngleValue::Sexagesimal(s) => Some(*s),
        }
    }
}

impl From<f64> for AngleValue {
    fn from(v: f64) -> Self {
        AngleValue::Decimal(v)
    }
}

impl From<Sexagesimal> for AngleValue {
    fn from(s: Sexagesimal) -> Self {
        AngleValue::Sexagesimal(s)
    }
}

impl From<[f64; 3]> for AngleValue {
    fn from(v: [f64; 3]) -> Self {
        AngleValue::Sexagesimal(v.into())
    }
}

impl fmt::Display for AngleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleValue::Decimal(v) => write!(f, "{}", v),
            AngleValue::Sexagesimal(s) => write!(f, "{}", s),
        }
    }
}

/// Parses `"12.5"` as a decimal value and `"-12:30:15.5"` as a triplet.
impl FromStr for AngleValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.contains(':') {
            return s
                .parse::<f64>()
                .map(AngleValue::Decimal)
                .map_err(|e| format!("Invalid angle '{}': {}", s, e));
        }

        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(format!(
                "Invalid sexagesimal angle '{}': expected lead:minutes:seconds",
                s
            ));
        }

        let mut values = [0.0; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("Invalid sexagesimal angle '{}': {}", s, e))?;
        }
        // "-0:30:00" parses the lead as -0.0, which keeps the sign
        Ok(AngleValue::Sexagesimal(values.into()))
    }
}

/// A scalar angle or a batch of angles.
///
/// A `Single` value is broadcast against a `Batch` when both coordinates of a
/// pair are combined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Angles {
    Single(AngleValue),
    Batch(Vec<AngleValue>),
}

impl Angles {
    /// Number of elements (1 for a single value).
    pub fn len(&self) -> usize {
        match self {
            Angles::Single(_) => 1,
            Angles::Batch(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, Angles::Batch(_))
    }

    /// Element `index`, broadcasting a single value to every index.
    pub fn get(&self, index: usize) -> Option<AngleValue> {
        match self {
            Angles::Single(v) => Some(*v),
            Angles::Batch(values) => values.get(index).copied(),
        }
    }

    /// Single value, if this is not a batch.
    pub fn as_single(&self) -> Option<AngleValue> {
        match self {
            Angles::Single(v) => Some(*v),
            Angles::Batch(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = AngleValue> + '_ {
        let values: &[AngleValue] = match self {
            Angles::Single(v) => std::slice::from_ref(v),
            Angles::Batch(values) => values,
        };
        values.iter().copied()
    }
}

impl From<AngleValue> for Angles {
    fn from(v: AngleValue) -> Self {
        Angles::Single(v)
    }
}

impl From<f64> for Angles {
    fn from(v: f64) -> Self {
        Angles::Single(AngleValue::Decimal(v))
    }
}

impl From<Sexagesimal> for Angles {
    fn from(s: Sexagesimal) -> Self {
        Angles::Single(AngleValue::Sexagesimal(s))
    }
}

/// A bare triplet is a single sexagesimal angle, never a batch of three.
impl From<[f64; 3]> for Angles {
    fn from(v: [f64; 3]) -> Self {
        Angles::Single(AngleValue::from(v))
    }
}

impl From<Vec<AngleValue>> for Angles {
    fn from(values: Vec<AngleValue>) -> Self {
        Angles::Batch(values)
    }
}

impl From<Vec<f64>> for Angles {
    fn from(values: Vec<f64>) -> Self {
        Angles::Batch(values.into_iter().map(AngleValue::Decimal).collect())
    }
}

impl From<Vec<[f64; 3]>> for Angles {
    fn from(values: Vec<[f64; 3]>) -> Self {
        Angles::Batch(values.into_iter().map(AngleValue::from).collect())
    }
}
