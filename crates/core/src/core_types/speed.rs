//! Speed quantities with unit-safe conversion.
//!
//! All speed units form one convertible family normalized through meters per
//! second, so conversion never fails. The ratio table uses the same
//! fixed-precision factors the viewer has always displayed with (2.237 mph
//! and 1.944 kn per m/s), not higher-precision derivations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Speed units, mutually convertible through meters per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedUnit {
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
    Knots,
}

impl SpeedUnit {
    /// Units of this kind equal to one meter per second.
    #[inline]
    #[must_use]
    pub const fn units_per_meter_per_second(self) -> f64 {
        match self {
            SpeedUnit::MetersPerSecond => 1.0,
            SpeedUnit::KilometersPerHour => 3.6,
            SpeedUnit::MilesPerHour => 2.237,
            SpeedUnit::Knots => 1.944,
        }
    }

    /// Short symbol used in labels.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            SpeedUnit::MetersPerSecond => "m/s",
            SpeedUnit::KilometersPerHour => "km/h",
            SpeedUnit::MilesPerHour => "mph",
            SpeedUnit::Knots => "kn",
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An immutable speed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    value: f64,
    unit: SpeedUnit,
}

impl Speed {
    /// Create a new speed.
    #[inline]
    #[must_use]
    pub const fn new(value: f64, unit: SpeedUnit) -> Self {
        Speed { value, unit }
    }

    /// The numeric magnitude in this quantity's own unit.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The unit tag.
    #[inline]
    #[must_use]
    pub const fn unit(self) -> SpeedUnit {
        self.unit
    }

    /// Convert to another speed unit.
    ///
    /// Normalizes through meters per second. A same-unit request returns
    /// `self` unchanged, bit for bit, with no arithmetic applied.
    #[must_use]
    pub fn to(self, unit: SpeedUnit) -> Self {
        if unit == self.unit {
            return self;
        }
        let in_mps = self.value / self.unit.units_per_meter_per_second();
        Speed {
            value: in_mps * unit.units_per_meter_per_second(),
            unit,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Construct a speed from a magnitude and a unit tag.
#[inline]
#[must_use]
pub const fn speed(value: f64, unit: SpeedUnit) -> Speed {
    Speed::new(value, unit)
}
