//! Distance quantities with unit-safe conversion.
//!
//! Two kinds of length exist in the viewer and they must never mix silently:
//! geographic lengths (meters, miles, ...) that describe real-world offsets,
//! and pixel lengths that describe screen-space offsets. Geographic units
//! form one convertible family normalized through meters; the pixel unit is
//! not commensurable with any of them.
//!
//! The split is encoded in the types: [`GeographicDistance`] converts
//! infallibly within its family, [`PixelDistance`] has no geographic
//! conversion at all, and the [`Distance`] sum type covers call sites that
//! handle either kind and reports cross-family requests as
//! [`ConversionError`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConversionError;

/// Real-world length units, mutually convertible through meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeographicUnit {
    Meters,
    Kilometers,
    Feet,
    Yards,
    Miles,
    NauticalMiles,
}

impl GeographicUnit {
    /// Meters contained in one unit of this kind.
    ///
    /// The table is closed; adding a unit forces this match to be extended.
    #[inline]
    #[must_use]
    pub const fn meters_per_unit(self) -> f64 {
        match self {
            GeographicUnit::Meters => 1.0,
            GeographicUnit::Kilometers => 1000.0,
            GeographicUnit::Feet => 0.3048,
            GeographicUnit::Yards => 0.9144,
            GeographicUnit::Miles => 1609.344,
            GeographicUnit::NauticalMiles => 1852.0,
        }
    }

    /// Short symbol used in labels.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            GeographicUnit::Meters => "m",
            GeographicUnit::Kilometers => "km",
            GeographicUnit::Feet => "ft",
            GeographicUnit::Yards => "yd",
            GeographicUnit::Miles => "mi",
            GeographicUnit::NauticalMiles => "nm",
        }
    }
}

impl fmt::Display for GeographicUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unit tag covering both screen-space and geographic lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// Screen-space length. Not commensurable with the geographic family.
    Pixels,
    /// Any real-world length unit.
    Geographic(GeographicUnit),
}

impl DistanceUnit {
    pub const METERS: Self = Self::Geographic(GeographicUnit::Meters);
    pub const KILOMETERS: Self = Self::Geographic(GeographicUnit::Kilometers);
    pub const FEET: Self = Self::Geographic(GeographicUnit::Feet);
    pub const YARDS: Self = Self::Geographic(GeographicUnit::Yards);
    pub const MILES: Self = Self::Geographic(GeographicUnit::Miles);
    pub const NAUTICAL_MILES: Self = Self::Geographic(GeographicUnit::NauticalMiles);

    /// The geographic unit behind this tag, or `None` for pixels.
    #[inline]
    #[must_use]
    pub const fn as_geographic(self) -> Option<GeographicUnit> {
        match self {
            DistanceUnit::Pixels => None,
            DistanceUnit::Geographic(unit) => Some(unit),
        }
    }

    /// Whether this tag belongs to the convertible geographic family.
    #[inline]
    #[must_use]
    pub const fn is_geographic(self) -> bool {
        matches!(self, DistanceUnit::Geographic(_))
    }

    /// Short symbol used in labels.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Pixels => "px",
            DistanceUnit::Geographic(unit) => unit.symbol(),
        }
    }
}

impl From<GeographicUnit> for DistanceUnit {
    fn from(unit: GeographicUnit) -> Self {
        DistanceUnit::Geographic(unit)
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A length in the geographic family.
///
/// Immutable value; conversion within the family never fails. Negative
/// magnitudes are valid (e.g. vertical offsets below a reference point).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicDistance {
    value: f64,
    unit: GeographicUnit,
}

impl GeographicDistance {
    /// Create a new geographic length.
    #[inline]
    #[must_use]
    pub const fn new(value: f64, unit: GeographicUnit) -> Self {
        GeographicDistance { value, unit }
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
    pub const fn unit(self) -> GeographicUnit {
        self.unit
    }

    /// Convert to another geographic unit.
    ///
    /// Normalizes through meters. A same-unit request returns `self`
    /// unchanged, bit for bit, with no arithmetic applied.
    #[must_use]
    pub fn to(self, unit: GeographicUnit) -> Self {
        if unit == self.unit {
            return self;
        }
        let in_meters = self.value * self.unit.meters_per_unit();
        GeographicDistance {
            value: in_meters / unit.meters_per_unit(),
            unit,
        }
    }

    /// Scale the magnitude, keeping the unit.
    ///
    /// Multiplying by exactly `1.0` returns `self` unchanged.
    #[must_use]
    pub fn multiply(self, factor: f64) -> Self {
        if factor == 1.0 {
            return self;
        }
        GeographicDistance {
            value: self.value * factor,
            unit: self.unit,
        }
    }
}

impl fmt::Display for GeographicDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A screen-space length.
///
/// Carries no geographic meaning and offers no conversion into the
/// geographic family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelDistance {
    value: f64,
}

impl PixelDistance {
    /// Create a new pixel length.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        PixelDistance { value }
    }

    /// The numeric magnitude in pixels.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Scale the magnitude.
    ///
    /// Multiplying by exactly `1.0` returns `self` unchanged.
    #[must_use]
    pub fn multiply(self, factor: f64) -> Self {
        if factor == 1.0 {
            return self;
        }
        PixelDistance {
            value: self.value * factor,
        }
    }
}

impl fmt::Display for PixelDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} px", self.value)
    }
}

/// Either a geographic or a screen-space length.
///
/// Call sites that accept both kinds (the generic constructor, display
/// plumbing) work through this sum type; conversion across the two kinds is
/// rejected with a [`ConversionError`] instead of producing a bogus number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Distance {
    Geographic(GeographicDistance),
    Pixels(PixelDistance),
}

impl Distance {
    /// Create a distance from a magnitude and a unit tag.
    #[must_use]
    pub const fn new(value: f64, unit: DistanceUnit) -> Self {
        match unit {
            DistanceUnit::Pixels => Distance::Pixels(PixelDistance::new(value)),
            DistanceUnit::Geographic(unit) => {
                Distance::Geographic(GeographicDistance::new(value, unit))
            }
        }
    }

    /// The numeric magnitude in this quantity's own unit.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Distance::Geographic(d) => d.value(),
            Distance::Pixels(d) => d.value(),
        }
    }

    /// The unit tag.
    #[inline]
    #[must_use]
    pub const fn unit(self) -> DistanceUnit {
        match self {
            Distance::Geographic(d) => DistanceUnit::Geographic(d.unit()),
            Distance::Pixels(_) => DistanceUnit::Pixels,
        }
    }

    /// Convert to another unit.
    ///
    /// Same-family conversion normalizes through the family's base unit; a
    /// same-unit request returns `self` unchanged with no arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when the request crosses the
    /// pixel/geographic boundary in either direction.
    pub fn to(self, unit: DistanceUnit) -> Result<Self, ConversionError> {
        match (self, unit) {
            (Distance::Pixels(d), DistanceUnit::Pixels) => Ok(Distance::Pixels(d)),
            (Distance::Geographic(d), DistanceUnit::Geographic(unit)) => {
                Ok(Distance::Geographic(d.to(unit)))
            }
            (Distance::Pixels(_), DistanceUnit::Geographic(_))
            | (Distance::Geographic(_), DistanceUnit::Pixels) => {
                Err(ConversionError::new(self.unit(), unit))
            }
        }
    }

    /// Convert into a [`GeographicDistance`] in the given unit.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when this quantity is a pixel length.
    pub fn to_geographic(self, unit: GeographicUnit) -> Result<GeographicDistance, ConversionError> {
        match self {
            Distance::Geographic(d) => Ok(d.to(unit)),
            Distance::Pixels(_) => Err(ConversionError::new(DistanceUnit::Pixels, unit.into())),
        }
    }

    /// Scale the magnitude, keeping the unit and the kind.
    ///
    /// Multiplying by exactly `1.0` returns `self` unchanged.
    #[must_use]
    pub fn multiply(self, factor: f64) -> Self {
        match self {
            Distance::Geographic(d) => Distance::Geographic(d.multiply(factor)),
            Distance::Pixels(d) => Distance::Pixels(d.multiply(factor)),
        }
    }
}

impl From<GeographicDistance> for Distance {
    fn from(d: GeographicDistance) -> Self {
        Distance::Geographic(d)
    }
}

impl From<PixelDistance> for Distance {
    fn from(d: PixelDistance) -> Self {
        Distance::Pixels(d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Geographic(d) => d.fmt(f),
            Distance::Pixels(d) => d.fmt(f),
        }
    }
}

/// A length in meters.
#[inline]
#[must_use]
pub const fn meters(value: f64) -> GeographicDistance {
    GeographicDistance::new(value, GeographicUnit::Meters)
}

/// A length in kilometers.
#[inline]
#[must_use]
pub const fn kilometers(value: f64) -> GeographicDistance {
    GeographicDistance::new(value, GeographicUnit::Kilometers)
}

/// A length in feet.
#[inline]
#[must_use]
pub const fn feet(value: f64) -> GeographicDistance {
    GeographicDistance::new(value, GeographicUnit::Feet)
}

/// A length in yards.
#[inline]
#[must_use]
pub const fn yards(value: f64) -> GeographicDistance {
    GeographicDistance::new(value, GeographicUnit::Yards)
}

/// A length in statute miles.
#[inline]
#[must_use]
pub const fn miles(value: f64) -> GeographicDistance {
    GeographicDistance::new(value, GeographicUnit::Miles)
}

/// A length in nautical miles.
#[inline]
#[must_use]
pub const fn nautical_miles(value: f64) -> GeographicDistance {
    GeographicDistance::new(value, GeographicUnit::NauticalMiles)
}

/// A screen-space length in pixels.
#[inline]
#[must_use]
pub const fn pixels(value: f64) -> PixelDistance {
    PixelDistance::new(value)
}

/// Generic constructor over the full unit tag, pixel or geographic.
#[inline]
#[must_use]
pub const fn distance(value: f64, unit: DistanceUnit) -> Distance {
    Distance::new(value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_UNITS: [DistanceUnit; 7] = [
        DistanceUnit::Pixels,
        DistanceUnit::METERS,
        DistanceUnit::KILOMETERS,
        DistanceUnit::FEET,
        DistanceUnit::YARDS,
        DistanceUnit::MILES,
        DistanceUnit::NAUTICAL_MILES,
    ];

    #[test]
    fn created_with_value_and_unit() {
        for (i, &unit) in ALL_UNITS.iter().enumerate() {
            let value = (i + 1) as f64;
            let d = distance(value, unit);
            assert_eq!(d.value(), value);
            assert_eq!(d.unit(), unit);
        }
    }

    #[test]
    fn factories_match_generic_constructor() {
        assert_eq!(Distance::from(pixels(1.0)), distance(1.0, DistanceUnit::Pixels));
        assert_eq!(Distance::from(meters(1.0)), distance(1.0, DistanceUnit::METERS));
        assert_eq!(
            Distance::from(kilometers(1.0)),
            distance(1.0, DistanceUnit::KILOMETERS)
        );
        assert_eq!(Distance::from(feet(1.0)), distance(1.0, DistanceUnit::FEET));
        assert_eq!(Distance::from(yards(1.0)), distance(1.0, DistanceUnit::YARDS));
        assert_eq!(Distance::from(miles(1.0)), distance(1.0, DistanceUnit::MILES));
        assert_eq!(
            Distance::from(nautical_miles(1.0)),
            distance(1.0, DistanceUnit::NAUTICAL_MILES)
        );
    }

    #[test]
    fn multiply_scales_value_and_keeps_unit() {
        for (i, &unit) in ALL_UNITS.iter().enumerate() {
            let value = (i + 1) as f64;
            let d = distance(value, unit).multiply(2.0);
            assert_eq!(d.value(), 2.0 * value);
            assert_eq!(d.unit(), unit);
        }
    }

    #[test]
    fn multiply_by_one_is_a_no_op() {
        let d = meters(13.0);
        assert_eq!(d.multiply(1.0), d);

        let p = pixels(7.5);
        assert_eq!(p.multiply(1.0), p);
    }

    #[test]
    fn same_unit_conversion_is_a_no_op() {
        for &unit in &ALL_UNITS {
            let d = distance(13.0, unit);
            assert_eq!(d.to(unit).unwrap(), d);
        }
    }

    #[test]
    fn known_constants() {
        assert_eq!(kilometers(1.0).to(GeographicUnit::Meters).value(), 1000.0);
        assert_eq!(nautical_miles(1.0).to(GeographicUnit::Meters).value(), 1852.0);
        let mi_in_km = miles(1.0).to(GeographicUnit::Kilometers).value();
        assert!((mi_in_km - 1.609344).abs() < 1e-12);
    }

    #[test]
    fn cross_family_conversion_is_rejected() {
        let err = Distance::from(pixels(5.0))
            .to(DistanceUnit::METERS)
            .unwrap_err();
        assert_eq!(err.from_unit(), DistanceUnit::Pixels);
        assert_eq!(err.to_unit(), DistanceUnit::METERS);

        assert!(Distance::from(meters(5.0)).to(DistanceUnit::Pixels).is_err());
        assert!(Distance::from(pixels(5.0))
            .to_geographic(GeographicUnit::Kilometers)
            .is_err());
    }

    #[test]
    fn negative_values_convert_like_positive_ones() {
        let below = meters(-25.0).to(GeographicUnit::Feet);
        assert!((below.value() + 25.0 / 0.3048).abs() < 1e-9);
    }
}
