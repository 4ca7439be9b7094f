//! The reported location fact and its coordinate type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core_types::distance::{meters, GeographicDistance};
use crate::core_types::speed::{speed, Speed, SpeedUnit};

/// A latitude/longitude pair in degrees on the spherical Earth model.
///
/// Owned by the caller and never mutated by this crate; the geodesic
/// projector is a pure function over it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new coordinate pair.
    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// How the position fix was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Provider {
    #[default]
    #[serde(rename = "?")]
    Unknown,
    #[serde(rename = "gps")]
    Gps,
    #[serde(rename = "network")]
    Network,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Provider::Unknown => "?",
            Provider::Gps => "gps",
            Provider::Network => "network",
        };
        f.write_str(tag)
    }
}

/// A single reported location with its optional motion and accuracy data.
///
/// Raw fields are plain numbers in the application's canonical units
/// (meters, meters per second, degrees); the typed accessors wrap them into
/// quantity values for label text and annotation placement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationFix {
    /// Reported coordinates in degrees.
    pub point: GeoPoint,
    /// Source of the fix.
    pub provider: Provider,
    /// Altitude above sea level in meters, if reported.
    pub altitude: Option<f64>,
    /// Horizontal accuracy radius in meters, if reported.
    pub accuracy: Option<f64>,
    /// Heading in degrees clockwise from true north, if reported.
    pub bearing: Option<f64>,
    /// Ground speed in meters per second, if reported.
    pub speed: Option<f64>,
}

impl LocationFix {
    /// A fix at the given coordinates with no optional data.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        LocationFix {
            point: GeoPoint::new(lat, lng),
            provider: Provider::Unknown,
            altitude: None,
            accuracy: None,
            bearing: None,
            speed: None,
        }
    }

    /// The accuracy radius as a distance quantity.
    #[must_use]
    pub fn accuracy_radius(&self) -> Option<GeographicDistance> {
        self.accuracy.map(meters)
    }

    /// The altitude as a distance quantity.
    #[must_use]
    pub fn altitude_offset(&self) -> Option<GeographicDistance> {
        self.altitude.map(meters)
    }

    /// The ground speed as a speed quantity.
    #[must_use]
    pub fn ground_speed(&self) -> Option<Speed> {
        self.speed.map(|v| speed(v, SpeedUnit::MetersPerSecond))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::distance::GeographicUnit;

    #[test]
    fn accessors_wrap_canonical_units() {
        let fix = LocationFix {
            altitude: Some(37.0),
            accuracy: Some(750.0),
            speed: Some(10.0),
            ..LocationFix::new(53.4296143, 14.5445406)
        };

        let radius = fix.accuracy_radius().unwrap();
        assert_eq!(radius.value(), 750.0);
        assert_eq!(radius.unit(), GeographicUnit::Meters);

        assert_eq!(fix.altitude_offset().unwrap().value(), 37.0);
        assert_eq!(
            fix.ground_speed().unwrap().to(SpeedUnit::KilometersPerHour).value(),
            36.0
        );
    }

    #[test]
    fn absent_fields_stay_absent() {
        let fix = LocationFix::new(0.0, 0.0);
        assert!(fix.accuracy_radius().is_none());
        assert!(fix.altitude_offset().is_none());
        assert!(fix.ground_speed().is_none());
        assert_eq!(fix.provider, Provider::Unknown);
    }
}
