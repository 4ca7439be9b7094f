//! Core value types: unit-tagged quantities and the location model.

pub mod distance;
pub mod location;
pub mod speed;

pub use distance::{
    distance, feet, kilometers, meters, miles, nautical_miles, pixels, yards, Distance,
    DistanceUnit, GeographicDistance, GeographicUnit, PixelDistance,
};
pub use location::{GeoPoint, LocationFix, Provider};
pub use speed::{speed, Speed, SpeedUnit};
