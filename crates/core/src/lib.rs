//! Location-share viewer core library
//!
//! The numeric heart of a "share my location" map viewer: unit-safe distance
//! and speed quantities, and the great-circle geometry used to place every
//! visual annotation (direction arrows, distance-scaled labels) at a
//! geographically correct offset from the reported point.
//!
//! Rendering, popup markup, geocoding, and URL parsing live in the host
//! application; this crate only produces the numbers they draw with.
//!
//! ```
//! use locshare_core::{calculate_end_point, meters, GeoPoint};
//!
//! let reported = GeoPoint::new(53.4296143, 14.5445406);
//! // Place an arrow 750 m due east of the reported point.
//! let arrow = calculate_end_point(reported, meters(750.0).into(), 90.0).unwrap();
//! assert!(arrow.lng > reported.lng);
//! ```

// Core value types
pub mod core_types;

// Error taxonomy
pub mod error;

// Great-circle destination points
pub mod geodesy;

// Re-export core types
pub use core_types::{
    distance, feet, kilometers, meters, miles, nautical_miles, pixels, speed, yards,
};
pub use core_types::{Distance, DistanceUnit, GeographicDistance, GeographicUnit, PixelDistance};
pub use core_types::{GeoPoint, LocationFix, Provider};
pub use core_types::{Speed, SpeedUnit};
pub use error::{ConversionError, ProjectionError};
pub use geodesy::{calculate_end_point, EARTH_RADIUS};
