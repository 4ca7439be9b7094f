//! C ABI surface for the location-share viewer core.
//!
//! Exposes unit conversion and great-circle end-point placement to rendering
//! hosts that are not written in Rust. All functions return a
//! [`LocShareErrorCode`]; on failure the diagnostic message is available via
//! [`loc_share_last_error`] (thread-local, valid until the next call on the
//! same thread). The generated header is `LocShareFFI.h` at the workspace
//! root.

mod convert;
mod error;
mod helpers;
mod project;

pub use convert::{
    loc_share_distance_convert, loc_share_speed_convert, DistanceUnitCode, SpeedUnitCode,
};
pub use error::{loc_share_last_error, loc_share_last_error_code, LocShareErrorCode};
pub use project::{loc_share_end_point, GeoPointC};
