//! Unit conversion across the C ABI.

use locshare_core::{
    distance, speed, DistanceUnit, GeographicUnit, SpeedUnit,
};

use crate::error::{LocShareError, LocShareErrorCode};
use crate::helpers::{clear_last_error, track_error};

/// C-compatible distance unit tag.
///
/// `Pixels` is a screen-space length and is not commensurable with the
/// geographic units; conversion across that boundary fails with
/// `IncommensurableUnits`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnitCode {
    Pixels = 0,
    Meters = 1,
    Kilometers = 2,
    Feet = 3,
    Yards = 4,
    Miles = 5,
    NauticalMiles = 6,
}

impl From<DistanceUnitCode> for DistanceUnit {
    fn from(code: DistanceUnitCode) -> Self {
        match code {
            DistanceUnitCode::Pixels => DistanceUnit::Pixels,
            DistanceUnitCode::Meters => DistanceUnit::Geographic(GeographicUnit::Meters),
            DistanceUnitCode::Kilometers => DistanceUnit::Geographic(GeographicUnit::Kilometers),
            DistanceUnitCode::Feet => DistanceUnit::Geographic(GeographicUnit::Feet),
            DistanceUnitCode::Yards => DistanceUnit::Geographic(GeographicUnit::Yards),
            DistanceUnitCode::Miles => DistanceUnit::Geographic(GeographicUnit::Miles),
            DistanceUnitCode::NauticalMiles => {
                DistanceUnit::Geographic(GeographicUnit::NauticalMiles)
            }
        }
    }
}

/// C-compatible speed unit tag. All speed units are mutually convertible.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnitCode {
    MetersPerSecond = 0,
    KilometersPerHour = 1,
    MilesPerHour = 2,
    Knots = 3,
}

impl From<SpeedUnitCode> for SpeedUnit {
    fn from(code: SpeedUnitCode) -> Self {
        match code {
            SpeedUnitCode::MetersPerSecond => SpeedUnit::MetersPerSecond,
            SpeedUnitCode::KilometersPerHour => SpeedUnit::KilometersPerHour,
            SpeedUnitCode::MilesPerHour => SpeedUnit::MilesPerHour,
            SpeedUnitCode::Knots => SpeedUnit::Knots,
        }
    }
}

/// Convert a distance magnitude between units.
///
/// Writes the converted magnitude to `out_value` and returns `Ok`.
/// Conversion between `Pixels` and any geographic unit fails with
/// `IncommensurableUnits`; retrieve details via `loc_share_last_error`.
///
/// # Safety
/// - `out_value` must be a valid, writable pointer to a `double`, or null
///   (null is reported as `NullPointer` rather than dereferenced).
#[no_mangle]
pub unsafe extern "C" fn loc_share_distance_convert(
    value: f64,
    unit: DistanceUnitCode,
    target: DistanceUnitCode,
    out_value: *mut f64,
) -> LocShareErrorCode {
    if out_value.is_null() {
        return track_error(&LocShareError::null_pointer("out_value"));
    }

    match distance(value, unit.into()).to(target.into()) {
        Ok(converted) => {
            *out_value = converted.value();
            clear_last_error()
        }
        Err(err) => track_error(&err.into()),
    }
}

/// Convert a speed magnitude between units. Never fails for valid pointers;
/// all speed units are mutually convertible.
///
/// # Safety
/// - `out_value` must be a valid, writable pointer to a `double`, or null
///   (null is reported as `NullPointer` rather than dereferenced).
#[no_mangle]
pub unsafe extern "C" fn loc_share_speed_convert(
    value: f64,
    unit: SpeedUnitCode,
    target: SpeedUnitCode,
    out_value: *mut f64,
) -> LocShareErrorCode {
    if out_value.is_null() {
        return track_error(&LocShareError::null_pointer("out_value"));
    }

    *out_value = speed(value, unit.into()).to(target.into()).value();
    clear_last_error()
}
