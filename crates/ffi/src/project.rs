//! Great-circle end-point calculation across the C ABI.

use locshare_core::{calculate_end_point, distance, GeoPoint};

use crate::convert::DistanceUnitCode;
use crate::error::{LocShareError, LocShareErrorCode};
use crate::helpers::{clear_last_error, track_error};

/// C-compatible latitude/longitude pair in degrees.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPointC {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

/// Destination point a great-circle distance from a start point along a
/// compass bearing (degrees clockwise from true north).
///
/// Writes the destination to `out_point` and returns `Ok`. A pixel-unit
/// distance fails with `IncommensurableUnits`; an offset whose destination
/// is undefined on the spherical formula fails with `DegenerateOffset`.
/// Retrieve details via `loc_share_last_error`.
///
/// # Safety
/// - `out_point` must be a valid, writable pointer to a `GeoPointC`, or
///   null (null is reported as `NullPointer` rather than dereferenced).
#[no_mangle]
pub unsafe extern "C" fn loc_share_end_point(
    lat: f64,
    lng: f64,
    distance_value: f64,
    distance_unit: DistanceUnitCode,
    bearing_degrees: f64,
    out_point: *mut GeoPointC,
) -> LocShareErrorCode {
    if out_point.is_null() {
        return track_error(&LocShareError::null_pointer("out_point"));
    }

    let start = GeoPoint::new(lat, lng);
    let dist = distance(distance_value, distance_unit.into());
    match calculate_end_point(start, dist, bearing_degrees) {
        Ok(end) => {
            *out_point = GeoPointC {
                lat: end.lat,
                lng: end.lng,
            };
            clear_last_error()
        }
        Err(err) => track_error(&err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_point_moves_north_from_the_equator() {
        let mut out = GeoPointC { lat: 0.0, lng: 0.0 };
        let code = unsafe {
            loc_share_end_point(0.0, 0.0, 111.32, DistanceUnitCode::Kilometers, 0.0, &mut out)
        };
        assert_eq!(code, LocShareErrorCode::Ok);
        assert!((out.lat - 1.0).abs() < 0.01);
        assert!(out.lng.abs() < 1e-6);
    }

    #[test]
    fn pixel_distance_is_rejected_with_a_message() {
        let mut out = GeoPointC { lat: 0.0, lng: 0.0 };
        let code = unsafe {
            loc_share_end_point(0.0, 0.0, 30.0, DistanceUnitCode::Pixels, 0.0, &mut out)
        };
        assert_eq!(code, LocShareErrorCode::IncommensurableUnits);
        assert!(!crate::error::loc_share_last_error().is_null());
    }

    #[test]
    fn null_output_pointer_is_reported() {
        let code = unsafe {
            loc_share_end_point(
                0.0,
                0.0,
                1.0,
                DistanceUnitCode::Meters,
                0.0,
                std::ptr::null_mut(),
            )
        };
        assert_eq!(code, LocShareErrorCode::NullPointer);
    }
}
