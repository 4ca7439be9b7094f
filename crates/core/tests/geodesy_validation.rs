//! Geodesic Projector Validation Suite
//!
//! Validates destination-point placement on the spherical Earth model
//! against textbook geography: one degree of latitude is ~111.32 km at the
//! equator, longitude degrees shrink with the cosine of latitude, and an
//! out-and-back trip along the same bearing returns near the origin when
//! the offset is small relative to the Earth radius.
//!
//! Run with: `cargo test --test geodesy_validation`

use approx::assert_relative_eq;
use locshare_core::{
    calculate_end_point, kilometers, meters, miles, pixels, GeoPoint, ProjectionError,
    EARTH_RADIUS,
};
use tracing_subscriber::EnvFilter;

/// One degree of latitude along a meridian at the equator, in kilometers.
const ONE_DEGREE_KM: f64 = 111.32;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 1: CARDINAL BEARINGS AT THE EQUATOR
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn one_degree_north_at_the_equator() {
    init_tracing();
    let end = calculate_end_point(GeoPoint::new(0.0, 0.0), kilometers(ONE_DEGREE_KM).into(), 0.0)
        .unwrap();
    assert_relative_eq!(end.lat, 1.0, max_relative = 0.01);
    assert!(end.lng.abs() < 1e-6, "lng = {}", end.lng);
}

#[test]
fn one_degree_east_at_the_equator() {
    init_tracing();
    let end = calculate_end_point(GeoPoint::new(0.0, 0.0), kilometers(ONE_DEGREE_KM).into(), 90.0)
        .unwrap();
    assert_relative_eq!(end.lng, 1.0, max_relative = 0.01);
    assert!(end.lat.abs() < 1e-6, "lat = {}", end.lat);
}

#[test]
fn south_and_west_mirror_north_and_east() {
    init_tracing();
    let start = GeoPoint::new(0.0, 0.0);
    let offset = kilometers(ONE_DEGREE_KM);

    let south = calculate_end_point(start, offset.into(), 180.0).unwrap();
    assert_relative_eq!(south.lat, -1.0, max_relative = 0.01);

    let west = calculate_end_point(start, offset.into(), 270.0).unwrap();
    assert_relative_eq!(west.lng, -1.0, max_relative = 0.01);
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 2: MID-LATITUDE BEHAVIOR
// ═══════════════════════════════════════════════════════════════════════════

/// Away from the equator a longitude degree is shorter by cos(latitude), so
/// the same eastward offset must span correspondingly more degrees.
#[test]
fn longitude_degrees_shrink_with_latitude() {
    init_tracing();
    let start = GeoPoint::new(53.4296143, 14.5445406);
    let end =
        calculate_end_point(start, kilometers(ONE_DEGREE_KM).into(), 90.0).unwrap();

    let degrees_east = end.lng - start.lng;
    assert_relative_eq!(
        degrees_east,
        1.0 / start.lat.to_radians().cos(),
        max_relative = 0.01
    );
    // A due-east great circle bends slightly equatorward, never poleward.
    assert!(end.lat < start.lat);
    assert!((end.lat - start.lat).abs() < 0.02);
}

/// The endpoint depends on the physical length, not the unit it is
/// expressed in.
#[test]
fn endpoint_is_unit_independent() {
    init_tracing();
    let start = GeoPoint::new(-33.8688, 151.2093);

    let from_km = calculate_end_point(start, kilometers(1.609344).into(), 63.0).unwrap();
    let from_m = calculate_end_point(start, meters(1609.344).into(), 63.0).unwrap();
    let from_mi = calculate_end_point(start, miles(1.0).into(), 63.0).unwrap();

    assert_relative_eq!(from_km.lat, from_m.lat, max_relative = 1e-12);
    assert_relative_eq!(from_km.lng, from_m.lng, max_relative = 1e-12);
    assert_relative_eq!(from_km.lat, from_mi.lat, max_relative = 1e-12);
    assert_relative_eq!(from_km.lng, from_mi.lng, max_relative = 1e-12);
}

/// Out-and-back along opposite bearings returns near the origin for offsets
/// small relative to the Earth radius. The return leg follows a slightly
/// different great circle (meridians converge), so the tolerance is loose
/// compared to floating-point precision.
#[test]
fn small_offsets_are_approximately_reversible() {
    init_tracing();
    let start = GeoPoint::new(53.4296143, 14.5445406);
    let out = calculate_end_point(start, kilometers(5.0).into(), 37.0).unwrap();
    let back = calculate_end_point(out, kilometers(5.0).into(), 217.0).unwrap();

    assert!((back.lat - start.lat).abs() < 1e-3, "lat drift {}", back.lat - start.lat);
    assert!((back.lng - start.lng).abs() < 1e-3, "lng drift {}", back.lng - start.lng);
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 3: EDGE CONDITIONS AND CONTRACT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn zero_distance_is_the_identity() {
    init_tracing();
    let start = GeoPoint::new(53.4296143, 14.5445406);
    let end = calculate_end_point(start, meters(0.0).into(), 270.0).unwrap();
    assert_eq!(end, start);
}

#[test]
fn pixel_offsets_are_a_contract_violation() {
    init_tracing();
    let result = calculate_end_point(GeoPoint::new(0.0, 0.0), pixels(25.0).into(), 0.0);
    match result {
        Err(ProjectionError::Conversion(err)) => {
            assert!(err.to_string().contains("not commensurable"));
        }
        other => panic!("expected a conversion error, got {other:?}"),
    }
}

#[test]
fn degenerate_offsets_error_instead_of_returning_nan() {
    init_tracing();
    // From the pole, an offset too small to move cos(d) off 1.0 collapses
    // the destination colatitude to zero.
    let result = calculate_end_point(GeoPoint::new(90.0, 0.0), meters(0.001).into(), 10.0);
    assert!(matches!(
        result,
        Err(ProjectionError::DegenerateOffset { .. })
    ));
}

/// The quarter-circumference offset from the equator lands at the pole
/// region; the formula stays finite well past any offset the viewer draws.
#[test]
fn large_offsets_stay_finite() {
    init_tracing();
    let quarter = kilometers(EARTH_RADIUS.value() * std::f64::consts::FRAC_PI_2 * 0.99);
    let end = calculate_end_point(GeoPoint::new(0.0, 0.0), quarter.into(), 0.0).unwrap();
    assert!(end.lat.is_finite() && end.lng.is_finite());
    assert_relative_eq!(end.lat, 89.1, max_relative = 0.01);
}
