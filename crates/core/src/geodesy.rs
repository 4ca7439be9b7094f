//! Great-circle destination points on the spherical Earth model.
//!
//! Every auxiliary graphic the viewer draws around the reported location
//! (direction arrows, distance labels) is placed by offsetting the reported
//! point a real-world distance along a compass bearing. The math is the
//! spherical law of cosines in colatitude form, treating Earth as a perfect
//! sphere of radius 6378.137 km.

use tracing::{trace, warn};

use crate::core_types::distance::{Distance, GeographicDistance, GeographicUnit};
use crate::core_types::location::GeoPoint;
use crate::error::ProjectionError;

/// Earth radius used by the spherical model.
pub const EARTH_RADIUS: GeographicDistance =
    GeographicDistance::new(6378.137, GeographicUnit::Kilometers);

/// Destination point a great-circle distance from `start` along a bearing.
///
/// `bearing_degrees` is measured clockwise from true north. A zero-length
/// offset returns `start` unchanged. The computation is pure and safe to
/// call concurrently.
///
/// # Errors
///
/// - [`ProjectionError::Conversion`] when `distance` is a pixel length;
///   only geographic lengths describe real-world offsets.
/// - [`ProjectionError::DegenerateOffset`] when the destination colatitude
///   is 0 or 180 degrees for a nonzero distance (an offset of half the
///   Earth's circumference along the bearing, or a start/bearing combination
///   landing exactly on a pole of the formula); the relative longitude is
///   undefined there. Callers placing arrows and labels a few hundred meters
///   out never reach this regime.
pub fn calculate_end_point(
    start: GeoPoint,
    dist: Distance,
    bearing_degrees: f64,
) -> Result<GeoPoint, ProjectionError> {
    // http://www.codeguru.com/cpp/cpp/algorithms/article.php/c5115/Geographic-Distance-and-Azimuth-Calculations.htm
    let distance_km = dist.to_geographic(GeographicUnit::Kilometers)?;
    if distance_km.value() == 0.0 {
        return Ok(start);
    }

    // Angular distance along the great circle, in radians.
    let d = distance_km.value() / EARTH_RADIUS.value();
    let bearing = bearing_degrees.to_radians();
    let colatitude = (90.0 - start.lat).to_radians();

    // Destination colatitude from the spherical law of cosines.
    let a = (d.cos() * colatitude.cos() + colatitude.sin() * d.sin() * bearing.cos()).acos();
    if a.sin() == 0.0 {
        warn!(
            lat = start.lat,
            lng = start.lng,
            distance_km = distance_km.value(),
            bearing = bearing_degrees,
            "destination lands on a pole of the projection formula"
        );
        return Err(ProjectionError::DegenerateOffset {
            distance_km: distance_km.value(),
        });
    }

    // Longitude offset relative to the start meridian.
    let b = (d.sin() * bearing.sin() / a.sin()).asin();

    let end = GeoPoint::new(90.0 - a.to_degrees(), start.lng + b.to_degrees());
    trace!(
        start_lat = start.lat,
        start_lng = start.lng,
        end_lat = end.lat,
        end_lng = end.lng,
        "projected end point"
    );
    Ok(end)
}
