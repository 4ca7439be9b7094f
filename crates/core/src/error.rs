//! Errors produced by unit conversion and annotation placement.

use crate::core_types::distance::DistanceUnit;

/// Conversion between the pixel unit and a geographic unit was requested.
///
/// This is the only failure the unit quantity system can produce. Pixel
/// lengths describe the screen, geographic lengths describe the world, and
/// there is no ratio between them; a caller hitting this error is mixing the
/// two deliberately distinct spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionError {
    from: DistanceUnit,
    to: DistanceUnit,
}

impl ConversionError {
    pub(crate) const fn new(from: DistanceUnit, to: DistanceUnit) -> Self {
        ConversionError { from, to }
    }

    /// Unit of the quantity the conversion was requested on.
    #[must_use]
    pub const fn from_unit(self) -> DistanceUnit {
        self.from
    }

    /// Unit the conversion was requested into.
    #[must_use]
    pub const fn to_unit(self) -> DistanceUnit {
        self.to
    }
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cannot convert {} to {}: pixel lengths are not commensurable with geographic lengths",
            self.from, self.to
        )
    }
}

impl std::error::Error for ConversionError {}

/// Errors from the geodesic end-point calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// A pixel-space distance was passed where a geographic length is
    /// required.
    Conversion(ConversionError),
    /// The requested offset lands where the relative longitude is undefined
    /// (the destination colatitude is 0 or 180 degrees, i.e. a pole of the
    /// spherical formula for a nonzero distance).
    DegenerateOffset {
        /// The offending offset in kilometers.
        distance_km: f64,
    },
}

impl std::fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionError::Conversion(err) => err.fmt(f),
            ProjectionError::DegenerateOffset { distance_km } => write!(
                f,
                "offset of {distance_km} km puts the destination at a pole of the projection; \
                 the relative longitude is undefined"
            ),
        }
    }
}

impl std::error::Error for ProjectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProjectionError::Conversion(err) => Some(err),
            ProjectionError::DegenerateOffset { .. } => None,
        }
    }
}

impl From<ConversionError> for ProjectionError {
    fn from(err: ConversionError) -> Self {
        ProjectionError::Conversion(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_error_names_both_units() {
        let err = ConversionError::new(DistanceUnit::Pixels, DistanceUnit::METERS);
        let msg = err.to_string();
        assert!(msg.contains("px"));
        assert!(msg.contains("m"));
        assert!(msg.contains("not commensurable"));
    }

    #[test]
    fn projection_error_chains_to_conversion_source() {
        use std::error::Error;

        let inner = ConversionError::new(DistanceUnit::Pixels, DistanceUnit::KILOMETERS);
        let err = ProjectionError::from(inner);
        assert!(err.source().is_some());

        let degenerate = ProjectionError::DegenerateOffset { distance_km: 20038.0 };
        assert!(degenerate.source().is_none());
        assert!(degenerate.to_string().contains("20038"));
    }
}
