use serde::Serialize;
use thiserror::Error;

/// A validated geographic position in decimal degrees (WGS84).
///
/// [`Coordinate::new`] is the only construction gate: a `Coordinate` in hand
/// always holds finite values with latitude in [-90, 90] and longitude in
/// [-180, 180]. Fields are private so nothing can skip the gate; the type
/// deliberately does not implement `Deserialize` for the same reason.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("coordinate component is not a finite number")]
    NotFinite,
}

impl Coordinate {
    /// Validates and constructs a coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either component is non-finite or
    /// outside valid geographic bounds.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_values_inside_bounds() {
        let coord = Coordinate::new(40.4168, -3.7038).unwrap();
        assert!((coord.lat() - 40.4168).abs() < f64::EPSILON);
        assert!((coord.lon() - (-3.7038)).abs() < f64::EPSILON);
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_latitude_out_of_range() {
        assert_eq!(
            Coordinate::new(90.01, 0.0),
            Err(CoordinateError::LatitudeOutOfRange(90.01))
        );
        assert_eq!(
            Coordinate::new(-123.0, 0.0),
            Err(CoordinateError::LatitudeOutOfRange(-123.0))
        );
    }

    #[test]
    fn rejects_longitude_out_of_range() {
        assert_eq!(
            Coordinate::new(0.0, 180.5),
            Err(CoordinateError::LongitudeOutOfRange(180.5))
        );
        assert_eq!(
            Coordinate::new(0.0, -181.0),
            Err(CoordinateError::LongitudeOutOfRange(-181.0))
        );
    }

    #[test]
    fn rejects_non_finite_components() {
        assert_eq!(Coordinate::new(f64::NAN, 0.0), Err(CoordinateError::NotFinite));
        assert_eq!(
            Coordinate::new(0.0, f64::INFINITY),
            Err(CoordinateError::NotFinite)
        );
        assert_eq!(
            Coordinate::new(f64::NEG_INFINITY, 0.0),
            Err(CoordinateError::NotFinite)
        );
    }
}
