//! Great-circle distance on a spherical Earth.

use crate::coordinate::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometers.
///
/// Uses the `atan2` form rather than `asin`: rounding can push the haversine
/// term past 1 for near-antipodal points, which would leave `asin`'s domain,
/// while `atan2(√h, √(1-h))` stays defined.
///
/// Symmetric, non-negative, and exactly zero for identical inputs.
#[must_use]
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let delta_lat = (b.lat() - a.lat()).to_radians();
    let delta_lon = (b.lon() - a.lon()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + a.lat().to_radians().cos() * b.lat().to_radians().cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
