//! Great-circle distance on a spherical Earth

use geo::Point;

/// Earth's mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two points given in degrees
///
/// Non-finite inputs propagate NaN; callers filter positions with
/// [`Position::check`](crate::Position::check) first.
#[inline]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance in kilometers between two lon/lat points (x = lon, y = lat)
#[inline]
pub fn point_distance_km(from: Point<f64>, to: Point<f64>) -> f64 {
    distance_km(from.y(), from.x(), to.y(), to.x())
}
