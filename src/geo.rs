//! Spherical Earth geometry
//!
//! All functions treat the Earth as a sphere of radius [`EARTH_RADIUS_M`].
//! Headings are in degrees measured clockwise from true north.

use crate::types::LatLng;

/// Earth radius in meters used by every calculation in this module
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Meters per nautical mile
pub const METERS_PER_NM: f64 = 1852.0;

/// Project a point `distance_m` meters away from `from` along `heading_deg`
pub fn destination_point(from: LatLng, distance_m: f64, heading_deg: f64) -> LatLng {
    let angular = distance_m / EARTH_RADIUS_M;
    let heading = heading_deg.to_radians();
    let lat1 = from.lat().to_radians();
    let lng1 = from.lng().to_radians();

    let sin_lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * heading.cos())
        .clamp(-1.0, 1.0);
    let lat2 = sin_lat2.asin();
    let lng2 = lng1
        + (heading.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * sin_lat2);

    LatLng::normalized(lat2.to_degrees(), lng2.to_degrees())
}

/// Initial great-circle heading from `from` towards `to`
///
/// The result lies in `[-180, 180]`. A heading of exactly 180° is returned
/// as `180`, every other value is folded into `[-180, 180)`.
pub fn initial_heading(from: LatLng, to: LatLng) -> f64 {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let delta_lng = (to.lng() - from.lng()).to_radians();

    let y = delta_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

    normalize_heading(y.atan2(x).to_degrees())
}

fn normalize_heading(heading: f64) -> f64 {
    if heading == 180.0 {
        return heading;
    }

    (heading + 180.0).rem_euclid(360.0) - 180.0
}

/// Great-circle distance in meters between two points (haversine formula)
pub fn great_circle_distance(from: LatLng, to: LatLng) -> f64 {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let delta_lat = (to.lat() - from.lat()).to_radians();
    let delta_lng = (to.lng() - from.lng()).to_radians();

    let a = ((delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    EARTH_RADIUS_M * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}
