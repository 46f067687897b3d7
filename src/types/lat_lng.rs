use crate::error::{Error, Result};
use std::str::FromStr;

/// Geographic coordinate in decimal degrees
///
/// Latitude is clamped to `[-90, 90]` and longitude is wrapped into
/// `(-180, 180]` on construction. The value cannot be changed afterwards;
/// distance and heading helpers live in [`crate::geo`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    /// Create a coordinate from latitude and longitude in degrees
    ///
    /// Fails if either component is NaN or infinite.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(Error::NonFiniteCoordinate { lat, lng });
        }

        Ok(Self::normalized(lat, lng))
    }

    /// Clamp and wrap components that are already known to be finite
    pub(crate) fn normalized(lat: f64, lng: f64) -> Self {
        Self {
            lat: lat.clamp(-90.0, 90.0),
            lng: wrap_longitude(lng),
        }
    }

    /// Latitude in degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl FromStr for LatLng {
    type Err = Error;

    /// Parse a `DD:MM:SS N DDD:MM:SS E` coordinate string
    fn from_str(s: &str) -> Result<Self> {
        crate::lexer::parse_coordinate(s)
    }
}

fn wrap_longitude(lng: f64) -> f64 {
    if lng > -180.0 && lng <= 180.0 {
        return lng;
    }

    let wrapped = (lng + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 { 180.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use insta::assert_compact_debug_snapshot;

    #[test]
    fn in_range_values_are_kept() {
        let point = assert_ok!(LatLng::new(51.5, -0.25));
        assert_eq!(point.lat(), 51.5);
        assert_eq!(point.lng(), -0.25);
    }

    #[test]
    fn latitude_is_clamped() {
        assert_eq!(assert_ok!(LatLng::new(91.0, 0.0)).lat(), 90.0);
        assert_eq!(assert_ok!(LatLng::new(-120.5, 0.0)).lat(), -90.0);
    }

    #[test]
    fn longitude_is_wrapped() {
        assert_eq!(assert_ok!(LatLng::new(0.0, 190.0)).lng(), -170.0);
        assert_eq!(assert_ok!(LatLng::new(0.0, -190.0)).lng(), 170.0);
        assert_eq!(assert_ok!(LatLng::new(0.0, 540.0)).lng(), 180.0);
        assert_eq!(assert_ok!(LatLng::new(0.0, 720.0)).lng(), 0.0);
    }

    #[test]
    fn antimeridian_maps_to_positive_180() {
        assert_eq!(assert_ok!(LatLng::new(0.0, 180.0)).lng(), 180.0);
        assert_eq!(assert_ok!(LatLng::new(0.0, -180.0)).lng(), 180.0);
    }

    #[test]
    fn non_finite_components_are_rejected() {
        assert_err!(LatLng::new(f64::NAN, 0.0));
        assert_err!(LatLng::new(0.0, f64::INFINITY));

        let err = LatLng::new(1.0, f64::NEG_INFINITY).unwrap_err();
        assert_compact_debug_snapshot!(err, @"NonFiniteCoordinate { lat: 1.0, lng: -inf }");
    }

    #[test]
    fn from_str_uses_dms_grammar() {
        let point: LatLng = assert_ok!("51:30:00 N 000:10:00 W".parse());
        assert_eq!(point.lat(), 51.5);
        assert!((point.lng() + 10.0 / 60.0).abs() < 1e-12);

        assert_err!("51.5 -0.16".parse::<LatLng>());
    }
}
