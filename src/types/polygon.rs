use crate::types::{BoundingBox, LatLng};

/// A finalized airspace boundary with its decoded metadata
///
/// Produced once per non-excluded block and never mutated afterwards.
/// Coordinates keep the order in which the boundary was described, which
/// defines the winding of the polygon.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AirspacePolygon {
    pub coordinates: Vec<LatLng>,

    // Vertical limits in feet
    pub base_altitude_ft: f64,
    pub ceiling_altitude_ft: Option<f64>,

    pub name: Option<String>,
    pub airspace_class: Option<String>,
}

impl AirspacePolygon {
    /// Compute the bounding box of the boundary
    ///
    /// Returns `None` for a block that described no boundary points.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.coordinates)
    }
}

impl Default for AirspacePolygon {
    fn default() -> Self {
        Self {
            coordinates: vec![],
            base_altitude_ft: 0.0,
            ceiling_altitude_ft: None,
            name: None,
            airspace_class: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some};

    #[test]
    fn default_has_surface_base() {
        let polygon = AirspacePolygon::default();
        assert_eq!(polygon.base_altitude_ft, 0.0);
        assert_none!(polygon.ceiling_altitude_ft);
        assert_none!(polygon.bounding_box());
    }

    #[test]
    fn bounding_box_covers_coordinates() {
        let polygon = AirspacePolygon {
            coordinates: vec![
                LatLng::new(47.0, 8.0).unwrap(),
                LatLng::new(47.5, 8.5).unwrap(),
            ],
            ..Default::default()
        };

        let bbox = assert_some!(polygon.bounding_box());
        assert_eq!(bbox.south, 47.0);
        assert_eq!(bbox.east, 8.5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_camel_case_keys() {
        let polygon = AirspacePolygon {
            coordinates: vec![LatLng::new(1.0, 2.0).unwrap()],
            base_altitude_ft: 0.0,
            ceiling_altitude_ft: Some(3500.0),
            name: Some("Test Zone".into()),
            airspace_class: Some("R".into()),
        };

        let json = serde_json::to_string(&polygon).unwrap();
        assert_eq!(
            json,
            r#"{"coordinates":[{"lat":1.0,"lng":2.0}],"baseAltitudeFt":0.0,"ceilingAltitudeFt":3500.0,"name":"Test Zone","airspaceClass":"R"}"#
        );
    }
}
