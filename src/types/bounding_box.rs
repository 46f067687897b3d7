use crate::types::LatLng;

/// Bounding box for geographic areas
///
/// Represents a rectangular geographic area defined by longitude and latitude bounds.
/// All coordinates are stored in degrees.
///
/// # Limitations
///
/// **Anti-meridian handling**: This implementation does not correctly handle areas
/// crossing the ±180° longitude line (anti-meridian). Simple min/max logic is used,
/// so such a polygon gets a box spanning nearly the entire globe instead of the
/// actual smaller region.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoundingBox {
    pub west: f64,
    pub north: f64,
    pub east: f64,
    pub south: f64,
}

impl BoundingBox {
    /// Create a bounding box from a slice of points
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let mut bbox = Self::from(*first);
        for &point in rest {
            bbox.extend(point);
        }
        Some(bbox)
    }

    /// Grow the bounding box if necessary to encompass the given point
    pub fn extend(&mut self, point: LatLng) {
        self.west = self.west.min(point.lng());
        self.east = self.east.max(point.lng());
        self.north = self.north.max(point.lat());
        self.south = self.south.min(point.lat());
    }

    /// Grow the bounding box if necessary to encompass another bounding box
    pub fn merge(&mut self, other: BoundingBox) {
        self.west = self.west.min(other.west);
        self.east = self.east.max(other.east);
        self.north = self.north.max(other.north);
        self.south = self.south.min(other.south);
    }

    /// Check whether a point lies inside or on the edge of the box
    pub fn contains(&self, point: LatLng) -> bool {
        point.lng() >= self.west
            && point.lng() <= self.east
            && point.lat() >= self.south
            && point.lat() <= self.north
    }
}

impl From<LatLng> for BoundingBox {
    fn from(point: LatLng) -> Self {
        Self {
            west: point.lng(),
            north: point.lat(),
            east: point.lng(),
            south: point.lat(),
        }
    }
}
