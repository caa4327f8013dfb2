use geo_types::{Point, Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// The latitude/longitude rectangle covered by a decoded code.
///
/// Bounds are in WGS84 degrees. `north` and `east` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodeArea {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
    /// Number of significant digits in the decoded code
    pub code_length: usize,
}

impl CodeArea {
    pub(crate) fn new(south: f64, west: f64, north: f64, east: f64, code_length: usize) -> Self {
        Self {
            south,
            west,
            north,
            east,
            code_length,
        }
    }

    /// Centre of the area as a `Point` with x = longitude, y = latitude.
    pub fn center(&self) -> Point<f64> {
        Point::new(
            (self.west + self.east) / 2.0,
            (self.south + self.north) / 2.0,
        )
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.west, y: self.south },
            coord! { x: self.east, y: self.north },
        )
    }

    /// Converts the area to a closed rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }

    /// Returns true if the point (x = longitude, y = latitude) lies inside the area.
    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.south <= point.y()
            && point.y() < self.north
            && self.west <= point.x()
            && point.x() < self.east
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_rect() {
        let area = CodeArea::new(20.35, 2.75, 20.4, 2.8, 6);
        let center = area.center();
        assert!((center.x() - 2.775).abs() < 1e-9);
        assert!((center.y() - 20.375).abs() < 1e-9);

        let rect = area.to_rect();
        assert_eq!(rect.min().x, 2.75);
        assert_eq!(rect.max().y, 20.4);
    }

    #[test]
    fn test_to_polygon_is_closed() {
        let area = CodeArea::new(20.35, 2.75, 20.4, 2.8, 6);
        let polygon = area.to_polygon();
        let exterior = polygon.exterior();
        assert_eq!(exterior.coords().count(), 5);
        assert_eq!(exterior.0[0], exterior.0[4]);
    }

    #[test]
    fn test_contains() {
        let area = CodeArea::new(20.35, 2.75, 20.4, 2.8, 6);
        assert!(area.contains(&Point::new(2.775, 20.375)));
        assert!(area.contains(&Point::new(2.75, 20.35)));
        assert!(!area.contains(&Point::new(2.8, 20.375)));
        assert!(!area.contains(&Point::new(2.775, 20.5)));
    }
}
