use geo_types::Point;

/// Trait for types that can provide WGS84 x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`, both read as
/// `(longitude, latitude)` to match GeoJSON and WKT axis order.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;

    fn longitude(&self) -> f64 {
        self.x()
    }

    fn latitude(&self) -> f64 {
        self.y()
    }

    /// Returns true if the coordinate is finite and inside the nominal WGS84 range.
    fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude()) && (-180.0..=180.0).contains(&self.longitude())
    }
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}
