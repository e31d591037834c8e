use serde::{Deserialize, Serialize};

/// A map coordinate in projection space: `x` is longitude, `y` is latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Longitude component.
    pub fn lng(&self) -> f64 {
        self.x
    }

    /// Latitude component.
    pub fn lat(&self) -> f64 {
        self.y
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let d = self.subtract(other);
        (d.x * d.x + d.y * d.y).sqrt()
    }

    /// Validates that the coordinate lies on the world map
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && (-180.0..=180.0).contains(&self.x)
            && (-90.0..=90.0).contains(&self.y)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<[f64; 2]> for Point {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(value: Point) -> Self {
        [value.x, value.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_point_validity() {
        assert!(Point::new(-100.0, 45.0).is_valid());
        assert!(!Point::new(200.0, 0.0).is_valid());
        assert!(!Point::new(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn test_array_conversion() {
        let p: Point = [110.0, 15.0].into();
        assert_eq!(p.lng(), 110.0);
        assert_eq!(p.lat(), 15.0);
        let back: [f64; 2] = p.into();
        assert_eq!(back, [110.0, 15.0]);
    }
}
