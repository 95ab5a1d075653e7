use lyon::path::Path;
use serde::{Deserialize, Serialize};

use super::{to_lyon, DesignerShape, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCircle {
    pub center: Point,
    pub radius: f64,
}

impl DesignCircle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl DesignerShape for DesignCircle {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_circle(
            to_lyon(self.center),
            self.radius.abs() as f32,
            lyon::path::Winding::Positive,
        );
        builder.build()
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        let r = self.radius.abs();
        (
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        self.center.distance_to(&p) <= self.radius.abs() + tolerance
    }

    fn grow_to(&mut self, anchor: Point, p: Point) {
        self.center = anchor;
        self.radius = anchor.distance_to(&p);
    }

    // Radius is a distance, already non-negative.
    fn normalize(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_uses_distance_from_center() {
        let center = Point::new(10.0, 10.0);
        let mut circle = DesignCircle::new(center, 0.0);
        circle.grow_to(center, Point::new(7.0, 6.0));
        assert_eq!(circle.radius, 5.0);
        assert_eq!(circle.bounds(), (5.0, 5.0, 15.0, 15.0));
    }

    #[test]
    fn test_contains_point() {
        let circle = DesignCircle::new(Point::new(0.0, 0.0), 2.0);
        assert!(circle.contains_point(Point::new(1.0, 1.0), 0.0));
        assert!(!circle.contains_point(Point::new(3.0, 0.0), 0.5));
        assert!(circle.contains_point(Point::new(3.0, 0.0), 1.0));
    }
}
