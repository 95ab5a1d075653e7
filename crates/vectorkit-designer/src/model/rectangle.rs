use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point};

/// Axis-aligned rectangle.
///
/// `width` and `height` are signed while a drag is in progress and become
/// non-negative (with `x`/`y` at the minimum corner) once [`normalize`] runs.
///
/// [`normalize`]: DesignerShape::normalize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DesignRectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// `(min_x, min_y, |width|, |height|)` regardless of drag direction.
    pub fn normalized_geometry(&self) -> (f64, f64, f64, f64) {
        (
            self.x.min(self.x + self.width),
            self.y.min(self.y + self.height),
            self.width.abs(),
            self.height.abs(),
        )
    }
}

impl DesignerShape for DesignRectangle {
    fn render(&self) -> Path {
        let (x, y, w, h) = self.normalized_geometry();
        let mut builder = Path::builder();
        builder.add_rectangle(
            &lyon::math::Box2D::new(
                point(x as f32, y as f32),
                point((x + w) as f32, (y + h) as f32),
            ),
            lyon::path::Winding::Positive,
        );
        builder.build()
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        let (x, y, w, h) = self.normalized_geometry();
        (x, y, x + w, y + h)
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let (x1, y1, x2, y2) = self.bounds();
        p.x >= x1 - tolerance
            && p.x <= x2 + tolerance
            && p.y >= y1 - tolerance
            && p.y <= y2 + tolerance
    }

    fn grow_to(&mut self, anchor: Point, p: Point) {
        self.x = anchor.x;
        self.y = anchor.y;
        self.width = p.x - anchor.x;
        self.height = p.y - anchor.y;
    }

    fn normalize(&mut self) {
        let (x, y, w, h) = self.normalized_geometry();
        self.x = x;
        self.y = y;
        self.width = w;
        self.height = h;
    }
}
