use lyon::path::Path;
use serde::{Deserialize, Serialize};

mod circle;
mod path;
mod rectangle;

pub use circle::DesignCircle;
pub use path::DesignPath;
pub use rectangle::DesignRectangle;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Fill and stroke colors as they appear in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub fill: String,
    pub stroke: String,
}

impl Style {
    pub fn new(fill: impl Into<String>, stroke: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            stroke: stroke.into(),
        }
    }
}

pub trait DesignerShape {
    /// Geometry for the host renderer.
    fn render(&self) -> Path;
    /// `(min_x, min_y, max_x, max_y)`
    fn bounds(&self) -> (f64, f64, f64, f64);
    fn contains_point(&self, p: Point, tolerance: f64) -> bool;
    /// Grows a shape being drawn so that it spans from `anchor` to `p`.
    fn grow_to(&mut self, anchor: Point, p: Point);
    /// Called once the drawing gesture ends.
    fn normalize(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Circle,
    Path,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(DesignRectangle),
    Circle(DesignCircle),
    Path(DesignPath),
}

impl DesignerShape for Shape {
    fn render(&self) -> Path {
        match self {
            Shape::Rectangle(s) => s.render(),
            Shape::Circle(s) => s.render(),
            Shape::Path(s) => s.render(),
        }
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Path(s) => s.bounds(),
        }
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        match self {
            Shape::Rectangle(s) => s.contains_point(p, tolerance),
            Shape::Circle(s) => s.contains_point(p, tolerance),
            Shape::Path(s) => s.contains_point(p, tolerance),
        }
    }

    fn grow_to(&mut self, anchor: Point, p: Point) {
        match self {
            Shape::Rectangle(s) => s.grow_to(anchor, p),
            Shape::Circle(s) => s.grow_to(anchor, p),
            Shape::Path(s) => s.grow_to(anchor, p),
        }
    }

    fn normalize(&mut self) {
        match self {
            Shape::Rectangle(s) => s.normalize(),
            Shape::Circle(s) => s.normalize(),
            Shape::Path(s) => s.normalize(),
        }
    }
}

impl Shape {
    /// A zero-extent shape of `kind` placed at `origin`, ready to be grown by
    /// a drawing gesture.
    pub fn zero_sized(kind: ShapeType, origin: Point) -> Self {
        match kind {
            ShapeType::Rectangle => {
                Shape::Rectangle(DesignRectangle::new(origin.x, origin.y, 0.0, 0.0))
            }
            ShapeType::Circle => Shape::Circle(DesignCircle::new(origin, 0.0)),
            ShapeType::Path => Shape::Path(DesignPath::starting_at(origin)),
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Path(_) => ShapeType::Path,
        }
    }

    pub fn as_path(&self) -> Option<&DesignPath> {
        match self {
            Shape::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_path_mut(&mut self) -> Option<&mut DesignPath> {
        match self {
            Shape::Path(p) => Some(p),
            _ => None,
        }
    }
}

/// A shape on the canvas together with its identity and colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingObject {
    pub id: u64,
    pub style: Style,
    pub shape: Shape,
}

impl DrawingObject {
    pub fn new(id: u64, style: Style, shape: Shape) -> Self {
        Self { id, style, shape }
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        self.shape.contains_point(*point, tolerance)
    }
}

pub(crate) fn to_lyon(p: Point) -> lyon::math::Point {
    lyon::math::point(p.x as f32, p.y as f32)
}
