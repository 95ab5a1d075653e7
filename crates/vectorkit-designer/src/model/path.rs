use lyon::algorithms::hit_test::hit_test_path;
use lyon::math::point;
use lyon::path::iterator::*;
use lyon::path::{FillRule, Path, PathEvent};
use serde::{Deserialize, Serialize};
use vectorkit_path::{resolve_points, CommandKind, PathCommand, PathData, PathPoint};

use super::{to_lyon, DesignerShape, Point};

type LyonPoint = lyon::math::Point;

const FLATTEN_TOLERANCE: f32 = 0.1;

/// Free-form path backed by editable path data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignPath {
    pub data: PathData,
}

impl DesignPath {
    pub fn new(data: PathData) -> Self {
        Self { data }
    }

    pub fn parse(d: &str) -> Self {
        Self::new(PathData::parse(d))
    }

    /// `M x y L x y`: the degenerate segment a path drawing gesture starts from.
    pub fn starting_at(origin: Point) -> Self {
        Self::new(PathData::from_commands(vec![
            PathCommand::new(CommandKind::MoveTo, false, vec![origin.x, origin.y]),
            PathCommand::new(CommandKind::LineTo, false, vec![origin.x, origin.y]),
        ]))
    }

    pub fn points(&self) -> Vec<PathPoint> {
        self.data.points()
    }
}

impl DesignerShape for DesignPath {
    fn render(&self) -> Path {
        build_lyon_path(self.data.commands())
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for p in self.points() {
            if !(p.x.is_finite() && p.y.is_finite()) {
                continue;
            }
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        if min_x > max_x {
            return (0.0, 0.0, 0.0, 0.0);
        }
        (min_x, min_y, max_x, max_y)
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        if self
            .points()
            .iter()
            .any(|pp| pp.distance_to(p.x, p.y) <= tolerance)
        {
            return true;
        }

        let path = self.render();
        let target = to_lyon(p);
        if hit_test_path(&target, path.iter(), FillRule::NonZero, FLATTEN_TOLERANCE) {
            return true;
        }

        let tolerance = tolerance as f32;
        path.iter()
            .flattened(FLATTEN_TOLERANCE)
            .any(|event| match event {
                PathEvent::Line { from, to } => segment_distance(from, to, target) <= tolerance,
                PathEvent::End {
                    last,
                    first,
                    close: true,
                } => segment_distance(last, first, target) <= tolerance,
                _ => false,
            })
    }

    /// Drags the final point of the path.
    fn grow_to(&mut self, _anchor: Point, p: Point) {
        let Some(last) = self.points().last().copied() else {
            return;
        };
        if let Err(e) = self.data.move_point(&last, p.x, p.y) {
            tracing::debug!("Path grow ignored: {}", e);
        }
    }

    fn normalize(&mut self) {}
}

/// Tracks the open subpath while emitting lyon builder events.
struct Pen {
    builder: lyon::path::path::Builder,
    open: bool,
    current: LyonPoint,
    subpath_start: LyonPoint,
}

impl Pen {
    fn new() -> Self {
        Self {
            builder: Path::builder(),
            open: false,
            current: point(0.0, 0.0),
            subpath_start: point(0.0, 0.0),
        }
    }

    fn move_to(&mut self, p: LyonPoint) {
        if !finite(p) {
            return;
        }
        if self.open {
            self.builder.end(false);
        }
        self.builder.begin(p);
        self.open = true;
        self.current = p;
        self.subpath_start = p;
    }

    fn ensure_open(&mut self) {
        if !self.open {
            self.builder.begin(self.current);
            self.open = true;
        }
    }

    fn line_to(&mut self, p: LyonPoint) {
        if !finite(p) {
            return;
        }
        self.ensure_open();
        self.builder.line_to(p);
        self.current = p;
    }

    fn quad_to(&mut self, ctrl: LyonPoint, to: LyonPoint) {
        if !(finite(ctrl) && finite(to)) {
            return;
        }
        self.ensure_open();
        self.builder.quadratic_bezier_to(ctrl, to);
        self.current = to;
    }

    fn cubic_to(&mut self, ctrl1: LyonPoint, ctrl2: LyonPoint, to: LyonPoint) {
        if !(finite(ctrl1) && finite(ctrl2) && finite(to)) {
            return;
        }
        self.ensure_open();
        self.builder.cubic_bezier_to(ctrl1, ctrl2, to);
        self.current = to;
    }

    fn close(&mut self) {
        if self.open {
            self.builder.close();
            self.open = false;
        }
        self.current = self.subpath_start;
    }

    fn finish(mut self) -> Path {
        if self.open {
            self.builder.end(false);
        }
        self.builder.build()
    }
}

/// Builds renderable geometry from the resolved points of `commands`.
///
/// Arcs are drawn as a straight segment to their end point.
fn build_lyon_path(commands: &[PathCommand]) -> Path {
    let points = resolve_points(commands);
    let mut pen = Pen::new();
    let mut cursor = 0;
    let mut cubic_ctrl: Option<LyonPoint> = None;
    let mut quad_ctrl: Option<LyonPoint> = None;

    for (index, cmd) in commands.iter().enumerate() {
        let first = cursor;
        while cursor < points.len() && points[cursor].command_index == index {
            cursor += 1;
        }
        let group: Vec<LyonPoint> = points[first..cursor]
            .iter()
            .map(|p| point(p.x as f32, p.y as f32))
            .collect();

        match cmd.kind {
            CommandKind::MoveTo => {
                if let Some((head, tail)) = group.split_first() {
                    pen.move_to(*head);
                    for p in tail {
                        pen.line_to(*p);
                    }
                }
            }
            CommandKind::LineTo
            | CommandKind::Horizontal
            | CommandKind::Vertical
            | CommandKind::Arc => {
                for p in &group {
                    pen.line_to(*p);
                }
            }
            CommandKind::CubicTo => {
                for seg in group.chunks_exact(3) {
                    pen.cubic_to(seg[0], seg[1], seg[2]);
                    cubic_ctrl = Some(seg[1]);
                }
            }
            CommandKind::SmoothCubicTo => {
                for seg in group.chunks_exact(2) {
                    let ctrl1 = reflect(cubic_ctrl, pen.current);
                    pen.cubic_to(ctrl1, seg[0], seg[1]);
                    cubic_ctrl = Some(seg[0]);
                }
            }
            CommandKind::QuadTo => {
                for seg in group.chunks_exact(2) {
                    pen.quad_to(seg[0], seg[1]);
                    quad_ctrl = Some(seg[0]);
                }
            }
            CommandKind::SmoothQuadTo => {
                for p in &group {
                    let ctrl = reflect(quad_ctrl, pen.current);
                    pen.quad_to(ctrl, *p);
                    quad_ctrl = Some(ctrl);
                }
            }
            CommandKind::Close => pen.close(),
        }

        if !matches!(cmd.kind, CommandKind::CubicTo | CommandKind::SmoothCubicTo) {
            cubic_ctrl = None;
        }
        if !matches!(cmd.kind, CommandKind::QuadTo | CommandKind::SmoothQuadTo) {
            quad_ctrl = None;
        }
    }

    pen.finish()
}

fn reflect(ctrl: Option<LyonPoint>, about: LyonPoint) -> LyonPoint {
    match ctrl {
        Some(c) => point(2.0 * about.x - c.x, 2.0 * about.y - c.y),
        None => about,
    }
}

fn finite(p: LyonPoint) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

fn segment_distance(from: LyonPoint, to: LyonPoint, p: LyonPoint) -> f32 {
    let seg = to - from;
    let len_sq = seg.square_length();
    let t = if len_sq > 0.0 {
        ((p - from).dot(seg) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let closest = from + seg * t;
    (p - closest).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_counts(path: &Path) -> (usize, usize, usize, usize) {
        let (mut lines, mut quads, mut cubics, mut closed) = (0, 0, 0, 0);
        for event in path.iter() {
            match event {
                PathEvent::Line { .. } => lines += 1,
                PathEvent::Quadratic { .. } => quads += 1,
                PathEvent::Cubic { .. } => cubics += 1,
                PathEvent::End { close: true, .. } => closed += 1,
                _ => {}
            }
        }
        (lines, quads, cubics, closed)
    }

    #[test]
    fn test_starting_at_is_degenerate_line() {
        let path = DesignPath::starting_at(Point::new(2.0, 3.0));
        assert_eq!(path.data.text(), "M 2 3 L 2 3");
        assert_eq!(path.points().len(), 2);
    }

    #[test]
    fn test_grow_moves_last_point() {
        let origin = Point::new(0.0, 0.0);
        let mut path = DesignPath::starting_at(origin);
        path.grow_to(origin, Point::new(8.0, -2.0));
        assert_eq!(path.data.text(), "M 0 0 L 8 -2");
    }

    #[test]
    fn test_render_maps_commands_to_segments() {
        let path = DesignPath::parse("M 0 0 L 10 0 C 10 5 5 10 0 10 S -5 5 0 0 Q 5 5 10 10 T 20 20 Z");
        let (lines, quads, cubics, closed) = event_counts(&path.render());
        assert_eq!(lines, 1);
        assert_eq!(cubics, 2);
        assert_eq!(quads, 2);
        assert_eq!(closed, 1);
    }

    #[test]
    fn test_smooth_cubic_reflects_previous_control() {
        let path = DesignPath::parse("M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0");
        let cubic = path
            .render()
            .iter()
            .filter_map(|event| match event {
                PathEvent::Cubic { ctrl1, .. } => Some(ctrl1),
                _ => None,
            })
            .nth(1);
        assert_eq!(cubic, Some(point(10.0, -10.0)));
    }

    #[test]
    fn test_render_skips_nan_points() {
        let path = DesignPath::parse("M 0 0 L x 5 L 10 10");
        let (lines, _, _, _) = event_counts(&path.render());
        assert_eq!(lines, 1);
    }

    #[test]
    fn test_bounds_cover_points() {
        let path = DesignPath::parse("M 5 5 l 10 -3 V 20");
        assert_eq!(path.bounds(), (5.0, 2.0, 15.0, 20.0));
        assert_eq!(DesignPath::default().bounds(), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_contains_point_on_open_stroke_and_filled_interior() {
        let line = DesignPath::parse("M 0 0 L 10 0");
        assert!(line.contains_point(Point::new(5.0, 0.5), 1.0));
        assert!(!line.contains_point(Point::new(5.0, 3.0), 1.0));

        let square = DesignPath::parse("M 0 0 L 10 0 L 10 10 L 0 10 Z");
        assert!(square.contains_point(Point::new(5.0, 5.0), 0.5));
        assert!(!square.contains_point(Point::new(15.0, 5.0), 0.5));
    }
}
