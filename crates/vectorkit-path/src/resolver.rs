//! Resolves a command sequence into addressable absolute points.
//!
//! Points are derived values: each carries the command index and parameter
//! offset that produced it, which are only meaningful for the exact sequence
//! they were resolved from. Re-resolve after any insert, convert or delete.

use serde::{Deserialize, Serialize};

use crate::command::{CommandKind, PathCommand};

/// Whether a point lies on the path or steers a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointRole {
    Anchor,
    Control,
}

/// An absolute point plus the location of the values that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
    /// Index of the owning command in the sequence.
    pub command_index: usize,
    /// Index of the first parameter of the group that produced this point.
    pub param_offset: usize,
    pub role: PointRole,
}

impl PathPoint {
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Walks the commands left to right and emits every addressable point.
///
/// The current point starts at the origin. `M`, `L`, `T`, `H`, `V` and `A`
/// advance it once per group; curve commands emit all of their pairs (controls
/// included) relative to the point where the command started and only their
/// final pair advances it. `Z` emits nothing and returns to the subpath start.
pub fn resolve_points(commands: &[PathCommand]) -> Vec<PathPoint> {
    let mut points = Vec::new();
    let (mut cx, mut cy) = (0.0_f64, 0.0_f64);
    let (mut start_x, mut start_y) = (0.0_f64, 0.0_f64);

    for (index, cmd) in commands.iter().enumerate() {
        let params = &cmd.params;
        let (base_x, base_y) = if cmd.relative { (cx, cy) } else { (0.0, 0.0) };

        match cmd.kind {
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadTo => {
                for offset in (0..params.len().saturating_sub(1)).step_by(2) {
                    let (ox, oy) = if cmd.relative { (cx, cy) } else { (0.0, 0.0) };
                    cx = ox + params[offset];
                    cy = oy + params[offset + 1];
                    if cmd.kind == CommandKind::MoveTo && offset == 0 {
                        start_x = cx;
                        start_y = cy;
                    }
                    points.push(anchor(cx, cy, index, offset));
                }
            }
            CommandKind::Horizontal => {
                for (offset, value) in params.iter().enumerate() {
                    cx = if cmd.relative { cx + value } else { *value };
                    points.push(anchor(cx, cy, index, offset));
                }
            }
            CommandKind::Vertical => {
                for (offset, value) in params.iter().enumerate() {
                    cy = if cmd.relative { cy + value } else { *value };
                    points.push(anchor(cx, cy, index, offset));
                }
            }
            CommandKind::CubicTo | CommandKind::SmoothCubicTo | CommandKind::QuadTo => {
                let per_segment = cmd.kind.pairs_per_segment().unwrap_or(1);
                let pair_count = params.len() / 2;
                for pair in 0..pair_count {
                    let offset = pair * 2;
                    let x = base_x + params[offset];
                    let y = base_y + params[offset + 1];
                    let role = if (pair + 1) % per_segment == 0 {
                        PointRole::Anchor
                    } else {
                        PointRole::Control
                    };
                    points.push(PathPoint {
                        x,
                        y,
                        command_index: index,
                        param_offset: offset,
                        role,
                    });
                }
                if pair_count > 0 {
                    let last = (pair_count - 1) * 2;
                    cx = base_x + params[last];
                    cy = base_y + params[last + 1];
                }
            }
            CommandKind::Arc => {
                for offset in (0..params.len().saturating_sub(6)).step_by(7) {
                    let (ox, oy) = if cmd.relative { (cx, cy) } else { (0.0, 0.0) };
                    cx = ox + params[offset + 5];
                    cy = oy + params[offset + 6];
                    points.push(anchor(cx, cy, index, offset));
                }
            }
            CommandKind::Close => {
                cx = start_x;
                cy = start_y;
            }
        }
    }

    points
}

fn anchor(x: f64, y: f64, command_index: usize, param_offset: usize) -> PathPoint {
    PathPoint {
        x,
        y,
        command_index,
        param_offset,
        role: PointRole::Anchor,
    }
}

/// Index of the point nearest to `(x, y)` within `tolerance`, if any.
pub fn nearest_point(points: &[PathPoint], x: f64, y: f64, tolerance: f64) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance_to(x, y)))
        .filter(|(_, d)| *d <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
