//! Pointer gestures, style changes and clearing for designer state.

use vectorkit_path::{nearest_point, PathPoint};
use vectorkit_settings::is_hex_color;

use super::{DesignerState, DrawingMode, Gesture};
use crate::model::{DesignerShape, Point, ShapeType};

impl DesignerState {
    /// Starts a gesture at `p`.
    ///
    /// In a drawing mode this records history and creates a zero-extent shape
    /// with the current style. In select mode it selects the topmost shape
    /// under the pointer and, for a path, starts dragging the nearest point.
    pub fn pointer_down(&mut self, p: Point) {
        self.end_gesture();
        match self.mode {
            DrawingMode::Select => self.begin_select(p),
            DrawingMode::Rectangle => self.begin_drawing(ShapeType::Rectangle, p),
            DrawingMode::Circle => self.begin_drawing(ShapeType::Circle, p),
            DrawingMode::Path => self.begin_drawing(ShapeType::Path, p),
        }
    }

    /// Grows the shape being drawn or moves the dragged path point.
    pub fn pointer_move(&mut self, p: Point) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Drawing { id, anchor } => {
                self.store.update_shape(id, |obj| obj.shape.grow_to(anchor, p));
            }
            Gesture::DraggingPoint {
                id,
                point,
                recorded,
            } => {
                if !recorded {
                    self.history.record_before_mutation(&self.store);
                    self.gesture = Gesture::DraggingPoint {
                        id,
                        point,
                        recorded: true,
                    };
                }
                let moved = self.store.update_shape(id, |obj| {
                    obj.shape
                        .as_path_mut()
                        .map(|path| path.data.move_point(&point, p.x, p.y))
                });
                match moved {
                    Some(Some(Ok(()))) => {
                        self.selected_point =
                            self.point_at(id, point.command_index, Some(point.param_offset));
                    }
                    Some(Some(Err(e))) => tracing::debug!("Point drag ignored: {}", e),
                    _ => tracing::debug!("Dragged shape {} is not a path", id),
                }
            }
        }
    }

    /// Ends any gesture in progress.
    pub fn pointer_up(&mut self) {
        self.end_gesture();
    }

    /// The pointer left the canvas; ends any gesture so no drag gets stuck.
    pub fn pointer_leave(&mut self) {
        self.end_gesture();
    }

    /// Sets the stroke color for new shapes and the selected shape.
    pub fn set_stroke_color(&mut self, hex: &str) {
        if !is_hex_color(hex) {
            tracing::debug!("Ignoring stroke color {:?}", hex);
            return;
        }
        self.stroke_color = hex.to_string();

        if let Some(id) = self.selected_id.filter(|id| self.store.get(*id).is_some()) {
            self.history.record_before_mutation(&self.store);
            self.store
                .update_shape(id, |obj| obj.style.stroke = hex.to_string());
        }
    }

    /// Sets an explicit fill for new shapes and the selected shape.
    pub fn set_fill_color(&mut self, hex: &str) {
        if !is_hex_color(hex) {
            tracing::debug!("Ignoring fill color {:?}", hex);
            return;
        }
        self.fill_color = Some(hex.to_string());

        if let Some(id) = self.selected_id.filter(|id| self.store.get(*id).is_some()) {
            self.history.record_before_mutation(&self.store);
            self.store
                .update_shape(id, |obj| obj.style.fill = hex.to_string());
        }
    }

    /// Applies the configured default fill to new shapes and the selected shape.
    pub fn reset_fill_color(&mut self) {
        let fill = self.config.drawing.default_fill.clone();
        self.set_fill_color(&fill);
    }

    /// Removes every shape (undoable).
    pub fn clear_canvas(&mut self) {
        self.end_gesture();
        if self.store.is_empty() {
            return;
        }
        self.history.record_before_mutation(&self.store);
        self.store.remove_all();
        self.selected_id = None;
        self.selected_point = None;
    }

    pub(crate) fn end_gesture(&mut self) {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Drawing { id, .. } => {
                self.store.update_shape(id, |obj| obj.shape.normalize());
                tracing::debug!("Finished drawing shape {}", id);
            }
            Gesture::DraggingPoint { .. } | Gesture::Idle => {}
        }
    }

    fn begin_drawing(&mut self, kind: ShapeType, p: Point) {
        let style = self.current_style();
        self.history.record_before_mutation(&self.store);
        let id = self.store.add_shape(kind, p, style);
        self.selected_id = Some(id);
        self.selected_point = None;
        self.gesture = Gesture::Drawing { id, anchor: p };
    }

    fn begin_select(&mut self, p: Point) {
        let tolerance = self.config.drawing.hit_tolerance;

        // Points of the current selection win over shapes stacked above it.
        if let Some(id) = self.selected_id {
            if let Some(point) = self.path_point_near(id, p, tolerance) {
                self.begin_point_drag(id, point);
                return;
            }
        }

        self.selected_point = None;
        self.selected_id = self.store.hit_test(p, tolerance);
        if let Some(id) = self.selected_id {
            if let Some(point) = self.path_point_near(id, p, tolerance) {
                self.begin_point_drag(id, point);
            }
        }
    }

    fn begin_point_drag(&mut self, id: u64, point: PathPoint) {
        self.selected_id = Some(id);
        self.selected_point = Some(point);
        self.gesture = Gesture::DraggingPoint {
            id,
            point,
            recorded: false,
        };
    }

    fn path_point_near(&self, id: u64, p: Point, tolerance: f64) -> Option<PathPoint> {
        let path = self.store.get(id)?.shape.as_path()?;
        let points = path.points();
        nearest_point(&points, p.x, p.y, tolerance).map(|i| points[i])
    }
}
