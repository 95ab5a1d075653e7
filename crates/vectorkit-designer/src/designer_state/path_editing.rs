//! Point selection and command edits on the selected path.
//!
//! Edits run against a copy of the path data and are committed (with a
//! history snapshot) only when they succeed, so a stale or out-of-range point
//! leaves both the drawing and the history untouched.

use vectorkit_path::{CommandKind, PathData, PathPoint, PathResult};

use super::DesignerState;
use crate::model::DesignPath;

impl DesignerState {
    /// Resolved points of the selected shape, empty unless it is a path.
    pub fn selected_path_points(&self) -> Vec<PathPoint> {
        self.selected_id
            .and_then(|id| self.store.get(id))
            .and_then(|obj| obj.shape.as_path())
            .map(DesignPath::points)
            .unwrap_or_default()
    }

    /// Selects the `index`-th resolved point of the selected path.
    pub fn select_point(&mut self, index: usize) -> bool {
        match self.selected_path_points().get(index) {
            Some(point) => {
                self.selected_point = Some(*point);
                true
            }
            None => {
                tracing::debug!("No point {} on the selected shape", index);
                false
            }
        }
    }

    pub fn clear_point_selection(&mut self) {
        self.selected_point = None;
    }

    /// Moves the selected point to `(x, y)`.
    pub fn move_selected_point(&mut self, x: f64, y: f64) -> bool {
        let Some((id, point)) = self.edit_selected_path("move point", |data, point| {
            data.move_point(point, x, y)?;
            Ok(*point)
        }) else {
            return false;
        };
        self.selected_point = self.point_at(id, point.command_index, Some(point.param_offset));
        true
    }

    /// Inserts a `kind` command after the selected point's command and selects
    /// the first point of the new command.
    pub fn insert_command_after_selected(&mut self, kind: CommandKind) -> bool {
        let Some((id, index)) = self.edit_selected_path("insert command", |data, point| {
            data.insert_after(point, kind)
        }) else {
            return false;
        };
        self.selected_point = self.point_at(id, index, None);
        true
    }

    /// Replaces the selected point's command with a `kind` command.
    pub fn convert_selected(&mut self, kind: CommandKind) -> bool {
        let applied = self
            .edit_selected_path("convert command", |data, point| data.convert(point, kind))
            .is_some();
        if applied {
            self.selected_point = None;
        }
        applied
    }

    /// Flips the selected point's command between relative and absolute.
    pub fn toggle_selected_relative(&mut self) -> bool {
        let Some((id, point)) = self.edit_selected_path("toggle relative", |data, point| {
            data.toggle_relative(point)?;
            Ok(*point)
        }) else {
            return false;
        };
        self.selected_point = self.point_at(id, point.command_index, Some(point.param_offset));
        true
    }

    /// Removes the selected point's whole command.
    pub fn delete_selected_command(&mut self) -> bool {
        let applied = self
            .edit_selected_path("delete command", |data, point| data.delete_command(point))
            .is_some();
        if applied {
            self.selected_point = None;
        }
        applied
    }

    /// Replaces a path's data with the parse of `d`. No-op for non-path shapes.
    pub fn set_path_data(&mut self, id: u64, d: &str) -> bool {
        self.end_gesture();
        if self
            .store
            .get(id)
            .and_then(|obj| obj.shape.as_path())
            .is_none()
        {
            tracing::debug!("Shape {} is not a path, path data ignored", id);
            return false;
        }

        let data = PathData::parse(d);
        self.history.record_before_mutation(&self.store);
        self.store.update_shape(id, |obj| {
            if let Some(path) = obj.shape.as_path_mut() {
                path.data = data;
            }
        });
        if self.selected_id == Some(id) {
            self.selected_point = None;
        }
        true
    }

    /// The resolved point of path `id` at `command_index` (and `param_offset`,
    /// when given).
    pub(crate) fn point_at(
        &self,
        id: u64,
        command_index: usize,
        param_offset: Option<usize>,
    ) -> Option<PathPoint> {
        let path = self.store.get(id)?.shape.as_path()?;
        path.points().into_iter().find(|p| {
            p.command_index == command_index && param_offset.is_none_or(|o| p.param_offset == o)
        })
    }

    fn edit_selected_path<R>(
        &mut self,
        action: &str,
        edit: impl FnOnce(&mut PathData, &PathPoint) -> PathResult<R>,
    ) -> Option<(u64, R)> {
        self.end_gesture();
        let (Some(id), Some(point)) = (self.selected_id, self.selected_point) else {
            tracing::debug!("{}: no point selected", action);
            return None;
        };
        let mut data = self.store.get(id)?.shape.as_path()?.data.clone();

        match edit(&mut data, &point) {
            Ok(result) => {
                self.history.record_before_mutation(&self.store);
                self.store.update_shape(id, |obj| {
                    if let Some(path) = obj.shape.as_path_mut() {
                        path.data = data;
                    }
                });
                tracing::debug!("{} on shape {}", action, id);
                Some((id, result))
            }
            Err(e) => {
                tracing::debug!("{} ignored on shape {}: {}", action, id, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;
    use crate::DrawingMode;

    fn state_with_path(d: &str) -> (DesignerState, u64) {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Path);
        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_up();
        let id = state.selected_id().unwrap();
        state.set_path_data(id, d);
        (state, id)
    }

    fn text(state: &DesignerState, id: u64) -> String {
        state
            .shape(id)
            .and_then(|o| o.shape.as_path())
            .map(|p| p.data.text().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_move_selected_point() {
        let (mut state, id) = state_with_path("M 10 10 L 20 20");
        assert!(state.select_point(1));
        assert!(state.move_selected_point(50.0, 50.0));
        assert_eq!(text(&state, id), "M 10 10 L 50 50");
        assert_eq!(state.selected_point().map(|p| (p.x, p.y)), Some((50.0, 50.0)));
    }

    #[test]
    fn test_insert_selects_new_command() {
        let (mut state, id) = state_with_path("M 10 10 L 20 20");
        state.select_point(0);
        assert!(state.insert_command_after_selected(CommandKind::LineTo));
        assert_eq!(text(&state, id), "M 10 10 L 10 10 L 20 20");

        let selected = state.selected_point().unwrap();
        assert_eq!(selected.command_index, 1);
        assert_eq!((selected.x, selected.y), (10.0, 10.0));
    }

    #[test]
    fn test_insert_close_leaves_no_point_selected() {
        let (mut state, id) = state_with_path("M 0 0 L 5 5");
        state.select_point(1);
        assert!(state.insert_command_after_selected(CommandKind::Close));
        assert_eq!(text(&state, id), "M 0 0 L 5 5 Z");
        assert_eq!(state.selected_point(), None);
    }

    #[test]
    fn test_convert_and_delete_drop_point_selection() {
        let (mut state, id) = state_with_path("M 0 0 L 5 5 L 9 9");
        state.select_point(1);
        assert!(state.convert_selected(CommandKind::Horizontal));
        assert_eq!(text(&state, id), "M 0 0 H 5 L 9 9");
        assert_eq!(state.selected_point(), None);

        state.select_point(2);
        assert!(state.delete_selected_command());
        assert_eq!(text(&state, id), "M 0 0 H 5");
        assert_eq!(state.selected_point(), None);
    }

    #[test]
    fn test_toggle_keeps_values() {
        let (mut state, id) = state_with_path("M 10 10 L 5 5");
        state.select_point(1);
        assert!(state.toggle_selected_relative());
        assert_eq!(text(&state, id), "M 10 10 l 5 5");
        assert_eq!(state.selected_point().map(|p| (p.x, p.y)), Some((15.0, 15.0)));
    }

    #[test]
    fn test_edits_without_point_are_noops() {
        let (mut state, id) = state_with_path("M 0 0 L 5 5");
        let depth = state.history.undo_count();
        assert!(!state.move_selected_point(1.0, 1.0));
        assert!(!state.delete_selected_command());
        assert!(!state.select_point(7));
        assert_eq!(text(&state, id), "M 0 0 L 5 5");
        assert_eq!(state.history.undo_count(), depth);
    }

    #[test]
    fn test_stale_point_is_rejected_without_history() {
        let (mut state, id) = state_with_path("M 0 0 L 5 5");
        state.select_point(1);
        let stale = state.selected_point();
        state.delete_selected_command();
        let depth = state.history.undo_count();

        state.selected_point = stale;
        assert!(!state.move_selected_point(3.0, 3.0));
        assert_eq!(text(&state, id), "M 0 0");
        assert_eq!(state.history.undo_count(), depth);
    }

    #[test]
    fn test_path_edits_undo_in_order() {
        let (mut state, id) = state_with_path("M 10 10 L 20 20");
        state.select_point(1);
        state.move_selected_point(30.0, 30.0);
        state.select_point(1);
        state.convert_selected(CommandKind::Vertical);
        assert_eq!(text(&state, id), "M 10 10 V 30");

        state.undo();
        assert_eq!(text(&state, id), "M 10 10 L 30 30");
        state.undo();
        assert_eq!(text(&state, id), "M 10 10 L 20 20");
        state.redo();
        assert_eq!(text(&state, id), "M 10 10 L 30 30");
    }

    #[test]
    fn test_set_path_data_rejects_non_paths() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Rectangle);
        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_up();
        let id = state.selected_id().unwrap();
        let depth = state.history.undo_count();

        assert!(!state.set_path_data(id, "M 0 0"));
        assert!(!state.set_path_data(999, "M 0 0"));
        assert_eq!(state.history.undo_count(), depth);
    }
}
