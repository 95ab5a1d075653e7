//! SVG import/export for designer state.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{DesignerState, Gesture};
use crate::export::SvgExporter;
use crate::import::SvgImporter;

impl DesignerState {
    /// Serializes the drawing as a standalone SVG document.
    pub fn export_svg(&self) -> String {
        SvgExporter::new(&self.config.export).export(self.store.iter(), self.view_frame)
    }

    pub fn export_file_name(&self) -> &str {
        &self.config.export.file_name
    }

    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.export_svg())
            .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
        tracing::info!("Saved drawing to {}", path.display());
        Ok(())
    }

    /// Replaces every shape with those found in `svg`.
    ///
    /// Import is not an undoable step and leaves the history untouched.
    /// Returns the ids assigned to the imported shapes in document order.
    pub fn import_svg(&mut self, svg: &str) -> Vec<u64> {
        self.gesture = Gesture::Idle;
        self.selected_id = None;
        self.selected_point = None;

        let design = SvgImporter::new(&self.config.import).import_string(svg);
        let ids = self.store.replace_all(design.shapes);
        self.view_frame = design.view_frame;
        tracing::info!("Imported {} shapes", ids.len());
        ids
    }

    pub fn import_from_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<u64>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read SVG from {}", path.display()))?;
        Ok(self.import_svg(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DesignRectangle, Point, Shape};
    use crate::view_frame::ViewFrame;
    use crate::DrawingMode;
    use tempfile::TempDir;

    #[test]
    fn test_import_replaces_shapes_without_history() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Circle);
        state.pointer_down(Point::new(5.0, 5.0));
        state.pointer_up();
        let history_before = (state.history.undo_count(), state.history.redo_count());

        let ids = state.import_svg(
            r#"<svg viewBox="0 0 50 40"><rect x="1" y="2" width="3" height="4" fill="red" stroke="blue"/></svg>"#,
        );

        assert_eq!(ids, vec![2]);
        assert_eq!(state.shape_count(), 1);
        assert_eq!(
            state.shape(2).map(|o| &o.shape),
            Some(&Shape::Rectangle(DesignRectangle::new(1.0, 2.0, 3.0, 4.0)))
        );
        assert_eq!(state.selected_id(), None);
        assert_eq!(state.view_frame(), Some(ViewFrame::new(0.0, 0.0, 50.0, 40.0)));
        assert_eq!(
            (state.history.undo_count(), state.history.redo_count()),
            history_before
        );
    }

    #[test]
    fn test_gradient_filled_rect_is_imported() {
        let mut state = DesignerState::new();
        let ids = state.import_svg(
            r##"<svg><defs><linearGradient id="g"/></defs><rect x="1" y="1" width="5" height="5" fill="url(#g)" stroke="#000000"/></svg>"##,
        );
        assert_eq!(ids.len(), 1);
        assert_eq!(state.shape(ids[0]).map(|o| o.style.fill.as_str()), Some("url(#g)"));
    }

    #[test]
    fn test_export_uses_imported_frame() {
        let mut state = DesignerState::new();
        state.import_svg(r#"<svg width="120" height="90"></svg>"#);
        let svg = state.export_svg();
        assert!(svg.contains(r#"viewBox="0 0 120 90""#));
        assert_eq!(state.export_file_name(), "drawing.svg");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("out.svg");

        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Path);
        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_move(Point::new(10.0, 20.0));
        state.pointer_up();
        state.export_to_file(&file).unwrap();

        let mut loaded = DesignerState::new();
        let ids = loaded.import_from_file(&file).unwrap();
        assert_eq!(ids.len(), 1);
        let text = loaded
            .shape(ids[0])
            .and_then(|o| o.shape.as_path())
            .map(|p| p.data.text().to_string());
        assert_eq!(text.as_deref(), Some("M 0 0 L 10 20"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.svg");
        let mut state = DesignerState::new();
        let err = state.import_from_file(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.svg"));
    }
}
