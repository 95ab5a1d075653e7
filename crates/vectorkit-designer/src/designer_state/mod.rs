//! Designer state manager for UI integration.
//! Owns the shape store and history and exposes the entry points a host UI
//! calls in response to user gestures.
//!
//! This module is split into submodules:
//! - `shapes`: Pointer gestures, style changes, clearing
//! - `path_editing`: Point selection and path command edits
//! - `file_io`: SVG import/export

mod file_io;
mod path_editing;
mod shapes;

use vectorkit_path::PathPoint;
use vectorkit_settings::Config;

use crate::color::rgba_from_hex;
use crate::history::HistoryManager;
use crate::model::{DrawingObject, Point, Style};
use crate::shape_store::ShapeStore;
use crate::view_frame::ViewFrame;

/// Drawing modes for the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    Select,
    Rectangle,
    Circle,
    Path,
}

/// The pointer gesture in progress, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Gesture {
    Idle,
    /// A freshly created shape is being grown from `anchor`.
    Drawing { id: u64, anchor: Point },
    /// A path point is being dragged; history is recorded on the first move.
    DraggingPoint {
        id: u64,
        point: PathPoint,
        recorded: bool,
    },
}

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub(crate) store: ShapeStore,
    pub(crate) history: HistoryManager,
    pub(crate) config: Config,
    pub(crate) mode: DrawingMode,
    pub(crate) stroke_color: String,
    /// Explicitly picked fill; fresh shapes derive one from the stroke until set.
    pub(crate) fill_color: Option<String>,
    pub(crate) selected_id: Option<u64>,
    pub(crate) selected_point: Option<PathPoint>,
    pub(crate) gesture: Gesture,
    pub(crate) view_frame: Option<ViewFrame>,
}

impl DesignerState {
    /// Creates a new designer state with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            store: ShapeStore::new(),
            history: HistoryManager::new(config.history.max_depth),
            stroke_color: config.drawing.default_stroke.clone(),
            fill_color: None,
            config,
            mode: DrawingMode::Select,
            selected_id: None,
            selected_point: None,
            gesture: Gesture::Idle,
            view_frame: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Sets the drawing mode. Any gesture in progress is ended first.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.end_gesture();
        self.mode = mode;
    }

    pub fn shapes(&self) -> impl Iterator<Item = &DrawingObject> {
        self.store.iter()
    }

    pub fn shape(&self, id: u64) -> Option<&DrawingObject> {
        self.store.get(id)
    }

    pub fn shape_count(&self) -> usize {
        self.store.len()
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    /// Selects a shape by id (or clears the selection). Unknown ids clear it.
    pub fn select_shape(&mut self, id: Option<u64>) {
        self.selected_id = id.filter(|id| self.store.get(*id).is_some());
        self.selected_point = None;
    }

    pub fn selected_point(&self) -> Option<PathPoint> {
        self.selected_point
    }

    pub fn view_frame(&self) -> Option<ViewFrame> {
        self.view_frame
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    /// Style applied to newly drawn shapes.
    pub fn current_style(&self) -> Style {
        let fill = self.fill_color.clone().unwrap_or_else(|| {
            rgba_from_hex(&self.stroke_color, self.config.drawing.fresh_fill_alpha)
        });
        Style::new(fill, self.stroke_color.clone())
    }

    pub fn undo(&mut self) {
        self.end_gesture();
        if self.history.undo(&mut self.store) {
            self.after_history_change();
        } else {
            tracing::debug!("Nothing to undo");
        }
    }

    pub fn redo(&mut self) {
        self.end_gesture();
        if self.history.redo(&mut self.store) {
            self.after_history_change();
        } else {
            tracing::debug!("Nothing to redo");
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of steps `undo` can currently take.
    pub fn undo_count(&self) -> usize {
        self.history.undo_count()
    }

    pub fn redo_count(&self) -> usize {
        self.history.redo_count()
    }

    // Points resolved against the replaced shapes are stale.
    fn after_history_change(&mut self) {
        self.selected_point = None;
        if let Some(id) = self.selected_id {
            if self.store.get(id).is_none() {
                self.selected_id = None;
            }
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
