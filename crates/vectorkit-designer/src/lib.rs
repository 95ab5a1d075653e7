//! # vectorkit designer
//!
//! Shape editing core for the vectorkit drawing editor: an ordered shape list,
//! snapshot-based undo/redo and SVG exchange, driven by pointer gestures from a
//! host UI.
//!
//! ## Core Components
//!
//! - **Model**: rectangles, circles and paths with a common geometry trait
//!   (bounds, hit testing, growing while drawn)
//! - **ShapeStore**: paint-ordered shapes with monotonically increasing ids
//! - **History**: bounded undo/redo stacks of whole-store snapshots
//! - **Import/Export**: reads `rect`, `circle` and `path` elements out of an
//!   SVG document and writes the drawing back as a standalone document
//! - **DesignerState**: the entry points a UI calls for gestures, path point
//!   edits, colors and file exchange
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   ├── ShapeStore (shapes in paint order)
//!   ├── HistoryManager (snapshots of the store)
//!   ├── SvgImporter / SvgExporter
//!   └── Config (vectorkit-settings)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use vectorkit_designer::{DesignerState, DrawingMode, Point};
//!
//! let mut state = DesignerState::new();
//! state.set_mode(DrawingMode::Rectangle);
//! state.pointer_down(Point::new(10.0, 10.0));
//! state.pointer_move(Point::new(40.0, 30.0));
//! state.pointer_up();
//!
//! assert_eq!(state.shape_count(), 1);
//! state.undo();
//! assert_eq!(state.shape_count(), 0);
//! ```

pub mod color;
pub mod designer_state;
pub mod export;
pub mod history;
pub mod import;
pub mod model;
pub mod shape_store;
pub mod view_frame;

pub use color::{parse_hex_color, rgba_from_hex};
pub use designer_state::{DesignerState, DrawingMode};
pub use export::SvgExporter;
pub use history::{HistoryManager, Snapshot};
pub use import::{ImportedDesign, SvgImporter};
pub use model::{
    DesignCircle, DesignPath, DesignRectangle, DesignerShape, DrawingObject, Point, Shape,
    ShapeType, Style,
};
pub use shape_store::ShapeStore;
pub use view_frame::ViewFrame;

pub use vectorkit_path::{CommandKind, PathData, PathPoint};
