//! # VectorKit
//!
//! The editing core of a browser-style vector drawing editor:
//! - rectangles, circles and free-form paths drawn with pointer gestures
//! - point-level editing of path data (`M L H V C S Q T A Z`)
//! - snapshot undo/redo
//! - SVG import and export
//!
//! ## Architecture
//!
//! VectorKit is organized as a workspace with multiple crates:
//!
//! 1. **vectorkit-path** - Path-data grammar, point resolution, command edits
//! 2. **vectorkit-designer** - Shapes, shape store, history, SVG exchange
//! 3. **vectorkit-settings** - Configuration loading and validation
//! 4. **vectorkit** - Command-line binary that ties the crates together

pub use vectorkit_designer as designer;
pub use vectorkit_path as path;
pub use vectorkit_settings as settings;

pub use vectorkit_designer::{
    DesignerState, DrawingMode, DrawingObject, HistoryManager, Point, Shape, ShapeStore,
    ShapeType, Style, SvgExporter, SvgImporter, ViewFrame,
};
pub use vectorkit_path::{CommandKind, PathCommand, PathData, PathError, PathPoint};
pub use vectorkit_settings::{Config, SettingsError};

/// Version string, set from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date, stamped by the build script.
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with tracing
///
/// Sets up structured logging with:
/// - Console output with timestamps
/// - RUST_LOG environment variable support (defaults to `info`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
