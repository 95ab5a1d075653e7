use std::path::PathBuf;

use anyhow::{bail, Context};
use vectorkit::{init_logging, Config, DesignerState, ShapeType, BUILD_DATE, VERSION};

const USAGE: &str = "usage: vectorkit <input.svg> [output.svg]";

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("vectorkit {} (built {})", VERSION, BUILD_DATE);

    let mut args = std::env::args_os().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let output = args.next().map(PathBuf::from);
    if args.next().is_some() {
        bail!(USAGE);
    }

    let config = match Config::default_path() {
        Ok(path) => Config::load_or_default(&path),
        Err(e) => {
            tracing::warn!("No config location: {}", e);
            Config::default()
        }
    };

    let mut state = DesignerState::with_config(config);
    let ids = state
        .import_from_file(&input)
        .with_context(|| format!("Failed to import {}", input.display()))?;

    for obj in state.shapes() {
        match obj.shape.shape_type() {
            ShapeType::Rectangle => tracing::info!("#{} rect", obj.id),
            ShapeType::Circle => tracing::info!("#{} circle", obj.id),
            ShapeType::Path => tracing::info!(
                "#{} path with {} points",
                obj.id,
                obj.shape.as_path().map_or(0, |p| p.points().len())
            ),
        }
        tracing::debug!("#{} fill={} stroke={}", obj.id, obj.style.fill, obj.style.stroke);
    }
    if let Some(frame) = state.view_frame() {
        tracing::info!("View frame: {:?}", frame);
    }

    let output = output.unwrap_or_else(|| PathBuf::from(state.export_file_name()));
    state.export_to_file(&output)?;
    tracing::info!("Wrote {} shapes to {}", ids.len(), output.display());

    Ok(())
}
