//! SVG export of the shape list.
//! Produces a standalone document:
//! - XML declaration and root `svg` sized from the view frame (or the configured canvas)
//! - optional background grid as a `pattern` plus a frame-sized `rect`
//! - one element per shape in paint order

use vectorkit_path::format_number;
use vectorkit_settings::ExportSettings;

use crate::model::{DrawingObject, Shape};
use crate::view_frame::ViewFrame;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub(crate) const GRID_PATTERN_ID: &str = "grid";

/// SVG exporter for designer shapes
#[derive(Debug, Clone)]
pub struct SvgExporter {
    settings: ExportSettings,
}

impl SvgExporter {
    pub fn new(settings: &ExportSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    /// Suggested file name for the exported document.
    pub fn file_name(&self) -> &str {
        &self.settings.file_name
    }

    pub fn export<'a>(
        &self,
        shapes: impl IntoIterator<Item = &'a DrawingObject>,
        view_frame: Option<ViewFrame>,
    ) -> String {
        let frame = view_frame.unwrap_or_else(|| {
            ViewFrame::from_size(self.settings.canvas_width, self.settings.canvas_height)
        });

        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">\n",
            SVG_NAMESPACE,
            format_number(frame.width),
            format_number(frame.height),
            format_number(frame.min_x),
            format_number(frame.min_y),
            format_number(frame.width),
            format_number(frame.height),
        ));

        if self.settings.grid_enabled {
            self.write_grid(&mut svg, &frame);
        }

        let mut count = 0;
        for obj in shapes {
            svg.push_str("  ");
            svg.push_str(&shape_element(obj));
            svg.push('\n');
            count += 1;
        }

        svg.push_str("</svg>\n");
        tracing::info!("Exported {} shapes", count);
        svg
    }

    fn write_grid(&self, svg: &mut String, frame: &ViewFrame) {
        let spacing = format_number(self.settings.grid_spacing);
        svg.push_str("  <defs>\n");
        svg.push_str(&format!(
            "    <pattern id=\"{}\" width=\"{}\" height=\"{}\" patternUnits=\"userSpaceOnUse\">\n",
            GRID_PATTERN_ID, spacing, spacing
        ));
        svg.push_str(&format!(
            "      <path d=\"M {} 0 L 0 0 0 {}\" fill=\"none\" stroke=\"{}\" stroke-width=\"0.5\"/>\n",
            spacing,
            spacing,
            escape_attr(&self.settings.grid_color)
        ));
        svg.push_str("    </pattern>\n");
        svg.push_str("  </defs>\n");
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"url(#{})\"/>\n",
            format_number(frame.min_x),
            format_number(frame.min_y),
            format_number(frame.width),
            format_number(frame.height),
            GRID_PATTERN_ID
        ));
    }
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self::new(&ExportSettings::default())
    }
}

fn shape_element(obj: &DrawingObject) -> String {
    let fill = escape_attr(&obj.style.fill);
    let stroke = escape_attr(&obj.style.stroke);
    match &obj.shape {
        Shape::Rectangle(rect) => {
            let (x, y, w, h) = rect.normalized_geometry();
            format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\"/>",
                format_number(x),
                format_number(y),
                format_number(w),
                format_number(h),
                fill,
                stroke
            )
        }
        Shape::Circle(circle) => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\"/>",
            format_number(circle.center.x),
            format_number(circle.center.y),
            format_number(circle.radius.abs()),
            fill,
            stroke
        ),
        Shape::Path(path) => format!(
            "<path d=\"{}\" fill=\"{}\" stroke=\"{}\"/>",
            escape_attr(path.data.text()),
            fill,
            stroke
        ),
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
