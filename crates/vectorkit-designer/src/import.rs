//! # SVG Import
//!
//! Converts an SVG document into designer shapes.
//!
//! The importer is a permissive tag scanner rather than a full XML parser:
//! - `rect`, `circle` and `path` elements become shapes, in document order
//! - every other element is ignored, as is anything inside `defs`, `pattern`
//!   and similar non-rendered containers
//! - the exporter's background rect (`fill="url(#grid)"`) is skipped; other
//!   paint-server fills and strokes are kept as written
//! - attribute values may be single- or double-quoted
//! - numeric attributes tolerate a `px` suffix; missing or unparseable numbers
//!   become 0
//! - missing colors fall back to the configured import defaults
//! - the root `svg` element's `viewBox` (or `width`/`height` pair) becomes the
//!   view frame
//!
//! Malformed input never fails; it yields whatever shapes could be recognized.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use vectorkit_settings::ImportSettings;

use crate::export::GRID_PATTERN_ID;
use crate::model::{DesignCircle, DesignPath, DesignRectangle, Point, Shape, Style};
use crate::view_frame::ViewFrame;

/// Elements whose children are never rendered directly.
const NON_RENDERED: [&str; 6] = ["defs", "pattern", "clipPath", "mask", "symbol", "marker"];

/// Result of importing a document
#[derive(Debug, Clone, Default)]
pub struct ImportedDesign {
    /// Shapes with their colors, in document order
    pub shapes: Vec<(Shape, Style)>,
    /// View frame declared by the root element, if any
    pub view_frame: Option<ViewFrame>,
}

/// SVG importer for converting SVG documents to designer shapes
#[derive(Debug, Clone)]
pub struct SvgImporter {
    pub fallback_fill: String,
    pub fallback_stroke: String,
}

fn comment_regex() -> &'static Regex {
    static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    COMMENT_REGEX.get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("invalid regex pattern"))
}

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| {
        Regex::new(r#"<(/?)([A-Za-z][A-Za-z0-9:_.-]*)((?:[^>"']|"[^"]*"|'[^']*')*?)(/?)>"#)
            .expect("invalid regex pattern")
    })
}

fn attr_regex() -> &'static Regex {
    static ATTR_REGEX: OnceLock<Regex> = OnceLock::new();
    ATTR_REGEX.get_or_init(|| {
        Regex::new(r#"([A-Za-z_:][A-Za-z0-9_:.-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("invalid regex pattern")
    })
}

impl SvgImporter {
    pub fn new(settings: &ImportSettings) -> Self {
        Self {
            fallback_fill: settings.fallback_fill.clone(),
            fallback_stroke: settings.fallback_stroke.clone(),
        }
    }

    /// Import SVG from string content
    pub fn import_string(&self, svg_content: &str) -> ImportedDesign {
        let content = comment_regex().replace_all(svg_content, "");
        let mut design = ImportedDesign::default();
        let mut seen_root = false;
        let mut hidden_depth = 0usize;

        for caps in tag_regex().captures_iter(&content) {
            let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
            let self_closing = caps.get(4).is_some_and(|m| !m.as_str().is_empty());
            let name = caps.get(2).map_or("", |m| m.as_str());
            let name = name.rsplit(':').next().unwrap_or(name);

            if NON_RENDERED.contains(&name) {
                if closing {
                    hidden_depth = hidden_depth.saturating_sub(1);
                } else if !self_closing {
                    hidden_depth += 1;
                }
                continue;
            }
            if closing || hidden_depth > 0 {
                continue;
            }

            let attrs = parse_attributes(caps.get(3).map_or("", |m| m.as_str()));
            match name {
                "svg" if !seen_root => {
                    seen_root = true;
                    design.view_frame = view_frame(&attrs);
                }
                "rect" | "circle" | "path" => {
                    let style = self.style(&attrs);
                    if name == "rect" && style.fill == grid_fill() {
                        tracing::debug!("Skipping exported grid background");
                        continue;
                    }
                    design.shapes.push((element_shape(name, &attrs), style));
                }
                _ => {}
            }
        }

        tracing::info!(
            "Imported {} shapes (view frame: {:?})",
            design.shapes.len(),
            design.view_frame
        );
        design
    }

    /// Fill and stroke from presentation attributes, overridden by the
    /// `style` attribute. Paint-server references are kept as written.
    fn style(&self, attrs: &HashMap<String, String>) -> Style {
        let declarations = attrs
            .get("style")
            .map(|s| parse_style_declarations(s))
            .unwrap_or_default();
        let pick = |key: &str, fallback: &str| {
            declarations
                .get(key)
                .or_else(|| attrs.get(key))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        let fill = pick("fill", &self.fallback_fill);
        let stroke = pick("stroke", &self.fallback_stroke);
        Style::new(fill, stroke)
    }
}

impl Default for SvgImporter {
    fn default() -> Self {
        Self::new(&ImportSettings::default())
    }
}

/// Fill of the background rect written by the exporter.
fn grid_fill() -> String {
    format!("url(#{})", GRID_PATTERN_ID)
}

fn element_shape(name: &str, attrs: &HashMap<String, String>) -> Shape {
    match name {
        "rect" => Shape::Rectangle(DesignRectangle::new(
            number_attr(attrs, "x"),
            number_attr(attrs, "y"),
            number_attr(attrs, "width"),
            number_attr(attrs, "height"),
        )),
        "circle" => Shape::Circle(DesignCircle::new(
            Point::new(number_attr(attrs, "cx"), number_attr(attrs, "cy")),
            number_attr(attrs, "r"),
        )),
        _ => Shape::Path(DesignPath::parse(
            attrs.get("d").map_or("", |d| d.as_str()),
        )),
    }
}

fn parse_attributes(raw: &str) -> HashMap<String, String> {
    attr_regex()
        .captures_iter(raw)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_string();
            let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            Some((name, unescape(value)))
        })
        .collect()
}

fn parse_style_declarations(style: &str) -> HashMap<String, String> {
    style
        .split(';')
        .filter_map(|decl| {
            let (key, value) = decl.split_once(':')?;
            Some((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

fn view_frame(attrs: &HashMap<String, String>) -> Option<ViewFrame> {
    if let Some(view_box) = attrs.get("viewBox") {
        let numbers: Option<Vec<f64>> = view_box
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(parse_length)
            .collect();
        if let Some([min_x, min_y, width, height]) = numbers.as_deref() {
            return Some(ViewFrame::new(*min_x, *min_y, *width, *height));
        }
    }

    let width = attrs.get("width").and_then(|v| parse_length(v));
    let height = attrs.get("height").and_then(|v| parse_length(v));
    match (width, height) {
        (Some(width), Some(height)) => Some(ViewFrame::from_size(width, height)),
        _ => None,
    }
}

fn number_attr(attrs: &HashMap<String, String>, name: &str) -> f64 {
    attrs.get(name).and_then(|v| parse_length(v)).unwrap_or(0.0)
}

/// Parses a number with an optional `px` suffix.
fn parse_length(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn unescape(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
