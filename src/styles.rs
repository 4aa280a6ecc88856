//! Style sheets for plot appearance
//!
//! A [`StyleSheet`] bundles the visual parameters shared by the plotting
//! helpers: figure dimensions, line and fill styling, grid and font settings.
//! Named presets ship embedded in the crate as JSON and may be partial; they
//! are merged over the defaults in order, `default` always first.

use crate::errors::{PlotAuxError, Result};
use plotters::style::{Color, IntoFont, RGBColor, ShapeStyle, TextStyle};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Style presets compiled into the crate.
///
/// `default` carries the full parameter set; the publish presets only
/// override the keys they change.
const BUILTIN_PRESETS: &[(&str, &str)] = &[
    ("default", include_str!("../styles/default.json")),
    ("publish_digital", include_str!("../styles/publish_digital.json")),
    ("publish_printed", include_str!("../styles/publish_printed.json")),
];

/// An RGB colour represented as `#rrggbb` in JSON
#[derive(Debug, Clone, Copy)]
pub struct HexColor(pub RGBColor);

impl HexColor {
    /// The wrapped plotters colour
    pub fn color(&self) -> RGBColor {
        self.0
    }

    /// Component-wise inverted colour
    pub fn inverted(&self) -> HexColor {
        let RGBColor(r, g, b) = self.0;
        HexColor(RGBColor(255 - r, 255 - g, 255 - b))
    }
}

impl PartialEq for HexColor {
    fn eq(&self, other: &Self) -> bool {
        self.0 .0 == other.0 .0 && self.0 .1 == other.0 .1 && self.0 .2 == other.0 .2
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0 .0, self.0 .1, self.0 .2)
    }
}

impl FromStr for HexColor {
    type Err = PlotAuxError;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').ok_or_else(|| PlotAuxError::ConfigError {
            message: format!("colour '{}' does not start with '#'", s),
        })?;
        if !hex.is_ascii() {
            return Err(PlotAuxError::ConfigError {
                message: format!("invalid hex colour '{}'", s),
            });
        }

        let component = |chunk: &str| -> Result<u8> {
            u8::from_str_radix(chunk, 16).map_err(|_| PlotAuxError::ConfigError {
                message: format!("invalid hex colour '{}'", s),
            })
        };

        match hex.len() {
            // Short form: each digit doubles, e.g. #fa0 -> #ffaa00
            3 => {
                let mut parts = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = component(&c.to_string())?;
                    parts[i] = v * 16 + v;
                }
                Ok(HexColor(RGBColor(parts[0], parts[1], parts[2])))
            }
            6 => Ok(HexColor(RGBColor(
                component(&hex[0..2])?,
                component(&hex[2..4])?,
                component(&hex[4..6])?,
            ))),
            _ => Err(PlotAuxError::ConfigError {
                message: format!("colour '{}' must be #rgb or #rrggbb", s),
            }),
        }
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Parse a `#rgb` / `#rrggbb` string into a plotters colour
pub fn parse_hex_color(s: &str) -> Result<RGBColor> {
    Ok(s.parse::<HexColor>()?.color())
}

/// Format a plotters colour as `#rrggbb`
pub fn format_hex_color(color: RGBColor) -> String {
    HexColor(color).to_string()
}

/// Invert a hex colour string component-wise
pub fn invert_hex_color(s: &str) -> Result<String> {
    Ok(s.parse::<HexColor>()?.inverted().to_string())
}

/// Figure-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureStyle {
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
    /// Background colour
    pub background: HexColor,
    /// Outer margin in pixels
    pub margin: u32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width: crate::DEFAULT_WIDTH,
            height: crate::DEFAULT_HEIGHT,
            background: HexColor(RGBColor(255, 255, 255)),
            margin: 10,
        }
    }
}

/// Line drawing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyleConfig {
    /// Stroke width in pixels
    pub width: u32,
    /// Line colour
    pub color: HexColor,
}

impl Default for LineStyleConfig {
    fn default() -> Self {
        Self {
            width: 2,
            color: HexColor(RGBColor(31, 119, 180)),
        }
    }
}

/// Filled-region settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillStyleConfig {
    /// Fill colour
    pub color: HexColor,
    /// Fill opacity (0.0 to 1.0)
    pub opacity: f64,
}

impl Default for FillStyleConfig {
    fn default() -> Self {
        Self {
            color: HexColor(RGBColor(31, 119, 180)),
            opacity: 0.2,
        }
    }
}

/// Grid line settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyleConfig {
    /// Whether to draw grid lines
    pub show: bool,
    /// Grid line colour
    pub color: HexColor,
    /// Grid line width in pixels
    pub line_width: u32,
}

impl Default for GridStyleConfig {
    fn default() -> Self {
        Self {
            show: true,
            color: HexColor(RGBColor(192, 192, 192)),
            line_width: 1,
        }
    }
}

/// Font settings for titles, labels and tick marks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStyleConfig {
    /// Font family name passed to the backend
    pub family: String,
    /// Base font size for captions
    pub size: u32,
    /// Font size for axis labels
    pub axis_label_size: u32,
    /// Text colour
    pub color: HexColor,
}

impl Default for FontStyleConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 24,
            axis_label_size: 16,
            color: HexColor(RGBColor(47, 79, 79)),
        }
    }
}

/// A complete set of plot styling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StyleSheet {
    pub figure: FigureStyle,
    pub lines: LineStyleConfig,
    pub fill: FillStyleConfig,
    pub grid: GridStyleConfig,
    pub font: FontStyleConfig,
}

impl StyleSheet {
    /// Build a sheet by merging named presets in order.
    ///
    /// `default` is always merged first unless it appears in `names`, in
    /// which case the caller-chosen position wins. Unknown preset names are
    /// logged and skipped.
    pub fn load(names: &[&str]) -> StyleSheet {
        let mut order: Vec<&str> = Vec::with_capacity(names.len() + 1);
        if !names.iter().any(|n| *n == "default") {
            order.push("default");
        }
        order.extend_from_slice(names);

        let mut merged = match serde_json::to_value(StyleSheet::default()) {
            Ok(v) => v,
            // Unreachable for a plain struct, but never worth a panic
            Err(_) => return StyleSheet::default(),
        };

        for name in order {
            let Some(text) = builtin_preset(name) else {
                warn!(preset = name, "unknown style preset, skipping");
                continue;
            };
            match serde_json::from_str::<Value>(text) {
                Ok(patch) => {
                    merge_value(&mut merged, &patch);
                    debug!(preset = name, "merged style preset");
                }
                Err(err) => {
                    warn!(preset = name, error = %err, "unparsable style preset, skipping");
                }
            }
        }

        match serde_json::from_value(merged) {
            Ok(sheet) => sheet,
            Err(err) => {
                warn!(error = %err, "merged style sheet failed to deserialize, using defaults");
                StyleSheet::default()
            }
        }
    }

    /// Load a (possibly partial) style sheet from a JSON file.
    ///
    /// Unlike named presets, an unreadable explicit path is an error.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<StyleSheet> {
        let mut sheet = StyleSheet::default();
        let text = fs::read_to_string(path)?;
        let patch: Value = serde_json::from_str(&text)?;
        sheet.merge_json(&patch)?;
        Ok(sheet)
    }

    /// Merge a partial JSON patch over this sheet
    pub fn merge_json(&mut self, patch: &Value) -> Result<()> {
        let mut value = serde_json::to_value(&*self)?;
        merge_value(&mut value, patch);
        *self = serde_json::from_value(value)?;
        Ok(())
    }

    /// Stroke style for plot lines
    pub fn line_style(&self) -> ShapeStyle {
        self.lines.color.color().stroke_width(self.lines.width)
    }

    /// Filled style for shaded regions, with the sheet's opacity applied
    pub fn fill_style(&self) -> ShapeStyle {
        self.fill.color.color().mix(self.fill.opacity).filled()
    }

    /// Stroke style for grid lines
    pub fn grid_style(&self) -> ShapeStyle {
        self.grid.color.color().stroke_width(self.grid.line_width)
    }

    /// Figure background colour
    pub fn background(&self) -> RGBColor {
        self.figure.background.color()
    }

    /// Text style for captions
    pub fn text_style(&self) -> TextStyle<'_> {
        (self.font.family.as_str(), self.font.size as i32)
            .into_font()
            .color(&self.font.color.0)
    }

    /// Text style for axis labels and tick marks
    pub fn axis_label_style(&self) -> TextStyle<'_> {
        (self.font.family.as_str(), self.font.axis_label_size as i32)
            .into_font()
            .color(&self.font.color.0)
    }
}

fn builtin_preset(name: &str) -> Option<&'static str> {
    BUILTIN_PRESETS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, text)| *text)
}

/// Recursive JSON object merge; non-object values replace wholesale
fn merge_value(base: &mut Value, patch: &Value) {
    match (&mut *base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_val) in patch_map {
                merge_value(
                    base_map.entry(key.clone()).or_insert(Value::Null),
                    patch_val,
                );
            }
        }
        (slot, replacement) => *slot = replacement.clone(),
    }
}
