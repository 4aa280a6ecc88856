//! Figure export helpers
//!
//! [`render_png`] is the supported way to put helper output on disk: it owns
//! the backend setup and the final present call, leaving only the drawing to
//! the caller. [`save_figure`] is a legacy shim kept for source
//! compatibility; it always fails and points callers at [`render_png`].

use crate::errors::{PlotAuxError, Result};
use crate::styles::HexColor;
use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::style::RGBColor;
use std::path::Path;

/// Render a PNG figure through a drawing closure.
///
/// Creates a bitmap backend of the given pixel size, fills the background,
/// invokes `draw` with the root drawing area and presents the result.
pub fn render_png<P, F>(path: P, size: (u32, u32), background: RGBColor, draw: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&DrawingArea<BitMapBackend, Shift>) -> Result<()>,
{
    let root = BitMapBackend::new(path.as_ref(), size).into_drawing_area();
    root.fill(&background)?;
    draw(&root)?;
    root.present()?;
    Ok(())
}

/// Page orientation accepted by [`SaveOptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Parameter surface of the legacy [`save_figure`] wrapper
#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Output resolution in dots per inch
    pub dpi: u32,
    /// Figure face colour
    pub face_color: HexColor,
    /// Figure edge colour
    pub edge_color: HexColor,
    /// Page orientation
    pub orientation: Orientation,
    /// Whether the background is transparent
    pub transparent: bool,
    /// Padding around the tight bounding box, in inches
    pub pad_inches: f64,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            dpi: 600,
            face_color: HexColor(RGBColor(255, 255, 255)),
            edge_color: HexColor(RGBColor(255, 255, 255)),
            orientation: Orientation::Portrait,
            transparent: false,
            pad_inches: 0.1,
        }
    }
}

/// Legacy save wrapper. Always fails.
///
/// Kept so callers migrating old plotting code get a direct pointer to the
/// replacement instead of a missing-function error.
#[deprecated(note = "save_figure is a legacy shim; use render_png or DrawingArea::present")]
pub fn save_figure<P: AsRef<Path>>(_path: P, _options: &SaveOptions) -> Result<()> {
    Err(PlotAuxError::Deprecated {
        name: "save_figure",
        use_instead: "render_png",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(deprecated)]
    fn save_figure_always_redirects() {
        let err = save_figure("out.png", &SaveOptions::default()).unwrap_err();
        match err {
            PlotAuxError::Deprecated { name, use_instead } => {
                assert_eq!(name, "save_figure");
                assert_eq!(use_instead, "render_png");
            }
            other => panic!("expected Deprecated error, got {:?}", other),
        }
    }

    #[test]
    fn save_options_defaults_match_legacy_surface() {
        let options = SaveOptions::default();
        assert_eq!(options.dpi, 600);
        assert_eq!(options.orientation, Orientation::Portrait);
        assert!(!options.transparent);
    }
}
