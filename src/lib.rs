//! # plotaux
//!
//! Auxiliary plotting helpers for [`plotters`]:
//!
//! - `styles`: reusable style sheets merged from embedded JSON presets
//! - `steps`: step-function coordinate transforms and filled step plots
//! - `diurnal`: time-of-day plots from timestamp series
//! - `export`: PNG render harness and the legacy save shim
//!
//! Every helper is a stateless transformation of its input followed by a
//! direct call into plotters' drawing primitives; there is no shared state
//! between calls.
//!
//! ## Quick start
//!
//! ```
//! use plotaux::{steps_x, steps_y, EndCap, StepAlign};
//!
//! let x = [1.0, 2.0, 3.0];
//! let y = [10.0, 20.0, 30.0];
//!
//! let sx = steps_x(&x, StepAlign::Post, EndCap::Closed, EndCap::Closed).unwrap();
//! let sy = steps_y(&y, StepAlign::Post, EndCap::Closed, EndCap::Closed, 0.0).unwrap();
//!
//! assert_eq!(sx, vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0]);
//! assert_eq!(sy, vec![0.0, 10.0, 10.0, 20.0, 20.0, 30.0, 0.0]);
//! ```

pub mod diurnal;
pub mod errors;
pub mod export;
pub mod steps;
pub mod styles;

// Re-export key types for convenience
pub use diurnal::{
    diurnal_points, diurnal_points_from_day_numbers, draw_diurnal,
    draw_diurnal_from_day_numbers, from_day_number, to_day_number, DiurnalOptions,
};
pub use errors::{PlotAuxError, Result};
pub use export::{render_png, Orientation, SaveOptions};
#[allow(deprecated)]
pub use export::save_figure;
pub use steps::{fill_between_steps, steps_x, steps_y, EndCap, StepAlign, StepFillOptions};
pub use styles::{
    format_hex_color, invert_hex_color, parse_hex_color, HexColor, StyleSheet,
};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default figure width in pixels
pub const DEFAULT_WIDTH: u32 = 1920;
/// Default figure height in pixels
pub const DEFAULT_HEIGHT: u32 = 1080;
