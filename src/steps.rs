//! Step-function coordinate transforms and filled step plots
//!
//! A step plot draws a piecewise-constant function as alternating horizontal
//! and vertical segments. [`steps_x`] and [`steps_y`] expand a sampled series
//! into the doubled coordinate arrays that trace the step outline, and
//! [`fill_between_steps`] renders the outline with an optional filled region
//! down to a baseline.

use crate::errors::{PlotAuxError, Result};
use crate::styles::StyleSheet;
use plotters::backend::DrawingBackend;
use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::series::{AreaSeries, LineSeries};
use plotters::style::ShapeStyle;

/// Where the vertical riser sits relative to each sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAlign {
    /// The value applies before its sample point
    Pre,
    /// Risers sit at the midpoints between samples
    Mid,
    /// The value holds from its sample point onward
    Post,
}

/// Whether the step outline drops to the baseline at an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCap {
    Open,
    Closed,
}

fn check_length(len: usize) -> Result<()> {
    if len < 2 {
        return Err(PlotAuxError::InvalidData {
            message: format!("step transform needs at least 2 points, got {}", len),
        });
    }
    Ok(())
}

fn check_monotonic(x: &[f64]) -> Result<()> {
    check_length(x.len())?;
    for (i, pair) in x.windows(2).enumerate() {
        if !(pair[0] < pair[1]) {
            return Err(PlotAuxError::InvalidData {
                message: format!(
                    "x must be strictly increasing, but x[{}] = {} >= x[{}] = {}",
                    i,
                    pair[0],
                    i + 1,
                    pair[1]
                ),
            });
        }
    }
    Ok(())
}

/// Expand x coordinates into the step outline trace.
///
/// Requires strictly increasing input with at least two points. The trace is
/// extended one step (half a step for [`StepAlign::Mid`]) past the data on
/// each side where the step shape continues; an [`EndCap::Closed`] end
/// additionally anchors the outline at the end coordinate.
///
/// The output length matches [`steps_y`] called with the same alignment and
/// caps.
pub fn steps_x(x: &[f64], align: StepAlign, left: EndCap, right: EndCap) -> Result<Vec<f64>> {
    check_monotonic(x)?;
    let n = x.len();
    let mut out = Vec::with_capacity(2 * n + 2);

    match align {
        StepAlign::Post => {
            // [x1, x2,x2, .., xn,xn] plus one step of overhang on the right
            out.push(x[0]);
            for &xi in &x[1..] {
                out.push(xi);
                out.push(xi);
            }
            out.push(x[n - 1] + (x[n - 1] - x[n - 2]));
            if left == EndCap::Closed {
                out.insert(0, x[0]);
            }
        }
        StepAlign::Pre => {
            // Mirror of Post: overhang on the left
            out.push(x[0] - (x[1] - x[0]));
            for &xi in &x[..n - 1] {
                out.push(xi);
                out.push(xi);
            }
            out.push(x[n - 1]);
            if right == EndCap::Closed {
                out.push(x[n - 1]);
            }
        }
        StepAlign::Mid => {
            // Risers at midpoints, half a step of overhang on both sides
            out.push(x[0] - (x[1] - x[0]) / 2.0);
            out.push(x[0]);
            for pair in x.windows(2) {
                let mid = (pair[0] + pair[1]) / 2.0;
                out.push(mid);
                out.push(mid);
            }
            out.push(x[n - 1]);
            out.push(x[n - 1] + (x[n - 1] - x[n - 2]) / 2.0);
        }
    }

    Ok(out)
}

/// Expand y values into the step outline trace.
///
/// Companion to [`steps_x`]: for the same alignment and caps both arrays have
/// the same length. Where the trace extends past the data, an
/// [`EndCap::Open`] end carries the end sample forward while a
/// [`EndCap::Closed`] end drops to `bottom`.
pub fn steps_y(
    y: &[f64],
    align: StepAlign,
    left: EndCap,
    right: EndCap,
    bottom: f64,
) -> Result<Vec<f64>> {
    check_length(y.len())?;
    let n = y.len();
    let mut out = Vec::with_capacity(2 * n + 2);

    match align {
        StepAlign::Post => {
            // [y1,y1, .., y(n-1),y(n-1), yn] plus the right overhang value
            for &yi in &y[..n - 1] {
                out.push(yi);
                out.push(yi);
            }
            out.push(y[n - 1]);
            out.push(if right == EndCap::Closed {
                bottom
            } else {
                y[n - 1]
            });
            if left == EndCap::Closed {
                out.insert(0, bottom);
            }
        }
        StepAlign::Pre => {
            out.push(if left == EndCap::Closed { bottom } else { y[0] });
            out.push(y[0]);
            for &yi in &y[1..] {
                out.push(yi);
                out.push(yi);
            }
            if right == EndCap::Closed {
                out.push(bottom);
            }
        }
        StepAlign::Mid => {
            out.push(if left == EndCap::Closed { bottom } else { y[0] });
            for &yi in y {
                out.push(yi);
                out.push(yi);
            }
            out.push(if right == EndCap::Closed {
                bottom
            } else {
                y[n - 1]
            });
        }
    }

    Ok(out)
}

/// Options for [`fill_between_steps`]
#[derive(Debug, Clone)]
pub struct StepFillOptions {
    /// Riser placement
    pub align: StepAlign,
    /// Left end treatment
    pub left: EndCap,
    /// Right end treatment
    pub right: EndCap,
    /// Baseline the fill extends down to
    pub bottom: f64,
    /// Outline style; `None` skips the outline
    pub line: Option<ShapeStyle>,
    /// Fill style; `None` skips the fill
    pub fill: Option<ShapeStyle>,
}

impl Default for StepFillOptions {
    fn default() -> Self {
        Self::from_sheet(&StyleSheet::default())
    }
}

impl StepFillOptions {
    /// Derive line and fill styling from a style sheet
    pub fn from_sheet(sheet: &StyleSheet) -> Self {
        Self {
            align: StepAlign::Post,
            left: EndCap::Open,
            right: EndCap::Open,
            bottom: 0.0,
            line: Some(sheet.line_style()),
            fill: Some(sheet.fill_style()),
        }
    }

    /// Disable the filled region, keeping only the outline
    pub fn without_fill(mut self) -> Self {
        self.fill = None;
        self
    }
}

/// Draw a step function with a filled region down to the baseline.
///
/// The fill is drawn first so the outline stays on top of it.
pub fn fill_between_steps<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    x: &[f64],
    y: &[f64],
    options: &StepFillOptions,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    if x.len() != y.len() {
        return Err(PlotAuxError::InvalidData {
            message: format!(
                "x and y must have the same length, got {} and {}",
                x.len(),
                y.len()
            ),
        });
    }

    let step_x = steps_x(x, options.align, options.left, options.right)?;
    let step_y = steps_y(y, options.align, options.left, options.right, options.bottom)?;
    let points: Vec<(f64, f64)> = step_x.into_iter().zip(step_y).collect();

    if let Some(fill) = options.fill {
        chart.draw_series(AreaSeries::new(points.iter().copied(), options.bottom, fill))?;
    }
    if let Some(line) = options.line {
        chart.draw_series(LineSeries::new(points.iter().copied(), line))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: [f64; 3] = [1.0, 2.0, 3.0];
    const Y: [f64; 3] = [10.0, 20.0, 30.0];

    #[test]
    fn post_closed_both_ends() {
        let sx = steps_x(&X, StepAlign::Post, EndCap::Closed, EndCap::Closed).unwrap();
        let sy = steps_y(&Y, StepAlign::Post, EndCap::Closed, EndCap::Closed, 0.0).unwrap();
        assert_eq!(sx, vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0]);
        assert_eq!(sy, vec![0.0, 10.0, 10.0, 20.0, 20.0, 30.0, 0.0]);
    }

    #[test]
    fn post_open_both_ends() {
        let sx = steps_x(&X, StepAlign::Post, EndCap::Open, EndCap::Open).unwrap();
        let sy = steps_y(&Y, StepAlign::Post, EndCap::Open, EndCap::Open, 0.0).unwrap();
        assert_eq!(sx, vec![1.0, 2.0, 2.0, 3.0, 3.0, 4.0]);
        assert_eq!(sy, vec![10.0, 10.0, 20.0, 20.0, 30.0, 30.0]);
    }

    #[test]
    fn pre_closed_both_ends() {
        let sx = steps_x(&X, StepAlign::Pre, EndCap::Closed, EndCap::Closed).unwrap();
        let sy = steps_y(&Y, StepAlign::Pre, EndCap::Closed, EndCap::Closed, 0.0).unwrap();
        assert_eq!(sx, vec![0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
        assert_eq!(sy, vec![0.0, 10.0, 20.0, 20.0, 30.0, 30.0, 0.0]);
    }

    #[test]
    fn mid_closed_both_ends() {
        let sx = steps_x(&X, StepAlign::Mid, EndCap::Closed, EndCap::Closed).unwrap();
        let sy = steps_y(&Y, StepAlign::Mid, EndCap::Closed, EndCap::Closed, 0.0).unwrap();
        assert_eq!(sx, vec![0.5, 1.0, 1.5, 1.5, 2.5, 2.5, 3.0, 3.5]);
        assert_eq!(sy, vec![0.0, 10.0, 10.0, 20.0, 20.0, 30.0, 30.0, 0.0]);
    }

    #[test]
    fn mid_open_carries_end_values() {
        let sy = steps_y(&Y, StepAlign::Mid, EndCap::Open, EndCap::Open, 0.0).unwrap();
        assert_eq!(
            sy,
            vec![10.0, 10.0, 10.0, 20.0, 20.0, 30.0, 30.0, 30.0]
        );
    }

    #[test]
    fn mid_handles_non_uniform_spacing() {
        let x = [0.0, 1.0, 3.0];
        let sx = steps_x(&x, StepAlign::Mid, EndCap::Open, EndCap::Open).unwrap();
        assert_eq!(sx, vec![-0.5, 0.0, 0.5, 0.5, 2.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn nonzero_bottom_caps_at_bottom() {
        let sy = steps_y(&Y, StepAlign::Post, EndCap::Closed, EndCap::Closed, 5.0).unwrap();
        assert_eq!(sy[0], 5.0);
        assert_eq!(*sy.last().unwrap(), 5.0);
    }

    #[test]
    fn x_and_y_lengths_always_match() {
        let aligns = [StepAlign::Pre, StepAlign::Mid, StepAlign::Post];
        let caps = [EndCap::Open, EndCap::Closed];
        for n in 2..=6 {
            let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let y: Vec<f64> = (0..n).map(|i| (i * i) as f64).collect();
            for align in aligns {
                for left in caps {
                    for right in caps {
                        let sx = steps_x(&x, align, left, right).unwrap();
                        let sy = steps_y(&y, align, left, right, 0.0).unwrap();
                        assert_eq!(
                            sx.len(),
                            sy.len(),
                            "length mismatch for n={} {:?} {:?}/{:?}",
                            n,
                            align,
                            left,
                            right
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn rejects_short_input() {
        assert!(steps_x(&[], StepAlign::Post, EndCap::Open, EndCap::Open).is_err());
        assert!(steps_x(&[1.0], StepAlign::Post, EndCap::Open, EndCap::Open).is_err());
        assert!(steps_y(&[1.0], StepAlign::Post, EndCap::Open, EndCap::Open, 0.0).is_err());
    }

    #[test]
    fn rejects_non_increasing_x() {
        let err = steps_x(&[1.0, 1.0, 2.0], StepAlign::Post, EndCap::Open, EndCap::Open)
            .unwrap_err();
        assert!(matches!(err, PlotAuxError::InvalidData { .. }));
        assert!(steps_x(&[3.0, 2.0, 1.0], StepAlign::Mid, EndCap::Open, EndCap::Open).is_err());
    }
}
