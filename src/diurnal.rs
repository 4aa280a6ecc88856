//! Diurnal (time-of-day) plots
//!
//! A diurnal plot scatters the time of day of each event against its date,
//! which makes daily rhythms in a timestamp series visible at a glance. Dates
//! travel on the x axis as whole day numbers (days since the Unix epoch) and
//! times on the y axis as fractional hours in `[0, 24)`.

use crate::errors::{PlotAuxError, Result};
use crate::styles::StyleSheet;
use chrono::{DateTime, Timelike, Utc};
use plotters::backend::DrawingBackend;
use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::element::Circle;
use plotters::style::{Color, ShapeStyle};

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Convert a timestamp to a fractional day number (days since the Unix epoch)
pub fn to_day_number(ts: &DateTime<Utc>) -> f64 {
    let subsec = f64::from(ts.timestamp_subsec_millis()) / 1_000.0;
    (ts.timestamp() as f64 + subsec) / SECONDS_PER_DAY
}

/// Convert a fractional day number back to a UTC timestamp
pub fn from_day_number(day: f64) -> Result<DateTime<Utc>> {
    if !day.is_finite() {
        return Err(PlotAuxError::InvalidData {
            message: format!("day number must be finite, got {}", day),
        });
    }
    let millis = (day * SECONDS_PER_DAY * 1_000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(PlotAuxError::InvalidData {
            message: format!("day number {} is out of range", day),
        });
    }
    DateTime::from_timestamp_millis(millis as i64).ok_or_else(|| PlotAuxError::InvalidData {
        message: format!("day number {} is out of range", day),
    })
}

/// Map timestamps to diurnal coordinates.
///
/// Each point is `(whole day number, hour of day)`: the date component is
/// floored to a day boundary and the time component ignores the date.
pub fn diurnal_points(timestamps: &[DateTime<Utc>]) -> Vec<(f64, f64)> {
    timestamps
        .iter()
        .map(|ts| {
            let day = to_day_number(ts).floor();
            let hour = f64::from(ts.num_seconds_from_midnight()) / SECONDS_PER_HOUR;
            (day, hour)
        })
        .collect()
}

/// Map fractional day numbers to diurnal coordinates.
///
/// Counterpart of [`diurnal_points`] for callers that already carry day
/// numbers instead of timestamps.
pub fn diurnal_points_from_day_numbers(days: &[f64]) -> Result<Vec<(f64, f64)>> {
    let timestamps = days
        .iter()
        .map(|&d| from_day_number(d))
        .collect::<Result<Vec<_>>>()?;
    Ok(diurnal_points(&timestamps))
}

/// Marker options for [`draw_diurnal`]
#[derive(Debug, Clone)]
pub struct DiurnalOptions {
    /// Marker radius in pixels
    pub marker_size: i32,
    /// Marker style
    pub style: ShapeStyle,
}

impl Default for DiurnalOptions {
    fn default() -> Self {
        Self::from_sheet(&StyleSheet::default())
    }
}

impl DiurnalOptions {
    /// Derive marker styling from a style sheet
    pub fn from_sheet(sheet: &StyleSheet) -> Self {
        Self {
            marker_size: 3,
            style: sheet.lines.color.color().filled(),
        }
    }
}

/// Scatter the diurnal points of a timestamp series onto a chart
pub fn draw_diurnal<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    timestamps: &[DateTime<Utc>],
    options: &DiurnalOptions,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let points = diurnal_points(timestamps);
    chart.draw_series(
        points
            .into_iter()
            .map(|(day, hour)| Circle::new((day, hour), options.marker_size, options.style)),
    )?;
    Ok(())
}

/// Scatter diurnal points from fractional day numbers
pub fn draw_diurnal_from_day_numbers<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    days: &[f64],
    options: &DiurnalOptions,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let timestamps = days
        .iter()
        .map(|&d| from_day_number(d))
        .collect::<Result<Vec<_>>>()?;
    draw_diurnal(chart, &timestamps, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_relative_eq!(to_day_number(&ts(1970, 1, 1, 0, 0, 0)), 0.0);
        assert_relative_eq!(to_day_number(&ts(1970, 1, 2, 12, 0, 0)), 1.5);
    }

    #[test]
    fn day_number_round_trips() {
        let original = ts(2024, 6, 1, 6, 30, 15);
        let back = from_day_number(to_day_number(&original)).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn rejects_bad_day_numbers() {
        assert!(from_day_number(f64::NAN).is_err());
        assert!(from_day_number(f64::INFINITY).is_err());
        assert!(from_day_number(1e18).is_err());
    }

    #[test]
    fn splits_date_and_time_of_day() {
        let points = diurnal_points(&[ts(2024, 6, 1, 6, 30, 0), ts(2024, 6, 2, 18, 0, 0)]);
        // 2024-06-01 is 19875 days after the epoch
        assert_relative_eq!(points[0].0, 19875.0);
        assert_relative_eq!(points[0].1, 6.5);
        assert_relative_eq!(points[1].0, 19876.0);
        assert_relative_eq!(points[1].1, 18.0);
    }

    #[test]
    fn date_component_floors_to_day_boundary() {
        let late = ts(2024, 6, 1, 23, 59, 59);
        let points = diurnal_points(&[late]);
        assert_relative_eq!(points[0].0, 19875.0);
        assert!(points[0].1 < 24.0);
    }

    #[test]
    fn day_numbers_and_timestamps_agree() {
        let stamps = vec![ts(2023, 12, 31, 5, 0, 0), ts(2024, 1, 1, 17, 45, 0)];
        let days: Vec<f64> = stamps.iter().map(to_day_number).collect();
        let from_days = diurnal_points_from_day_numbers(&days).unwrap();
        let from_stamps = diurnal_points(&stamps);
        for (a, b) in from_days.iter().zip(&from_stamps) {
            assert_relative_eq!(a.0, b.0);
            assert_relative_eq!(a.1, b.1, epsilon = 1e-9);
        }
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(diurnal_points(&[]).is_empty());
        assert!(diurnal_points_from_day_numbers(&[]).unwrap().is_empty());
    }
}
