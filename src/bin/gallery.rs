//! Sample chart generator for visual verification
//!
//! Generates a gallery of step-fill and diurnal charts so changes to the
//! helpers can be reviewed by eye. Output lands in `gallery_output/`.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, TimeZone, Utc};
use plotaux::{
    draw_diurnal, fill_between_steps, render_png, DiurnalOptions, EndCap, StepAlign,
    StepFillOptions, StyleSheet,
};
use plotters::chart::ChartBuilder;
use std::fs;
use std::path::Path;

const SIZE: (u32, u32) = (1280, 720);

fn main() -> Result<()> {
    println!("plotaux gallery generator");
    println!("=========================");

    let output_dir = Path::new("gallery_output");
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    generate_step_variations(output_dir)?;
    generate_style_presets(output_dir)?;
    generate_diurnal_sample(output_dir)?;

    println!("\nDone. Review the PNG files in '{}'.", output_dir.display());
    Ok(())
}

fn sample_series() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (1..=8).map(|i| i as f64).collect();
    let y = vec![12.0, 30.0, 22.0, 35.0, 18.0, 25.0, 31.0, 15.0];
    (x, y)
}

/// One chart per riser alignment, plus an open-ended outline-only variant
fn generate_step_variations(output_dir: &Path) -> Result<()> {
    println!("\nGenerating step fill variations...");

    let sheet = StyleSheet::load(&[]);
    let (x, y) = sample_series();

    let cases = [
        (StepAlign::Post, EndCap::Closed, "01_steps_post_closed"),
        (StepAlign::Pre, EndCap::Closed, "02_steps_pre_closed"),
        (StepAlign::Mid, EndCap::Closed, "03_steps_mid_closed"),
    ];

    for (align, cap, filename) in cases {
        let path = output_dir.join(format!("{}.png", filename));
        let mut options = StepFillOptions::from_sheet(&sheet);
        options.align = align;
        options.left = cap;
        options.right = cap;
        render_step_chart(&path, &sheet, &x, &y, &options, filename)?;
        println!("  {}", path.display());
    }

    // Outline only, open ends
    let path = output_dir.join("04_steps_post_open_nofill.png");
    let options = StepFillOptions::from_sheet(&sheet).without_fill();
    render_step_chart(&path, &sheet, &x, &y, &options, "04_steps_post_open_nofill")?;
    println!("  {}", path.display());

    Ok(())
}

/// The same step chart rendered once per built-in style preset
fn generate_style_presets(output_dir: &Path) -> Result<()> {
    println!("\nGenerating style preset comparisons...");

    let (x, y) = sample_series();
    let presets = ["default", "publish_digital", "publish_printed"];

    for (i, preset) in presets.into_iter().enumerate() {
        let sheet = StyleSheet::load(&[preset]);
        let path = output_dir.join(format!("{:02}_preset_{}.png", i + 5, preset));
        let mut options = StepFillOptions::from_sheet(&sheet);
        options.left = EndCap::Closed;
        options.right = EndCap::Closed;
        let title = format!("Style preset: {}", preset);
        render_step_chart(&path, &sheet, &x, &y, &options, &title)?;
        println!("  {}", path.display());
    }

    Ok(())
}

fn render_step_chart(
    path: &Path,
    sheet: &StyleSheet,
    x: &[f64],
    y: &[f64],
    options: &StepFillOptions,
    title: &str,
) -> Result<()> {
    render_png(path, SIZE, sheet.background(), |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(title, sheet.text_style())
            .margin(sheet.figure.margin as i32)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0..10.0, 0.0..40.0)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc("x")
            .y_desc("y")
            .label_style(sheet.axis_label_style());
        if sheet.grid.show {
            mesh.bold_line_style(sheet.grid_style());
        } else {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        fill_between_steps(&mut chart, x, y, options)
    })?;
    Ok(())
}

/// A month of synthetic events clustering around morning and evening
fn generate_diurnal_sample(output_dir: &Path) -> Result<()> {
    println!("\nGenerating diurnal sample...");

    let sheet = StyleSheet::load(&[]);
    let timestamps = synthetic_events()?;
    let day_lo = plotaux::to_day_number(&timestamps[0]).floor() - 1.0;
    let day_hi = plotaux::to_day_number(timestamps.last().expect("non-empty")).floor() + 1.0;

    let path = output_dir.join("08_diurnal.png");
    render_png(&path, SIZE, sheet.background(), |root| {
        let mut chart = ChartBuilder::on(root)
            .caption("Diurnal distribution of events", sheet.text_style())
            .margin(sheet.figure.margin as i32)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(day_lo..day_hi, 0.0..24.0)?;

        chart
            .configure_mesh()
            .x_desc("day number")
            .y_desc("hour of day")
            .label_style(sheet.axis_label_style())
            .draw()?;

        draw_diurnal(&mut chart, &timestamps, &DiurnalOptions::from_sheet(&sheet))
    })?;
    println!("  {}", path.display());

    Ok(())
}

fn synthetic_events() -> Result<Vec<DateTime<Utc>>> {
    let base = Utc
        .with_ymd_and_hms(2024, 6, 1, 0, 0, 0)
        .single()
        .context("constructing base timestamp")?;

    let mut events = Vec::new();
    for day in 0..30 {
        // Morning and evening clusters drifting over the month
        let morning = base + Duration::days(day) + Duration::minutes(7 * 60 + day * 3);
        let evening = base + Duration::days(day) + Duration::minutes(19 * 60 + 30 - day * 2);
        events.push(morning);
        events.push(evening);
    }
    Ok(events)
}
