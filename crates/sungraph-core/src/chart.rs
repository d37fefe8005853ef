// File: crates/sungraph-core/src/chart.rs
// Summary: Chart configuration and the build step producing an immutable RenderPlan.

use chrono::NaiveDate;

use crate::error::ChartError;
use crate::palette::Palette;
use crate::record::{parse_record, RawRow, Record};
use crate::scale::{TimeScale, ValueScale};
use crate::series::partition_by_group;
use crate::types::{Insets, Rgb, HEIGHT, WIDTH};

/// Build-time configuration. Everything the original scripts kept as
/// script-level globals (margins, sizes, format strings, group column)
/// lives here explicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// strftime-style format for the `period` column, e.g. "%Y-%m-%d".
    pub date_format: String,
    /// Name of the column whose values partition rows into series.
    pub group_field: String,
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub palette: Palette,
    /// Vertical pixel step between stacked legend entries.
    pub legend_item_step: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            group_field: "forecast_period".to_string(),
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            palette: Palette::default(),
            legend_item_step: 20.0,
        }
    }
}

/// One series' plotted geometry: pixel points in period order.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPlan {
    pub label: String,
    pub color: Rgb,
    pub points: Vec<(f32, f32)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
    pub y_offset: f32,
}

/// Pure, renderer-agnostic output of one build: shared domains and scales,
/// one polyline per series, one legend entry per series. No drawing happens
/// here; an adapter (e.g. the SVG crate) consumes this.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub x_domain: (NaiveDate, NaiveDate),
    pub y_domain: (f64, f64),
    pub x_scale: TimeScale,
    pub y_scale: ValueScale,
    pub series: Vec<SeriesPlan>,
    pub legend: Vec<LegendEntry>,
}

/// Build a render plan from already-tokenized rows.
///
/// Any malformed `period` or `value` aborts the whole build: a chart over a
/// silently filtered dataset would misrepresent the data. The y domain is
/// pinned to start at zero so magnitudes stay comparable across series.
pub fn build_chart(rows: &[RawRow], config: &ChartConfig) -> Result<RenderPlan, ChartError> {
    validate_config(config)?;
    if rows.is_empty() {
        return Err(ChartError::EmptyInput);
    }

    let mut records: Vec<Record> = Vec::with_capacity(rows.len());
    for (row, raw) in rows.iter().enumerate() {
        records.push(parse_record(raw, &config.date_format, &config.group_field, row)?);
    }

    // Domains over the full dataset, never per series, so every polyline
    // shares one coordinate system.
    let mut d_min = records[0].period;
    let mut d_max = records[0].period;
    let mut v_max = records[0].value;
    for rec in &records[1..] {
        if rec.period < d_min { d_min = rec.period; }
        if rec.period > d_max { d_max = rec.period; }
        if rec.value > v_max { v_max = rec.value; }
    }

    let plot_left = config.insets.left as f32;
    let plot_right = (config.width as u32 - config.insets.right) as f32;
    let plot_top = config.insets.top as f32;
    let plot_bottom = (config.height as u32 - config.insets.bottom) as f32;

    let x_scale = TimeScale::new(d_min, d_max, plot_left, plot_right);
    let y_scale = ValueScale::new_linear(plot_top, plot_bottom, 0.0, v_max);

    let grouped = partition_by_group(&records);
    let mut series = Vec::with_capacity(grouped.len());
    let mut legend = Vec::with_capacity(grouped.len());
    for (i, g) in grouped.into_iter().enumerate() {
        let color = config.palette.color_for(i);
        let points = g
            .records
            .iter()
            .map(|r| (x_scale.to_px(r.period), y_scale.to_px(r.value)))
            .collect();
        series.push(SeriesPlan { label: g.label.clone(), color, points });
        legend.push(LegendEntry {
            label: g.label,
            color,
            y_offset: i as f32 * config.legend_item_step,
        });
    }

    Ok(RenderPlan {
        width: config.width,
        height: config.height,
        insets: config.insets,
        x_domain: (d_min, d_max),
        y_domain: (0.0, v_max),
        x_scale,
        y_scale,
        series,
        legend,
    })
}

fn validate_config(config: &ChartConfig) -> Result<(), ChartError> {
    if config.group_field.trim().is_empty() {
        return Err(ChartError::Config("group field name is empty".into()));
    }
    if config.palette.is_empty() {
        return Err(ChartError::Config("palette has no colors".into()));
    }
    if config.width <= config.insets.hsum() as i32 {
        return Err(ChartError::Config(format!(
            "width {} leaves no plot area inside insets",
            config.width
        )));
    }
    if config.height <= config.insets.vsum() as i32 {
        return Err(ChartError::Config(format!(
            "height {} leaves no plot area inside insets",
            config.height
        )));
    }
    Ok(())
}
