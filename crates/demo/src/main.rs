// File: crates/demo/src/main.rs
// Summary: Demo loads a grouped time-series CSV and writes an SVG line chart with legend.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use sungraph_core::{build_chart, ChartConfig, RawRow};
use sungraph_svg::{write_svg, SvgOptions};

fn main() -> Result<()> {
    // Accept path and group column from CLI or fall back to the sample
    // dataset (supports .csv/.cvs swap).
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "crates/demo/data/master_solar_data.csv".to_string());
    let group_field = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "forecast_period".to_string());

    let (path, used_alt) = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());
    if used_alt {
        println!("  (extension swapped between .csv/.cvs)");
    }

    let rows = load_rows_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows", rows.len());

    let config = ChartConfig {
        group_field,
        ..ChartConfig::default()
    };
    let plan = build_chart(&rows, &config).context("building chart")?;
    println!(
        "Date domain: [{}, {}]; value domain: [{}, {}]",
        plan.x_domain.0, plan.x_domain.1, plan.y_domain.0, plan.y_domain.1
    );
    println!("Series: {}", plan.series.len());
    for s in &plan.series {
        println!("  {} ({} points, {})", s.label, s.points.len(), s.color.to_hex());
    }

    let out = out_name(&path);
    write_svg(&plan, &SvgOptions::default(), &out)?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/chart_<stem>.svg
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{}.svg", stem));
    out
}

/// Load every CSV row as a field-name -> raw-string map. All typing and
/// validation happens inside the core build, not here, so a bad row aborts
/// there with its row index instead of being silently dropped.
fn load_rows_csv(path: &Path) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    println!("Headers: {:?}", headers.iter().collect::<Vec<_>>());

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let row: RawRow = headers
            .iter()
            .zip(rec.iter())
            .collect();
        out.push(row);
    }
    Ok(out)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
