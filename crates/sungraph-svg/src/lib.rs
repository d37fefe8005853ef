// File: crates/sungraph-svg/src/lib.rs
// Summary: SVG rendering adapter consuming RenderPlan (axes, grid, polylines, legend).

use std::fmt::Write as _;

use anyhow::{Context, Result};
use sungraph_core::{linspace, RenderPlan, Rgb};

/// Visual styling knobs the plan itself does not carry. Stroke width and
/// swatch size default to the values the component was drawn with originally.
#[derive(Clone, Copy, Debug)]
pub struct SvgOptions {
    pub background: Rgb,
    pub axis_color: Rgb,
    pub grid_color: Rgb,
    pub label_color: Rgb,
    pub stroke_width: f32,
    pub font_size: f32,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub swatch_size: f32,
    pub draw_grid: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            background: Rgb::new(250, 250, 252),
            axis_color: Rgb::new(60, 60, 70),
            grid_color: Rgb::new(230, 230, 235),
            label_color: Rgb::new(20, 20, 30),
            stroke_width: 1.5,
            font_size: 12.0,
            x_ticks: 6,
            y_ticks: 5,
            swatch_size: 15.0,
            draw_grid: true,
        }
    }
}

/// Render the plan into a standalone SVG document string.
pub fn render_svg(plan: &RenderPlan, opts: &SvgOptions) -> String {
    let mut out = String::new();

    let plot_left = plan.insets.left as f32;
    let plot_right = (plan.width as u32 - plan.insets.right) as f32;
    let plot_top = plan.insets.top as f32;
    let plot_bottom = (plan.height as u32 - plan.insets.bottom) as f32;

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        plan.width, plan.height, plan.width, plan.height
    );
    let _ = writeln!(
        out,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        plan.width,
        plan.height,
        opts.background.to_hex()
    );

    if opts.draw_grid {
        push_grid(&mut out, opts, plot_left, plot_top, plot_right, plot_bottom);
    }
    push_axes(&mut out, plan, opts, plot_left, plot_top, plot_right, plot_bottom);
    push_series(&mut out, plan, opts);
    push_legend(&mut out, plan, opts, plot_left, plot_top);

    out.push_str("</svg>\n");
    out
}

/// Render and write to `path`, creating parent directories as needed.
pub fn write_svg(plan: &RenderPlan, opts: &SvgOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, render_svg(plan, opts))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn push_grid(out: &mut String, opts: &SvgOptions, l: f32, t: f32, r: f32, b: f32) {
    let color = opts.grid_color.to_hex();
    for x in linspace(l as f64, r as f64, opts.x_ticks) {
        let _ = writeln!(
            out,
            r#"<line x1="{x:.1}" y1="{t:.1}" x2="{x:.1}" y2="{b:.1}" stroke="{color}" stroke-width="1"/>"#
        );
    }
    for y in linspace(t as f64, b as f64, opts.y_ticks) {
        let _ = writeln!(
            out,
            r#"<line x1="{l:.1}" y1="{y:.1}" x2="{r:.1}" y2="{y:.1}" stroke="{color}" stroke-width="1"/>"#
        );
    }
}

fn push_axes(out: &mut String, plan: &RenderPlan, opts: &SvgOptions, l: f32, t: f32, r: f32, b: f32) {
    let axis = opts.axis_color.to_hex();
    let label = opts.label_color.to_hex();
    let fs = opts.font_size;

    // axis lines along the bottom and left plot edges
    let _ = writeln!(
        out,
        r#"<line x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}" stroke="{axis}" stroke-width="1.5"/>"#
    );
    let _ = writeln!(
        out,
        r#"<line x1="{l:.1}" y1="{t:.1}" x2="{l:.1}" y2="{b:.1}" stroke="{axis}" stroke-width="1.5"/>"#
    );

    // x ticks, labeled with the date each pixel position maps back to
    for x in linspace(l as f64, r as f64, opts.x_ticks) {
        let x = x as f32;
        let date = plan.x_scale.from_px(x);
        let _ = writeln!(
            out,
            r#"<line x1="{x:.1}" y1="{b:.1}" x2="{x:.1}" y2="{:.1}" stroke="{axis}" stroke-width="1"/>"#,
            b + 6.0
        );
        let _ = writeln!(
            out,
            r#"<text x="{x:.1}" y="{:.1}" font-size="{fs}" fill="{label}" text-anchor="middle">{date}</text>"#,
            b + 6.0 + fs
        );
    }

    // y ticks, labeled with the value each pixel position maps back to
    for y in linspace(t as f64, b as f64, opts.y_ticks) {
        let y = y as f32;
        let value = plan.y_scale.from_px(y);
        let _ = writeln!(
            out,
            r#"<line x1="{:.1}" y1="{y:.1}" x2="{l:.1}" y2="{y:.1}" stroke="{axis}" stroke-width="1"/>"#,
            l - 6.0
        );
        let _ = writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" font-size="{fs}" fill="{label}" text-anchor="end">{}</text>"#,
            l - 8.0,
            y + fs * 0.35,
            format_tick(value)
        );
    }
}

fn push_series(out: &mut String, plan: &RenderPlan, opts: &SvgOptions) {
    for s in &plan.series {
        let mut points = String::new();
        for (i, (x, y)) in s.points.iter().enumerate() {
            if i > 0 { points.push(' '); }
            let _ = write!(points, "{x:.1},{y:.1}");
        }
        let _ = writeln!(
            out,
            r#"<polyline points="{points}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            s.color.to_hex(),
            opts.stroke_width
        );
    }
}

fn push_legend(out: &mut String, plan: &RenderPlan, opts: &SvgOptions, plot_left: f32, plot_top: f32) {
    if plan.legend.is_empty() { return; }
    let sw = opts.swatch_size;
    let fs = opts.font_size;
    let _ = writeln!(
        out,
        r#"<g transform="translate({:.1},{:.1})">"#,
        plot_left + 10.0,
        plot_top + 10.0
    );
    for entry in &plan.legend {
        let _ = writeln!(
            out,
            r#"<rect x="0" y="{:.1}" width="{sw}" height="{sw}" fill="{}"/>"#,
            entry.y_offset,
            entry.color.to_hex()
        );
        let _ = writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" font-size="{fs}" fill="{}">{}</text>"#,
            sw + 5.0,
            entry.y_offset + sw * 0.75,
            opts.label_color.to_hex(),
            escape_text(&entry.label)
        );
    }
    out.push_str("</g>\n");
}

fn format_tick(v: f64) -> String {
    if v.abs() >= 10.0 || v == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
