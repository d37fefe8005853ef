// File: crates/sungraph-core/src/scale.rs
// Summary: Time (X) and linear value (Y) scale transforms shared by all series.

use chrono::NaiveDate;

/// Horizontal time scale mapping a date domain to [left, right] pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub d_min: NaiveDate,
    pub d_max: NaiveDate,
    pub left_px: f32,
    pub right_px: f32,
    span_days: f64,
}

impl TimeScale {
    pub fn new(d_min: NaiveDate, d_max: NaiveDate, left_px: f32, right_px: f32) -> Self {
        let mut span_days = (d_max - d_min).num_days() as f64;
        if span_days < 1.0 { span_days = 1.0; }
        Self { d_min, d_max, left_px, right_px, span_days }
    }

    #[inline]
    pub fn to_px(&self, d: NaiveDate) -> f32 {
        let days = (d - self.d_min).num_days() as f64;
        self.left_px + (days / self.span_days) as f32 * (self.right_px - self.left_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> NaiveDate {
        let frac = ((px - self.left_px) / (self.right_px - self.left_px)) as f64;
        self.d_min + chrono::Duration::days((frac * self.span_days).round() as i64)
    }
}

/// Vertical value scale mapping [vmin, vmax] to [bottom, top] pixels
/// (pixel axis grows downward, so larger values land higher on screen).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }
}
