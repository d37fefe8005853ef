// File: crates/sungraph-core/tests/scale.rs
// Purpose: Validate scale transforms, inverses, and degenerate-span widening.

use chrono::NaiveDate;
use sungraph_core::{TimeScale, ValueScale};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn time_scale_maps_domain_endpoints_to_range_endpoints() {
    let s = TimeScale::new(date("2021-01-01"), date("2021-01-11"), 50.0, 780.0);
    assert!((s.to_px(date("2021-01-01")) - 50.0).abs() < 1e-4);
    assert!((s.to_px(date("2021-01-11")) - 780.0).abs() < 1e-4);
    // midpoint date lands at the pixel midpoint
    let mid = s.to_px(date("2021-01-06"));
    assert!((mid - 415.0).abs() < 1e-3);
}

#[test]
fn time_scale_round_trips_through_pixels() {
    let s = TimeScale::new(date("2021-01-01"), date("2021-03-01"), 0.0, 1000.0);
    for d in ["2021-01-01", "2021-01-20", "2021-02-14", "2021-03-01"] {
        let d = date(d);
        assert_eq!(s.from_px(s.to_px(d)), d);
    }
}

#[test]
fn single_date_domain_is_widened() {
    let s = TimeScale::new(date("2021-01-01"), date("2021-01-01"), 0.0, 100.0);
    // no NaN/inf from a zero-day span
    let px = s.to_px(date("2021-01-01"));
    assert!(px.is_finite());
    assert!((px - 0.0).abs() < 1e-4);
}

#[test]
fn value_scale_inverts_the_pixel_axis() {
    let s = ValueScale::new_linear(20.0, 470.0, 0.0, 100.0);
    assert!((s.to_px(0.0) - 470.0).abs() < 1e-4);
    assert!((s.to_px(100.0) - 20.0).abs() < 1e-4);
    assert!((s.to_px(50.0) - 245.0).abs() < 1e-3);
}

#[test]
fn value_scale_round_trips_through_pixels() {
    let s = ValueScale::new_linear(0.0, 400.0, 0.0, 80.0);
    for v in [0.0, 13.5, 40.0, 80.0] {
        assert!((s.from_px(s.to_px(v)) - v).abs() < 1e-3);
    }
}

#[test]
fn flat_value_domain_is_widened() {
    let s = ValueScale::new_linear(0.0, 400.0, 5.0, 5.0);
    assert!(s.vmax > s.vmin);
    assert!(s.to_px(5.0).is_finite());
}
