// File: crates/sungraph-core/tests/errors.rs
// Purpose: Validate the abort-on-error policy for malformed input and bad config.

use sungraph_core::{build_chart, ChartConfig, ChartError, Palette, RawRow};

fn row(period: &str, value: &str, group: &str) -> RawRow {
    [("period", period), ("value", value), ("forecast_period", group)]
        .into_iter()
        .collect()
}

#[test]
fn malformed_date_aborts_with_parse_error() {
    let rows = vec![row("13/45/2021", "10", "A")];
    let cfg = ChartConfig {
        date_format: "%m/%d/%Y".to_string(),
        ..ChartConfig::default()
    };
    let err = build_chart(&rows, &cfg).unwrap_err();
    assert_eq!(
        err,
        ChartError::Parse {
            field: "period".to_string(),
            raw: "13/45/2021".to_string(),
            row: 0,
        }
    );
}

#[test]
fn malformed_value_reports_offending_row() {
    let rows = vec![
        row("2021-01-01", "5", "A"),
        row("2021-01-02", "n/a", "A"),
        row("2021-01-03", "7", "A"),
    ];
    let err = build_chart(&rows, &ChartConfig::default()).unwrap_err();
    assert_eq!(
        err,
        ChartError::Parse {
            field: "value".to_string(),
            raw: "n/a".to_string(),
            row: 1,
        }
    );
}

#[test]
fn non_finite_value_is_rejected() {
    let rows = vec![row("2021-01-01", "NaN", "A")];
    let err = build_chart(&rows, &ChartConfig::default()).unwrap_err();
    assert!(matches!(err, ChartError::Parse { ref field, .. } if field == "value"));
}

#[test]
fn missing_group_column_is_a_parse_error_for_that_field() {
    let rows: Vec<RawRow> = vec![[("period", "2021-01-01"), ("value", "5")]
        .into_iter()
        .collect()];
    let err = build_chart(&rows, &ChartConfig::default()).unwrap_err();
    assert_eq!(
        err,
        ChartError::Parse {
            field: "forecast_period".to_string(),
            raw: String::new(),
            row: 0,
        }
    );
}

#[test]
fn empty_input_is_its_own_error() {
    let err = build_chart(&[], &ChartConfig::default()).unwrap_err();
    assert_eq!(err, ChartError::EmptyInput);
}

#[test]
fn empty_group_field_name_is_a_config_error() {
    let cfg = ChartConfig {
        group_field: "  ".to_string(),
        ..ChartConfig::default()
    };
    let err = build_chart(&[row("2021-01-01", "5", "A")], &cfg).unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn empty_palette_is_a_config_error() {
    let cfg = ChartConfig {
        palette: Palette::new(Vec::new()),
        ..ChartConfig::default()
    };
    let err = build_chart(&[row("2021-01-01", "5", "A")], &cfg).unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn degenerate_plot_rect_is_a_config_error() {
    let cfg = ChartConfig {
        width: 60, // insets default to 50 left + 20 right
        ..ChartConfig::default()
    };
    let err = build_chart(&[row("2021-01-01", "5", "A")], &cfg).unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}
