// File: crates/sungraph-core/src/record.rs
// Summary: Raw row container and per-row parsing into typed records.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::ChartError;

/// One already-tokenized input row: field name -> raw string. Whatever loads
/// the CSV (or any other tabular source) hands these over; the core never
/// sees the transport format.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One parsed observation. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub period: NaiveDate,
    pub value: f64,
    pub group: String,
}

/// Parse one raw row. `row` is the zero-based input index, reported on failure.
pub fn parse_record(
    raw: &RawRow,
    date_format: &str,
    group_field: &str,
    row: usize,
) -> Result<Record, ChartError> {
    let period_raw = raw
        .get("period")
        .ok_or_else(|| ChartError::parse("period", "", row))?;
    let period = NaiveDate::parse_from_str(period_raw.trim(), date_format)
        .map_err(|_| ChartError::parse("period", period_raw, row))?;

    let value_raw = raw
        .get("value")
        .ok_or_else(|| ChartError::parse("value", "", row))?;
    let value = value_raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ChartError::parse("value", value_raw, row))?;
    if !value.is_finite() {
        return Err(ChartError::parse("value", value_raw, row));
    }

    let group = raw
        .get(group_field)
        .ok_or_else(|| ChartError::parse(group_field, "", row))?
        .trim()
        .to_string();

    Ok(Record { period, value, group })
}
