// File: crates/sungraph-core/src/series.rs
// Summary: Partition of parsed records into named, period-ordered series.

use crate::record::Record;

/// One plotted line: all records sharing a group key, sorted by period.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupedSeries {
    pub label: String,
    pub records: Vec<Record>,
}

/// Split records into one series per group key.
///
/// Group order is first-seen input order, so legends and colors stay stable
/// across repeated builds of the same data. Within a series the sort by
/// period is stable: records with equal periods keep their input order.
pub fn partition_by_group(records: &[Record]) -> Vec<GroupedSeries> {
    let mut out: Vec<GroupedSeries> = Vec::new();
    for rec in records {
        match out.iter_mut().find(|s| s.label == rec.group) {
            Some(series) => series.records.push(rec.clone()),
            None => out.push(GroupedSeries {
                label: rec.group.clone(),
                records: vec![rec.clone()],
            }),
        }
    }
    for series in &mut out {
        series.records.sort_by_key(|r| r.period);
    }
    out
}
