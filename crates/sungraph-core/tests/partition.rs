// File: crates/sungraph-core/tests/partition.rs
// Purpose: Validate that grouping is a total, order-stable partition.

use chrono::NaiveDate;
use sungraph_core::partition_by_group;
use sungraph_core::record::Record;

fn rec(day: u32, value: f64, group: &str) -> Record {
    Record {
        period: NaiveDate::from_ymd_opt(2021, 1, day).unwrap(),
        value,
        group: group.to_string(),
    }
}

#[test]
fn every_record_lands_in_exactly_one_series() {
    let records = vec![
        rec(3, 1.0, "A"),
        rec(1, 2.0, "B"),
        rec(2, 3.0, "A"),
        rec(4, 4.0, "C"),
        rec(5, 5.0, "B"),
    ];
    let series = partition_by_group(&records);

    let total: usize = series.iter().map(|s| s.records.len()).sum();
    assert_eq!(total, records.len());
    for s in &series {
        assert!(s.records.iter().all(|r| r.group == s.label));
    }
    // union equals input set
    let mut flat: Vec<&Record> = series.iter().flat_map(|s| s.records.iter()).collect();
    for r in &records {
        let pos = flat.iter().position(|f| *f == r).expect("record survived");
        flat.remove(pos);
    }
    assert!(flat.is_empty());
}

#[test]
fn groups_keep_first_seen_order() {
    let records = vec![rec(1, 0.0, "B"), rec(2, 0.0, "A"), rec(3, 0.0, "B")];
    let series = partition_by_group(&records);
    let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["B", "A"]);
}

#[test]
fn records_within_a_series_sort_by_period() {
    let records = vec![rec(9, 1.0, "A"), rec(2, 2.0, "A"), rec(5, 3.0, "A")];
    let series = partition_by_group(&records);
    let days: Vec<u32> = series[0]
        .records
        .iter()
        .map(|r| {
            use chrono::Datelike;
            r.period.day()
        })
        .collect();
    assert_eq!(days, [2, 5, 9]);
}

#[test]
fn equal_periods_keep_input_order() {
    let records = vec![rec(1, 10.0, "A"), rec(1, 20.0, "A"), rec(1, 30.0, "A")];
    let series = partition_by_group(&records);
    let values: Vec<f64> = series[0].records.iter().map(|r| r.value).collect();
    assert_eq!(values, [10.0, 20.0, 30.0]);
}
