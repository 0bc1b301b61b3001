//! Row aggregation.
//!
//! Merges rows that share a (date, topic) pair into one row whose hours
//! are the sum. Output is ordered by date, then topic name.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{Hours, ScheduleRow};

/// Sums hours per (date, topic) pair.
pub fn aggregate(rows: &[ScheduleRow]) -> Vec<ScheduleRow> {
    let mut grouped: BTreeMap<(NaiveDate, &str), Hours> = BTreeMap::new();
    for row in rows {
        *grouped
            .entry((row.date, row.topic.as_str()))
            .or_insert(Hours::ZERO) += row.hours;
    }

    grouped
        .into_iter()
        .map(|((date, topic), hours)| ScheduleRow::new(date, topic, hours))
        .collect()
}
