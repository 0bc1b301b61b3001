//! Schedule row model.
//!
//! A schedule row records that `hours` of study go to `topic` on `date`.
//! The allocator appends rows in emission order; aggregation later merges
//! rows that share a (date, topic) pair.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Hours;

/// One (date, topic, hours) entry of a study schedule.
///
/// Dates serialize as ISO 8601 (`YYYY-MM-DD`), hours as real numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Study date.
    pub date: NaiveDate,
    /// Topic name.
    pub topic: String,
    /// Assigned hours (always > 0 for emitted rows).
    pub hours: Hours,
}

impl ScheduleRow {
    /// Creates a new row.
    pub fn new(date: NaiveDate, topic: impl Into<String>, hours: Hours) -> Self {
        Self {
            date,
            topic: topic.into(),
            hours,
        }
    }

    /// ISO 8601 date string.
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for ScheduleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date_iso(), self.topic, self.hours)
    }
}
