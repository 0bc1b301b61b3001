//! Round-robin fallback allocation.
//!
//! Used only when the greedy pass emits nothing. Each study day goes
//! entirely to one topic, cycling through the topic list in order.
//! Remaining-demand bookkeeping is not consulted or updated.

use crate::models::{Hours, ScheduleRow, StudyWindow};

/// Assigns `daily_capacity` per day, one topic per day, cycling `topics`.
///
/// Returns no rows if `topics` is empty.
pub fn round_robin(
    window: &StudyWindow,
    topics: &[&str],
    daily_capacity: Hours,
) -> Vec<ScheduleRow> {
    if topics.is_empty() {
        return Vec::new();
    }

    window
        .iter()
        .zip(topics.iter().cycle())
        .map(|(day, topic)| ScheduleRow::new(day, *topic, daily_capacity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn window(days: u32) -> StudyWindow {
        let start = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        StudyWindow::from_days(start.iter_days().take(days as usize).collect()).unwrap()
    }

    #[test]
    fn test_cycles_topics_in_order() {
        let rows = round_robin(&window(5), &["Art", "Math"], Hours::from_whole(2));
        let topics: Vec<&str> = rows.iter().map(|r| r.topic.as_str()).collect();
        assert_eq!(topics, vec!["Art", "Math", "Art", "Math", "Art"]);
        assert!(rows.iter().all(|r| r.hours == Hours::from_whole(2)));
    }

    #[test]
    fn test_one_row_per_day() {
        let w = window(3);
        let rows = round_robin(&w, &["A", "B", "C", "D"], Hours::QUARTER);
        assert_eq!(rows.len(), 3);
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, w.days());
    }

    #[test]
    fn test_no_topics() {
        assert!(round_robin(&window(2), &[], Hours::from_whole(1)).is_empty());
    }
}
