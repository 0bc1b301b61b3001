//! Error types for plan generation.

use chrono::NaiveDate;

/// Result type for plan generation.
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors raised before any schedule is produced.
///
/// A failed run yields no partial schedule.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("Exam date {exam_date} must be after {today}")]
    InvalidWindow { today: NaiveDate, exam_date: NaiveDate },

    #[error("No study days available between {today} and {exam_date} (weekends included: {include_weekends})")]
    EmptyWindow {
        today: NaiveDate,
        exam_date: NaiveDate,
        include_weekends: bool,
    },

    #[error("Topic weights sum to {sum}; cannot split hours proportionally")]
    DegenerateWeights { sum: f64 },

    #[error("Daily hours must round to at least 0.25, got {0}")]
    InvalidDailyHours(f64),
}
