//! Input validation for study planning requests.
//!
//! Checks caller-side input before planning. Detects:
//! - An empty topic list
//! - Topics with empty names
//! - Daily hours outside the recommended range
//!
//! All problems are collected, not just the first.

use crate::models::Topic;

/// Recommended minimum daily study hours.
pub const MIN_DAILY_HOURS: f64 = 1.0;
/// Recommended maximum daily study hours.
pub const MAX_DAILY_HOURS: f64 = 12.0;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No topics were given.
    NoTopics,
    /// A topic has an empty name.
    EmptyTopicName,
    /// Daily hours are outside `[MIN_DAILY_HOURS, MAX_DAILY_HOURS]`.
    DailyHoursOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a planning request.
///
/// Checks:
/// 1. At least one topic
/// 2. Every topic has a non-empty name
/// 3. `daily_hours` within `[1.0, 12.0]`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(topics: &[Topic], daily_hours: f64) -> ValidationResult {
    let mut errors = Vec::new();

    if topics.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoTopics,
            "Please enter at least one topic",
        ));
    }

    for (idx, topic) in topics.iter().enumerate() {
        if topic.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTopicName,
                format!("Topic #{} has an empty name", idx + 1),
            ));
        }
    }

    if !(MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&daily_hours) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DailyHoursOutOfRange,
            format!(
                "Daily hours must be between {MIN_DAILY_HOURS} and {MAX_DAILY_HOURS}, got {daily_hours}"
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let topics = vec![Topic::new("Calculus"), Topic::new("Biology")];
        assert!(validate_request(&topics, 3.0).is_ok());
        assert!(validate_request(&topics, 1.0).is_ok());
        assert!(validate_request(&topics, 12.0).is_ok());
    }

    #[test]
    fn test_no_topics() {
        let errors = validate_request(&[], 3.0).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NoTopics);
    }

    #[test]
    fn test_empty_name() {
        let topics = vec![Topic::new("ok"), Topic::new("   ")];
        let errors = validate_request(&topics, 3.0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyTopicName && e.message.contains("#2")));
    }

    #[test]
    fn test_daily_hours_out_of_range() {
        let topics = vec![Topic::new("x")];
        for bad in [0.5, 12.5, f64::NAN] {
            let errors = validate_request(&topics, bad).unwrap_err();
            assert_eq!(errors[0].kind, ValidationErrorKind::DailyHoursOutOfRange);
        }
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate_request(&[], 0.0).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
