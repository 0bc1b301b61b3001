//! Study window model.
//!
//! The study window is the ordered set of calendar dates on which study
//! hours may be allocated: every day from `today` (inclusive) up to the
//! exam date (exclusive), optionally skipping Saturday and Sunday.
//!
//! # Time Model
//! `today` is always passed in by the caller. Nothing here reads the
//! wall clock.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::{PlanError, PlanResult};

/// An ordered, non-empty sequence of distinct study dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyWindow {
    days: Vec<NaiveDate>,
}

impl StudyWindow {
    /// Builds the window `[today, exam_date)`.
    ///
    /// # Errors
    /// - `InvalidWindow` if `exam_date <= today`.
    /// - `EmptyWindow` if weekend filtering leaves no days.
    pub fn between(
        today: NaiveDate,
        exam_date: NaiveDate,
        include_weekends: bool,
    ) -> PlanResult<Self> {
        if exam_date <= today {
            return Err(PlanError::InvalidWindow { today, exam_date });
        }

        let days: Vec<NaiveDate> = today
            .iter_days()
            .take_while(|d| *d < exam_date)
            .filter(|d| include_weekends || !is_weekend(*d))
            .collect();

        if days.is_empty() {
            return Err(PlanError::EmptyWindow {
                today,
                exam_date,
                include_weekends,
            });
        }

        Ok(Self { days })
    }

    /// Builds a window from explicit dates. Dates are sorted and deduplicated.
    ///
    /// Returns `None` if no dates are given.
    pub fn from_days(mut days: Vec<NaiveDate>) -> Option<Self> {
        days.sort();
        days.dedup();
        if days.is_empty() {
            None
        } else {
            Some(Self { days })
        }
    }

    /// Number of study days.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always `false`; an empty window cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Study days in chronological order.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days[self.days.len() - 1]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.binary_search(&date).is_ok()
    }

    /// Total available hours: study days × daily hours.
    pub fn available_hours(&self, daily_hours: f64) -> f64 {
        self.days.len() as f64 * daily_hours
    }
}

/// Whether a date falls on Saturday or Sunday.
#[inline]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
