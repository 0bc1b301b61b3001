//! Plan generation entry point.
//!
//! # Algorithm
//!
//! 1. Validate the configuration (daily capacity ≥ 0.25 h).
//! 2. Build the study window `[today, exam_date)`.
//! 3. Compute entitlements from `study_days × daily_hours`.
//! 4. Run the day allocator (greedy, or round-robin fallback).
//! 5. Aggregate rows per (date, topic).

use chrono::NaiveDate;
use serde::Serialize;

use crate::allocator::{aggregate, AllocationStrategy, DayAllocator};
use crate::config::PlannerConfig;
use crate::demand::{DemandMap, DemandModel};
use crate::error::PlanResult;
use crate::models::{Hours, ScheduleRow, StudyWindow, Topic};

/// A generated study plan.
#[derive(Debug, Clone, Serialize)]
pub struct StudyPlan {
    /// Study days the plan was allocated over.
    pub window: StudyWindow,
    /// Aggregated rows, ordered by date then topic.
    pub rows: Vec<ScheduleRow>,
    /// Final demand state; non-zero `remaining` means shortfall.
    pub demand: DemandMap,
    /// `study_days × daily_hours`.
    pub total_available_hours: f64,
    /// Which allocation path produced `rows`.
    pub strategy: AllocationStrategy,
}

impl StudyPlan {
    /// Number of days in the study window.
    pub fn study_days(&self) -> usize {
        self.window.len()
    }

    /// Remaining-hours report: `(topic, leftover)` in topic order.
    pub fn remaining_report(&self) -> Vec<(String, Hours)> {
        self.demand.remaining_report()
    }

    /// Distinct dates that received at least one row.
    pub fn scheduled_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.rows.iter().map(|r| r.date).collect();
        dates.dedup();
        dates
    }

    /// Rows for one date.
    pub fn rows_on(&self, date: NaiveDate) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter().filter(move |r| r.date == date)
    }

    /// Total hours scheduled on one date.
    pub fn hours_on(&self, date: NaiveDate) -> Hours {
        self.rows_on(date).map(|r| r.hours).sum()
    }

    /// Total hours scheduled for a topic name across the window.
    pub fn hours_for_topic(&self, topic: &str) -> Hours {
        self.rows
            .iter()
            .filter(|r| r.topic == topic)
            .map(|r| r.hours)
            .sum()
    }

    /// Total hours scheduled.
    pub fn total_scheduled(&self) -> Hours {
        self.rows.iter().map(|r| r.hours).sum()
    }
}

/// Builds study plans from topics and a deadline.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_study::config::PlannerConfig;
/// use u_study::models::{Difficulty, Topic};
/// use u_study::planner::StudyPlanner;
///
/// let topics = vec![
///     Topic::new("calculus").with_difficulty(Difficulty::Hard).with_priority(true),
///     Topic::new("biology"),
///     Topic::new("history").with_difficulty(Difficulty::Easy),
/// ];
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let exam = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap();
///
/// let planner = StudyPlanner::new(PlannerConfig::new().with_daily_hours(3.0).with_weekends(false));
/// let plan = planner.plan(&topics, today, exam).unwrap();
/// assert_eq!(plan.study_days(), 10);
/// assert_eq!(plan.total_available_hours, 30.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StudyPlanner {
    config: PlannerConfig,
}

impl StudyPlanner {
    /// Creates a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generates a plan for `topics`, studying from `today` until the day
    /// before `exam_date`.
    ///
    /// # Errors
    /// `InvalidDailyHours`, `InvalidWindow`, `EmptyWindow` or
    /// `DegenerateWeights`; no partial plan is returned.
    pub fn plan(
        &self,
        topics: &[Topic],
        today: NaiveDate,
        exam_date: NaiveDate,
    ) -> PlanResult<StudyPlan> {
        self.config.validate()?;

        let window = StudyWindow::between(today, exam_date, self.config.include_weekends)?;
        let total_available_hours = window.available_hours(self.config.daily_hours);
        let mut demand = DemandModel::compute(topics, total_available_hours)?;

        let allocator = DayAllocator::new(self.config.daily_capacity())
            .with_tie_break(self.config.tie_break);
        let allocation = allocator.allocate(&window, &mut demand);
        let rows = aggregate(&allocation.rows);

        let leftover = demand.total_remaining();
        if !leftover.is_zero() && allocation.strategy == AllocationStrategy::Greedy {
            log::warn!("study window too short: {leftover} h of entitlement left unscheduled");
        }
        log::debug!(
            "plan {today}..{exam_date}: {} days, {} rows, {total_available_hours} h available",
            window.len(),
            rows.len()
        );

        Ok(StudyPlan {
            window,
            rows,
            demand,
            total_available_hours,
            strategy: allocation.strategy,
        })
    }
}
