//! Plan quality summary.
//!
//! Computes reporting figures from a generated plan.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Days used | Distinct dates with at least one row |
//! | Utilization | Scheduled hours / available hours |
//! | Coverage | Scheduled hours / entitled hours |
//! | Shortfall | Topics with remaining demand > 0 |

use serde::Serialize;
use std::collections::BTreeMap;

use super::StudyPlan;
use crate::allocator::AllocationStrategy;
use crate::models::Hours;

/// Summary figures for a study plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    /// Days in the study window.
    pub study_days: usize,
    /// Distinct dates that received hours.
    pub days_used: usize,
    /// `study_days × daily_hours`.
    pub total_available_hours: f64,
    /// Sum of all scheduled hours.
    pub total_scheduled: Hours,
    /// Sum of all entitlements.
    pub total_entitled: Hours,
    /// Sum of all unscheduled entitlement.
    pub total_remaining: Hours,
    /// Fraction of available hours scheduled (0.0..=1.0).
    pub utilization: f64,
    /// Fraction of entitled hours scheduled.
    pub coverage: f64,
    /// Scheduled hours per topic name.
    pub hours_by_topic: BTreeMap<String, Hours>,
    /// Topics left with remaining demand, in topic order.
    pub shortfall: Vec<String>,
    /// Which allocation path produced the plan.
    pub strategy: AllocationStrategy,
}

impl PlanSummary {
    /// Computes the summary for a plan.
    pub fn calculate(plan: &StudyPlan) -> Self {
        let total_scheduled = plan.total_scheduled();
        let total_entitled = plan.demand.total_entitled();

        let mut hours_by_topic: BTreeMap<String, Hours> = BTreeMap::new();
        for row in &plan.rows {
            *hours_by_topic.entry(row.topic.clone()).or_default() += row.hours;
        }

        let shortfall = plan
            .demand
            .entries()
            .iter()
            .filter(|e| !e.remaining.is_zero())
            .map(|e| e.topic.clone())
            .collect();

        let utilization = if plan.total_available_hours > 0.0 {
            total_scheduled.as_f64() / plan.total_available_hours
        } else {
            0.0
        };

        let coverage = if total_entitled.is_zero() {
            1.0
        } else {
            total_scheduled.as_f64() / total_entitled.as_f64()
        };

        Self {
            study_days: plan.study_days(),
            days_used: plan.scheduled_dates().len(),
            total_available_hours: plan.total_available_hours,
            total_scheduled,
            total_entitled,
            total_remaining: plan.demand.total_remaining(),
            utilization,
            coverage,
            hours_by_topic,
            shortfall,
            strategy: plan.strategy,
        }
    }

    /// Whether every topic received its full entitlement.
    pub fn is_fully_covered(&self) -> bool {
        self.shortfall.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerConfig;
    use crate::models::{Difficulty, Topic};
    use crate::planner::StudyPlanner;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_summary_full_coverage() {
        let topics = vec![
            Topic::new("Calculus")
                .with_difficulty(Difficulty::Hard)
                .with_priority(true),
            Topic::new("Biology"),
            Topic::new("History").with_difficulty(Difficulty::Easy),
        ];
        let planner = StudyPlanner::new(PlannerConfig::new().with_weekends(false));
        let plan = planner.plan(&topics, ymd(2026, 10, 19), ymd(2026, 11, 2)).unwrap();

        let summary = PlanSummary::calculate(&plan);
        assert_eq!(summary.study_days, 10);
        assert_eq!(summary.days_used, 10);
        assert_eq!(summary.total_scheduled, Hours::from_whole(30));
        assert!((summary.utilization - 1.0).abs() < 1e-10);
        assert!((summary.coverage - 1.0).abs() < 1e-10);
        assert!(summary.is_fully_covered());
        assert_eq!(summary.hours_by_topic["Calculus"], Hours::from_whole(20));
    }

    #[test]
    fn test_summary_shortfall() {
        // 3.1 h/day: entitlement uses 31 h, capacity rounds to 3.0 h/day
        let planner = StudyPlanner::new(PlannerConfig::new().with_daily_hours(3.1));
        let plan = planner
            .plan(&[Topic::new("law")], ymd(2026, 10, 19), ymd(2026, 10, 29))
            .unwrap();

        let summary = PlanSummary::calculate(&plan);
        assert_eq!(summary.total_entitled, Hours::from_whole(31));
        assert_eq!(summary.total_remaining, Hours::from_whole(1));
        assert_eq!(summary.shortfall, vec!["Law".to_string()]);
        assert!(!summary.is_fully_covered());
        assert!((summary.coverage - 30.0 / 31.0).abs() < 1e-10);
        assert!(summary.utilization < 1.0);
    }

    #[test]
    fn test_summary_off_grid_hours_fully_covered() {
        let planner = StudyPlanner::new(PlannerConfig::new().with_daily_hours(3.4));
        let plan = planner
            .plan(&[Topic::new("law")], ymd(2026, 10, 19), ymd(2026, 10, 29))
            .unwrap();

        let summary = PlanSummary::calculate(&plan);
        assert!(summary.is_fully_covered());
        assert_eq!(summary.total_scheduled, Hours::from_whole(34));
        assert!((summary.utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_duplicate_names_combined_in_topic_totals() {
        let planner = StudyPlanner::new(PlannerConfig::new().with_daily_hours(2.0));
        let plan = planner
            .plan(
                &[Topic::new("math"), Topic::new("Math")],
                ymd(2026, 10, 19),
                ymd(2026, 10, 21),
            )
            .unwrap();
        let summary = PlanSummary::calculate(&plan);
        assert_eq!(summary.hours_by_topic.len(), 1);
        assert_eq!(summary.hours_by_topic["Math"], Hours::from_whole(4));
    }
}
