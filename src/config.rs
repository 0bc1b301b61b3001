//! Planner configuration.
//!
//! All fields have defaults, so a partial JSON document (or none at all)
//! yields a usable configuration.

use serde::{Deserialize, Serialize};

use crate::allocator::TieBreak;
use crate::error::{PlanError, PlanResult};
use crate::models::Hours;

/// Default study hours per day.
pub const DEFAULT_DAILY_HOURS: f64 = 3.0;

/// Planner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Study hours available per day.
    pub daily_hours: f64,
    /// Whether Saturday and Sunday are study days.
    pub include_weekends: bool,
    /// Tie-breaking rule for equal remaining demand.
    pub tie_break: TieBreak,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            daily_hours: DEFAULT_DAILY_HOURS,
            include_weekends: true,
            tie_break: TieBreak::InsertionOrder,
        }
    }
}

impl PlannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the daily study hours.
    pub fn with_daily_hours(mut self, daily_hours: f64) -> Self {
        self.daily_hours = daily_hours;
        self
    }

    /// Includes or excludes weekends.
    pub fn with_weekends(mut self, include_weekends: bool) -> Self {
        self.include_weekends = include_weekends;
        self
    }

    /// Sets the tie-breaking rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Daily capacity: `daily_hours` rounded to the nearest 0.25 h.
    pub fn daily_capacity(&self) -> Hours {
        Hours::round_to_quarter(self.daily_hours)
    }

    /// Checks that at least one quarter-hour fits in a day.
    pub fn validate(&self) -> PlanResult<()> {
        if !self.daily_hours.is_finite() || !self.daily_capacity().is_allocatable() {
            return Err(PlanError::InvalidDailyHours(self.daily_hours));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.daily_hours, 3.0);
        assert!(cfg.include_weekends);
        assert_eq!(cfg.tie_break, TieBreak::InsertionOrder);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let cfg: PlannerConfig =
            serde_json::from_str(r#"{"daily_hours": 4.5, "tie_break": "by_name"}"#).unwrap();
        assert_eq!(cfg.daily_hours, 4.5);
        assert!(cfg.include_weekends);
        assert_eq!(cfg.tie_break, TieBreak::ByName);
        assert_eq!(cfg.daily_capacity(), Hours::from_quarters(18));
    }

    #[test]
    fn test_invalid_daily_hours() {
        for bad in [0.0, 0.1, -1.0, f64::NAN, f64::INFINITY] {
            let cfg = PlannerConfig::new().with_daily_hours(bad);
            assert!(matches!(
                cfg.validate(),
                Err(PlanError::InvalidDailyHours(_))
            ));
        }
        assert!(PlannerConfig::new().with_daily_hours(0.25).validate().is_ok());
        // 0.2 rounds up to one quarter
        assert!(PlannerConfig::new().with_daily_hours(0.2).validate().is_ok());
    }

    #[test]
    fn test_capacity_rounds_to_nearest_quarter() {
        let cap = |h: f64| PlannerConfig::new().with_daily_hours(h).daily_capacity();
        assert_eq!(cap(3.4), Hours::from_quarters(14));
        assert_eq!(cap(3.1), Hours::from_whole(3));
        assert_eq!(cap(4.5), Hours::from_quarters(18));
    }
}
