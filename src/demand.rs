//! Demand model: proportional entitlement per topic.
//!
//! Splits the total available hours across topics in proportion to their
//! weights, then rounds each share onto the 0.5 h grid.
//!
//! # Algorithm
//!
//! ```text
//! weight(t)      = difficulty(t) × (2 if priority(t) else 1)
//! share(t)       = weight(t) / Σ weight × total_available_hours
//! entitlement(t) = max(0.5, round_half_up(share(t) × 2) / 2)
//! ```
//!
//! Rounding drift across all topics is bounded by 0.5 h per topic.

use serde::Serialize;

use crate::error::{PlanError, PlanResult};
use crate::models::{Hours, Topic};

/// Demand state for one topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandEntry {
    /// Topic name.
    pub topic: String,
    /// Proportional-split weight.
    pub weight: f64,
    /// Unrounded proportional share (hours).
    pub share: f64,
    /// Rounded entitlement (hours).
    pub entitled: Hours,
    /// Entitlement not yet allocated.
    pub remaining: Hours,
}

impl DemandEntry {
    /// Hours allocated so far.
    #[inline]
    pub fn allocated(&self) -> Hours {
        self.entitled.saturating_sub(self.remaining)
    }

    /// Whether any allocatable demand is left.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.remaining.is_allocatable()
    }
}

/// Remaining demand per topic, in topic insertion order.
///
/// Entries with duplicate names stay separate. The allocator only ever
/// decreases `remaining`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DemandMap {
    entries: Vec<DemandEntry>,
}

impl DemandMap {
    /// Entries in insertion order.
    pub fn entries(&self) -> &[DemandEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remaining hours for the first entry with this name.
    pub fn remaining(&self, topic: &str) -> Option<Hours> {
        self.entries
            .iter()
            .find(|e| e.topic == topic)
            .map(|e| e.remaining)
    }

    /// Entitlement for the first entry with this name.
    pub fn entitled(&self, topic: &str) -> Option<Hours> {
        self.entries
            .iter()
            .find(|e| e.topic == topic)
            .map(|e| e.entitled)
    }

    /// Whether any entry still has at least one allocatable quarter.
    pub fn has_open_demand(&self) -> bool {
        self.entries.iter().any(DemandEntry::is_open)
    }

    /// Sum of all entitlements.
    pub fn total_entitled(&self) -> Hours {
        self.entries.iter().map(|e| e.entitled).sum()
    }

    /// Sum of all remaining demand.
    pub fn total_remaining(&self) -> Hours {
        self.entries.iter().map(|e| e.remaining).sum()
    }

    /// Remaining-hours report: `(topic, leftover)` in insertion order.
    pub fn remaining_report(&self) -> Vec<(String, Hours)> {
        self.entries
            .iter()
            .map(|e| (e.topic.clone(), e.remaining))
            .collect()
    }

    /// Topic names in insertion order.
    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.topic.as_str())
    }

    /// Decrements the remaining demand of entry `index`.
    ///
    /// Clamped at zero; demand never increases.
    pub(crate) fn consume(&mut self, index: usize, hours: Hours) {
        let entry = &mut self.entries[index];
        entry.remaining = entry.remaining.saturating_sub(hours);
    }
}

/// Computes topic entitlements from weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemandModel;

impl DemandModel {
    /// Builds the initial demand map.
    ///
    /// # Errors
    /// `DegenerateWeights` if the weight sum is zero, negative, or not finite
    /// (this includes an empty topic list).
    pub fn compute(topics: &[Topic], total_available_hours: f64) -> PlanResult<DemandMap> {
        let weights: Vec<f64> = topics.iter().map(Topic::weight).collect();
        let sum: f64 = weights.iter().sum();

        if !sum.is_finite() || sum <= 0.0 {
            return Err(PlanError::DegenerateWeights { sum });
        }

        let entries = topics
            .iter()
            .zip(weights)
            .map(|(topic, weight)| {
                let share = weight / sum * total_available_hours;
                let mut entitled = Hours::round_to_half(share);
                if weight > 0.0 && entitled < Hours::HALF {
                    entitled = Hours::HALF;
                }
                DemandEntry {
                    topic: topic.name.clone(),
                    weight,
                    share,
                    entitled,
                    remaining: entitled,
                }
            })
            .collect::<Vec<_>>();

        log::debug!(
            "demand model: {} topics, weight sum {sum}, {total_available_hours} h available",
            entries.len()
        );

        Ok(DemandMap { entries })
    }
}
