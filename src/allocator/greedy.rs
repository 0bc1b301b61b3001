//! Greedy largest-remaining-demand day allocator.
//!
//! # Algorithm
//!
//! For each study day, in chronological order:
//! 1. Start with the full daily capacity.
//! 2. Pick the topic with the most remaining demand.
//! 3. Assign `min(remaining, capacity_left)` to it and emit a row.
//! 4. Repeat until the day's capacity or all demand drops below 0.25 h.
//!
//! If no row is emitted over the whole window, the round-robin fallback
//! runs instead.
//!
//! # Complexity
//! O(d × q × n) where d=study days, q=quarters per day, n=topics.

use serde::{Deserialize, Serialize};

use super::fallback::round_robin;
use super::selection::{select_max_remaining, TieBreak};
use crate::demand::DemandMap;
use crate::models::{Hours, ScheduleRow, StudyWindow};

/// Which path produced the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStrategy {
    /// Largest-remaining-demand greedy loop.
    Greedy,
    /// Round-robin, one topic per day.
    Fallback,
}

/// Raw allocator output, before aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// Rows in emission order.
    pub rows: Vec<ScheduleRow>,
    /// Which path produced `rows`.
    pub strategy: AllocationStrategy,
}

/// Distributes each day's capacity across topics.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_study::allocator::DayAllocator;
/// use u_study::demand::DemandModel;
/// use u_study::models::{Hours, StudyWindow, Topic};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let exam = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
/// let window = StudyWindow::between(today, exam, true).unwrap();
///
/// let topics = vec![Topic::new("chemistry")];
/// let mut demand = DemandModel::compute(&topics, window.available_hours(2.0)).unwrap();
///
/// let allocation = DayAllocator::new(Hours::from_whole(2)).allocate(&window, &mut demand);
/// assert_eq!(allocation.rows.len(), 2);
/// assert_eq!(demand.total_remaining(), Hours::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct DayAllocator {
    daily_capacity: Hours,
    tie_break: TieBreak,
}

impl DayAllocator {
    /// Creates an allocator with the given per-day capacity.
    pub fn new(daily_capacity: Hours) -> Self {
        Self {
            daily_capacity,
            tie_break: TieBreak::InsertionOrder,
        }
    }

    /// Creates an allocator from real daily hours, rounded to the nearest 0.25 h.
    pub fn from_daily_hours(daily_hours: f64) -> Self {
        Self::new(Hours::round_to_quarter(daily_hours))
    }

    /// Sets the tie-breaking rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn daily_capacity(&self) -> Hours {
        self.daily_capacity
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Allocates the window against `demand`, decrementing it in place.
    ///
    /// Falls back to round-robin when the greedy pass emits nothing.
    pub fn allocate(&self, window: &StudyWindow, demand: &mut DemandMap) -> Allocation {
        let rows = self.allocate_greedy(window, demand);
        if !rows.is_empty() {
            log::debug!(
                "greedy allocation: {} rows over {} days",
                rows.len(),
                window.len()
            );
            return Allocation {
                rows,
                strategy: AllocationStrategy::Greedy,
            };
        }

        log::warn!(
            "greedy allocation produced no rows; using round-robin over {} topics",
            demand.len()
        );
        let names: Vec<&str> = demand.topic_names().collect();
        Allocation {
            rows: round_robin(window, &names, self.daily_capacity),
            strategy: AllocationStrategy::Fallback,
        }
    }

    /// The greedy pass alone. May return an empty vector.
    pub fn allocate_greedy(
        &self,
        window: &StudyWindow,
        demand: &mut DemandMap,
    ) -> Vec<ScheduleRow> {
        let mut rows = Vec::new();

        for day in window.iter() {
            let mut hours_left = self.daily_capacity;

            while hours_left.is_allocatable() && demand.has_open_demand() {
                let Some(idx) = select_max_remaining(demand.entries(), self.tie_break) else {
                    break;
                };
                let entry = &demand.entries()[idx];
                if !entry.is_open() {
                    break;
                }

                let alloc = entry.remaining.min(hours_left);
                if alloc.is_zero() {
                    break;
                }

                rows.push(ScheduleRow::new(day, entry.topic.clone(), alloc));
                demand.consume(idx, alloc);
                hours_left -= alloc;
            }
        }

        rows
    }
}
