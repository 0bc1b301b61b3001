//! Day allocation: greedy distribution of daily capacity.
//!
//! Consumes a [`DemandMap`](crate::demand::DemandMap) and a
//! [`StudyWindow`](crate::models::StudyWindow) and produces schedule rows.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use u_study::allocator::{aggregate, AllocationStrategy, DayAllocator, TieBreak};
//! use u_study::demand::DemandModel;
//! use u_study::models::{Hours, StudyWindow, Topic};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let exam = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
//! let window = StudyWindow::between(today, exam, true).unwrap();
//!
//! let topics = vec![Topic::new("art"), Topic::new("music")];
//! let mut demand = DemandModel::compute(&topics, window.available_hours(3.0)).unwrap();
//!
//! let allocator = DayAllocator::new(Hours::from_whole(3))
//!     .with_tie_break(TieBreak::ByName);
//! let allocation = allocator.allocate(&window, &mut demand);
//! assert_eq!(allocation.strategy, AllocationStrategy::Greedy);
//!
//! let table = aggregate(&allocation.rows);
//! let total: Hours = table.iter().map(|r| r.hours).sum();
//! assert_eq!(total, Hours::from_whole(6));
//! assert!(!demand.has_open_demand());
//! ```
//!
//! # Termination
//! Every emitted row takes at least one quarter-hour from both the day's
//! capacity and the chosen topic's demand, so at most
//! `days × capacity_quarters` rows are emitted.

mod aggregate;
mod fallback;
mod greedy;
mod selection;

pub use aggregate::aggregate;
pub use fallback::round_robin;
pub use greedy::{Allocation, AllocationStrategy, DayAllocator};
pub use selection::{select_max_remaining, TieBreak};
