//! Study-hour allocation engine.
//!
//! Splits a fixed pool of daily study hours across weighted topics over
//! the days before an exam, producing a day-by-day schedule.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Topic`, `Difficulty`, `StudyWindow`,
//!   `Hours`, `ScheduleRow`
//! - **`demand`**: Proportional entitlement per topic (`DemandModel`, `DemandMap`)
//! - **`allocator`**: Greedy day allocator, round-robin fallback, aggregation
//! - **`planner`**: `StudyPlanner` entry point and `PlanSummary`
//! - **`config`**: `PlannerConfig` (daily hours, weekends, tie-break)
//! - **`parse`**: Topic line parser
//! - **`validation`**: Caller-side input checks
//!
//! # Architecture
//!
//! Planning is synchronous and pure: `today` is an explicit input and no
//! I/O happens. Each run builds its own `DemandMap`; the allocator is its
//! only writer.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use u_study::config::PlannerConfig;
//! use u_study::parse::parse_topics;
//! use u_study::planner::{PlanSummary, StudyPlanner};
//!
//! let topics = parse_topics("Calculus, hard, priority\nBiology, medium\nHistory, easy");
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let exam = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap();
//!
//! let plan = StudyPlanner::new(PlannerConfig::new().with_weekends(false))
//!     .plan(&topics, today, exam)
//!     .unwrap();
//! let summary = PlanSummary::calculate(&plan);
//! assert!(summary.is_fully_covered());
//! ```

pub mod allocator;
pub mod config;
pub mod demand;
pub mod error;
pub mod models;
pub mod parse;
pub mod planner;
pub mod validation;

pub use error::{PlanError, PlanResult};
