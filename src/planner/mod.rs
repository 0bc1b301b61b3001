//! Plan generation and reporting.
//!
//! `StudyPlanner` wires the study window, demand model and day allocator
//! together; `PlanSummary` computes reporting figures from the result.
//!
//! # Algorithm
//!
//! The allocation is a single deterministic greedy pass. It is not an
//! optimizer and never revisits a generated plan.

mod engine;
mod summary;

pub use engine::{StudyPlan, StudyPlanner};
pub use summary::PlanSummary;
