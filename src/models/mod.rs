//! Study planning domain models.
//!
//! Provides the data types consumed and produced by the allocation engine.
//!
//! # Domain Mappings
//!
//! | u-study | Scheduling analogue |
//! |---------|---------------------|
//! | Topic | Task (weighted demand) |
//! | StudyWindow | Calendar (available days) |
//! | Hours | Duration (fixed-point quarter-hours) |
//! | ScheduleRow | Assignment (date × topic × hours) |

mod hours;
mod schedule;
mod topic;
mod window;

pub use hours::{Hours, QUARTERS_PER_HOUR};
pub use schedule::ScheduleRow;
pub use topic::{title_case, Difficulty, Topic, PRIORITY_MULTIPLIER};
pub use window::{is_weekend, StudyWindow};
