//! List Filter
//!
//! Headless visibility filtering for rendered row/card lists:
//! - model: rows and their typed state attributes
//! - criteria: text, category and state predicates read from page controls
//! - engine: the filter pass
//! - debounce: delayed, coalesced triggering for free-text input
//! - summary: visible/total counts and their display line

mod criteria;
mod debounce;
mod engine;
mod model;
mod summary;

pub use criteria::{FilterControls, FilterCriteria, StateCriterion, StaticControls};
pub use debounce::{DebounceState, Debouncer, ManualScheduler, Scheduler, DEFAULT_DEBOUNCE_MS};
pub use engine::{apply, run_pass};
pub use model::{
    AssignmentState, CapacityState, FilterRow, ListItem, FULL_CAPACITY_LABEL, UNASSIGNED_LABEL,
};
pub use summary::{FilterResult, ResultsSink};
