//! UI Components
//!
//! Leptos components for the filterable directories.

mod filter_bar;
mod results_count;
mod mentor_directory;
mod mentee_table;

pub use filter_bar::FilterBar;
pub use results_count::ResultsCount;
pub use mentor_directory::MentorDirectory;
pub use mentee_table::MenteeTable;
