//! Directory Filter Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use list_filter::FilterResult;

/// Control values and the outcome of the latest pass
#[derive(Clone, Debug, Default, Store)]
pub struct FilterState {
    /// Live search box value, read by every pass
    pub input: String,
    /// Search text the debounced pass last settled on
    pub search: String,
    /// Selected category dropdown value, "" = all
    pub category: String,
    /// Selected state dropdown value, "" = all
    pub state: String,
    pub result: FilterResult,
    /// "Showing X of Y results"
    pub summary: String,
}

/// Type alias for the store
pub type FilterStore = Store<FilterState>;
