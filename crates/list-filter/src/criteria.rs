//! Filter Criteria
//!
//! Independent predicates read from the page controls on every pass.

use std::str::FromStr;

use crate::model::{AssignmentState, CapacityState, ListItem};

/// Value of a state dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateCriterion {
    Capacity(CapacityState),
    Assignment(AssignmentState),
}

impl StateCriterion {
    /// Parse a dropdown value. Empty or unrecognised values mean "any state".
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    pub fn matches(&self, item: &ListItem) -> bool {
        match self {
            StateCriterion::Capacity(state) => item.capacity_state == Some(*state),
            StateCriterion::Assignment(state) => item.assignment_state == Some(*state),
        }
    }
}

impl FromStr for StateCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(StateCriterion::Capacity(CapacityState::Available)),
            "full" => Ok(StateCriterion::Capacity(CapacityState::Full)),
            "assigned" => Ok(StateCriterion::Assignment(AssignmentState::Assigned)),
            "unassigned" => Ok(StateCriterion::Assignment(AssignmentState::Unassigned)),
            other => Err(format!("unknown state filter '{}'", other)),
        }
    }
}

/// Criteria for one filter pass. Empty fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of name or secondary id
    pub text: String,
    /// Case-sensitive substring of the tag text
    pub category: String,
    pub state: Option<StateCriterion>,
}

impl FilterCriteria {
    pub fn from_controls(text: &str, category: &str, state: &str) -> Self {
        Self {
            text: text.to_string(),
            category: category.to_string(),
            state: StateCriterion::parse(state),
        }
    }

    /// Read criteria fresh from whatever controls exist
    pub fn read<C: FilterControls + ?Sized>(controls: &C) -> Self {
        Self {
            text: controls.search_text().unwrap_or_default(),
            category: controls.category().unwrap_or_default(),
            state: controls.state().as_deref().and_then(StateCriterion::parse),
        }
    }

    /// True iff every active criterion matches `item`
    pub fn matches(&self, item: &ListItem) -> bool {
        self.matches_text(item) && self.matches_category(item) && self.matches_state(item)
    }

    fn matches_text(&self, item: &ListItem) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let term = self.text.to_lowercase();
        item.display_name.to_lowercase().contains(&term)
            || item.secondary_id.to_lowercase().contains(&term)
    }

    // Substring on the joined tag text, so "Art" also matches "Arts & Crafts".
    fn matches_category(&self, item: &ListItem) -> bool {
        self.category.is_empty() || item.tag_text().contains(&self.category)
    }

    fn matches_state(&self, item: &ListItem) -> bool {
        self.state.map_or(true, |state| state.matches(item))
    }
}

/// The controls a filter pass reads. `None` means the control is not on the page.
pub trait FilterControls {
    fn search_text(&self) -> Option<String>;
    fn category(&self) -> Option<String>;
    fn state(&self) -> Option<String>;
}

/// Fixed control values, for headless passes and tests
#[derive(Debug, Clone, Default)]
pub struct StaticControls {
    pub search_text: Option<String>,
    pub category: Option<String>,
    pub state: Option<String>,
}

impl FilterControls for StaticControls {
    fn search_text(&self) -> Option<String> {
        self.search_text.clone()
    }

    fn category(&self) -> Option<String> {
        self.category.clone()
    }

    fn state(&self) -> Option<String> {
        self.state.clone()
    }
}
