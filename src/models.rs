//! Frontend Models
//!
//! Records the server embeds in the page, and their conversion to filter rows.

use serde::{Deserialize, Serialize};

use list_filter::{AssignmentState, CapacityState, ListItem};

use crate::config::FilterConfig;
use crate::error::{PageError, PageResult};

/// Mentor card data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub roll_call: String,
    /// Comma separated subject names
    #[serde(default)]
    pub subjects: String,
    #[serde(default)]
    pub current_mentees: u32,
    #[serde(default = "default_max_mentees")]
    pub max_mentees: u32,
}

fn default_max_mentees() -> u32 {
    5
}

impl MentorRecord {
    pub fn subjects_list(&self) -> Vec<String> {
        self.subjects
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    /// Capacity as printed on the card, e.g. "2 / 5"
    pub fn capacity_label(&self) -> String {
        format!("{} / {}", self.current_mentees, self.max_mentees)
    }

    pub fn to_list_item(&self) -> ListItem {
        ListItem::new(self.id, &self.name, &self.roll_call)
            .with_tags(self.subjects_list())
            .with_capacity(CapacityState::from_counts(self.current_mentees, self.max_mentees))
    }
}

/// Mentee table row data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenteeRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub roll_call: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub mentor_name: Option<String>,
}

impl MenteeRecord {
    pub fn mentor_label(&self) -> String {
        match self.mentor_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => list_filter::UNASSIGNED_LABEL.to_string(),
        }
    }

    pub fn to_list_item(&self) -> ListItem {
        let tags = if self.subject.trim().is_empty() {
            Vec::new()
        } else {
            vec![self.subject.trim().to_string()]
        };
        ListItem::new(self.id, &self.name, &self.roll_call)
            .with_tags(tags)
            .with_assignment(AssignmentState::from_mentor(self.mentor_name.as_deref()))
    }
}

/// Everything the server embeds for the frontend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagePayload {
    #[serde(default)]
    pub config: FilterConfig,
    #[serde(default)]
    pub mentors: Vec<MentorRecord>,
    #[serde(default)]
    pub mentees: Vec<MenteeRecord>,
}

impl PagePayload {
    pub fn from_json(text: &str) -> PageResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text).map_err(|e| PageError::InvalidPayload(e.to_string()))
    }
}
