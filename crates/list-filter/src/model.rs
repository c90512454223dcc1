//! List Model
//!
//! Rows/cards as the filter sees them, plus their typed state attributes.

use serde::{Deserialize, Serialize};

/// Label text the rendered mentor cards use for a full mentor.
pub const FULL_CAPACITY_LABEL: &str = "5 / 5";

/// Label text the rendered mentee table uses when no mentor is assigned.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// Whether a mentor can take more mentees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityState {
    Available,
    Full,
}

impl CapacityState {
    pub fn from_counts(current: u32, max: u32) -> Self {
        if current >= max {
            CapacityState::Full
        } else {
            CapacityState::Available
        }
    }

    /// Infer capacity from rendered label text.
    ///
    /// Only the literal `"5 / 5"` reads as full, so a label like `"25 / 50"`
    /// is also "full" and `"6 / 6"` is "available". Use [`from_counts`]
    /// whenever the numbers are known.
    ///
    /// [`from_counts`]: CapacityState::from_counts
    pub fn sniff_label(label: &str) -> Self {
        if label.contains(FULL_CAPACITY_LABEL) {
            CapacityState::Full
        } else {
            CapacityState::Available
        }
    }

    /// Value the capacity dropdown submits
    pub const fn as_str(self) -> &'static str {
        match self {
            CapacityState::Available => "available",
            CapacityState::Full => "full",
        }
    }
}

/// Whether a mentee has a mentor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentState {
    Assigned,
    Unassigned,
}

impl AssignmentState {
    pub fn from_mentor(mentor_name: Option<&str>) -> Self {
        match mentor_name.map(str::trim) {
            Some(name) if !name.is_empty() => AssignmentState::Assigned,
            _ => AssignmentState::Unassigned,
        }
    }

    /// Infer assignment from the rendered mentor cell text.
    pub fn sniff_label(label: &str) -> Self {
        if label.contains(UNASSIGNED_LABEL) {
            AssignmentState::Unassigned
        } else {
            AssignmentState::Assigned
        }
    }

    /// Value the assignment dropdown submits
    pub const fn as_str(self) -> &'static str {
        match self {
            AssignmentState::Assigned => "assigned",
            AssignmentState::Unassigned => "unassigned",
        }
    }
}

/// One rendered row or card.
///
/// Content is owned by whoever rendered it; the filter only writes `visible`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: u32,
    pub display_name: String,
    /// Short code shown next to the name (roll call)
    pub secondary_id: String,
    pub category_tags: Vec<String>,
    pub capacity_state: Option<CapacityState>,
    pub assignment_state: Option<AssignmentState>,
    #[serde(default = "default_true")]
    pub visible: bool,
}

fn default_true() -> bool {
    true
}

impl ListItem {
    pub fn new(id: u32, display_name: impl Into<String>, secondary_id: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            secondary_id: secondary_id.into(),
            category_tags: Vec::new(),
            capacity_state: None,
            assignment_state: None,
            visible: true,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_capacity(mut self, state: CapacityState) -> Self {
        self.capacity_state = Some(state);
        self
    }

    pub fn with_assignment(mut self, state: AssignmentState) -> Self {
        self.assignment_state = Some(state);
        self
    }

    /// Tags as they appear on the rendered row
    pub fn tag_text(&self) -> String {
        self.category_tags.join(", ")
    }
}

/// Something the engine can show or hide.
pub trait FilterRow {
    fn item(&self) -> &ListItem;
    fn set_visible(&mut self, visible: bool);
}

impl FilterRow for ListItem {
    fn item(&self) -> &ListItem {
        self
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_from_counts() {
        assert_eq!(CapacityState::from_counts(2, 5), CapacityState::Available);
        assert_eq!(CapacityState::from_counts(5, 5), CapacityState::Full);
        assert_eq!(CapacityState::from_counts(7, 5), CapacityState::Full);
        assert_eq!(CapacityState::from_counts(0, 0), CapacityState::Full);
    }

    #[test]
    fn test_capacity_sniffing_is_literal() {
        assert_eq!(CapacityState::sniff_label("Mentees: 5 / 5"), CapacityState::Full);
        assert_eq!(CapacityState::sniff_label("2 / 5"), CapacityState::Available);
        // Label sniffing ignores what the numbers mean
        assert_eq!(CapacityState::sniff_label("25 / 50"), CapacityState::Full);
        assert_eq!(CapacityState::sniff_label("6 / 6"), CapacityState::Available);
    }

    #[test]
    fn test_assignment_from_mentor() {
        assert_eq!(AssignmentState::from_mentor(Some("Ms Lee")), AssignmentState::Assigned);
        assert_eq!(AssignmentState::from_mentor(Some("  ")), AssignmentState::Unassigned);
        assert_eq!(AssignmentState::from_mentor(None), AssignmentState::Unassigned);
        assert_eq!(AssignmentState::sniff_label("Unassigned"), AssignmentState::Unassigned);
        assert_eq!(AssignmentState::sniff_label("Ms Lee"), AssignmentState::Assigned);
    }

    #[test]
    fn test_item_builder_and_tag_text() {
        let item = ListItem::new(1, "Ana Rivera", "10/1")
            .with_tags(["Mathematics Advanced", "Physics"])
            .with_capacity(CapacityState::Available);
        assert!(item.visible);
        assert_eq!(item.tag_text(), "Mathematics Advanced, Physics");
        assert_eq!(item.capacity_state, Some(CapacityState::Available));
        assert_eq!(item.assignment_state, None);
    }

    #[test]
    fn test_state_serde_form() {
        let json = serde_json::to_string(&CapacityState::Full).unwrap();
        assert_eq!(json, "\"full\"");
        let parsed: AssignmentState = serde_json::from_str("\"unassigned\"").unwrap();
        assert_eq!(parsed, AssignmentState::Unassigned);
        assert_eq!(parsed.as_str(), "unassigned");
    }
}
