//! Result Counts

use std::fmt;

/// Counts from one filter pass. Never stored between passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterResult {
    pub visible_count: usize,
    pub total_count: usize,
}

impl FilterResult {
    pub fn is_unfiltered(&self) -> bool {
        self.visible_count == self.total_count
    }

    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FilterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unfiltered() {
            write!(f, "Showing all {} results", self.total_count)
        } else {
            write!(f, "Showing {} of {} results", self.visible_count, self.total_count)
        }
    }
}

/// Where the summary line goes, when the page has one
pub trait ResultsSink {
    fn write_summary(&mut self, text: &str);
}

impl ResultsSink for String {
    fn write_summary(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_wording() {
        let all = FilterResult { visible_count: 4, total_count: 4 };
        assert_eq!(all.summary(), "Showing all 4 results");

        let some = FilterResult { visible_count: 1, total_count: 2 };
        assert_eq!(some.summary(), "Showing 1 of 2 results");

        assert_eq!(FilterResult::default().summary(), "Showing all 0 results");
    }

    #[test]
    fn test_string_sink_replaces_text() {
        let mut sink = String::from("stale");
        sink.write_summary("Showing 0 of 3 results");
        assert_eq!(sink, "Showing 0 of 3 results");
    }
}
