//! Filter Engine
//!
//! Recomputes visibility for every row against the current criteria.
//! Passes are synchronous and idempotent; the latest pass wins.

use crate::criteria::{FilterControls, FilterCriteria};
use crate::model::FilterRow;
use crate::summary::{FilterResult, ResultsSink};

/// Set each row's visibility and count the visible ones.
pub fn apply<R: FilterRow>(rows: &mut [R], criteria: &FilterCriteria) -> FilterResult {
    let mut visible_count = 0;
    for row in rows.iter_mut() {
        let visible = criteria.matches(row.item());
        row.set_visible(visible);
        if visible {
            visible_count += 1;
        }
    }

    let result = FilterResult {
        visible_count,
        total_count: rows.len(),
    };
    log::debug!("[FILTER] {:?} -> {}/{}", criteria, result.visible_count, result.total_count);
    result
}

/// One full pass: read controls, apply, report to the sink if there is one.
pub fn run_pass<C, R>(controls: &C, rows: &mut [R], sink: Option<&mut dyn ResultsSink>) -> FilterResult
where
    C: FilterControls + ?Sized,
    R: FilterRow,
{
    let criteria = FilterCriteria::read(controls);
    let result = apply(rows, &criteria);
    if let Some(sink) = sink {
        sink.write_summary(&result.summary());
    }
    result
}
