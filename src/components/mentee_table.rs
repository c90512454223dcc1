//! Mentee Table Component
//!
//! Mentee list as a table, filtered by search, subject and assignment.

use leptos::prelude::*;

use list_filter::AssignmentState;

use crate::components::{FilterBar, ResultsCount};
use crate::context::{category_options, DirectoryContext};
use crate::models::MenteeRecord;

const ASSIGNMENT_OPTIONS: [(&str, &str); 2] = [
    (AssignmentState::Assigned.as_str(), "Assigned"),
    (AssignmentState::Unassigned.as_str(), "Unassigned"),
];

#[component]
pub fn MenteeTable(mentees: Vec<MenteeRecord>, debounce_ms: u32) -> impl IntoView {
    let items: Vec<_> = mentees.iter().map(MenteeRecord::to_list_item).collect();
    let categories = category_options(&items);

    let ctx = DirectoryContext::new(items, debounce_ms);
    provide_context(ctx);
    on_cleanup(move || ctx.cancel_pending());

    let rows = mentees
        .into_iter()
        .zip(ctx.visibility())
        .map(|(mentee, (id, visible))| {
            let mentor = mentee.mentor_label();
            let unassigned = AssignmentState::from_mentor(mentee.mentor_name.as_deref())
                == AssignmentState::Unassigned;
            view! {
                <tr
                    data-mentee-id=id.to_string()
                    style:display=move || if visible.get() { "" } else { "none" }
                >
                    <td>{mentee.name}</td>
                    <td>{mentee.roll_call}</td>
                    <td>{mentee.subject}</td>
                    <td class=if unassigned { "text-muted" } else { "" }>{mentor}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="mentee-directory">
            <FilterBar
                search_id="menteeSearch"
                search_placeholder="Search by name or roll call..."
                category_id="menteeSubjectFilter"
                category_label="All subjects"
                categories=categories
                state_id="assignmentFilter"
                state_label="Any assignment"
                state_options=ASSIGNMENT_OPTIONS.to_vec()
            />
            <ResultsCount id="menteeResults" />
            <table id="menteeTable" class="table table-hover">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Roll Call"</th>
                        <th>"Subject"</th>
                        <th>"Mentor"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows}
                </tbody>
            </table>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use list_filter::StateCriterion;

    #[test]
    fn test_assignment_options_parse_to_criteria() {
        assert_eq!(
            StateCriterion::parse(ASSIGNMENT_OPTIONS[0].0),
            Some(StateCriterion::Assignment(AssignmentState::Assigned))
        );
        assert_eq!(
            StateCriterion::parse(ASSIGNMENT_OPTIONS[1].0),
            Some(StateCriterion::Assignment(AssignmentState::Unassigned))
        );
    }
}
