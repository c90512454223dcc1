//! Mentor Directory Component
//!
//! Card grid of mentors with search, subject and capacity filters.

use leptos::prelude::*;

use list_filter::CapacityState;

use crate::components::{FilterBar, ResultsCount};
use crate::context::{category_options, DirectoryContext};
use crate::models::MentorRecord;

const CAPACITY_OPTIONS: [(&str, &str); 2] = [
    (CapacityState::Available.as_str(), "Available"),
    (CapacityState::Full.as_str(), "Full"),
];

/// One mentor card; hidden with `display: none` when filtered out
#[component]
fn MentorCard(id: u32, mentor: MentorRecord, visible: RwSignal<bool>) -> impl IntoView {
    let subjects = mentor.subjects_list().join(", ");
    let capacity = mentor.capacity_label();

    view! {
        <div
            class="col-md-6 mb-3"
            style:display=move || if visible.get() { "" } else { "none" }
        >
            <div class="card h-100" data-mentor-id=id.to_string()>
                <div class="card-body">
                    <h5 class="card-title">{mentor.name}</h5>
                    <span class="badge bg-light text-dark me-1">{mentor.roll_call}</span>
                    <span class="badge bg-secondary">{subjects}</span>
                    <div>
                        <small class="text-muted">"Mentees: " {capacity}</small>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn MentorDirectory(mentors: Vec<MentorRecord>, debounce_ms: u32) -> impl IntoView {
    let items: Vec<_> = mentors.iter().map(MentorRecord::to_list_item).collect();
    let categories = category_options(&items);

    let ctx = DirectoryContext::new(items, debounce_ms);
    provide_context(ctx);
    on_cleanup(move || ctx.cancel_pending());

    let cards = mentors
        .into_iter()
        .zip(ctx.visibility())
        .map(|(mentor, (id, visible))| view! { <MentorCard id=id mentor=mentor visible=visible /> })
        .collect_view();

    view! {
        <section class="mentor-directory">
            <FilterBar
                search_id="mentorSearch"
                search_placeholder="Search by name or roll call..."
                category_id="subjectFilter"
                category_label="All subjects"
                categories=categories
                state_id="capacityFilter"
                state_label="Any capacity"
                state_options=CAPACITY_OPTIONS.to_vec()
            />
            <ResultsCount id="mentorResults" />
            <div class="row">
                {cards}
            </div>
        </section>
    }
}
