//! Filter Bar Component
//!
//! Search box plus category and state dropdowns for one directory.

use leptos::prelude::*;

use crate::context::DirectoryContext;

/// Search and filter controls
///
/// Props:
/// - search_id / category_id / state_id: element ids the page styles and labels target
/// - categories: dropdown options; the dropdown is omitted when empty
/// - state_options: (value, label) pairs after the "any" option
#[component]
pub fn FilterBar(
    search_id: &'static str,
    #[prop(into)] search_placeholder: String,
    category_id: &'static str,
    #[prop(into)] category_label: String,
    categories: Vec<String>,
    state_id: &'static str,
    #[prop(into)] state_label: String,
    state_options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext should be provided");

    let category_select = (!categories.is_empty()).then(|| {
        view! {
            <div class="col-md-4">
                <select
                    id=category_id
                    class="form-select"
                    on:change=move |ev| ctx.set_category(event_target_value(&ev))
                >
                    <option value="">{category_label}</option>
                    {categories.into_iter().map(|name| {
                        let label = name.clone();
                        view! { <option value=name>{label}</option> }
                    }).collect_view()}
                </select>
            </div>
        }
    });

    view! {
        <div class="row g-2 mb-3 filter-bar">
            <div class="col-md-4">
                <input
                    type="text"
                    id=search_id
                    class="form-control"
                    placeholder=search_placeholder
                    autocomplete="off"
                    on:input=move |ev| ctx.search(event_target_value(&ev))
                />
            </div>
            {category_select}
            <div class="col-md-4">
                <select
                    id=state_id
                    class="form-select"
                    on:change=move |ev| ctx.set_state(event_target_value(&ev))
                >
                    <option value="">{state_label}</option>
                    {state_options.into_iter().map(|(value, label)| {
                        view! { <option value=value>{label}</option> }
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}
