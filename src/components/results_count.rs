//! Results Count Component

use leptos::prelude::*;

use crate::context::DirectoryContext;
use crate::store::FilterStateStoreFields;

/// "Showing X of Y results" line, updated after every pass
#[component]
pub fn ResultsCount(id: &'static str) -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext should be provided");
    let store = ctx.store();

    view! {
        <p id=id class="text-muted small results-count">
            {move || store.summary().get()}
        </p>
    }
}
