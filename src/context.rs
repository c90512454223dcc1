//! Directory Context
//!
//! Per-directory filter state provided via Leptos Context API.

use std::collections::BTreeSet;
use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use list_filter::{run_pass, Debouncer, FilterControls, FilterRow, ListItem, ResultsSink, Scheduler};

use crate::store::{FilterState, FilterStateStoreFields, FilterStore};
use crate::timer::BrowserScheduler;

/// A rendered row whose visibility is a signal bound to its `display` style
#[derive(Clone)]
pub struct DirectoryRow {
    pub item: ListItem,
    pub visible: RwSignal<bool>,
}

impl FilterRow for DirectoryRow {
    fn item(&self) -> &ListItem {
        &self.item
    }

    fn set_visible(&mut self, visible: bool) {
        self.item.visible = visible;
        if self.visible.get_untracked() != visible {
            self.visible.set(visible);
        }
    }
}

/// Distinct tags across all rows, sorted, for the category dropdown
pub fn category_options(items: &[ListItem]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.category_tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Store and rows of one directory. Reads its controls from the store.
#[derive(Clone, Copy)]
struct FilterPass {
    store: FilterStore,
    rows: StoredValue<Vec<DirectoryRow>>,
    /// Category dropdown is only rendered when some row has a tag
    has_categories: bool,
}

impl FilterControls for FilterPass {
    fn search_text(&self) -> Option<String> {
        Some(self.store.input().get_untracked())
    }

    fn category(&self) -> Option<String> {
        self.has_categories.then(|| self.store.category().get_untracked())
    }

    fn state(&self) -> Option<String> {
        Some(self.store.state().get_untracked())
    }
}

impl ResultsSink for FilterPass {
    fn write_summary(&mut self, text: &str) {
        self.store.summary().set(text.to_string());
    }
}

impl FilterPass {
    fn refilter(self) {
        let mut sink = self;
        let result = self
            .rows
            .try_update_value(|rows| run_pass(&self, rows, Some(&mut sink)));
        if let Some(result) = result {
            self.store.result().set(result);
        }
    }
}

/// Filter state for one directory (mentor cards or mentee table)
#[derive(Clone, Copy)]
pub struct DirectoryContext {
    pass: FilterPass,
    search: StoredValue<Debouncer<String>, LocalStorage>,
    /// Item id and visibility signal per row, in row order
    visibility: StoredValue<Vec<(u32, RwSignal<bool>)>>,
}

impl DirectoryContext {
    pub fn new(items: Vec<ListItem>, debounce_ms: u32) -> Self {
        Self::with_scheduler(items, debounce_ms, Rc::new(BrowserScheduler))
    }

    pub fn with_scheduler(items: Vec<ListItem>, debounce_ms: u32, scheduler: Rc<dyn Scheduler>) -> Self {
        let has_categories = items.iter().any(|item| !item.category_tags.is_empty());
        let rows: Vec<DirectoryRow> = items
            .into_iter()
            .map(|item| DirectoryRow {
                visible: RwSignal::new(item.visible),
                item,
            })
            .collect();
        let visibility = rows.iter().map(|row| (row.item.id, row.visible)).collect();

        let pass = FilterPass {
            store: Store::new(FilterState::default()),
            rows: StoredValue::new(rows),
            has_categories,
        };
        let search = Debouncer::new(scheduler, debounce_ms, move |text: String| {
            log::debug!("[FILTER] search settled on {:?}", text);
            pass.store.search().set(text);
            pass.refilter();
        });

        let ctx = Self {
            pass,
            search: StoredValue::new_local(search),
            visibility: StoredValue::new(visibility),
        };
        // Initial pass so the summary is populated before any input
        pass.refilter();
        ctx
    }

    pub fn store(&self) -> FilterStore {
        self.pass.store
    }

    pub fn has_categories(&self) -> bool {
        self.pass.has_categories
    }

    pub fn visibility(&self) -> Vec<(u32, RwSignal<bool>)> {
        self.visibility.get_value()
    }

    /// Search box edit. The value is recorded at once, the pass is debounced.
    pub fn search(&self, text: String) {
        self.pass.store.input().set(text.clone());
        self.search.with_value(|debouncer| debouncer.trigger(text));
    }

    /// Dropdown change; filters right away
    pub fn set_category(&self, value: String) {
        self.pass.store.category().set(value);
        self.pass.refilter();
    }

    /// Dropdown change; filters right away
    pub fn set_state(&self, value: String) {
        self.pass.store.state().set(value);
        self.pass.refilter();
    }

    /// Drop a pending search pass, e.g. when the directory unmounts
    pub fn cancel_pending(&self) {
        let _ = self.search.try_with_value(|debouncer| debouncer.cancel());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use list_filter::{CapacityState, DebounceState, FilterResult, ManualScheduler};

    fn mentors() -> Vec<ListItem> {
        vec![
            ListItem::new(1, "Ana Rivera", "10/1")
                .with_tags(["Mathematics Advanced"])
                .with_capacity(CapacityState::Full),
            ListItem::new(2, "Leo Park", "11/2")
                .with_tags(["Visual Arts", "Mathematics Advanced"])
                .with_capacity(CapacityState::Available),
            ListItem::new(3, "Mia Chen", "8B")
                .with_tags(["Music"])
                .with_capacity(CapacityState::Available),
        ]
    }

    fn visible_flags(ctx: &DirectoryContext) -> Vec<bool> {
        ctx.visibility().iter().map(|(_, v)| v.get_untracked()).collect()
    }

    #[test]
    fn test_category_options_are_distinct_and_sorted() {
        assert_eq!(
            category_options(&mentors()),
            vec!["Mathematics Advanced", "Music", "Visual Arts"]
        );
        assert!(category_options(&[]).is_empty());
    }

    #[test]
    fn test_initial_pass_shows_all() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = DirectoryContext::with_scheduler(mentors(), 300, Rc::new(ManualScheduler::new()));
            assert_eq!(visible_flags(&ctx), vec![true, true, true]);
            assert_eq!(ctx.store().summary().get_untracked(), "Showing all 3 results");
            assert!(ctx.has_categories());
        });
    }

    #[test]
    fn test_dropdowns_filter_immediately() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = DirectoryContext::with_scheduler(mentors(), 300, Rc::new(ManualScheduler::new()));
            ctx.set_category("Mathematics".to_string());
            assert_eq!(visible_flags(&ctx), vec![true, true, false]);

            ctx.set_state("available".to_string());
            assert_eq!(visible_flags(&ctx), vec![false, true, false]);
            assert_eq!(ctx.store().summary().get_untracked(), "Showing 1 of 3 results");
            assert_eq!(
                ctx.store().result().get_untracked(),
                FilterResult { visible_count: 1, total_count: 3 }
            );
        });
    }

    #[test]
    fn test_search_waits_for_debounce() {
        let owner = Owner::new();
        owner.with(|| {
            let scheduler = Rc::new(ManualScheduler::new());
            let ctx = DirectoryContext::with_scheduler(
                mentors(),
                300,
                Rc::clone(&scheduler) as Rc<dyn Scheduler>,
            );

            ctx.search("m".to_string());
            scheduler.advance(50);
            ctx.search("mi".to_string());
            assert_eq!(visible_flags(&ctx), vec![true, true, true]);

            scheduler.advance(300);
            assert_eq!(visible_flags(&ctx), vec![false, false, true]);
            assert_eq!(ctx.store().search().get_untracked(), "mi");
        });
    }

    #[test]
    fn test_dropdown_pass_uses_typed_search() {
        let owner = Owner::new();
        owner.with(|| {
            let scheduler = Rc::new(ManualScheduler::new());
            let items = vec![
                ListItem::new(1, "Ana Rivera", "10/1").with_capacity(CapacityState::Available),
                ListItem::new(2, "Mia Chen", "8B").with_capacity(CapacityState::Available),
            ];
            let ctx = DirectoryContext::with_scheduler(
                items,
                300,
                Rc::clone(&scheduler) as Rc<dyn Scheduler>,
            );

            ctx.search("mia".to_string());
            scheduler.advance(100);
            ctx.set_state("available".to_string());
            assert_eq!(visible_flags(&ctx), vec![false, true]);
            assert_eq!(ctx.store().summary().get_untracked(), "Showing 1 of 2 results");
            assert_eq!(ctx.store().search().get_untracked(), "");

            scheduler.advance(300);
            assert_eq!(visible_flags(&ctx), vec![false, true]);
            assert_eq!(ctx.store().search().get_untracked(), "mia");
        });
    }

    #[test]
    fn test_visibility_carries_item_ids() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = DirectoryContext::with_scheduler(mentors(), 0, Rc::new(ManualScheduler::new()));
            let ids: Vec<u32> = ctx.visibility().iter().map(|(id, _)| *id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
        });
    }

    #[test]
    fn test_cancel_pending_search() {
        let owner = Owner::new();
        owner.with(|| {
            let scheduler = Rc::new(ManualScheduler::new());
            let ctx = DirectoryContext::with_scheduler(
                mentors(),
                300,
                Rc::clone(&scheduler) as Rc<dyn Scheduler>,
            );
            ctx.search("zzz".to_string());
            ctx.cancel_pending();
            assert_eq!(
                ctx.search.with_value(|d| d.state()),
                DebounceState::Idle
            );
            scheduler.advance(300);
            assert_eq!(visible_flags(&ctx), vec![true, true, true]);
        });
    }

    #[test]
    fn test_no_tags_means_no_category_control() {
        let owner = Owner::new();
        owner.with(|| {
            let items = vec![ListItem::new(1, "Zoe", "7A"), ListItem::new(2, "Ivan", "9C")];
            let ctx = DirectoryContext::with_scheduler(items, 0, Rc::new(ManualScheduler::new()));
            assert!(!ctx.has_categories());
            // Value is ignored because the control is absent
            ctx.set_category("Biology".to_string());
            assert_eq!(visible_flags(&ctx), vec![true, true]);

            // Zero delay filters on every keystroke
            ctx.search("iv".to_string());
            assert_eq!(visible_flags(&ctx), vec![false, true]);
        });
    }
}
