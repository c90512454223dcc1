//! Browser Timers
//!
//! `Scheduler` backed by `gloo_timers`, for debouncing inside the page.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use list_filter::Scheduler;

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            task();
        });
    }
}
