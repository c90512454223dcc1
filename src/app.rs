//! Mentorship Directory Frontend
//!
//! Mounts a filterable directory into each mount point the page provides.

use leptos::mount::mount_to;
use leptos::prelude::*;

use crate::components::{MenteeTable, MentorDirectory};
use crate::models::PagePayload;
use crate::page::{self, MENTEE_ROOT_ID, MENTOR_ROOT_ID};

pub fn mount(payload: PagePayload) {
    let debounce_ms = payload.config.debounce_ms;

    match page::element_by_id(MENTOR_ROOT_ID) {
        Ok(root) => {
            let mentors = payload.mentors;
            log::info!("[APP] Mounting mentor directory with {} mentors", mentors.len());
            mount_to(root, move || view! { <MentorDirectory mentors=mentors debounce_ms=debounce_ms /> })
                .forget();
        }
        Err(e) => log::debug!("[APP] {}; mentor directory not mounted", e),
    }

    match page::element_by_id(MENTEE_ROOT_ID) {
        Ok(root) => {
            let mentees = payload.mentees;
            log::info!("[APP] Mounting mentee table with {} mentees", mentees.len());
            mount_to(root, move || view! { <MenteeTable mentees=mentees debounce_ms=debounce_ms /> })
                .forget();
        }
        Err(e) => log::debug!("[APP] {}; mentee table not mounted", e),
    }
}
