//! Page Bindings
//!
//! Lookups against the server-rendered document: the embedded JSON payload and
//! the mount points the directories attach to.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::{PageError, PageResult};
use crate::models::PagePayload;

/// `<script type="application/json" id="page-data">` holding the payload
pub const PAYLOAD_ID: &str = "page-data";
pub const MENTOR_ROOT_ID: &str = "mentor-directory";
pub const MENTEE_ROOT_ID: &str = "mentee-directory";

pub fn element_by_id(id: &str) -> PageResult<web_sys::HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| PageError::MissingElement(id.to_string()))
}

pub fn read_payload() -> PageResult<PagePayload> {
    let script = element_by_id(PAYLOAD_ID)?;
    PagePayload::from_json(&script.text_content().unwrap_or_default())
}
