//! DOM Helpers
//!
//! Thin wrappers over `web_sys` lookups. Misses are logged and reported as
//! `None`/`false`, never unwrapped.

use checklist_core::{ChecklistConfig, SectionOffset};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Element holding optional JSON overrides for `ChecklistConfig`
const CONFIG_ELEMENT_ID: &str = "checklist-config";

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Current vertical scroll offset
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Every `section[id]` with its top offset, in document order
pub fn section_offsets() -> Vec<SectionOffset> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all("section[id]").ok()) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionOffset::new(el.id(), f64::from(el.offset_top())))
        .collect()
}

/// Smooth-scroll the element with `id` to the top of the viewport
pub fn scroll_to_section(id: &str) -> bool {
    let Some(target) = document().and_then(|d| d.get_element_by_id(id)) else {
        warn!("no section with id {:?}", id);
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Blocking browser confirm dialog; false if it cannot be shown
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Config from `<script type="application/json" id="checklist-config">`,
/// defaults when absent
pub fn read_config() -> ChecklistConfig {
    match document()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    {
        Some(raw) if !raw.trim().is_empty() => ChecklistConfig::from_json(&raw),
        _ => {
            debug!("no checklist config element, using defaults");
            ChecklistConfig::default()
        }
    }
}
