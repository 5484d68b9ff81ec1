//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! projection of `ChecklistApp`, refreshed after every dispatched event.

use std::collections::HashMap;

use checklist_core::{ChecklistApp, KeyValueStore, Notification, ProgressSnapshot};
use leptos::prelude::*;
use reactive_stores::Store;

/// What the components render
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Completion flag per item id
    pub checked: HashMap<String, bool>,
    pub progress: ProgressSnapshot,
    pub active_category: Option<String>,
    /// False during the short fade-out after a category switch
    pub category_visible: bool,
    /// Section highlighted in the nav bar
    pub active_section: Option<String>,
    /// Live toasts and celebration overlay
    pub notifications: Vec<Notification>,
}

impl ViewState {
    pub fn from_app<S: KeyValueStore>(app: &ChecklistApp<S>) -> Self {
        Self {
            checked: app.state().snapshot(),
            progress: app.progress(),
            active_category: app.categories().active().map(str::to_string),
            category_visible: true,
            active_section: None,
            notifications: app.notifications().to_vec(),
        }
    }
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

// ========================
// Store Helper Functions
// ========================

/// Copy model-owned fields from the app into the store
pub fn store_sync<S: KeyValueStore>(store: &ViewStore, app: &ChecklistApp<S>) {
    let checked = app.state().snapshot();
    if store.checked().with_untracked(|current| *current != checked) {
        store.checked().set(checked);
    }

    let progress = app.progress();
    if store.progress().get_untracked() != progress {
        store.progress().set(progress);
    }

    let active = app.categories().active().map(str::to_string);
    if store.active_category().get_untracked() != active {
        store.active_category().set(active);
    }

    let notifications = app.notifications();
    if store.notifications().with_untracked(|current| current.as_slice() != notifications) {
        store.notifications().set(notifications.to_vec());
    }
}

/// Highlight `section` in the nav bar if it changed
pub fn store_set_active_section(store: &ViewStore, section: Option<String>) {
    if store.active_section().get_untracked() != section {
        store.active_section().set(section);
    }
}
