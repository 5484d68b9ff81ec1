//! Checklist Panel Component
//!
//! Items of one category. The container id matches the category id and the
//! checkbox ids are the persisted keys.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Category, ChecklistItem};
use crate::store::ViewStateStoreFields;

#[component]
pub fn ChecklistPanel(category: Category) -> impl IntoView {
    let ctx = use_app_context();
    let id = category.id;
    let is_active = move || ctx.view.active_category().get().as_deref() == Some(id);

    view! {
        <div
            id=id
            class=move || if is_active() { "checklist-category active" } else { "checklist-category" }
            style:opacity=move || {
                if is_active() && !ctx.view.category_visible().get() { "0" } else { "1" }
            }
        >
            {category.items.iter().map(|item| view! { <ChecklistRow item=*item /> }).collect_view()}
        </div>
    }
}

#[component]
fn ChecklistRow(item: ChecklistItem) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let checked = move || ctx.view.checked().with(|m| m.get(id).copied().unwrap_or(false));

    view! {
        <label class="checklist-item" class:completed=checked>
            <input
                type="checkbox"
                id=id
                prop:checked=checked
                on:change=move |ev| ctx.toggle_item(id, event_target_checked(&ev))
            />
            <span class="checkmark"></span>
            <div class="item-content">
                <h4>{item.title}</h4>
                <p>{item.description}</p>
            </div>
        </label>
    }
}
