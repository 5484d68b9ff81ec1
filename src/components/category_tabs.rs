//! Category Tab Buttons
//!
//! One button per category, carrying `data-category`; exactly one is active.

use leptos::prelude::*;

use crate::catalog::CATEGORIES;
use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

#[component]
pub fn CategoryTabs() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="category-tabs">
            {CATEGORIES
                .iter()
                .map(|category| {
                    let id = category.id;
                    let btn_class = move || {
                        if ctx.view.active_category().get().as_deref() == Some(id) {
                            "category-btn active"
                        } else {
                            "category-btn"
                        }
                    };
                    view! {
                        <button
                            class=btn_class
                            data-category=id
                            on:click=move |_| ctx.activate_category(id)
                        >
                            {category.icon} " " {category.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
