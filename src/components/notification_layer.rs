//! Notification Layer Component
//!
//! Renders live toasts and the celebration overlay above the page.

use checklist_core::{Notification, NotificationKind};
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

#[component]
pub fn NotificationLayer() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <For
            each=move || ctx.view.notifications().get()
            key=|n| n.id
            children=move |n| match n.kind {
                NotificationKind::Toast => view! { <div class="message">{n.text}</div> }.into_any(),
                NotificationKind::Celebration => view! { <Celebration notification=n /> }.into_any(),
            }
        />
    }
}

/// Full-screen overlay; the button and the timer both dismiss it
#[component]
fn Celebration(notification: Notification) -> impl IntoView {
    let ctx = use_app_context();
    let messages = ctx.config().messages;
    let id = notification.id;

    view! {
        <div class="celebration-message">
            <div class="celebration-content">
                <h2>{notification.text}</h2>
                {messages.celebration_lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                <button on:click=move |_| ctx.dismiss(id)>{messages.celebration_button}</button>
            </div>
        </div>
    }
}
