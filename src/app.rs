//! Eco Checklist App
//!
//! Builds the checklist model once at startup, provides it to the
//! components and wires the window-level listeners.

use checklist_core::ChecklistApp;
use leptos::ev;
use leptos::prelude::*;

use crate::catalog::{self, CATEGORIES, CHECKLIST_SECTION};
use crate::components::{
    AboutSection, CategoryTabs, ChecklistPanel, Hero, NavBar, NotificationLayer, ProgressBar, TipsSection,
};
use crate::context::AppContext;
use crate::dom;
use crate::storage::BrowserStore;

#[component]
pub fn App() -> impl IntoView {
    let model = ChecklistApp::new(
        dom::read_config(),
        catalog::item_ids(),
        catalog::category_ids(),
        Some(catalog::DEFAULT_CATEGORY),
        BrowserStore::local(),
    );
    let ctx = AppContext::new(model);
    provide_context(ctx);

    // Scroll position drives the nav highlight; shortcuts are global
    let _ = window_event_listener(ev::scroll, move |_| ctx.on_scroll());
    let _ = window_event_listener(ev::keydown, move |ev| ctx.handle_keydown(&ev));

    view! {
        <NavBar />
        <main>
            <Hero />
            <AboutSection />
            <section id=CHECKLIST_SECTION class="checklist">
                <h2>"환경 보호 체크리스트"</h2>
                <ProgressBar />
                <CategoryTabs />
                {CATEGORIES.iter().map(|category| view! { <ChecklistPanel category=*category /> }).collect_view()}
            </section>
            <TipsSection />
        </main>
        <NotificationLayer />
    }
}
