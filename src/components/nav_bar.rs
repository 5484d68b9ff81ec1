//! Navigation Bar Component
//!
//! Section links; the active one follows clicks and scrolling.

use checklist_core::section_id_from_href;
use leptos::prelude::*;

use crate::catalog::SECTIONS;
use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let active_section = ctx.view.active_section();

    view! {
        <nav class="navbar">
            <div class="nav-logo">"🌱 지구를 지키는 체크리스트"</div>
            <ul class="nav-menu">
                {SECTIONS
                    .iter()
                    .map(|section| {
                        let id = section.id;
                        let href = format!("#{}", id);
                        let link_class = move || {
                            if active_section.get().as_deref() == Some(id) {
                                "nav-link active"
                            } else {
                                "nav-link"
                            }
                        };
                        let target = href.clone();
                        view! {
                            <li>
                                <a
                                    href=href
                                    class=link_class
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        if let Some(section_id) = section_id_from_href(&target) {
                                            ctx.navigate_to(section_id);
                                        }
                                    }
                                >
                                    {section.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
