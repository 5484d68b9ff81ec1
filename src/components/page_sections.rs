//! Static Page Sections
//!
//! Hero, about and tips sections around the checklist.

use leptos::prelude::*;

use crate::catalog::{ABOUT_CARDS, CHECKLIST_SECTION, TIPS};
use crate::dom;
use crate::models::Card;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <h1>"지구를 지키는 작은 실천"</h1>
            <p>"오늘부터 할 수 있는 환경 보호 습관을 하나씩 체크해 보세요."</p>
            <button class="cta-btn" on:click=move |_| { dom::scroll_to_section(CHECKLIST_SECTION); }>
                "체크리스트 시작하기"
            </button>
        </section>
    }
}

#[component]
fn CardGrid(cards: &'static [Card], #[prop(into)] card_class: String) -> impl IntoView {
    view! {
        <div class="card-grid">
            {cards
                .iter()
                .map(|card| {
                    view! {
                        <div class=card_class.clone()>
                            <div class="card-icon">{card.icon}</div>
                            <h3>{card.title}</h3>
                            <p>{card.body}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <h2>"소개"</h2>
            <CardGrid cards=ABOUT_CARDS card_class="about-card" />
        </section>
    }
}

#[component]
pub fn TipsSection() -> impl IntoView {
    view! {
        <section id="tips" class="tips">
            <h2>"실천 팁"</h2>
            <CardGrid cards=TIPS card_class="tip-card" />
            <p class="shortcut-hint">"💡 Ctrl+S: 저장 알림 · Ctrl+R: 체크리스트 초기화"</p>
        </section>
    }
}
