//! Progress Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

/// Percentage text plus a fill whose width and color follow the tier
#[component]
pub fn ProgressBar() -> impl IntoView {
    let progress = use_app_context().view.progress();

    view! {
        <div class="progress-container" data-tier=move || progress.get().tier.as_str()>
            <div class="progress-label">
                <span>"진행률"</span>
                <span class="progress-percentage">{move || format!("{}%", progress.get().percentage)}</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", progress.get().percentage)
                    style:background=move || progress.get().tier.gradient()
                ></div>
            </div>
            <p class="progress-count">
                {move || {
                    let p = progress.get();
                    format!("{} / {} 완료", p.checked, p.total)
                }}
            </p>
        </div>
    }
}
