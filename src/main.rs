//! Eco Checklist Frontend Entry Point

mod app;
mod catalog;
mod components;
mod context;
mod dom;
mod models;
mod storage;
mod store;

use app::App;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::{info, LevelFilter};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(LevelFilter::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    info!("🌱 지구를 지키는 체크리스트 앱이 시작되었습니다!");

    mount_to_body(App);

    Timeout::new(1000, || {
        info!("🌍 지구를 지키는 체크리스트가 준비되었습니다!");
        info!("💡 팁: Ctrl+R로 체크리스트를 초기화할 수 있습니다.");
    })
    .forget();
}
