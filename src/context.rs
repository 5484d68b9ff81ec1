//! Application Context
//!
//! Event dispatcher shared via Leptos Context API. It owns the
//! `ChecklistApp` and turns DOM events into model operations, timers and
//! view-store updates.

use checklist_core::{
    active_section, ChecklistApp, ChecklistConfig, KeyChord, Notification, NotificationId, Shortcut,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::{debug, info, warn};

use crate::dom;
use crate::storage::BrowserStore;
use crate::store::{store_set_active_section, store_sync, ViewState, ViewStateStoreFields, ViewStore};

type AppModel = ChecklistApp<BrowserStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    app: StoredValue<AppModel, LocalStorage>,
    /// Reactive projection for the components
    pub view: ViewStore,
}

impl AppContext {
    pub fn new(app: AppModel) -> Self {
        let view = ViewStore::new(ViewState::from_app(&app));
        Self {
            app: StoredValue::new_local(app),
            view,
        }
    }

    pub fn config(&self) -> ChecklistConfig {
        self.app
            .try_with_value(|app| app.config().clone())
            .unwrap_or_default()
    }

    fn sync(&self) {
        self.app.try_with_value(|app| store_sync(&self.view, app));
    }

    /// Checkbox change
    pub fn toggle_item(&self, id: &str, checked: bool) {
        let outcome = self.app.try_update_value(|app| app.toggle(id, checked, dom::now_ms()));
        match outcome {
            Some(Ok(outcome)) => {
                debug!("{} -> {} ({}%)", id, checked, outcome.progress.percentage);
                if let Some(celebration) = outcome.celebration {
                    self.schedule_dismiss(&celebration);
                }
            }
            Some(Err(e)) => warn!("ignored checkbox change: {}", e),
            None => return,
        }
        self.sync();
    }

    /// Category button click; fades the newly active panel back in
    pub fn activate_category(&self, id: &str) {
        match self.app.try_update_value(|app| app.activate_category(id)) {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                warn!("category switch ignored: {}", e);
                return;
            }
            None => return,
        }
        self.sync();

        let visible = self.view.category_visible();
        visible.set(false);
        Timeout::new(self.config().fade_delay_ms, move || visible.set(true)).forget();
    }

    /// Confirm-gated reset of state and saved record
    pub fn request_reset(&self) {
        let prompt = self.config().messages.reset_confirm;
        if !dom::confirm(&prompt) {
            debug!("reset cancelled");
            return;
        }
        if let Some(toast) = self.app.try_update_value(|app| app.reset(dom::now_ms())) {
            self.schedule_dismiss(&toast);
            self.sync();
        }
    }

    /// State is saved on every toggle; this only tells the user so
    pub fn announce_save(&self) {
        if let Some(toast) = self.app.try_update_value(|app| app.announce_save(dom::now_ms())) {
            self.schedule_dismiss(&toast);
            self.sync();
        }
    }

    /// Remove a notification; safe after it is already gone
    pub fn dismiss(&self, id: NotificationId) {
        if self.app.try_update_value(|app| app.dismiss(id)) == Some(true) {
            self.sync();
        }
    }

    fn schedule_dismiss(&self, notification: &Notification) {
        let ctx = *self;
        let id = notification.id;
        Timeout::new(notification.lifespan_ms, move || ctx.dismiss(id)).forget();
    }

    /// Window scroll: highlight the section the viewport has passed
    pub fn on_scroll(&self) {
        let offset = self.config().nav_offset_px;
        let sections = dom::section_offsets();
        let current = active_section(dom::scroll_y(), &sections, offset).map(str::to_string);
        store_set_active_section(&self.view, current);
    }

    /// Nav link click: highlight the link and scroll to its section
    pub fn navigate_to(&self, section_id: &str) {
        store_set_active_section(&self.view, Some(section_id.to_string()));
        dom::scroll_to_section(section_id);
    }

    /// Global keydown: modifier+R resets, modifier+S announces the save
    pub fn handle_keydown(&self, ev: &web_sys::KeyboardEvent) {
        let key = ev.key();
        let chord = KeyChord {
            key: &key,
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
        };
        let Some(shortcut) = Shortcut::from_chord(&chord) else {
            return;
        };
        ev.prevent_default();
        info!("shortcut {:?}", shortcut);
        match shortcut {
            Shortcut::Reset => self.request_reset(),
            Shortcut::SaveAnnounce => self.announce_save(),
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
