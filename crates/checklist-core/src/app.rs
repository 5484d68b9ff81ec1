//! Checklist Application State
//!
//! One object built at startup that owns every component and composes them
//! explicitly: toggle -> state -> store -> progress -> celebration.

use log::{info, warn};

use crate::category::CategorySwitcher;
use crate::config::ChecklistConfig;
use crate::error::ChecklistResult;
use crate::notify::{Notification, NotificationId, NotificationPresenter};
use crate::progress::{self, CompletionTracker, ProgressSnapshot};
use crate::state::ChecklistState;
use crate::store::{KeyValueStore, StoreAdapter};

/// Result of a checkbox transition
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOutcome {
    pub progress: ProgressSnapshot,
    /// Set when this toggle completed the list
    pub celebration: Option<Notification>,
}

#[derive(Debug)]
pub struct ChecklistApp<S> {
    config: ChecklistConfig,
    state: ChecklistState,
    store: StoreAdapter<S>,
    categories: CategorySwitcher,
    notifications: NotificationPresenter,
    completion: CompletionTracker,
}

impl<S: KeyValueStore> ChecklistApp<S> {
    /// Build the app over the given items and categories and restore any
    /// persisted record. A list that is already complete on load does not
    /// celebrate.
    pub fn new<I, C>(
        config: ChecklistConfig,
        item_ids: I,
        categories: C,
        default_category: Option<&str>,
        store: S,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let mut state = ChecklistState::new(item_ids);
        let store = StoreAdapter::new(store, config.storage_key.clone());
        if let Some(snapshot) = store.load() {
            let stale = state.restore(&snapshot);
            if stale > 0 {
                info!("dropped {} stale checklist ids from saved state", stale);
            }
        }

        let notifications =
            NotificationPresenter::new(config.toast_lifespan_ms, config.celebration_lifespan_ms);
        let mut app = Self {
            categories: CategorySwitcher::new(categories, default_category),
            state,
            store,
            notifications,
            completion: CompletionTracker::default(),
            config,
        };
        let progress = app.progress();
        app.completion.prime(&progress);
        info!("checklist restored: {}/{} done", progress.checked, progress.total);
        app
    }

    pub fn config(&self) -> &ChecklistConfig {
        &self.config
    }

    pub fn state(&self) -> &ChecklistState {
        &self.state
    }

    pub fn store(&self) -> &StoreAdapter<S> {
        &self.store
    }

    pub fn categories(&self) -> &CategorySwitcher {
        &self.categories
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.active()
    }

    /// Fresh progress from the current state
    pub fn progress(&self) -> ProgressSnapshot {
        let (checked, total) = self.state.count();
        progress::compute(checked, total, &self.config.thresholds())
    }

    /// Checkbox change: update, persist, recompute, maybe celebrate
    pub fn toggle(&mut self, id: &str, completed: bool, now_ms: f64) -> ChecklistResult<ToggleOutcome> {
        self.state.set(id, completed)?;
        self.persist();

        let progress = self.progress();
        let celebration = if self.completion.observe(&progress) {
            let title = self.config.messages.celebration_title.clone();
            self.notifications.show_celebration(title, now_ms)
        } else {
            None
        };
        if celebration.is_some() {
            info!("all {} checklist items completed", progress.total);
        }
        Ok(ToggleOutcome { progress, celebration })
    }

    /// Uncheck everything and delete the persisted record
    pub fn reset(&mut self, now_ms: f64) -> Notification {
        self.state.clear();
        if let Err(e) = self.store.clear() {
            warn!("could not clear saved checklist: {}", e);
        }
        let progress = self.progress();
        self.completion.prime(&progress);
        info!("checklist reset");

        let text = self.config.messages.reset_done.clone();
        self.notifications.show_toast(text, now_ms)
    }

    /// Toast only; state is already saved on every toggle
    pub fn announce_save(&mut self, now_ms: f64) -> Notification {
        let text = self.config.messages.saved.clone();
        self.notifications.show_toast(text, now_ms)
    }

    pub fn activate_category(&mut self, id: &str) -> ChecklistResult<()> {
        self.categories.activate(id)
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    pub fn expire_notifications(&mut self, now_ms: f64) -> Vec<NotificationId> {
        self.notifications.expire(now_ms)
    }

    /// Save failures keep the session running on in-memory state
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.state) {
            warn!("could not save checklist, continuing in memory: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChecklistError;
    use crate::notify::NotificationKind;
    use crate::progress::Tier;
    use crate::store::MemoryStore;
    use proptest::prelude::*;

    const IDS: [&str; 5] = ["e1", "e2", "w1", "w2", "r1"];

    fn make_app(store: MemoryStore) -> ChecklistApp<MemoryStore> {
        ChecklistApp::new(
            ChecklistConfig::default(),
            IDS,
            ["energy", "water", "waste"],
            Some("energy"),
            store,
        )
    }

    #[test]
    fn test_five_item_scenario() {
        let mut app = make_app(MemoryStore::new());
        for id in &IDS[..4] {
            let outcome = app.toggle(id, true, 0.0).unwrap();
            assert!(outcome.celebration.is_none());
        }
        let progress = app.progress();
        assert_eq!((progress.percentage, progress.tier), (80, Tier::High));

        let outcome = app.toggle("e1", false, 0.0).unwrap();
        assert_eq!((outcome.progress.percentage, outcome.progress.tier), (60, Tier::Medium));

        app.toggle("e1", true, 0.0).unwrap();
        let outcome = app.toggle("r1", true, 0.0).unwrap();
        assert_eq!((outcome.progress.percentage, outcome.progress.tier), (100, Tier::High));
        let celebration = outcome.celebration.expect("celebration on completion");
        assert_eq!(celebration.kind, NotificationKind::Celebration);
        assert_eq!(celebration.lifespan_ms, 5000);
    }

    #[test]
    fn test_celebration_fires_once_per_transition() {
        let mut app = make_app(MemoryStore::new());
        for id in IDS {
            app.toggle(id, true, 0.0).unwrap();
        }
        let celebrations = app
            .notifications()
            .iter()
            .filter(|n| n.kind == NotificationKind::Celebration)
            .count();
        assert_eq!(celebrations, 1);

        // redundant set of an already checked item
        assert!(app.toggle("e1", true, 1.0).unwrap().celebration.is_none());
        // non-existent item
        assert!(matches!(app.toggle("ghost", true, 1.0), Err(ChecklistError::UnknownItem(_))));
        assert_eq!(app.notifications().len(), 1);

        // leave and re-enter the complete state after the overlay is gone
        let id = app.notifications()[0].id;
        app.dismiss(id);
        app.toggle("w2", false, 2.0).unwrap();
        assert!(app.toggle("w2", true, 3.0).unwrap().celebration.is_some());
    }

    #[test]
    fn test_restore_and_stale_ids() {
        let store = MemoryStore::new()
            .with_record("checklistState", r#"{"e1":true,"w1":true,"removed-item":true}"#);
        let app = make_app(store);
        assert!(app.state().get("e1"));
        assert!(app.state().get("w1"));
        assert!(!app.state().get("e2"));
        assert_eq!(app.state().count(), (2, 5));
        assert_eq!(app.progress().percentage, 40);
    }

    #[test]
    fn test_complete_on_load_does_not_celebrate() {
        let mut source = make_app(MemoryStore::new());
        for id in IDS {
            source.toggle(id, true, 0.0).unwrap();
        }
        let store = source.store().inner().clone();

        let mut app = make_app(store);
        assert!(app.progress().is_complete());
        assert!(app.notifications().is_empty());
        assert!(app.toggle("e1", true, 0.0).unwrap().celebration.is_none());
    }

    #[test]
    fn test_reset_clears_memory_and_store() {
        let mut app = make_app(MemoryStore::new());
        app.toggle("e1", true, 0.0).unwrap();
        app.toggle("w1", true, 0.0).unwrap();

        let toast = app.reset(100.0);
        assert_eq!(toast.kind, NotificationKind::Toast);
        assert_eq!(toast.text, app.config().messages.reset_done);
        assert_eq!(app.state().count(), (0, 5));
        assert!(app.store().load().is_none());
        assert!(app.store().inner().raw("checklistState").is_none());
    }

    #[test]
    fn test_unavailable_store_keeps_working() {
        let mut app = make_app(MemoryStore::unavailable());
        let outcome = app.toggle("e1", true, 0.0).unwrap();
        assert_eq!(outcome.progress.checked, 1);
        app.reset(0.0);
        assert_eq!(app.state().count(), (0, 5));
    }

    #[test]
    fn test_announce_save_is_toast_only() {
        let mut app = make_app(MemoryStore::new());
        let toast = app.announce_save(0.0);
        assert_eq!(toast.lifespan_ms, 3000);
        assert!(app.store().inner().raw("checklistState").is_none());
        assert_eq!(app.expire_notifications(3000.0), vec![toast.id]);
    }

    #[test]
    fn test_activate_category() {
        let mut app = make_app(MemoryStore::new());
        app.activate_category("waste").unwrap();
        assert_eq!(app.categories().active(), Some("waste"));
        assert!(app.activate_category("nope").is_err());
        assert_eq!(app.categories().active(), Some("waste"));
    }

    #[test]
    fn test_empty_checklist() {
        let mut app = ChecklistApp::new(
            ChecklistConfig::default(),
            Vec::<String>::new(),
            Vec::<String>::new(),
            None,
            MemoryStore::new(),
        );
        let progress = app.progress();
        assert_eq!(progress.percentage, 0);
        assert!(app.toggle("anything", true, 0.0).is_err());
        assert!(app.notifications().is_empty());
    }

    proptest! {
        #[test]
        fn prop_percentage_tracks_every_toggle(
            toggles in proptest::collection::vec((0usize..5, any::<bool>()), 0..40),
        ) {
            let mut app = make_app(MemoryStore::new());
            for (idx, completed) in toggles {
                let outcome = app.toggle(IDS[idx], completed, 0.0).unwrap();
                let (checked, total) = app.state().count();
                let expected = (checked as f64 / total as f64 * 100.0).round() as u8;
                prop_assert_eq!(outcome.progress.percentage, expected);
                prop_assert_eq!(outcome.progress.checked, checked);
            }
        }
    }
}
