//! Checklist Core
//!
//! DOM-free model of the eco checklist: completion state, persistence,
//! progress, categories, notifications and scroll navigation.

pub mod app;
pub mod category;
pub mod config;
pub mod error;
pub mod navigation;
pub mod notify;
pub mod progress;
pub mod shortcut;
pub mod state;
pub mod store;

pub use app::{ChecklistApp, ToggleOutcome};
pub use category::CategorySwitcher;
pub use config::{ChecklistConfig, Messages};
pub use error::{ChecklistError, ChecklistResult, StoreError};
pub use navigation::{active_section, section_id_from_href, SectionOffset};
pub use notify::{Notification, NotificationId, NotificationKind, NotificationPresenter};
pub use progress::{CompletionTracker, ProgressSnapshot, Tier, TierThresholds};
pub use shortcut::{KeyChord, Shortcut};
pub use state::ChecklistState;
pub use store::{KeyValueStore, MemoryStore, StoreAdapter};
