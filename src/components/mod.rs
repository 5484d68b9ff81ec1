//! UI Components
//!
//! Leptos components of the checklist page.

mod category_tabs;
mod checklist_panel;
mod nav_bar;
mod notification_layer;
mod page_sections;
mod progress_bar;

pub use category_tabs::CategoryTabs;
pub use checklist_panel::ChecklistPanel;
pub use nav_bar::NavBar;
pub use notification_layer::NotificationLayer;
pub use page_sections::{AboutSection, Hero, TipsSection};
pub use progress_bar::ProgressBar;
