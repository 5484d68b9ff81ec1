//! Frontend Models
//!
//! Static page content: checklist categories, items and page sections.

/// One checkbox on the page; `id` is also its persisted key
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A tab of the checklist with its items
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: &'static [ChecklistItem],
}

/// A top-level `<section>` reachable from the nav bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSection {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}
