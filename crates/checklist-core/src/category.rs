//! Category Switcher
//!
//! Exactly one category of a fixed set is active at a time.

use crate::error::{ChecklistError, ChecklistResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySwitcher {
    categories: Vec<String>,
    active: Option<String>,
}

impl CategorySwitcher {
    /// Build a switcher over `categories`, with `default` active if known
    pub fn new<I, S>(categories: I, default: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let active = default
            .filter(|id| categories.iter().any(|c| c == id))
            .map(str::to_string);
        Self { categories, active }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Make `id` the only active category.
    ///
    /// An unknown id leaves the current selection untouched.
    pub fn activate(&mut self, id: &str) -> ChecklistResult<()> {
        if !self.categories.iter().any(|c| c == id) {
            return Err(ChecklistError::UnknownCategory(id.to_string()));
        }
        self.active = Some(id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_switcher() -> CategorySwitcher {
        CategorySwitcher::new(["energy", "water", "waste"], Some("energy"))
    }

    #[test]
    fn test_default_active() {
        let switcher = make_switcher();
        assert_eq!(switcher.active(), Some("energy"));

        let none = CategorySwitcher::new(["energy"], Some("missing"));
        assert_eq!(none.active(), None);
    }

    #[test]
    fn test_activate_is_exclusive() {
        let mut switcher = make_switcher();
        switcher.activate("water").unwrap();

        let active: Vec<_> = switcher
            .categories()
            .iter()
            .filter(|c| switcher.is_active(c))
            .collect();
        assert_eq!(active, vec!["water"]);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let mut switcher = make_switcher();
        let err = switcher.activate("transport").unwrap_err();
        assert!(matches!(err, ChecklistError::UnknownCategory(id) if id == "transport"));
        assert_eq!(switcher.active(), Some("energy"));
    }
}
