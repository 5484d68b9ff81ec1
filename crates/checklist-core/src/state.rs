//! Checklist State Model
//!
//! In-memory mapping from item id to completion flag. The set of ids is fixed
//! when the model is built; `set` never creates new entries.

use std::collections::{BTreeSet, HashMap};

use crate::error::{ChecklistError, ChecklistResult};

/// Authoritative completion state for every known checklist item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistState {
    items: HashMap<String, bool>,
}

impl ChecklistState {
    /// Build a state with every id unchecked
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: ids.into_iter().map(|id| (id.into(), false)).collect(),
        }
    }

    /// Completion flag for `id`; unknown ids read as unchecked
    pub fn get(&self, id: &str) -> bool {
        self.items.get(id).copied().unwrap_or(false)
    }

    /// Set the flag of a known item.
    ///
    /// Persistence and progress recomputation are left to the caller.
    pub fn set(&mut self, id: &str, completed: bool) -> ChecklistResult<()> {
        match self.items.get_mut(id) {
            Some(flag) => {
                *flag = completed;
                Ok(())
            }
            None => Err(ChecklistError::UnknownItem(id.to_string())),
        }
    }

    /// All known ids, sorted
    pub fn all_ids(&self) -> BTreeSet<&str> {
        self.items.keys().map(String::as_str).collect()
    }

    /// Returns `(checked, total)`
    pub fn count(&self) -> (usize, usize) {
        let checked = self.items.values().filter(|done| **done).count();
        (checked, self.items.len())
    }

    /// Uncheck everything
    pub fn clear(&mut self) {
        self.items.values_mut().for_each(|flag| *flag = false);
    }

    /// Apply a persisted snapshot.
    ///
    /// Ids the snapshot does not mention fall back to unchecked; ids with no
    /// live item are dropped. Returns how many stale ids were ignored.
    pub fn restore(&mut self, snapshot: &HashMap<String, bool>) -> usize {
        self.clear();
        let mut stale = 0;
        for (id, completed) in snapshot {
            match self.items.get_mut(id) {
                Some(flag) => *flag = *completed,
                None => stale += 1,
            }
        }
        stale
    }

    /// Copy of the full mapping, used for persistence
    pub fn snapshot(&self) -> HashMap<String, bool> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state() -> ChecklistState {
        ChecklistState::new(["a", "b", "c"])
    }

    #[test]
    fn test_new_state_is_unchecked() {
        let state = make_state();
        assert_eq!(state.count(), (0, 3));
        assert!(!state.get("a"));
        assert_eq!(state.all_ids().into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_set_and_get() {
        let mut state = make_state();
        state.set("b", true).unwrap();
        assert!(state.get("b"));
        assert_eq!(state.count(), (1, 3));

        state.set("b", false).unwrap();
        assert_eq!(state.count(), (0, 3));
    }

    #[test]
    fn test_unknown_id() {
        let mut state = make_state();
        assert!(!state.get("zzz"));
        assert!(matches!(state.set("zzz", true), Err(ChecklistError::UnknownItem(id)) if id == "zzz"));
        assert_eq!(state.count(), (0, 3));
    }

    #[test]
    fn test_restore_drops_stale_and_defaults_missing() {
        let mut state = make_state();
        state.set("c", true).unwrap();

        let snapshot: HashMap<String, bool> = [("a".to_string(), true), ("old".to_string(), true)]
            .into_iter()
            .collect();
        let stale = state.restore(&snapshot);

        assert_eq!(stale, 1);
        assert!(state.get("a"));
        assert!(!state.get("b"));
        // not in the snapshot, so back to unchecked
        assert!(!state.get("c"));
        assert!(state.all_ids().iter().all(|id| *id != "old"));
    }

    #[test]
    fn test_clear() {
        let mut state = make_state();
        state.set("a", true).unwrap();
        state.set("c", true).unwrap();
        state.clear();
        assert_eq!(state.count(), (0, 3));
    }
}
