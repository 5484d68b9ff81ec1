//! Progress Calculator
//!
//! Derives the completion percentage and its visual tier, plus the
//! edge detector that decides when a celebration is due.

use serde::{Deserialize, Serialize};

/// Visual severity bucket for the progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        }
    }

    /// Fill gradient of the progress bar
    pub fn gradient(&self) -> &'static str {
        match self {
            Tier::High => "linear-gradient(135deg, #4CAF50 0%, #45a049 100%)",
            Tier::Medium => "linear-gradient(135deg, #FF9800 0%, #F57C00 100%)",
            Tier::Low => "linear-gradient(135deg, #FF5722 0%, #D84315 100%)",
        }
    }
}

/// Percentage boundaries of the tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    pub high: u8,
    pub medium: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self { high: 80, medium: 50 }
    }
}

impl TierThresholds {
    pub fn tier_for(&self, percentage: u8) -> Tier {
        if percentage >= self.high {
            Tier::High
        } else if percentage >= self.medium {
            Tier::Medium
        } else {
            Tier::Low
        }
    }
}

/// Derived progress, recomputed on every change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSnapshot {
    pub checked: usize,
    pub total: usize,
    pub percentage: u8,
    pub tier: Tier,
}

impl ProgressSnapshot {
    /// Every item checked, and there is at least one item
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.checked >= self.total
    }
}

/// `round(checked / total * 100)`, rounding halves up. Zero items gives 0.
pub fn percentage(checked: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let checked = checked.min(total) as u64;
    let total = total as u64;
    ((checked * 200 + total) / (total * 2)) as u8
}

pub fn compute(checked: usize, total: usize, thresholds: &TierThresholds) -> ProgressSnapshot {
    let percentage = percentage(checked, total);
    ProgressSnapshot {
        checked,
        total,
        percentage,
        tier: thresholds.tier_for(percentage),
    }
}

/// Fires once per transition into the fully completed state
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionTracker {
    complete: bool,
}

impl CompletionTracker {
    /// Record the current state without firing (used after a restore)
    pub fn prime(&mut self, progress: &ProgressSnapshot) {
        self.complete = progress.is_complete();
    }

    /// Returns true when `progress` is complete and the previous one was not
    pub fn observe(&mut self, progress: &ProgressSnapshot) -> bool {
        let was_complete = self.complete;
        self.complete = progress.is_complete();
        self.complete && !was_complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn test_zero_total_is_zero_percent() {
        let progress = compute(0, 0, &TierThresholds::default());
        assert_eq!(progress.percentage, 0);
        assert_eq!(progress.tier, Tier::Low);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_tier_boundaries() {
        let t = TierThresholds::default();
        assert_eq!(t.tier_for(49), Tier::Low);
        assert_eq!(t.tier_for(50), Tier::Medium);
        assert_eq!(t.tier_for(79), Tier::Medium);
        assert_eq!(t.tier_for(80), Tier::High);
        assert_eq!(t.tier_for(100), Tier::High);
    }

    #[test]
    fn test_completion_tracker_is_edge_triggered() {
        let t = TierThresholds::default();
        let mut tracker = CompletionTracker::default();

        assert!(!tracker.observe(&compute(4, 5, &t)));
        assert!(tracker.observe(&compute(5, 5, &t)));
        // same level again
        assert!(!tracker.observe(&compute(5, 5, &t)));
        assert!(!tracker.observe(&compute(4, 5, &t)));
        assert!(tracker.observe(&compute(5, 5, &t)));
    }

    #[test]
    fn test_primed_tracker_does_not_fire() {
        let t = TierThresholds::default();
        let mut tracker = CompletionTracker::default();
        tracker.prime(&compute(3, 3, &t));
        assert!(!tracker.observe(&compute(3, 3, &t)));
    }
}
