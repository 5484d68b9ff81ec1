//! Checklist Configuration
//!
//! Every field has a default, so a partial JSON object is a valid config.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::progress::TierThresholds;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    /// Key of the persisted record
    pub storage_key: String,
    /// Distance above a section's top at which it counts as reached
    pub nav_offset_px: f64,
    pub toast_lifespan_ms: u32,
    pub celebration_lifespan_ms: u32,
    /// Delay before a freshly activated category fades back in
    pub fade_delay_ms: u32,
    pub high_tier_min: u8,
    pub medium_tier_min: u8,
    pub messages: Messages,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            storage_key: "checklistState".to_string(),
            nav_offset_px: 200.0,
            toast_lifespan_ms: 3000,
            celebration_lifespan_ms: 5000,
            fade_delay_ms: 50,
            high_tier_min: 80,
            medium_tier_min: 50,
            messages: Messages::default(),
        }
    }
}

/// User-facing texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub reset_confirm: String,
    pub reset_done: String,
    pub saved: String,
    pub celebration_title: String,
    pub celebration_lines: Vec<String>,
    pub celebration_button: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            reset_confirm: "정말로 모든 체크리스트를 초기화하시겠습니까?".to_string(),
            reset_done: "체크리스트가 초기화되었습니다! 🌱".to_string(),
            saved: "체크리스트 상태가 저장되었습니다! 💾".to_string(),
            celebration_title: "🎉 축하합니다! 🎉".to_string(),
            celebration_lines: vec![
                "모든 환경 보호 체크리스트를 완료하셨습니다!".to_string(),
                "당신의 작은 실천이 지구를 더 아름답게 만들고 있어요.".to_string(),
            ],
            celebration_button: "확인".to_string(),
        }
    }
}

impl ChecklistConfig {
    /// Parse JSON overrides; malformed input falls back to defaults
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(config) => config.validated(),
            Err(e) => {
                warn!("invalid checklist config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Reset tier thresholds unless `medium <= high <= 100`
    pub fn validated(mut self) -> Self {
        if self.medium_tier_min > self.high_tier_min || self.high_tier_min > 100 {
            warn!(
                "tier thresholds medium={} high={} out of order, using defaults",
                self.medium_tier_min, self.high_tier_min
            );
            let defaults = TierThresholds::default();
            self.high_tier_min = defaults.high;
            self.medium_tier_min = defaults.medium;
        }
        self
    }

    pub fn thresholds(&self) -> TierThresholds {
        TierThresholds {
            high: self.high_tier_min,
            medium: self.medium_tier_min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_overrides() {
        let config = ChecklistConfig::from_json(r#"{"storage_key":"eco","toast_lifespan_ms":1000}"#);
        assert_eq!(config.storage_key, "eco");
        assert_eq!(config.toast_lifespan_ms, 1000);
        assert_eq!(config.celebration_lifespan_ms, 5000);
        assert_eq!(config.messages, Messages::default());
    }

    #[test]
    fn test_malformed_falls_back() {
        assert_eq!(ChecklistConfig::from_json("{oops"), ChecklistConfig::default());
    }

    #[test]
    fn test_thresholds_validated() {
        let config = ChecklistConfig::from_json(r#"{"high_tier_min":40,"medium_tier_min":60}"#);
        assert_eq!(config.thresholds(), TierThresholds::default());

        let config = ChecklistConfig::from_json(r#"{"high_tier_min":90,"medium_tier_min":60}"#);
        assert_eq!(config.thresholds(), TierThresholds { high: 90, medium: 60 });
    }
}
