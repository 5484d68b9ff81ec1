//! Page Catalog
//!
//! The fixed set of sections, categories and checklist items. Item ids are
//! stored in the browser, so renaming one orphans its saved state.

use crate::models::{Card, Category, ChecklistItem, PageSection};

pub const CHECKLIST_SECTION: &str = "checklist";

pub const SECTIONS: &[PageSection] = &[
    PageSection { id: "home", label: "홈" },
    PageSection { id: "about", label: "소개" },
    PageSection { id: CHECKLIST_SECTION, label: "체크리스트" },
    PageSection { id: "tips", label: "실천 팁" },
];

pub const DEFAULT_CATEGORY: &str = "energy";

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "energy",
        label: "에너지 절약",
        icon: "⚡",
        items: &[
            ChecklistItem {
                id: "energy-1",
                title: "사용하지 않는 전자제품 플러그 뽑기",
                description: "대기전력만 줄여도 가정 전력의 약 6%를 아낄 수 있어요.",
            },
            ChecklistItem {
                id: "energy-2",
                title: "LED 조명으로 교체하기",
                description: "백열등보다 전력 소비가 훨씬 적고 수명도 길어요.",
            },
            ChecklistItem {
                id: "energy-3",
                title: "적정 실내 온도 유지하기",
                description: "여름 26℃, 겨울 20℃를 지켜 냉난방 에너지를 줄여요.",
            },
        ],
    },
    Category {
        id: "water",
        label: "물 절약",
        icon: "💧",
        items: &[
            ChecklistItem {
                id: "water-1",
                title: "양치할 때 컵 사용하기",
                description: "물을 틀어 놓지 않으면 한 번에 수 리터를 아낄 수 있어요.",
            },
            ChecklistItem {
                id: "water-2",
                title: "샤워 시간 5분 이내로 줄이기",
                description: "짧은 샤워는 물과 온수 에너지를 함께 아껴요.",
            },
            ChecklistItem {
                id: "water-3",
                title: "빨래는 모아서 한 번에 하기",
                description: "세탁 횟수를 줄이면 물과 전기를 모두 절약해요.",
            },
        ],
    },
    Category {
        id: "waste",
        label: "쓰레기 줄이기",
        icon: "♻️",
        items: &[
            ChecklistItem {
                id: "waste-1",
                title: "장바구니와 텀블러 챙기기",
                description: "일회용 봉투와 컵 사용을 줄여요.",
            },
            ChecklistItem {
                id: "waste-2",
                title: "분리배출 규칙 지키기",
                description: "깨끗이 비우고 헹궈서 종류별로 나눠 버려요.",
            },
            ChecklistItem {
                id: "waste-3",
                title: "음식물 쓰레기 줄이기",
                description: "필요한 만큼만 사고, 남은 음식은 보관해 다시 먹어요.",
            },
        ],
    },
    Category {
        id: "transport",
        label: "친환경 이동",
        icon: "🚲",
        items: &[
            ChecklistItem {
                id: "transport-1",
                title: "가까운 거리는 걷거나 자전거 타기",
                description: "짧은 이동부터 자동차 대신 두 발로 움직여요.",
            },
            ChecklistItem {
                id: "transport-2",
                title: "대중교통 이용하기",
                description: "버스와 지하철은 1인당 탄소 배출이 훨씬 적어요.",
            },
        ],
    },
];

pub const ABOUT_CARDS: &[Card] = &[
    Card {
        icon: "🌍",
        title: "왜 체크리스트인가요?",
        body: "작은 습관이 모이면 큰 변화가 됩니다. 매일 실천할 수 있는 행동을 정리했어요.",
    },
    Card {
        icon: "📈",
        title: "진행률 확인",
        body: "체크할 때마다 진행률이 바로 계산되고, 브라우저에 자동으로 저장돼요.",
    },
    Card {
        icon: "🎉",
        title: "모두 완료하면",
        body: "모든 항목을 완료하면 축하 메시지가 기다리고 있어요.",
    },
];

pub const TIPS: &[Card] = &[
    Card {
        icon: "🛒",
        title: "현명한 소비",
        body: "오래 쓸 수 있는 제품을 고르고, 꼭 필요한 것만 구매해요.",
    },
    Card {
        icon: "🌱",
        title: "식물 기르기",
        body: "실내 식물은 공기를 맑게 하고 마음도 편안하게 해줘요.",
    },
    Card {
        icon: "🤝",
        title: "함께 실천하기",
        body: "가족, 친구와 체크리스트를 공유하고 서로 응원해요.",
    },
];

/// Every checklist item id, in page order
pub fn item_ids() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().flat_map(|c| c.items.iter().map(|item| item.id))
}

pub fn category_ids() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|c| c.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_item_ids_are_unique() {
        let ids: Vec<_> = item_ids().collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.len(), 11);
    }

    #[test]
    fn test_default_category_exists() {
        assert!(category_ids().any(|id| id == DEFAULT_CATEGORY));
        let unique: HashSet<_> = category_ids().collect();
        assert_eq!(unique.len(), CATEGORIES.len());
    }

    #[test]
    fn test_sections_include_checklist() {
        assert!(SECTIONS.iter().any(|s| s.id == CHECKLIST_SECTION));
        // section and category ids share the document's id namespace
        let sections: HashSet<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert!(category_ids().all(|id| !sections.contains(id)));
    }
}
