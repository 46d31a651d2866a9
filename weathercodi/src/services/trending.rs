//! Trending outfits
//!
//! Fixed mock combinations with hard-coded popularity. Each combination
//! lists garment-type keywords that are matched against the wardrobe.

use crate::models::ClothingItem;
use serde::Serialize;

struct MockTrend {
    name: &'static str,
    keywords: &'static [&'static str],
    popularity: u8,
    reason: &'static str,
}

const MOCK_TRENDS: [MockTrend; 3] = [
    MockTrend {
        name: "미니멀 데일리룩",
        keywords: &["티셔츠", "청바지", "스니커즈"],
        popularity: 87,
        reason: "기본 아이템만으로 깔끔하게 완성하는 조합이에요.",
    },
    MockTrend {
        name: "댄디 오피스룩",
        keywords: &["셔츠", "슬랙스", "로퍼"],
        popularity: 74,
        reason: "출근이나 격식 있는 자리에 무난한 조합이에요.",
    },
    MockTrend {
        name: "겨울 캐주얼룩",
        keywords: &["니트", "패딩", "부츠"],
        popularity: 65,
        reason: "추운 날 보온과 활동성을 함께 챙기는 조합이에요.",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingOutfit {
    pub name: String,
    /// Popularity percentage (mock)
    pub popularity: u8,
    /// Fixed one-line description shown with the combination
    pub reason: String,
    /// Wardrobe items matching the combination's keywords
    pub items: Vec<ClothingItem>,
    /// Keywords nothing in the wardrobe matched
    pub missing: Vec<String>,
}

impl TrendingOutfit {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Match every mock combination against `wardrobe`.
///
/// A keyword takes the first item whose type contains it and that no earlier
/// keyword of the same combination already took.
pub fn trending_outfits(wardrobe: &[ClothingItem]) -> Vec<TrendingOutfit> {
    MOCK_TRENDS
        .iter()
        .map(|trend| {
            let mut items: Vec<ClothingItem> = Vec::new();
            let mut missing = Vec::new();

            for keyword in trend.keywords {
                let found = wardrobe.iter().find(|item| {
                    item.kind.contains(keyword) && !items.iter().any(|taken| taken.id == item.id)
                });
                match found {
                    Some(item) => items.push(item.clone()),
                    None => missing.push(keyword.to_string()),
                }
            }

            TrendingOutfit {
                name: trend.name.to_string(),
                popularity: trend.popularity,
                reason: trend.reason.to_string(),
                items,
                missing,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Fit, Formality, Warmth};

    fn item(id: &str, category: Category, kind: &str) -> ClothingItem {
        ClothingItem {
            id: id.to_string(),
            name: kind.to_string(),
            category,
            kind: kind.to_string(),
            color: None,
            brand: None,
            graphic: None,
            fit: Fit::Regular,
            warmth: Warmth::Mild,
            formality: Formality::Casual,
            wear_count: 0,
            last_worn: None,
            is_favorite: false,
        }
    }

    #[test]
    fn test_empty_wardrobe_matches_nothing() {
        let trends = trending_outfits(&[]);
        assert_eq!(trends.len(), 3);
        for trend in &trends {
            assert!(trend.items.is_empty());
            assert_eq!(trend.missing.len(), 3);
            assert!(!trend.is_complete());
            assert!(!trend.reason.is_empty());
        }
    }

    #[test]
    fn test_substring_matching() {
        let wardrobe = vec![
            item("1", Category::Top, "반팔 티셔츠"),
            item("2", Category::Bottom, "청바지"),
            item("3", Category::Shoes, "스니커즈"),
            item("4", Category::Outer, "패딩"),
        ];

        let trends = trending_outfits(&wardrobe);

        let daily = &trends[0];
        assert_eq!(daily.popularity, 87);
        assert_eq!(daily.reason, "기본 아이템만으로 깔끔하게 완성하는 조합이에요.");
        assert!(daily.is_complete());
        let ids: Vec<&str> = daily.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        let winter = &trends[2];
        assert_eq!(winter.items.len(), 1);
        assert_eq!(winter.missing, vec!["니트".to_string(), "부츠".to_string()]);
    }

    #[test]
    fn test_item_used_once_per_outfit() {
        // "티셔츠" contains "셔츠"; the office look must not reuse it twice
        let wardrobe = vec![item("1", Category::Top, "티셔츠")];
        let office = &trending_outfits(&wardrobe)[1];
        assert_eq!(office.items.len(), 1);
        assert_eq!(office.missing.len(), 2);
    }
}
