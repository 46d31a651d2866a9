//! Situation-aware outfit ranking
//!
//! Picks one wardrobe item per category for a situation and the current
//! weather. Categories with nothing suitable fall back to the generic
//! suggestion for that slot.
//!
//! Selection per category:
//! 1. If any item matches the situation's dress code, only those compete.
//! 2. Of those, only items rated for the temperature are suitable.
//! 3. Suitable items are ranked by [`score_item`] (stable, highest first).

use crate::config::{
    FREQUENTLY_WORN_THRESHOLD, MAX_TREND_SCORE, MIN_TREND_SCORE, OUTER_LAYER_MAX_TEMPERATURE,
    SCORE_FAVORITE, SCORE_FIT_MATCH, SCORE_FORMALITY_MATCH, SCORE_FREQUENTLY_WORN,
    SCORE_PREFERRED_BRAND, SCORE_PREFERRED_COLOR, SCORE_WARMTH_MATCH,
};
use crate::models::{
    Category, ClothingItem, Fit, Formality, Situation, UserPreferences, Warmth, WeatherData,
};
use crate::services::outfit::{generic_outfit_for, GenericOutfit};
use rand::Rng;
use serde::Serialize;
use std::cmp::Reverse;

/// Dress code and preferred silhouettes for a situation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SituationProfile {
    pub formality: [Formality; 2],
    pub fit: [Fit; 2],
}

pub fn situation_profile(situation: Situation) -> SituationProfile {
    use Fit::*;
    use Formality::*;

    let (formality, fit) = match situation {
        Situation::Daily => ([VeryCasual, Casual], [Regular, Loose]),
        Situation::Date => ([Casual, SemiFormal], [Regular, Tight]),
        Situation::Interview => ([Formal, SemiFormal], [Regular, Tight]),
        Situation::School => ([VeryCasual, Casual], [Regular, Oversized]),
        Situation::Exercise => ([VeryCasual, Casual], [Loose, Oversized]),
        Situation::Party => ([SemiFormal, Formal], [Tight, Regular]),
    };

    SituationProfile { formality, fit }
}

/// Warmth ratings suitable for a temperature (°C)
pub fn required_warmth(temperature: f64) -> [Warmth; 2] {
    if temperature < 5.0 {
        [Warmth::VeryCold, Warmth::Cold]
    } else if temperature < 10.0 {
        [Warmth::Cold, Warmth::Mild]
    } else if temperature < 20.0 {
        [Warmth::Mild, Warmth::Warm]
    } else {
        [Warmth::Warm, Warmth::VeryWarm]
    }
}

pub fn score_item(
    item: &ClothingItem,
    profile: &SituationProfile,
    required: &[Warmth; 2],
    preferences: Option<&UserPreferences>,
) -> u32 {
    let mut score = 0;

    if item.is_favorite {
        score += SCORE_FAVORITE;
    }
    if item.wear_count > FREQUENTLY_WORN_THRESHOLD {
        score += SCORE_FREQUENTLY_WORN;
    }
    if let Some(prefs) = preferences {
        if matches_any(item.color.as_deref(), &prefs.favorite_colors) {
            score += SCORE_PREFERRED_COLOR;
        }
        if matches_any(item.brand.as_deref(), &prefs.preferred_brands) {
            score += SCORE_PREFERRED_BRAND;
        }
    }
    if profile.formality.contains(&item.formality) {
        score += SCORE_FORMALITY_MATCH;
    }
    if profile.fit.contains(&item.fit) {
        score += SCORE_FIT_MATCH;
    }
    if required.contains(&item.warmth) {
        score += SCORE_WARMTH_MATCH;
    }

    score
}

fn matches_any(value: Option<&str>, wanted: &[String]) -> bool {
    value.is_some_and(|v| wanted.iter().any(|w| w == v))
}

/// Highest-ranked suitable item in `category`, if any
pub fn best_item<'a>(
    items: &'a [ClothingItem],
    category: Category,
    profile: &SituationProfile,
    required: &[Warmth; 2],
    preferences: Option<&UserPreferences>,
) -> Option<&'a ClothingItem> {
    let in_category: Vec<&ClothingItem> =
        items.iter().filter(|i| i.category == category).collect();

    let dress_code_available = in_category
        .iter()
        .any(|i| profile.formality.contains(&i.formality));

    let mut suitable: Vec<&ClothingItem> = in_category
        .into_iter()
        .filter(|i| !dress_code_available || profile.formality.contains(&i.formality))
        .filter(|i| required.contains(&i.warmth))
        .collect();

    suitable.sort_by_key(|i| Reverse(score_item(i, profile, required, preferences)));
    suitable.first().copied()
}

/// What fills one category slot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum Pick {
    Wardrobe(ClothingItem),
    /// Generic suggestion text when the wardrobe has nothing suitable
    Fallback(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPick {
    pub category: Category,
    pub pick: Pick,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SituationRecommendation {
    pub situation: Situation,
    pub picks: Vec<CategoryPick>,
    pub reason: String,
    /// Placeholder popularity, random in 1..=100
    pub trend_score: u8,
}

impl SituationRecommendation {
    pub fn pick(&self, category: Category) -> Option<&Pick> {
        self.picks
            .iter()
            .find(|p| p.category == category)
            .map(|p| &p.pick)
    }

    /// Wardrobe item chosen for `category`, if one was
    pub fn item(&self, category: Category) -> Option<&ClothingItem> {
        match self.pick(category) {
            Some(Pick::Wardrobe(item)) => Some(item),
            _ => None,
        }
    }

    /// All wardrobe items chosen, in category order
    pub fn items(&self) -> Vec<ClothingItem> {
        self.picks
            .iter()
            .filter_map(|p| match &p.pick {
                Pick::Wardrobe(item) => Some(item.clone()),
                Pick::Fallback(_) => None,
            })
            .collect()
    }
}

/// Categories filled for a temperature; outer only when it is cold enough
pub fn categories_for(temperature: f64) -> Vec<Category> {
    let mut categories = vec![Category::Top, Category::Bottom];
    if temperature < OUTER_LAYER_MAX_TEMPERATURE {
        categories.push(Category::Outer);
    }
    categories.push(Category::Shoes);
    categories
}

fn fallback_text(generic: &GenericOutfit, category: Category) -> String {
    match category {
        Category::Top => generic.top.clone(),
        Category::Bottom => generic.bottom.clone(),
        Category::Outer => generic.outer.clone(),
        Category::Shoes => generic.shoes.clone(),
        Category::Accessory => generic.accessories.join(", "),
    }
}

/// Rank `items` for `situation` under `weather`
pub fn recommend<R: Rng>(
    items: &[ClothingItem],
    preferences: Option<&UserPreferences>,
    situation: Situation,
    weather: &WeatherData,
    rng: &mut R,
) -> SituationRecommendation {
    let profile = situation_profile(situation);
    let required = required_warmth(weather.temperature);
    let generic = generic_outfit_for(weather);

    let mut picks = Vec::new();
    let mut fallbacks = Vec::new();

    for category in categories_for(weather.temperature) {
        let pick = match best_item(items, category, &profile, &required, preferences) {
            Some(item) => Pick::Wardrobe(item.clone()),
            None => {
                fallbacks.push(category.label());
                Pick::Fallback(fallback_text(&generic, category))
            }
        };
        picks.push(CategoryPick { category, pick });
    }

    let chosen = picks.len() - fallbacks.len();
    let mut reason = format!(
        "{} 상황에 맞춰 {} {}°C({}) 날씨를 고려했어요.",
        situation.label(),
        weather.location,
        weather.temperature,
        weather.condition
    );
    if chosen > 0 {
        reason.push_str(&format!(" 옷장에서 {}벌을 골랐어요.", chosen));
    }
    if !fallbacks.is_empty() {
        reason.push_str(&format!(
            " {}은(는) 알맞은 옷이 없어 기본 추천으로 대신했어요.",
            fallbacks.join(", ")
        ));
    }
    reason.push(' ');
    reason.push_str(&generic.tip);

    SituationRecommendation {
        situation,
        picks,
        reason,
        trend_score: rng.gen_range(MIN_TREND_SCORE..=MAX_TREND_SCORE),
    }
}
