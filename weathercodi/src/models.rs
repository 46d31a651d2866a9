//! Domain models
//!
//! Rust structs representing persisted entities.
//! Field names follow the camelCase JSON layout stored under each key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{RAIN_PRECIPITATION_THRESHOLD, WINDY_SPEED_THRESHOLD};

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,
}

/// Personal style tags used when ranking wardrobe items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub favorite_colors: Vec<String>,
    #[serde(default)]
    pub preferred_brands: Vec<String>,
    #[serde(default)]
    pub body_type: BodyType,
    #[serde(default)]
    pub style: Style,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    Slim,
    #[default]
    Regular,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    #[default]
    Casual,
    Formal,
    Trendy,
    Classic,
}

/// Wardrobe slot a clothing item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Top,
    Bottom,
    Outer,
    Shoes,
    Accessory,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Top,
        Category::Bottom,
        Category::Outer,
        Category::Shoes,
        Category::Accessory,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Category::Top => "상의",
            Category::Bottom => "하의",
            Category::Outer => "겉옷",
            Category::Shoes => "신발",
            Category::Accessory => "액세서리",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fit {
    Tight,
    #[default]
    Regular,
    Loose,
    Oversized,
}

/// Five-point insulation rating, coldest weather first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Warmth {
    VeryCold,
    Cold,
    Mild,
    Warm,
    VeryWarm,
}

impl Warmth {
    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Warmth::VeryCold => "매우 추움용",
            Warmth::Cold => "추움용",
            Warmth::Mild => "보통",
            Warmth::Warm => "따뜻함용",
            Warmth::VeryWarm => "매우 더움용",
        }
    }
}

/// Five-point dress-code rating, most casual first
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    VeryCasual,
    #[default]
    Casual,
    SemiFormal,
    Formal,
    VeryFormal,
}

/// A piece of clothing in a user's wardrobe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Free-text garment type, e.g. "반팔 티셔츠"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphic: Option<String>,
    #[serde(default)]
    pub fit: Fit,
    pub warmth: Warmth,
    #[serde(rename = "formalness", default)]
    pub formality: Formality,
    #[serde(default)]
    pub wear_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_worn: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Add item request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClothingItem {
    pub name: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub graphic: Option<String>,
    #[serde(default)]
    pub fit: Fit,
    pub warmth: Warmth,
    #[serde(rename = "formalness", default)]
    pub formality: Formality,
}

impl NewClothingItem {
    /// Minimal request with default fit and formality
    pub fn new(
        name: impl Into<String>,
        category: Category,
        kind: impl Into<String>,
        warmth: Warmth,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            kind: kind.into(),
            color: None,
            brand: None,
            graphic: None,
            fit: Fit::default(),
            warmth,
            formality: Formality::default(),
        }
    }
}

/// Occasion an outfit is chosen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Situation {
    Daily,
    Date,
    Interview,
    School,
    Exercise,
    Party,
}

impl Situation {
    pub const ALL: [Situation; 6] = [
        Situation::Daily,
        Situation::Date,
        Situation::Interview,
        Situation::School,
        Situation::Exercise,
        Situation::Party,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Situation::Daily => "일상",
            Situation::Date => "데이트",
            Situation::Interview => "면접",
            Situation::School => "등교",
            Situation::Exercise => "운동",
            Situation::Party => "파티",
        }
    }
}

/// One outfit the user actually wore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodiHistory {
    pub id: String,
    pub user_id: String,
    /// Snapshot of the items as they were when chosen
    pub items: Vec<ClothingItem>,
    pub situation: Situation,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// Current conditions for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub location: String,
    /// °C
    pub temperature: f64,
    pub condition: String,
    /// %
    pub humidity: u8,
    /// m/s
    pub wind_speed: f64,
    /// °C
    pub feels_like: f64,
    /// Probability of precipitation, %
    pub precipitation: u8,
}

/// Coarse sky classification derived from the condition text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sky {
    Rainy,
    Cloudy,
    Clear,
}

impl WeatherData {
    pub fn is_rainy(&self) -> bool {
        self.precipitation > RAIN_PRECIPITATION_THRESHOLD
    }

    pub fn is_windy(&self) -> bool {
        self.wind_speed > WINDY_SPEED_THRESHOLD
    }

    pub fn sky(&self) -> Sky {
        let condition = self.condition.to_lowercase();
        if condition.contains('비') || condition.contains("rain") {
            Sky::Rainy
        } else if condition.contains("흐림") || condition.contains("구름") {
            Sky::Cloudy
        } else {
            Sky::Clear
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(condition: &str, precipitation: u8, wind_speed: f64) -> WeatherData {
        WeatherData {
            location: "서울".to_string(),
            temperature: 18.0,
            condition: condition.to_string(),
            humidity: 60,
            wind_speed,
            feels_like: 17.0,
            precipitation,
        }
    }

    #[test]
    fn test_clothing_item_json_layout() {
        let json = r#"{
            "id": "1",
            "name": "흰색 티셔츠",
            "category": "top",
            "type": "반팔 티셔츠",
            "color": "흰색",
            "warmth": "warm"
        }"#;

        let item: ClothingItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, "반팔 티셔츠");
        assert_eq!(item.fit, Fit::Regular);
        assert_eq!(item.formality, Formality::Casual);
        assert_eq!(item.wear_count, 0);
        assert!(!item.is_favorite);

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "반팔 티셔츠");
        assert_eq!(value["formalness"], "casual");
        assert_eq!(value["wearCount"], 0);
        assert_eq!(value["isFavorite"], false);
        assert!(value.get("lastWorn").is_none());
    }

    #[test]
    fn test_user_without_preferences() {
        let user: User =
            serde_json::from_str(r#"{"id":"1","email":"a@b.c","name":"김철수"}"#).unwrap();
        assert!(user.preferences.is_none());

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("preferences"));
    }

    #[test]
    fn test_enum_ordering() {
        assert!(Warmth::VeryCold < Warmth::VeryWarm);
        assert!(Formality::SemiFormal < Formality::Formal);
    }

    #[test]
    fn test_sky_classification() {
        assert_eq!(weather("비", 80, 2.0).sky(), Sky::Rainy);
        assert_eq!(weather("Light rain", 80, 2.0).sky(), Sky::Rainy);
        assert_eq!(weather("흐림", 20, 2.0).sky(), Sky::Cloudy);
        assert_eq!(weather("구름 많음", 20, 2.0).sky(), Sky::Cloudy);
        assert_eq!(weather("맑음", 0, 2.0).sky(), Sky::Clear);
    }

    #[test]
    fn test_rain_and_wind_thresholds() {
        assert!(!weather("흐림", 50, 4.0).is_rainy());
        assert!(weather("흐림", 51, 4.0).is_rainy());
        assert!(!weather("흐림", 50, 4.0).is_windy());
        assert!(weather("흐림", 50, 4.1).is_windy());
    }
}
