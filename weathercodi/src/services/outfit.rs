//! Generic outfit suggestions
//!
//! Wardrobe-independent advice from temperature bands, with rain and wind
//! adjustments. Also the fallback for categories the wardrobe cannot fill.

use crate::config::SHORT_SLEEVE_MIN_TEMPERATURE;
use crate::models::WeatherData;
use serde::Serialize;

/// Outer layer suggested below 5°C, whatever the rain or wind
pub const HEAVY_COAT: &str = "패딩 또는 두꺼운 코트";

const UMBRELLA: &str = "우산";
const RAIN_TIP: &str = " 비 소식이 있으니 우산을 꼭 챙기세요.";
const WIND_TIP: &str = " 바람이 강하니 바람막이를 챙기면 좋아요.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenericOutfit {
    pub top: String,
    pub bottom: String,
    pub outer: String,
    pub shoes: String,
    pub accessories: Vec<String>,
    pub tip: String,
}

struct Band {
    top: &'static str,
    bottom: &'static str,
    outer: &'static str,
    shoes: &'static str,
    accessories: &'static [&'static str],
    rainy_accessories: &'static [&'static str],
    tip: &'static str,
}

const FREEZING: Band = Band {
    top: "기모 니트",
    bottom: "기모 바지",
    outer: HEAVY_COAT,
    shoes: "부츠",
    accessories: &["목도리", "장갑"],
    rainy_accessories: &["목도리", UMBRELLA, "장갑"],
    tip: "매우 추우니 보온에 신경쓰세요!",
};

const COLD: Band = Band {
    top: "두꺼운 니트",
    bottom: "청바지 또는 면바지",
    outer: "코트 또는 점퍼",
    shoes: "운동화 또는 부츠",
    accessories: &["머플러"],
    rainy_accessories: &[UMBRELLA, "머플러"],
    tip: "쌀쌀하니 겉옷은 필수예요!",
};

const CHILLY: Band = Band {
    top: "얇은 니트 또는 맨투맨",
    bottom: "청바지",
    outer: "가디건 또는 얇은 재킷",
    shoes: "스니커즈",
    accessories: &[],
    rainy_accessories: &[UMBRELLA],
    tip: "일교차가 클 수 있어요. 가벼운 겉옷 추천!",
};

const MILD: Band = Band {
    top: "긴팔 셔츠",
    bottom: "면바지 또는 청바지",
    outer: "얇은 재킷 (선택사항)",
    shoes: "스니커즈",
    accessories: &[],
    rainy_accessories: &[UMBRELLA],
    tip: "완벽한 날씨! 가벼운 겉옷 정도면 충분해요.",
};

const WARM: Band = Band {
    top: "반팔 또는 얇은 긴팔",
    bottom: "면바지 또는 청바지",
    outer: "필요없음",
    shoes: "스니커즈 또는 샌들",
    accessories: &["선글라스"],
    rainy_accessories: &[UMBRELLA],
    tip: "선선하고 좋은 날씨예요!",
};

const HOT: Band = Band {
    top: "반팔 티셔츠",
    bottom: "반바지 또는 얇은 바지",
    outer: "필요없음",
    shoes: "샌들 또는 통풍 좋은 신발",
    accessories: &["선글라스", "모자"],
    rainy_accessories: &[UMBRELLA, "선글라스"],
    tip: "더우니 통풍 좋은 옷을 입으세요!",
};

fn band_for(temperature: f64) -> &'static Band {
    if temperature < 5.0 {
        &FREEZING
    } else if temperature < 10.0 {
        &COLD
    } else if temperature < 15.0 {
        &CHILLY
    } else if temperature < 20.0 {
        &MILD
    } else if temperature < 25.0 {
        &WARM
    } else {
        &HOT
    }
}

/// Suggestion for a temperature (°C) and rain/wind flags
pub fn generic_outfit(temperature: f64, rainy: bool, windy: bool) -> GenericOutfit {
    let band = band_for(temperature);

    let accessories = if rainy {
        band.rainy_accessories
    } else {
        band.accessories
    };

    let mut tip = band.tip.to_string();
    if rainy {
        tip.push_str(RAIN_TIP);
    }
    if windy {
        tip.push_str(WIND_TIP);
    }

    GenericOutfit {
        top: band.top.to_string(),
        bottom: band.bottom.to_string(),
        outer: band.outer.to_string(),
        shoes: band.shoes.to_string(),
        accessories: accessories.iter().map(|a| a.to_string()).collect(),
        tip,
    }
}

/// Suggestion for the given conditions
pub fn generic_outfit_for(weather: &WeatherData) -> GenericOutfit {
    generic_outfit(weather.temperature, weather.is_rainy(), weather.is_windy())
}

/// Canned one-tap questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickQuestion {
    ShortSleeves,
    Umbrella,
    Outerwear,
}

impl QuickQuestion {
    pub const ALL: [QuickQuestion; 3] = [
        QuickQuestion::ShortSleeves,
        QuickQuestion::Umbrella,
        QuickQuestion::Outerwear,
    ];

    pub fn text(self) -> &'static str {
        match self {
            QuickQuestion::ShortSleeves => "반팔 입어도 될까?",
            QuickQuestion::Umbrella => "우산 챙겨야 해?",
            QuickQuestion::Outerwear => "겉옷 필요해?",
        }
    }

    /// Recognize free text by its keyword
    pub fn parse(question: &str) -> Option<Self> {
        if question.contains("반팔") {
            Some(QuickQuestion::ShortSleeves)
        } else if question.contains("우산") {
            Some(QuickQuestion::Umbrella)
        } else if question.contains("겉옷") {
            Some(QuickQuestion::Outerwear)
        } else {
            None
        }
    }
}

/// Generic suggestion with the tip replaced by an answer to `question`
pub fn answer_quick_question(question: QuickQuestion, weather: &WeatherData) -> GenericOutfit {
    let mut outfit = generic_outfit_for(weather);

    outfit.tip = match question {
        QuickQuestion::ShortSleeves => {
            if weather.temperature > SHORT_SLEEVE_MIN_TEMPERATURE {
                "네! 반팔 입기 딱 좋은 날씨예요 👕".to_string()
            } else {
                "아직 쌀쌀해요. 긴팔을 추천드려요 🧥".to_string()
            }
        }
        QuickQuestion::Umbrella => {
            if weather.is_rainy() {
                "우산 꼭 챙기세요! 비 올 확률이 높아요 ☂️".to_string()
            } else {
                "우산은 필요없을 것 같아요 ☀️".to_string()
            }
        }
        QuickQuestion::Outerwear => {
            if weather.temperature < SHORT_SLEEVE_MIN_TEMPERATURE {
                format!("겉옷을 챙기세요! {} 정도를 추천해요 🧥", outfit.outer)
            } else {
                "겉옷은 필요없을 것 같아요 😎".to_string()
            }
        }
    };

    outfit
}
