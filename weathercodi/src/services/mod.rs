//! Services module
//!
//! Business logic over the key-value storage layer.

pub mod outfit;
pub mod scoring;
pub mod session;
pub mod settings;
pub mod trending;
pub mod wardrobe;
pub mod weather;

pub use outfit::{
    answer_quick_question, generic_outfit, generic_outfit_for, GenericOutfit, QuickQuestion,
};
pub use scoring::{CategoryPick, Pick, SituationRecommendation};
pub use session::SessionStore;
pub use settings::{AppSettings, SettingsService};
pub use trending::TrendingOutfit;
pub use wardrobe::WardrobeStore;
pub use weather::WeatherService;
