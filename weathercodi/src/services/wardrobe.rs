//! Wardrobe service
//!
//! Clothing items and outfit history for the logged-in user, persisted under
//! `wardrobe_<userId>` and `codi_history_<userId>`. State is reloaded
//! whenever the session switches to a different user.
//!
//! Mutations build the new list, persist it, and only then replace the
//! in-memory copy, so a failed write leaves the store unchanged.

use crate::config::{MAX_CODI_HISTORY, MAX_RATING, MIN_RATING};
use crate::error::{AppError, Result};
use crate::events::{EventBus, StoreEvent};
use crate::models::{
    Category, ClothingItem, CodiHistory, Fit, Formality, NewClothingItem, Situation, User, Warmth,
    WeatherData,
};
use crate::services::scoring::{self, SituationRecommendation};
use crate::services::session::SessionStore;
use crate::services::trending::{self, TrendingOutfit};
use crate::storage::{codi_history_key, load_json, save_json, wardrobe_key, KeyValueStore};
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Default)]
struct WardrobeState {
    /// User whose data is loaded
    owner: Option<String>,
    items: Vec<ClothingItem>,
    history: Vec<CodiHistory>,
}

/// Service for the current user's wardrobe and outfit history
#[derive(Clone)]
pub struct WardrobeStore<S: KeyValueStore> {
    store: S,
    session: SessionStore<S>,
    state: Arc<Mutex<WardrobeState>>,
    events: EventBus,
    seed_defaults: bool,
}

impl<S: KeyValueStore> WardrobeStore<S> {
    pub fn new(store: S, session: SessionStore<S>, events: EventBus, seed_defaults: bool) -> Self {
        Self {
            store,
            session,
            state: Arc::new(Mutex::new(WardrobeState::default())),
            events,
            seed_defaults,
        }
    }

    /// Re-read the current user's wardrobe and history from storage
    pub async fn load(&self) -> Result<Vec<ClothingItem>> {
        let user = self.require_user().await?;
        let mut state = self.state.lock().await;
        self.reload(&user, &mut state).await?;
        Ok(state.items.clone())
    }

    /// Wardrobe snapshot; empty when nobody is logged in
    pub async fn items(&self) -> Result<Vec<ClothingItem>> {
        match self.session.current_user().await {
            Some(user) => Ok(self.loaded(&user).await?.items.clone()),
            None => Ok(Vec::new()),
        }
    }

    /// History snapshot, newest first; empty when nobody is logged in
    pub async fn history(&self) -> Result<Vec<CodiHistory>> {
        match self.session.current_user().await {
            Some(user) => Ok(self.loaded(&user).await?.history.clone()),
            None => Ok(Vec::new()),
        }
    }

    pub async fn add_item(&self, request: NewClothingItem) -> Result<ClothingItem> {
        let user = self.require_user().await?;
        let mut state = self.loaded(&user).await?;

        let taken: HashSet<&str> = state.items.iter().map(|i| i.id.as_str()).collect();
        let item = ClothingItem {
            id: timestamp_id(&taken),
            name: request.name.trim().to_string(),
            category: request.category,
            kind: request.kind.trim().to_string(),
            color: non_blank(request.color),
            brand: non_blank(request.brand),
            graphic: non_blank(request.graphic),
            fit: request.fit,
            warmth: request.warmth,
            formality: request.formality,
            wear_count: 0,
            last_worn: None,
            is_favorite: false,
        };

        let mut items = state.items.clone();
        items.push(item.clone());
        self.commit_items(&user, &mut state, items).await?;

        tracing::info!("Added clothing item {} ({})", item.id, item.name);
        Ok(item)
    }

    /// Remove an item; unknown ids leave the wardrobe unchanged
    pub async fn remove_item(&self, id: &str) -> Result<()> {
        let user = self.require_user().await?;
        let mut state = self.loaded(&user).await?;

        let items: Vec<ClothingItem> = state
            .items
            .iter()
            .filter(|i| i.id != id)
            .cloned()
            .collect();
        let removed = state.items.len() - items.len();
        self.commit_items(&user, &mut state, items).await?;

        tracing::info!("Removed {} clothing item(s) with id {}", removed, id);
        Ok(())
    }

    pub async fn toggle_favorite(&self, id: &str) -> Result<ClothingItem> {
        let user = self.require_user().await?;
        let mut state = self.loaded(&user).await?;

        let mut items = state.items.clone();
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::ItemNotFound(id.to_string()))?;
        item.is_favorite = !item.is_favorite;
        let toggled = item.clone();

        self.commit_items(&user, &mut state, items).await?;

        tracing::debug!("Item {} favorite = {}", toggled.id, toggled.is_favorite);
        Ok(toggled)
    }

    /// Record a worn outfit and bump wear counts of the matching items
    pub async fn add_codi_history(
        &self,
        items: &[ClothingItem],
        situation: Situation,
        rating: Option<u8>,
    ) -> Result<CodiHistory> {
        if let Some(r) = rating {
            if !(MIN_RATING..=MAX_RATING).contains(&r) {
                return Err(AppError::InvalidInput(format!(
                    "rating must be between {} and {}, got {}",
                    MIN_RATING, MAX_RATING, r
                )));
            }
        }

        let user = self.require_user().await?;
        let mut state = self.loaded(&user).await?;
        let now = Utc::now();

        let entry = CodiHistory {
            id: Uuid::new_v4().to_string(),
            user_id: user.id.clone(),
            items: items.to_vec(),
            situation,
            date: now,
            rating,
        };

        let mut history = Vec::with_capacity(MAX_CODI_HISTORY);
        history.push(entry.clone());
        history.extend(state.history.iter().take(MAX_CODI_HISTORY - 1).cloned());

        save_json(&self.store, &codi_history_key(&user.id), &history).await?;
        state.history = history;
        self.events.publish(StoreEvent::HistoryChanged);

        let worn: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        let mut wardrobe = state.items.clone();
        for item in wardrobe.iter_mut().filter(|i| worn.contains(i.id.as_str())) {
            item.wear_count = item.wear_count.saturating_add(1);
            item.last_worn = Some(now);
        }
        self.commit_items(&user, &mut state, wardrobe).await?;

        tracing::info!(
            "Recorded outfit {} ({} items, {:?})",
            entry.id,
            entry.items.len(),
            situation
        );
        Ok(entry)
    }

    /// One pick per category for `situation`, ranked from this wardrobe
    pub async fn recommend_for_situation(
        &self,
        situation: Situation,
        weather: &WeatherData,
    ) -> Result<SituationRecommendation> {
        let user = self.require_user().await?;
        let state = self.loaded(&user).await?;

        let recommendation = scoring::recommend(
            &state.items,
            user.preferences.as_ref(),
            situation,
            weather,
            &mut rand::thread_rng(),
        );

        tracing::info!(
            "Recommended {} wardrobe item(s) for {:?} at {}°C",
            recommendation.items().len(),
            situation,
            weather.temperature
        );
        Ok(recommendation)
    }

    /// Mock trending combinations matched against this wardrobe
    pub async fn trending_outfits(&self) -> Result<Vec<TrendingOutfit>> {
        let items = self.items().await?;
        Ok(trending::trending_outfits(&items))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    async fn require_user(&self) -> Result<User> {
        self.session
            .current_user()
            .await
            .ok_or(AppError::NotAuthenticated)
    }

    /// Lock the state, reloading first if it belongs to another user
    async fn loaded(&self, user: &User) -> Result<MutexGuard<'_, WardrobeState>> {
        let mut state = self.state.lock().await;
        if state.owner.as_deref() != Some(user.id.as_str()) {
            self.reload(user, &mut state).await?;
        }
        Ok(state)
    }

    async fn reload(&self, user: &User, state: &mut WardrobeState) -> Result<()> {
        let items: Option<Vec<ClothingItem>> =
            load_json(&self.store, &wardrobe_key(&user.id)).await?;
        let items = match items {
            Some(items) => items,
            None if self.seed_defaults => {
                let seeded = default_wardrobe();
                save_json(&self.store, &wardrobe_key(&user.id), &seeded).await?;
                tracing::info!("Seeded default wardrobe for user {}", user.id);
                seeded
            }
            None => Vec::new(),
        };

        let history: Option<Vec<CodiHistory>> =
            load_json(&self.store, &codi_history_key(&user.id)).await?;

        state.owner = Some(user.id.clone());
        state.items = items;
        state.history = history.unwrap_or_default();

        tracing::debug!(
            "Loaded wardrobe for user {}: {} items, {} history entries",
            user.id,
            state.items.len(),
            state.history.len()
        );

        self.events.publish(StoreEvent::WardrobeChanged);
        self.events.publish(StoreEvent::HistoryChanged);
        Ok(())
    }

    async fn commit_items(
        &self,
        user: &User,
        state: &mut WardrobeState,
        items: Vec<ClothingItem>,
    ) -> Result<()> {
        save_json(&self.store, &wardrobe_key(&user.id), &items).await?;
        state.items = items;
        self.events.publish(StoreEvent::WardrobeChanged);
        Ok(())
    }
}

/// Millisecond timestamp, bumped past any id already in use
fn timestamp_id(taken: &HashSet<&str>) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !taken.contains(id.as_str()) {
            return id;
        }
        candidate += 1;
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Starter wardrobe for users without a stored one
pub fn default_wardrobe() -> Vec<ClothingItem> {
    let starter = |id: &str, name: &str, category, kind: &str, color: &str, warmth| ClothingItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        kind: kind.to_string(),
        color: Some(color.to_string()),
        brand: None,
        graphic: None,
        fit: Fit::Regular,
        warmth,
        formality: Formality::Casual,
        wear_count: 0,
        last_worn: None,
        is_favorite: false,
    };

    vec![
        starter("1", "흰색 티셔츠", Category::Top, "반팔 티셔츠", "흰색", Warmth::Warm),
        starter("2", "청바지", Category::Bottom, "청바지", "파란색", Warmth::Mild),
        starter("3", "검은색 패딩", Category::Outer, "패딩", "검은색", Warmth::VeryCold),
        starter("4", "운동화", Category::Shoes, "스니커즈", "흰색", Warmth::Mild),
    ]
}
