// weathercodi - weather-aware outfit recommendations
// Headless entry point: restores the session and logs today's suggestions

use weathercodi::app;
use weathercodi::models::Situation;
use weathercodi::services::generic_outfit_for;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weathercodi=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting weathercodi");

    let state = app::setup(app::data_dir_from_env()).await?;

    let weather = state
        .weather
        .current(&state.settings.default_location)
        .await?;
    let outfit = generic_outfit_for(&weather);

    tracing::info!(
        "Generic outfit: top={}, bottom={}, outer={}, shoes={}, accessories=[{}]",
        outfit.top,
        outfit.bottom,
        outfit.outer,
        outfit.shoes,
        outfit.accessories.join(", ")
    );
    tracing::info!("Tip: {}", outfit.tip);

    match state.session.current_user().await {
        Some(user) => {
            let recommendation = state
                .wardrobe
                .recommend_for_situation(Situation::Daily, &weather)
                .await?;
            tracing::info!(
                "{}님을 위한 추천 (trend {}%): {}",
                user.name,
                recommendation.trend_score,
                serde_json::to_string(&recommendation.picks)?
            );
            tracing::info!("{}", recommendation.reason);
        }
        None => tracing::info!("No saved session; log in to get wardrobe-based picks"),
    }

    Ok(())
}
