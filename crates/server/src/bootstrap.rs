//! Server bootstrap: wire config into the engine and its collaborators.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use stockpilot_agent::GeminiInsightClient;
use stockpilot_core::config::AppConfig;
use stockpilot_core::{DisabledInsights, InsightSource, RecommendationEngine};

use crate::api::AppState;

pub struct Application {
    pub config: AppConfig,
    pub state: AppState,
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application> {
    let insights: Arc<dyn InsightSource> = match GeminiInsightClient::from_config(&config.insight) {
        Some(client) => {
            info!(
                event_name = "system.insight.enabled",
                model = %config.insight.model,
                "insight enrichment enabled"
            );
            Arc::new(client)
        }
        None => {
            info!(
                event_name = "system.insight.disabled",
                "no insight API key configured, enrichment disabled"
            );
            Arc::new(DisabledInsights)
        }
    };

    let engine = Arc::new(RecommendationEngine::new().with_insights(insights));

    Ok(Application { state: AppState { engine }, config })
}
