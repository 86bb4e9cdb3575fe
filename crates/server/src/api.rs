//! Decision-support API endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use stockpilot_core::analytics::{
    analyze_inventory, optimize_pricing, predict_demand, DemandForecast, InventoryInsights,
    PriceSuggestion, SalesSample,
};
use stockpilot_core::discovery::{self, DiscoverySearch};
use stockpilot_core::recommend::{Item, Recommendation, Vendor};
use stockpilot_core::vendors::{analyze_vendor, OrderRecord, VendorAnalysis};
use stockpilot_core::{DomainError, RecommendationEngine};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/recommend-purchase", post(recommend_purchase))
        .route("/api/inventory-insights", post(inventory_insights))
        .route("/api/vendor-analysis", post(vendor_analysis))
        .route("/api/predict-demand", post(demand_prediction))
        .route("/api/optimize-pricing", post(pricing_optimization))
        .route("/api/vendor-discovery/search", post(vendor_discovery_search))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (StatusCode::BAD_REQUEST, Json(ApiError { success: false, error: message.into() }))
}

fn domain_error(error: DomainError) -> (StatusCode, Json<ApiError>) {
    bad_request(error.to_string())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub vendors: Vec<Vendor>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RecommendSummary>,
}

/// Batch-level rollup. Field names intentionally stay snake_case on the
/// wire, matching the established client contract.
#[derive(Debug, Serialize)]
pub struct RecommendSummary {
    pub total_items: usize,
    pub total_recommendations: usize,
    pub estimated_savings: f64,
}

pub async fn recommend_purchase(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> ApiResult<RecommendResponse> {
    if request.items.is_empty() {
        return Ok(Json(RecommendResponse {
            success: true,
            message: Some("No items to analyze".to_string()),
            recommendations: Vec::new(),
            summary: None,
        }));
    }

    let recommendations = state
        .engine
        .plan_recommendations(&request.items, &request.vendors)
        .await
        .map_err(domain_error)?;

    info!(
        event_name = "api.recommend_purchase",
        items = request.items.len(),
        recommendations = recommendations.len(),
        "recommendation batch served"
    );

    let summary = RecommendSummary {
        total_items: request.items.len(),
        total_recommendations: recommendations.len(),
        estimated_savings: recommendations.iter().map(|r| r.estimated_savings).sum(),
    };

    Ok(Json(RecommendResponse {
        success: true,
        message: None,
        recommendations,
        summary: Some(summary),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsRequest {
    #[serde(default)]
    pub items: Vec<Item>,
    /// Only the count feeds the analysis; order shape is unconstrained.
    #[serde(default)]
    pub recent_orders: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub success: bool,
    pub insights: InventoryInsights,
}

pub async fn inventory_insights(
    Json(request): Json<InsightsRequest>,
) -> ApiResult<InsightsResponse> {
    let insights = analyze_inventory(&request.items, request.recent_orders.len());
    Ok(Json(InsightsResponse { success: true, insights }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorAnalysisRequest {
    pub vendor: Vendor,
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
}

#[derive(Debug, Serialize)]
pub struct VendorAnalysisResponse {
    pub success: bool,
    pub analysis: VendorAnalysis,
}

pub async fn vendor_analysis(
    Json(request): Json<VendorAnalysisRequest>,
) -> ApiResult<VendorAnalysisResponse> {
    let analysis = analyze_vendor(&request.vendor, &request.orders);
    Ok(Json(VendorAnalysisResponse { success: true, analysis }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandRequest {
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub historical_data: Vec<SalesSample>,
}

#[derive(Debug, Serialize)]
pub struct DemandResponse {
    pub success: bool,
    pub prediction: DemandForecast,
}

pub async fn demand_prediction(Json(request): Json<DemandRequest>) -> ApiResult<DemandResponse> {
    let Some(item_id) = request.item_id.as_deref() else {
        return Err(bad_request("itemId is required"));
    };

    let prediction = predict_demand(item_id, &request.historical_data);
    Ok(Json(DemandResponse { success: true, prediction }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Serialize)]
pub struct PricingResponse {
    pub success: bool,
    pub suggestions: Vec<PriceSuggestion>,
}

pub async fn pricing_optimization(
    Json(request): Json<PricingRequest>,
) -> ApiResult<PricingResponse> {
    let suggestions = optimize_pricing(&request.items);
    Ok(Json(PricingResponse { success: true, suggestions }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryRequest {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

pub async fn vendor_discovery_search(
    Json(request): Json<DiscoveryRequest>,
) -> ApiResult<DiscoverySearch> {
    let Some(product_name) =
        request.product_name.as_deref().filter(|name| !name.trim().is_empty())
    else {
        return Err(bad_request("Product name is required"));
    };

    let results = discovery::search(product_name, request.quantity.unwrap_or(1));
    Ok(Json(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpilot_core::recommend::{AlwaysInStock, VendorPerformance, VendorProduct};

    fn state() -> AppState {
        AppState {
            engine: Arc::new(
                RecommendationEngine::new().with_stock_signal(Arc::new(AlwaysInStock)),
            ),
        }
    }

    fn vendor(id: &str, price: f64) -> Vendor {
        Vendor {
            id: id.to_string(),
            name: format!("Vendor {id}"),
            source: "Database".to_string(),
            is_online: false,
            country: "N/A".to_string(),
            rating: 4.5,
            delivery_time: Some(7),
            products: vec![VendorProduct {
                item_name: "USB Cable".to_string(),
                price,
                moq: 1,
                lead_time: None,
            }],
            performance: VendorPerformance::default(),
        }
    }

    #[tokio::test]
    async fn empty_item_batch_is_a_soft_success() {
        let Json(response) = recommend_purchase(
            State(state()),
            Json(RecommendRequest { items: Vec::new(), vendors: Vec::new() }),
        )
        .await
        .expect("handler");

        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("No items to analyze"));
        assert!(response.recommendations.is_empty());
        assert!(response.summary.is_none());
    }

    #[tokio::test]
    async fn recommendation_batch_carries_a_summary() {
        let request = RecommendRequest {
            items: vec![Item::new("I1", "USB Cable").with_stock(2, 10).with_daily_sales(1.0)],
            vendors: vec![vendor("V1", 5.0), vendor("V2", 7.0)],
        };

        let Json(response) =
            recommend_purchase(State(state()), Json(request)).await.expect("handler");

        let summary = response.summary.expect("summary");
        assert_eq!(summary.total_items, 1);
        assert_eq!(summary.total_recommendations, 1);
        assert!(summary.estimated_savings > 0.0);
    }

    #[tokio::test]
    async fn malformed_vendor_input_maps_to_bad_request() {
        let mut invalid = vendor("V1", 5.0);
        invalid.rating = 9.0;
        let request = RecommendRequest {
            items: vec![Item::new("I1", "USB Cable")],
            vendors: vec![invalid],
        };

        let (status, Json(error)) =
            recommend_purchase(State(state()), Json(request)).await.expect_err("should fail");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!error.success);
        assert!(error.error.contains("rating"));
    }

    #[tokio::test]
    async fn demand_prediction_requires_an_item_id() {
        let (status, Json(error)) =
            demand_prediction(Json(DemandRequest { item_id: None, historical_data: Vec::new() }))
                .await
                .expect_err("should fail");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, "itemId is required");
    }

    #[tokio::test]
    async fn discovery_requires_a_product_name() {
        let (status, Json(error)) = vendor_discovery_search(Json(DiscoveryRequest {
            product_name: Some("  ".to_string()),
            quantity: None,
        }))
        .await
        .expect_err("should fail");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, "Product name is required");
    }

    #[tokio::test]
    async fn discovery_returns_marketplace_quotes() {
        let Json(search) = vendor_discovery_search(Json(DiscoveryRequest {
            product_name: Some("USB Cable".to_string()),
            quantity: Some(25),
        }))
        .await
        .expect("handler");

        assert!(search.total_results > 0);
        assert!(search.results.iter().all(|result| result.discount == 5));
    }
}
