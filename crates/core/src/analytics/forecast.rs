//! Demand forecasting from daily sales history.

use serde::{Deserialize, Serialize};

use super::round2;

/// Minimum samples before a projection is attempted.
const MIN_HISTORY_DAYS: usize = 7;

/// Samples from the tail of the history used for the moving average.
const MOVING_AVERAGE_WINDOW: usize = 30;

/// One day of observed sales for an item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSample {
    pub quantity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Demand projection for one item. Projection fields are absent when the
/// history is too short to forecast from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandForecast {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_daily_demand: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_weekly_demand: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_monthly_demand: Option<f64>,
    pub confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,
}

/// Project demand for an item from its recent sales history using a
/// moving average over the last [`MOVING_AVERAGE_WINDOW`] samples.
pub fn predict_demand(item_id: &str, history: &[SalesSample]) -> DemandForecast {
    if history.len() < MIN_HISTORY_DAYS {
        return DemandForecast {
            item_id: None,
            prediction: Some("Insufficient data".to_string()),
            predicted_daily_demand: None,
            predicted_weekly_demand: None,
            predicted_monthly_demand: None,
            confidence: Confidence::Low,
            trend: None,
        };
    }

    let window = &history[history.len().saturating_sub(MOVING_AVERAGE_WINDOW)..];
    let daily =
        window.iter().map(|sample| sample.quantity).sum::<f64>() / window.len() as f64;

    DemandForecast {
        item_id: Some(item_id.to_string()),
        prediction: None,
        predicted_daily_demand: Some(round2(daily)),
        predicted_weekly_demand: Some(round2(daily * 7.0)),
        predicted_monthly_demand: Some(round2(daily * 30.0)),
        confidence: Confidence::Medium,
        trend: Some("stable".to_string()),
    }
}
