//! Progress Routes
//!
//! - GET /api/v1/progress - Total points, growth stage, carbon impact

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::ProgressResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::scoring::{estimate_carbon_impact, GrowthStage};

/// GET /api/v1/progress
pub async fn get_progress(State(state): State<Arc<AppState>>) -> ApiResult<Json<ProgressResponse>> {
    let total_points = state.store.total_points().await;
    let stage = GrowthStage::from_points(total_points);

    Ok(Json(ProgressResponse {
        total_points,
        growth_stage: stage,
        growth_label: stage.to_string(),
        carbon_impact_kg: estimate_carbon_impact(total_points),
    }))
}
