//! Action Routes
//!
//! Endpoints for submitting eco-actions and listing the log.
//!
//! - POST /api/v1/actions - Submit an action
//! - GET /api/v1/actions - Recent log entries

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    ActionDto, ActionsQuery, ActionsResponse, SubmitActionRequest, SubmitActionResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::photo::Photo;
use crate::scoring::{self, GrowthStage};
use crate::store::ActionRecord;

/// POST /api/v1/actions
///
/// Submit an eco-action: validate, score, persist, and report the new
/// total with its growth stage and carbon impact.
pub async fn submit_action(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubmitActionRequest>,
) -> ApiResult<(StatusCode, Json<SubmitActionResponse>)> {
    validate_submit_request(&req)?;

    let base = scoring::base_points(&req.category)
        .ok_or_else(|| ApiError::Validation(format!("Unknown category: '{}'", req.category)))?;

    // Photo failures surface inline as validation messages
    let photo = match &req.photo {
        Some(dto) => Some(Photo::from_base64(&dto.filename, &dto.data)?),
        None => None,
    };

    let score = scoring::score_action(base, &req.description, photo.is_some());
    let user = req.user.as_deref().unwrap_or("").trim();

    let record = ActionRecord::new(user, &req.category, &req.description, score.total());
    let total_points = state.store.submit(record).await?;

    let stage = GrowthStage::from_points(total_points);

    tracing::info!(
        user = %user,
        category = %req.category,
        awarded = score.total(),
        total_points,
        "Action logged"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitActionResponse {
            status: "ok".to_string(),
            base_points: score.base,
            tree_bonus: score.tree_bonus,
            photo_bonus: score.photo_bonus,
            awarded: score.total(),
            total_points,
            growth_stage: stage,
            growth_label: stage.to_string(),
            carbon_impact_kg: scoring::estimate_carbon_impact(total_points),
        }),
    ))
}

/// GET /api/v1/actions
///
/// Recent log entries, newest first.
pub async fn list_actions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ActionsQuery>,
) -> ApiResult<Json<ActionsResponse>> {
    let limit = query.limit.min(1000);
    let records = state.store.recent_actions(limit).await?;

    let actions = records
        .into_iter()
        .map(|r| ActionDto {
            timestamp: r.timestamp,
            user: r.user,
            category: r.category,
            description: r.description,
            points: r.points,
        })
        .collect();

    Ok(Json(ActionsResponse { actions }))
}

/// Validate a submission request
fn validate_submit_request(req: &SubmitActionRequest) -> ApiResult<()> {
    if req.category.is_empty() {
        return Err(ApiError::Validation("Please select a category".to_string()));
    }

    if req.description.trim().is_empty() {
        return Err(ApiError::Validation(
            "Action description cannot be empty".to_string(),
        ));
    }

    if req.description.len() > 2000 {
        return Err(ApiError::Validation(
            "Action description exceeds maximum length of 2000 characters".to_string(),
        ));
    }

    if let Some(user) = &req.user {
        if user.len() > 100 {
            return Err(ApiError::Validation(
                "User name exceeds maximum length of 100 characters".to_string(),
            ));
        }
    }

    Ok(())
}
