//! Community Routes
//!
//! Habit goals and community stories. Both return a static
//! acknowledgement and persist nothing.
//!
//! - POST /api/v1/habits - Set a habit goal
//! - POST /api/v1/stories - Share a story

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{AckResponse, HabitRequest, StoryRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/v1/habits
pub async fn set_habit(
    State(_state): State<Arc<AppState>>,
    Json(req): Json<HabitRequest>,
) -> ApiResult<Json<AckResponse>> {
    if req.goal.trim().is_empty() {
        return Err(ApiError::Validation("Habit goal cannot be empty".to_string()));
    }

    tracing::info!(goal = %req.goal, "Habit goal set");

    Ok(Json(AckResponse {
        status: "ok".to_string(),
        message: format!("🎯 Goal set: {}", req.goal),
    }))
}

/// POST /api/v1/stories
pub async fn post_story(
    State(_state): State<Arc<AppState>>,
    Json(req): Json<StoryRequest>,
) -> ApiResult<Json<AckResponse>> {
    if req.story.trim().is_empty() {
        return Err(ApiError::Validation("Story cannot be empty".to_string()));
    }

    tracing::info!(chars = req.story.len(), "Community story shared");

    Ok(Json(AckResponse {
        status: "ok".to_string(),
        message: "🎉 Your story has been shared!".to_string(),
    }))
}
