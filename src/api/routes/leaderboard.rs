//! Leaderboard Routes
//!
//! - GET /api/v1/leaderboard - Cross-user point totals, highest first

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{LeaderboardResponse, LeaderboardRowDto};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/leaderboard
pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<LeaderboardResponse>> {
    let rows = state
        .store
        .leaderboard()
        .await
        .into_iter()
        .map(|row| LeaderboardRowDto {
            user: row.user,
            points: row.points,
        })
        .collect();

    Ok(Json(LeaderboardResponse { rows }))
}
