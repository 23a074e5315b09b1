//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::scoring::GrowthStage;

// ============================================
// ACTION DTOs
// ============================================

/// Eco-action submission request
#[derive(Debug, Deserialize)]
pub struct SubmitActionRequest {
    /// User name; omit for an anonymous submission
    #[serde(default)]
    pub user: Option<String>,
    /// Free-text description of the action
    pub description: String,
    /// Category name from the fixed table
    pub category: String,
    /// Optional photo for the upload bonus
    #[serde(default)]
    pub photo: Option<PhotoDto>,
}

/// Base64-encoded photo upload
#[derive(Debug, Deserialize)]
pub struct PhotoDto {
    /// Original filename (extension drives the allowlist check)
    pub filename: String,
    /// Base64-encoded file contents
    pub data: String,
}

/// Eco-action submission response
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitActionResponse {
    /// Status: "ok"
    pub status: String,
    /// Base points from the category table
    pub base_points: u64,
    /// Tree-planting bonus from the description
    pub tree_bonus: u64,
    /// Photo upload bonus
    pub photo_bonus: u64,
    /// Total points awarded for this submission
    pub awarded: u64,
    /// New cumulative total
    pub total_points: u64,
    /// Growth stage for the new total
    pub growth_stage: GrowthStage,
    /// Growth stage display label
    pub growth_label: String,
    /// Estimated kg of CO₂ avoided at the new total
    pub carbon_impact_kg: f64,
}

/// One logged action
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionDto {
    pub timestamp: i64,
    pub user: String,
    pub category: String,
    pub description: String,
    pub points: u64,
}

/// Action log listing
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionsResponse {
    pub actions: Vec<ActionDto>,
}

/// Query parameters for the action log listing
#[derive(Debug, Deserialize)]
pub struct ActionsQuery {
    #[serde(default = "default_actions_limit")]
    pub limit: usize,
}

fn default_actions_limit() -> usize {
    50
}

// ============================================
// LEADERBOARD / CATEGORY DTOs
// ============================================

/// One leaderboard row
#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardRowDto {
    pub user: String,
    pub points: u64,
}

/// Leaderboard listing, sorted by points descending
#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub rows: Vec<LeaderboardRowDto>,
}

/// One category with its base point value
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: String,
    pub points: u64,
}

/// Full category table (drives the dashboard's bar chart)
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryDto>,
}

// ============================================
// PROGRESS DTOs
// ============================================

/// Progress report: total, stage, carbon impact
#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub total_points: u64,
    pub growth_stage: GrowthStage,
    pub growth_label: String,
    pub carbon_impact_kg: f64,
}

// ============================================
// COMMUNITY DTOs
// ============================================

/// Habit goal submission
#[derive(Debug, Deserialize)]
pub struct HabitRequest {
    pub goal: String,
}

/// Community story submission
#[derive(Debug, Deserialize)]
pub struct StoryRequest {
    pub story: String,
}

/// Static acknowledgement for habit and story submissions
#[derive(Debug, Serialize, Deserialize)]
pub struct AckResponse {
    pub status: String,
    pub message: String,
}

// ============================================
// RECOMMENDATION / RESOURCE DTOs
// ============================================

/// Query parameters for recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    #[serde(default)]
    pub q: String,
}

/// Keyword-driven shopping recommendations
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub suggestions: Vec<String>,
}

/// One local sustainability resource
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceDto {
    pub place: String,
    pub location: String,
}

/// Local sustainability resource listing
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourcesResponse {
    pub resources: Vec<ResourceDto>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
    pub uptime_seconds: u64,
    pub version: String,
}
