//! Category Routes
//!
//! - GET /api/v1/categories - The fixed category point table

use axum::Json;

use crate::api::dto::{CategoriesResponse, CategoryDto};
use crate::scoring::categories;

/// GET /api/v1/categories
///
/// The full category table in fixed order; the dashboard renders this
/// as its bar chart.
pub async fn list_categories() -> Json<CategoriesResponse> {
    let categories = categories::all()
        .iter()
        .map(|(name, points)| CategoryDto {
            name: name.to_string(),
            points: *points,
        })
        .collect();

    Json(CategoriesResponse { categories })
}
