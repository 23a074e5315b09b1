//! Resource Routes
//!
//! - GET /api/v1/recommendations - Keyword-driven shopping suggestions
//! - GET /api/v1/resources - Local sustainability resource table

use axum::{extract::Query, Json};

use crate::api::dto::{
    RecommendationsQuery, RecommendationsResponse, ResourceDto, ResourcesResponse,
};

/// GET /api/v1/recommendations?q=...
///
/// Suggestions keyed off the submitted text: mentions of plastic get
/// reusable alternatives, mentions of transport get greener commutes.
pub async fn get_recommendations(
    Query(query): Query<RecommendationsQuery>,
) -> Json<RecommendationsResponse> {
    Json(RecommendationsResponse {
        suggestions: recommendations_for(&query.q),
    })
}

fn recommendations_for(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    if lowered.contains("plastic") {
        vec![
            "Reusable Water Bottles".to_string(),
            "Cloth Bags".to_string(),
        ]
    } else if lowered.contains("transport") {
        vec!["Public Transport".to_string(), "Bike Rides".to_string()]
    } else {
        Vec::new()
    }
}

/// GET /api/v1/resources
///
/// Static local-sustainability listing.
pub async fn list_resources() -> Json<ResourcesResponse> {
    let resources = [
        ("Recycling Center", "Downtown"),
        ("Organic Market", "Main Street"),
        ("Solar Panel Supplier", "Eco Park"),
    ]
    .iter()
    .map(|(place, location)| ResourceDto {
        place: place.to_string(),
        location: location.to_string(),
    })
    .collect();

    Json(ResourcesResponse { resources })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plastic_keyword() {
        let suggestions = recommendations_for("Stopped buying Plastic bottles");
        assert_eq!(suggestions, vec!["Reusable Water Bottles", "Cloth Bags"]);
    }

    #[test]
    fn test_transport_keyword() {
        let suggestions = recommendations_for("switched my transport to rail");
        assert_eq!(suggestions, vec!["Public Transport", "Bike Rides"]);
    }

    #[test]
    fn test_no_keyword() {
        assert!(recommendations_for("planted a garden").is_empty());
        assert!(recommendations_for("").is_empty());
    }

    #[test]
    fn test_plastic_wins_over_transport() {
        // First matching keyword decides, matching the original's branch order
        let suggestions = recommendations_for("plastic-free transport");
        assert_eq!(suggestions[0], "Reusable Water Bottles");
    }
}
