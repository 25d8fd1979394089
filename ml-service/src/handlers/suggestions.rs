use crate::dtos::{Suggestion, SuggestionParams, SuggestionsResponse};
use crate::services::FactorCalculator;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

#[tracing::instrument(skip(state))]
pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<SuggestionsResponse> {
    let params = SuggestionParams::from_pairs(&pairs);
    let per_tree = FactorCalculator::new(&state.factors).tree_offset(1.0);
    let response = build_suggestions(params.co2_kg(), per_tree);

    tracing::info!(
        trees_to_offset = response.trees_to_offset,
        "Built footprint suggestions"
    );

    Json(response)
}

/// Fixed rule-based suggestions. `per_tree_offset` is the annual kg CO2 one
/// tree absorbs; negative `co2_kg` is treated as zero.
pub fn build_suggestions(co2_kg: f64, per_tree_offset: f64) -> SuggestionsResponse {
    let co2_kg = co2_kg.max(0.0);
    let trees_to_offset = if co2_kg > 0.0 && per_tree_offset > 0.0 {
        (co2_kg / per_tree_offset).ceil() as u64
    } else {
        0
    };

    let suggestions = vec![
        Suggestion {
            title: "Reduce vehicle miles".to_string(),
            description: "Consider carpooling, using public transit, or switching to an efficient vehicle.".to_string(),
            impact_kg_co2: 5.0,
            recommended_action: "Try to reduce single-occupancy trips by 20%".to_string(),
        },
        Suggestion {
            title: "Reduce single-use plastics".to_string(),
            description: "Use reusable bottles and bags to reduce plastic waste and embedded emissions.".to_string(),
            impact_kg_co2: 0.5,
            recommended_action: "Replace disposable bottles with a reusable one".to_string(),
        },
        Suggestion {
            title: "Plant trees to offset emissions".to_string(),
            description: "Planting trees offsets CO2 over years. Use the planting calculator to estimate numbers.".to_string(),
            impact_kg_co2: -per_tree_offset,
            recommended_action: format!(
                "Plant {} tree(s) to offset {} kg CO2",
                trees_to_offset, co2_kg
            ),
        },
    ];

    SuggestionsResponse {
        suggestions,
        trees_to_offset,
    }
}
