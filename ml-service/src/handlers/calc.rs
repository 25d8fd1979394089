//! Stateless footprint calculations. Nothing is persisted.

use crate::dtos::calc::{CalcRequest, CalcResponse, EstimateRequest, EstimateResponse};
use crate::services::{
    energy_emissions, plastic_emissions, tree_planting_offset, vehicle_emissions,
    FactorCalculator,
};
use crate::startup::AppState;
use axum::{extract::State, Json};
use metrics::counter;
use service_core::error::AppError;
use validator::Validate;

#[tracing::instrument(skip(state, request), fields(activity = request.kind()))]
pub async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalcRequest>,
) -> Result<Json<CalcResponse>, AppError> {
    request.validate()?;

    let calc = FactorCalculator::new(&state.factors);
    let co2_kg = match &request {
        CalcRequest::Vehicle(input) => {
            calc.vehicle_emission(input.km, &input.vehicle_type, &input.fuel_type)
        }
        CalcRequest::Plastics(input) => calc.plastics_emission(input.num_items, &input.item_type),
        CalcRequest::Heating(input) => {
            calc.heating_emission(input.kwh, &input.fuel_type, input.days)
        }
        CalcRequest::Trees(input) => calc.tree_offset(input.num_trees),
    };

    counter!("footprint_calculations_total", "endpoint" => "calc", "type" => request.kind())
        .increment(1);
    tracing::debug!(co2_kg, "Calculated footprint");

    Ok(Json(CalcResponse {
        kind: request.kind().to_string(),
        co2_kg,
    }))
}

#[tracing::instrument(skip(request), fields(entry = request.kind()))]
pub async fn estimate_entry(
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, AppError> {
    request.validate()?;

    let response = match &request {
        EstimateRequest::Vehicle(input) => {
            let result = vehicle_emissions(input.distance, &input.fuel_type);
            EstimateResponse {
                kind: request.kind().to_string(),
                co2_emissions: result.co2_emissions,
                co2_offset: 0.0,
                eco_points_earned: 0.0,
                fuel_consumed: Some(result.fuel_consumed),
            }
        }
        EstimateRequest::Plastic(input) => EstimateResponse {
            kind: request.kind().to_string(),
            co2_emissions: plastic_emissions(input.quantity),
            co2_offset: 0.0,
            eco_points_earned: 0.0,
            fuel_consumed: None,
        },
        EstimateRequest::Energy(input) => EstimateResponse {
            kind: request.kind().to_string(),
            co2_emissions: energy_emissions(
                input.amount,
                &input.energy_source,
                input.is_renewable,
            ),
            co2_offset: 0.0,
            eco_points_earned: 0.0,
            fuel_consumed: None,
        },
        EstimateRequest::Plantation(input) => {
            let offset = tree_planting_offset(input.trees_planted);
            EstimateResponse {
                kind: request.kind().to_string(),
                co2_emissions: 0.0,
                co2_offset: offset.co2_offset,
                eco_points_earned: offset.eco_points,
                fuel_consumed: None,
            }
        }
    };

    counter!("footprint_calculations_total", "endpoint" => "estimate", "type" => request.kind())
        .increment(1);

    Ok(Json(response))
}
