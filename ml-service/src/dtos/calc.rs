use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /calc`, tagged by activity `type`. Resolved against the
/// emission factor table.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CalcRequest {
    Vehicle(VehicleActivity),
    Plastics(PlasticsActivity),
    Heating(HeatingActivity),
    Trees(TreesActivity),
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleActivity {
    #[validate(range(min = 0.0, message = "km must not be negative"))]
    pub km: f64,
    #[serde(default)]
    pub vehicle_type: String,
    #[serde(default)]
    pub fuel_type: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlasticsActivity {
    #[validate(range(min = 0.0, message = "numItems must not be negative"))]
    pub num_items: f64,
    #[serde(default)]
    pub item_type: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HeatingActivity {
    #[validate(range(min = 0.0, message = "kwh must not be negative"))]
    pub kwh: f64,
    #[serde(default)]
    pub fuel_type: String,
    #[validate(range(min = 0.0, message = "days must not be negative"))]
    pub days: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TreesActivity {
    #[validate(range(min = 0.0, message = "numTrees must not be negative"))]
    pub num_trees: f64,
}

impl CalcRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            CalcRequest::Vehicle(_) => "vehicle",
            CalcRequest::Plastics(_) => "plastics",
            CalcRequest::Heating(_) => "heating",
            CalcRequest::Trees(_) => "trees",
        }
    }
}

impl Validate for CalcRequest {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        match self {
            CalcRequest::Vehicle(input) => input.validate(),
            CalcRequest::Plastics(input) => input.validate(),
            CalcRequest::Heating(input) => input.validate(),
            CalcRequest::Trees(input) => input.validate(),
        }
    }
}

/// `co2_kg` is an emission for every type except `trees`, where it is the
/// annual offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub co2_kg: f64,
}

/// Body of `POST /entries/estimate`, tagged by entry `type`. Uses fixed
/// per-unit rates.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EstimateRequest {
    Vehicle(VehicleEntry),
    Plastic(PlasticEntry),
    Energy(EnergyEntry),
    Plantation(PlantationEntry),
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleEntry {
    #[validate(range(min = 0.0, message = "distance must not be negative"))]
    pub distance: f64,
    #[serde(default)]
    pub fuel_type: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlasticEntry {
    /// Kilograms of plastic.
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: f64,
    pub plastic_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnergyEntry {
    /// kWh consumed.
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: f64,
    #[serde(default)]
    pub energy_source: String,
    #[serde(default)]
    pub is_renewable: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlantationEntry {
    #[validate(range(min = 0.0, message = "treesPlanted must not be negative"))]
    pub trees_planted: f64,
}

impl EstimateRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            EstimateRequest::Vehicle(_) => "vehicle",
            EstimateRequest::Plastic(_) => "plastic",
            EstimateRequest::Energy(_) => "energy",
            EstimateRequest::Plantation(_) => "plantation",
        }
    }
}

impl Validate for EstimateRequest {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        match self {
            EstimateRequest::Vehicle(input) => input.validate(),
            EstimateRequest::Plastic(input) => input.validate(),
            EstimateRequest::Energy(input) => input.validate(),
            EstimateRequest::Plantation(input) => input.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub co2_emissions: f64,
    pub co2_offset: f64,
    pub eco_points_earned: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_consumed: Option<f64>,
}
