//! Carbon footprint calculators.
//!
//! [`FactorCalculator`] resolves emission factors from a configurable table.
//! The free functions apply fixed per-unit rates and back `/entries/estimate`.

use crate::models::emission_factors::{EmissionFactors, TREE_DEFAULT_OFFSET_KEY};
use serde::Serialize;

/// Calculator backed by an [`EmissionFactors`] table. All results are kg CO2.
#[derive(Debug, Clone, Copy)]
pub struct FactorCalculator<'a> {
    factors: &'a EmissionFactors,
}

impl<'a> FactorCalculator<'a> {
    pub fn new(factors: &'a EmissionFactors) -> Self {
        Self { factors }
    }

    pub fn vehicle_emission(&self, km: f64, vehicle_type: &str, fuel_type: &str) -> f64 {
        if km <= 0.0 {
            return 0.0;
        }
        let vehicle_type = vehicle_type.trim().to_lowercase();
        let fuel_type = fuel_type.trim().to_lowercase();

        let known = match (vehicle_type.as_str(), fuel_type.as_str()) {
            ("car", "petrol" | "gasoline") => Some("car_petrol".to_string()),
            ("car", "diesel") => Some("car_diesel".to_string()),
            ("motorcycle" | "motorbike", _) => Some("motorcycle".to_string()),
            ("bus", _) => Some("bus".to_string()),
            _ => None,
        };

        let key = known
            .or_else(|| {
                let combined = format!("{}_{}", vehicle_type, fuel_type);
                self.factors
                    .vehicle
                    .contains_key(&combined)
                    .then_some(combined)
            })
            .unwrap_or_else(|| "car_petrol".to_string());

        self.factors.vehicle(&key) * km
    }

    pub fn plastics_emission(&self, items: f64, item_type: &str) -> f64 {
        if items <= 0.0 {
            return 0.0;
        }
        let item_type = item_type.trim().to_lowercase();
        let factor = match self.factors.plastics.get(&item_type) {
            Some(factor) if *factor != 0.0 => *factor,
            _ => self.factors.plastics("plastic_bottle"),
        };
        factor * items
    }

    /// `amount` is kWh for electricity, litres for LPG and m3 for natural gas.
    /// `days` multiplies a per-day amount; `None` or 0 counts as one day.
    pub fn heating_emission(&self, amount: f64, fuel_type: &str, days: Option<f64>) -> f64 {
        if amount <= 0.0 {
            return 0.0;
        }
        let days = match days {
            Some(d) if d != 0.0 && d.is_finite() => d,
            _ => 1.0,
        };

        let key = match fuel_type.trim().to_lowercase().as_str() {
            "lpg" | "lpg_per_liter" => "lpg_per_liter",
            "natural_gas" | "natural_gas_per_m3" => "natural_gas_per_m3",
            _ => "electricity_kwh",
        };

        self.factors.heating(key) * amount * days
    }

    /// Annual offset in kg CO2 for `trees` trees of the default species.
    pub fn tree_offset(&self, trees: f64) -> f64 {
        if trees <= 0.0 {
            return 0.0;
        }
        self.factors.tree_offset(TREE_DEFAULT_OFFSET_KEY) * trees
    }
}

/// Litres of fuel per km.
const FUEL_CONSUMPTION_PER_KM: f64 = 0.08;
const PLASTIC_KG_CO2_PER_KG: f64 = 6.0;
const TREE_KG_CO2_PER_YEAR: f64 = 22.0;
const ECO_POINTS_PER_TREE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleEmissions {
    pub co2_emissions: f64,
    pub fuel_consumed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeOffset {
    pub co2_offset: f64,
    pub eco_points: f64,
}

pub fn vehicle_emissions(distance_km: f64, fuel_type: &str) -> VehicleEmissions {
    if distance_km <= 0.0 {
        return VehicleEmissions {
            co2_emissions: 0.0,
            fuel_consumed: 0.0,
        };
    }

    let factor = match fuel_type.trim().to_lowercase().as_str() {
        "diesel" => 0.19,
        "electric" => 0.08,
        "hybrid" => 0.075,
        "cng" => 0.165,
        _ => 0.18,
    };

    VehicleEmissions {
        co2_emissions: factor * distance_km,
        fuel_consumed: distance_km * FUEL_CONSUMPTION_PER_KM,
    }
}

pub fn plastic_emissions(quantity_kg: f64) -> f64 {
    if quantity_kg <= 0.0 {
        return 0.0;
    }
    PLASTIC_KG_CO2_PER_KG * quantity_kg
}

pub fn energy_emissions(amount_kwh: f64, energy_source: &str, is_renewable: bool) -> f64 {
    if amount_kwh <= 0.0 || is_renewable {
        return 0.0;
    }

    let factor = match energy_source.trim().to_lowercase().as_str() {
        "naturalgas" => 0.18,
        "heatingoil" => 0.27,
        "coal" => 0.34,
        _ => 0.42,
    };

    factor * amount_kwh
}

pub fn tree_planting_offset(trees_planted: f64) -> TreeOffset {
    if trees_planted <= 0.0 {
        return TreeOffset {
            co2_offset: 0.0,
            eco_points: 0.0,
        };
    }

    TreeOffset {
        co2_offset: TREE_KG_CO2_PER_YEAR * trees_planted,
        eco_points: ECO_POINTS_PER_TREE * trees_planted,
    }
}
