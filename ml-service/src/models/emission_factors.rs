use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use std::collections::HashMap;
use std::path::Path;

const BUNDLED_FACTORS: &str = include_str!("../../data/emission_factors.json");

pub const TREE_DEFAULT_OFFSET_KEY: &str = "tree_species_default_annual_offset_kg";

/// Emission factors in kg CO2 per unit, grouped by activity category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    #[serde(default)]
    pub vehicle: HashMap<String, f64>,
    #[serde(default)]
    pub plastics: HashMap<String, f64>,
    #[serde(default)]
    pub heating: HashMap<String, f64>,
    #[serde(default)]
    pub tree_offset: HashMap<String, f64>,
}

impl EmissionFactors {
    /// The table compiled into the binary.
    pub fn bundled() -> Result<Self, AppError> {
        serde_json::from_str(BUNDLED_FACTORS).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("Invalid bundled emission factors: {}", e))
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Failed to read emission factors from {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Invalid emission factors in {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load from `path` when given, otherwise fall back to the bundled table.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                tracing::info!(path = %path, "Loading emission factors from file");
                Self::from_file(path)
            }
            None => Self::bundled(),
        }
    }

    pub fn vehicle(&self, key: &str) -> f64 {
        self.vehicle.get(key).copied().unwrap_or(0.0)
    }

    pub fn plastics(&self, key: &str) -> f64 {
        self.plastics.get(key).copied().unwrap_or(0.0)
    }

    pub fn heating(&self, key: &str) -> f64 {
        self.heating.get(key).copied().unwrap_or(0.0)
    }

    pub fn tree_offset(&self, key: &str) -> f64 {
        self.tree_offset.get(key).copied().unwrap_or(0.0)
    }
}
