use serde::Deserialize;
use service_core::config::{self as core_config, get_env, get_optional_env, is_production};
use service_core::error::AppError;

pub const SERVICE_NAME: &str = "ml-service";

#[derive(Debug, Clone, Deserialize)]
pub struct MlConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub telemetry: TelemetryConfig,
    pub factors: FactorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FactorsConfig {
    /// JSON file replacing the bundled emission factor table.
    pub path: Option<String>,
}

impl MlConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;
        let is_prod = is_production();

        Ok(MlConfig {
            common: common_config,
            telemetry: TelemetryConfig {
                log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
                otlp_endpoint: get_optional_env("OTLP_ENDPOINT"),
            },
            factors: FactorsConfig {
                path: get_optional_env("EMISSION_FACTORS_PATH"),
            },
        })
    }
}
