pub mod calculator;
pub mod metrics;
pub mod synth;

pub use calculator::{
    energy_emissions, plastic_emissions, tree_planting_offset, vehicle_emissions,
    FactorCalculator, TreeOffset, VehicleEmissions,
};
pub use metrics::{get_metrics, init_metrics};
pub use synth::{generate_samples, generate_samples_with, render_samples, DEFAULT_SAMPLE_COUNT};
