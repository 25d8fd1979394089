pub mod emission_factors;
pub mod sample;

pub use emission_factors::EmissionFactors;
pub use sample::{ActivityType, SyntheticSample};
