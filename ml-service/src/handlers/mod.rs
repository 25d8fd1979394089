pub mod calc;
pub mod health;
pub mod predict;
pub mod suggestions;

pub use calc::{calculate, estimate_entry};
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use predict::{avatar, predict};
pub use suggestions::get_suggestions;
