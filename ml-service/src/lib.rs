//! ml-service: EcoTracker's ML microservice.
//!
//! Serves placeholder prediction endpoints, rule-based footprint suggestions
//! and stateless emission calculators. The `synth-data` binary generates
//! synthetic activity logs from the same crate.
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
