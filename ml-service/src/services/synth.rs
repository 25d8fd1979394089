//! Synthetic activity logs for exercising downstream models.

use crate::models::{ActivityType, SyntheticSample};
use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Generate `n` samples with uniformly random activity labels.
pub fn generate_samples(n: usize) -> Vec<SyntheticSample> {
    generate_samples_with(&mut rand::thread_rng(), n)
}

/// Same as [`generate_samples`] but drawing from the given RNG, so a seeded
/// generator reproduces the same labels.
pub fn generate_samples_with<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<SyntheticSample> {
    (0..n)
        .map(|_| {
            // ALL is non-empty
            let activity = *ActivityType::ALL
                .choose(&mut *rng)
                .unwrap_or(&ActivityType::Vehicle);
            SyntheticSample::new(activity)
        })
        .collect()
}

/// Pretty-print samples as a JSON array with two-space indentation.
pub fn render_samples(samples: &[SyntheticSample]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(samples)
}
