//! Print synthetic activity logs as pretty JSON.
//!
//! ```text
//! synth-data --count 25 --seed 7
//! ```

use anyhow::Context;
use clap::Parser;
use ml_service::services::{generate_samples, generate_samples_with, render_samples};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

#[derive(Debug, Parser)]
#[command(name = "synth-data", about = "Generate synthetic EcoTracker activity logs")]
struct Cli {
    #[arg(short = 'n', long, default_value_t = 10, help = "Number of records to generate")]
    count: usize,
    #[arg(long, help = "Optional deterministic seed")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let samples = match cli.seed {
        Some(seed) => generate_samples_with(&mut StdRng::seed_from_u64(seed), cli.count),
        None => generate_samples(cli.count),
    };

    let rendered = render_samples(&samples).context("failed to serialize samples")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered).context("failed to write samples to stdout")?;

    Ok(())
}
