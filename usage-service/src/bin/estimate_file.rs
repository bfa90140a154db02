//! Offline estimation over a seed-format readings file.
//!
//! Prints both monthly usage sequences as JSON, one object per line, without
//! starting the HTTP service.

use std::env;
use std::path::Path;

use anyhow::{bail, Result};
use usage_core::estimate::{calculate_monthly, estimate_monthly};
use usage_service::{observability, seed};

fn main() -> Result<()> {
    observability::init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("usage: estimate_file <readings.json>");
    }

    let readings = seed::load_seed_file(Path::new(&args[1]))?;
    tracing::info!(count = readings.len(), "loaded readings");

    let estimated = estimate_monthly(&readings)?;
    let calculated = calculate_monthly(&readings)?;

    println!("{}", serde_json::to_string_pretty(&serde_json::json!({
        "estimated": estimated,
        "calculated": calculated,
    }))?);

    Ok(())
}
