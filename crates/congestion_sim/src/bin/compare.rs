use anyhow::Result;
use clap::Parser;
use congestion_sim::{PolicyType, apply_policy, generate_baseline, read_points_csv};
use log::info;
use serde_json::json;
use std::path::PathBuf;
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(author, version, about = "Compare every policy type on the same point set", long_about = None)]
struct Args {
    /// Sample point CSV (defaults to the built-in baseline)
    #[arg(long)]
    points: Option<PathBuf>,

    /// Write a JSON summary to this file
    #[arg(short, long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();

    let baseline = match &args.points {
        Some(path) => read_points_csv(path)?,
        None => generate_baseline(),
    };
    let total_before: f64 = baseline.iter().map(|p| p.intensity()).sum();

    info!("=== Policy Comparison ({} points) ===", baseline.len());

    let mut summary = Vec::new();
    for policy in PolicyType::iter() {
        let outcome = apply_policy(policy, &baseline);
        let total_after: f64 = outcome.after.iter().map(|p| p.intensity()).sum();
        let peak_after = outcome
            .after
            .iter()
            .map(|p| p.intensity())
            .fold(0.0_f64, f64::max);

        match outcome.deltas.first() {
            Some(top) => info!(
                "{:<17} total {:>6.2} -> {:>6.2}, peak {:.3}, largest shift {} ({:+.1}%)",
                policy, total_before, total_after, peak_after, top.mesh, top.delta_pct
            ),
            None => info!("{:<17} no meshes", policy),
        }

        summary.push(json!({
            "policy": policy,
            "totalBefore": total_before,
            "totalAfter": total_after,
            "peakAfter": peak_after,
            "deltas": outcome.deltas,
        }));
    }

    if let Some(path) = &args.json {
        std::fs::write(path, serde_json::to_string_pretty(&summary)?)?;
        info!("Comparison saved to: {}", path.display());
    }
    Ok(())
}
