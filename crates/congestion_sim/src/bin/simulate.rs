use anyhow::Result;
use clap::Parser;
use congestion_sim::{
    Config, ReportFormat, SamplePoint, apply_policy, export_deltas, generate_baseline,
    parse_policy, read_points_csv,
};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Apply a congestion policy to a point set and report mesh deltas", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: PathBuf,

    /// Policy type (overrides the config file)
    #[arg(short, long)]
    policy: Option<String>,

    /// Sample point CSV (defaults to the built-in baseline)
    #[arg(long)]
    points: Option<PathBuf>,

    /// Output directory for the report
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format: csv or json
    #[arg(short = 'f', long)]
    format: Option<String>,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();

    let config = if args.config.exists() {
        Config::load_from_file(&args.config)?
    } else {
        warn!(
            "Config file not found: {}, using default settings",
            args.config.display()
        );
        Config::default()
    };

    let policy = match &args.policy {
        Some(label) => parse_policy(label)?,
        None => config.policy()?,
    };
    let format = match &args.format {
        Some(label) => ReportFormat::parse(label)?,
        None => config.report_format()?,
    };
    let output_dir = args.output.clone().unwrap_or_else(|| config.output_dir());

    let baseline: Vec<SamplePoint> = match args.points.clone().or_else(|| config.points_csv()) {
        Some(path) => {
            let points = read_points_csv(&path)?;
            info!("Loaded {} points from {}", points.len(), path.display());
            points
        }
        None => generate_baseline(),
    };

    info!("=== Policy Simulation ===");
    info!("Policy: {policy}");
    info!("Points: {}", baseline.len());

    let outcome = apply_policy(policy, &baseline);

    if outcome.deltas.is_empty() {
        warn!("No meshes to report.");
    }
    for (i, d) in outcome.deltas.iter().enumerate() {
        info!(
            "{}. {:<8} {:>6.1} -> {:>6.1} ({:+.1}%)",
            i + 1,
            d.mesh,
            d.before,
            d.after,
            d.delta_pct
        );
    }

    let path = export_deltas(policy, &outcome.deltas, format, Some(&output_dir))?;
    info!("Report saved to: {}", path.display());
    Ok(())
}
