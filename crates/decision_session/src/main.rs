use anyhow::Result;
use clap::Parser;
use congestion_sim::catalog::BRIEF_INSIGHTS;
use decision_session::{
    Config, FocusArea, FramingPatch, Goal, Session, Step, Threshold, TimeRange, export_session,
};
use log::{debug, info, warn};
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about = "Walk the congestion decision flow and export its trace", long_about = None)]
struct Args {
    /// Policy card id (p-time, p-route, p-transit, p-soft)
    #[arg(short, long, default_value = "p-route")]
    policy: String,

    /// Outcome to optimize for
    #[arg(long, default_value = "congestion-reduction")]
    goal: Goal,

    /// Areas that matter for the decision (repeatable)
    #[arg(long = "area", default_values_t = [FocusArea::Odori, FocusArea::Susukino])]
    areas: Vec<FocusArea>,

    /// Time range the analysis focuses on
    #[arg(long, default_value = "evening")]
    time_range: TimeRange,

    /// Unacceptable threshold
    #[arg(long, default_value = "peak>0.75")]
    threshold: Threshold,

    /// Free-text notes
    #[arg(long, default_value = "")]
    notes: String,
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();
    let config = Config::from_env()?;

    match &config.output_dir {
        Some(dir) => info!("Output directory: {}", dir.display()),
        None => info!("Output directory: (current working directory)"),
    }

    let mut session = Session::new();
    info!("Baseline: {} sample points", session.baseline().len());

    session.log("Viewed city pulse", Some("Opened MAPAI Tourism — Sapporo Today".to_string()), None);
    session.go_to(Step::Brief);
    session.log(
        "Reviewed briefing insights",
        Some("Captured 3 diagnostic digests".to_string()),
        Some(serde_json::to_value(BRIEF_INSIGHTS)?),
    );

    session.go_to(Step::Chat);
    session.set_framing(FramingPatch {
        goal: Some(args.goal),
        areas: Some(args.areas),
        time_range: Some(args.time_range),
        unacceptable_threshold: Some(args.threshold),
        notes: Some(args.notes),
    });
    if !session.framing().is_complete() {
        warn!("Framing is incomplete; continuing anyway");
    }

    session.go_to(Step::Analysis);
    let framing = json!({ "framing": session.framing() });
    session.log(
        "Entered analysis mode",
        Some("Declared responsibility boundary: analysis only".to_string()),
        Some(framing.clone()),
    );
    session.log(
        "Generated policy options",
        Some("Prepared policy cards for simulation".to_string()),
        Some(framing),
    );

    session.go_to(Step::Simulation);
    session.select_policy(&args.policy)?;
    let deltas = session.run_selected_simulation()?;
    info!("Top mesh deltas:");
    for (i, d) in deltas.iter().enumerate() {
        info!("{}. {}: {:+.1}%", i + 1, d.mesh, d.delta_pct);
    }

    session.finalize_decision()?;
    debug!("Trace has {} events", session.trace().len());

    let files = export_session(&session, config.output_dir.as_deref())?;
    info!("Decision trace saved to: {}", files.json.display());
    info!("Timeline saved to: {}", files.text.display());
    Ok(())
}
