mod banding;
mod config;
mod disclosure;
mod errors;
mod models;
mod review;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::disclosure::DisclosureController;
use crate::models::ResumeRecord;
use crate::review::{assemble_review, render_text};

#[derive(Parser, Debug)]
#[command(
    name = "review",
    version,
    about = "Renders a stored resume-analysis record as a feedback report"
)]
struct Cli {
    /// Path to the stored resume record (JSON)
    record: PathBuf,

    /// Emit the assembled view as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Allow at most one open category section
    #[arg(long)]
    single_open: bool,

    /// Section id to open before any toggles (repeatable; overrides
    /// REVIEW_OPEN_SECTIONS)
    #[arg(long = "open", value_name = "SECTION_ID")]
    open: Vec<String>,

    /// Section id to toggle, applied in order after the initial state
    /// (repeatable)
    #[arg(long = "toggle", value_name = "SECTION_ID")]
    toggle: Vec<String>,
}

/// Wrapper for JSON output so downstream tooling can check `ok` first.
#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first; flags override it below.
    let config = Config::from_env()?;

    // Initialize structured logging on stderr so stdout stays a clean report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume review v{}", env!("CARGO_PKG_VERSION"));

    let raw = fs::read_to_string(&cli.record)
        .with_context(|| format!("Failed to read record file '{}'", cli.record.display()))?;
    let record: ResumeRecord = serde_json::from_str(&raw)
        .with_context(|| format!("'{}' is not a stored resume record", cli.record.display()))?;
    info!(record = %record.id, "Loaded stored resume record");

    let ResumeRecord {
        company_name,
        job_title,
        feedback,
        ..
    } = record;
    let analysis = feedback.materialize()?;

    let allow_multiple = config.allow_multiple && !cli.single_open;
    let seeds = if cli.open.is_empty() {
        config.open_sections
    } else {
        cli.open
    };
    let seed_refs: Vec<&str> = seeds.iter().map(String::as_str).collect();

    let mut controller = DisclosureController::new();
    let group = controller.create_group(allow_multiple, &seed_refs);
    for section_id in &cli.toggle {
        controller.toggle(group, section_id)?;
    }

    let view = assemble_review(company_name, job_title, &analysis, &controller, group)?;
    info!(
        sections = view.sections.len(),
        open = view.sections.iter().filter(|s| s.open).count(),
        "Assembled review view"
    );

    if cli.json {
        let out = JsonOut {
            ok: true,
            data: &view,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render_text(&view));
    }

    controller.destroy_group(group)?;
    Ok(())
}
