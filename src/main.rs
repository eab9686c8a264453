//! pethover - resolve the pet tooltip for a captured chat frame

use clap::Parser;
use pethover::config::CliOverrides;
use pethover::logging::LogTarget;
use pethover::overlay::{PetsOverlay, Tooltip};
use pethover::scenario::{FrameReport, Scenario};
use std::path::PathBuf;
use tracing::{debug, info};

/// Resolve which pet icon is under the cursor in a captured chat frame
#[derive(Parser, Debug)]
#[command(name = "pethover")]
#[command(version)]
#[command(about = "Resolve the hovered pet icon in a chat frame scenario")]
pub struct Args {
    /// Path to the TOML frame scenario
    pub scenario: PathBuf,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pet icon width in pixels
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    pub icon_width: Option<i32>,

    /// Pet icon height in pixels
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    pub icon_height: Option<i32>,

    /// Disable the pets tooltip
    #[arg(long)]
    pub no_pets_tooltip: bool,

    /// Print the frame report as JSON
    #[arg(long)]
    pub json: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log to stderr instead of a file
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            pets_tooltip: self.no_pets_tooltip.then_some(false),
            icon_width: self.icon_width,
            icon_height: self.icon_height,
            log_file_path: self.log_file.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = pethover::config::load_config_with_precedence(args.config.clone())?;
        let merged = pethover::config::merge_config(config_file)?;
        let with_env = pethover::config::apply_env_overrides(merged);
        pethover::config::apply_cli_overrides(with_env, args.overrides())?
    };

    let log_target = if args.verbose {
        LogTarget::Stderr
    } else {
        LogTarget::File(config.log_file_path.clone())
    };
    pethover::logging::init(&log_target)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let scenario = Scenario::load(&args.scenario)?;
    debug!(
        path = %args.scenario.display(),
        lines = scenario.lines.len(),
        "Scenario loaded"
    );

    let overlay = PetsOverlay::from_config(&config, scenario.catalog());
    let mut tooltips: Vec<Tooltip> = Vec::new();
    let hover = overlay.render(&scenario, &scenario, &mut tooltips);

    let report = FrameReport::new(scenario.mouse, hover);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
    }

    Ok(())
}
