use anyhow::{Context, Result};
use clap::Parser;
use offside_cv::{AnalysisSession, DetectionConfig, utils::ImageUtils};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod report;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => DetectionConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => DetectionConfig::default(),
    };
    debug!(?config, "detection config");
    let mut session = AnalysisSession::new(config)?;

    match cli.command {
        Command::Detect { image } => {
            let detection = session
                .load_image(&image)
                .with_context(|| format!("Error loading image: {}", image.display()))?;
            report::print_detection(detection);
        }
        Command::Analyze {
            image,
            possession,
            overlay,
            json,
        } => {
            session
                .load_image(&image)
                .with_context(|| format!("Error loading image: {}", image.display()))?;
            if let Some(detection) = session.detection() {
                report::print_detection(detection);
            }

            let result = session.analyze(possession).context("Offside analysis failed")?;
            report::print_result(result);

            if let Some(path) = json {
                result
                    .export_json(&path)
                    .with_context(|| format!("Failed to write JSON to: {}", path.display()))?;
                println!("Result saved: {}", path.display());
            }

            if let Some(path) = overlay {
                let rendered = session.render_overlay()?;
                ImageUtils::save_rgb(&rendered, &path)
                    .with_context(|| format!("Failed to save overlay: {}", path.display()))?;
                println!("Overlay saved: {}", path.display());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "offside=debug,offside_cv=debug" } else { "offside=info,offside_cv=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt().with_env_filter(filter).with_target(false).init();
}
