//! Canon Demo - Build pipeline for the button gallery
//!
//! Renders every configured button into a static HTML page, with a
//! minified copy and a JSON snapshot of the markup tree.

mod config;
mod error;
mod gallery;
mod labels;
mod lint;
mod pipeline;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::DemoConfig;
use pipeline::Pipeline;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "canon-demo")]
#[command(about = "Build the Canon button gallery")]
#[command(version)]
struct Cli {
    /// Gallery manifest (defaults to $CANON_DEMO_CONFIG, then the config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Output directory (overrides the manifest)
    #[arg(short, long, global = true)]
    out: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint, render and write the gallery
    Build,
    /// Check the manifest
    Lint,
    /// Remove build outputs
    Clean,
    /// Print the rendered page
    Render,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = DemoConfig::load(cli.config.as_deref())
        .context("Failed to load gallery config")?;
    let pipeline = Pipeline::new(config, cli.out);

    match cli.command {
        Commands::Build => {
            let today = chrono::Local::now().date_naive();
            let report = pipeline.build(today).context("Gallery build failed")?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Lint => {
            let report = pipeline.lint();
            if report.is_clean() {
                tracing::info!("Gallery manifest is clean");
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
            if report.error_count() > 0 {
                anyhow::bail!("Lint failed with {} error(s)", report.error_count());
            }
        }
        Commands::Clean => {
            let removed = pipeline.clean().context("Failed to clean outputs")?;
            tracing::info!(
                "Removed {} file(s) from {}",
                removed.len(),
                pipeline.out_dir().display()
            );
        }
        Commands::Render => {
            print!("{}", pipeline.render());
        }
    }

    Ok(())
}
