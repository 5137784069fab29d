//! defbot CLI
//!
//! 시나리오 JSON → 틱별 의사결정 리포트
//! 설정 프리셋 → YAML

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "defbot", version = defbot_core::VERSION)]
#[command(about = "Run the defensive bot decision engine against scenario files", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario file through the engine
    Run {
        /// Scenario JSON file path
        #[arg(long)]
        scenario: PathBuf,

        /// Decision config (YAML or JSON); replaces the scenario's own config
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of ticks (overrides the scenario file)
        #[arg(long)]
        ticks: Option<u32>,

        /// Print the full response as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print a config preset as YAML
    Config {
        /// standard | aggressive | conservative
        #[arg(long, default_value = "standard")]
        preset: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match cli.command {
        Commands::Run { scenario, config, ticks, json } => {
            let request = defbot_cli::load_scenario(&scenario, ticks)?;
            let config = defbot_cli::load_config(config.as_deref())?;
            tracing::info!(
                scenario = %scenario.display(),
                ticks = request.ticks,
                "running scenario"
            );

            let response = defbot_core::run_scenario(&request, config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print!("{}", defbot_cli::render_summary(&response));
            }
        }

        Commands::Config { preset } => {
            print!("{}", defbot_cli::preset_yaml(&preset)?);
        }
    }

    Ok(())
}
