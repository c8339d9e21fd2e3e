//! cutplan - CLI for compiling window configurations and rendering cutting plans.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cutplan::{
    compile_request, render_plan_report, render_window_cards, MaterialCatalog,
    OptimizationResult, WindowConfiguration, DEFAULT_ROD_LENGTH_FT,
};

/// Compile window configurations into cutting requests and render optimizer
/// cutting plans.
#[derive(Parser, Debug)]
#[command(name = "cutplan")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a window configuration list into an optimizer request envelope
    Compile {
        /// Input JSON file: array of window configurations
        #[arg(short, long)]
        input: PathBuf,

        /// Output request JSON path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render an optimizer result into a cutting-plan report
    Render {
        /// Input JSON file: optimizer response body
        #[arg(short, long)]
        input: PathBuf,

        /// Output report path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rod length in feet
        #[arg(long, default_value_t = DEFAULT_ROD_LENGTH_FT, value_parser = parse_rod_length)]
        rod_length: f64,
    },

    /// Render per-window summary cards resolved against a material catalog
    Summary {
        /// Input JSON file: array of window configurations
        #[arg(short, long)]
        input: PathBuf,

        /// Material catalog JSON file (the /product-options payload)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Compile { input, output } => {
            let configs = read_configs(&input)?;
            let request = compile_request(&configs)?;
            info!(
                windows = configs.len(),
                lines = request
                    .configurations
                    .iter()
                    .map(|c| c.materials.len())
                    .sum::<usize>(),
                "compiled request"
            );

            let json = serde_json::to_string_pretty(&request)?;
            write_output(output.as_deref(), &json)
        }

        Command::Render {
            input,
            output,
            rod_length,
        } => {
            let json = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let result: OptimizationResult = serde_json::from_str(&json)
                .with_context(|| format!("Invalid optimizer result in {}", input.display()))?;

            let report = render_plan_report(&result, rod_length);
            write_output(output.as_deref(), &report)
        }

        Command::Summary {
            input,
            catalog,
            output,
        } => {
            let configs = read_configs(&input)?;
            let catalog = MaterialCatalog::from_path(&catalog)
                .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;

            let cards = render_window_cards(&configs, &catalog);
            write_output(output.as_deref(), &cards)
        }
    }
}

fn parse_rod_length(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("rod length must be positive, got {value}"))
    }
}

fn read_configs(input: &Path) -> Result<Vec<WindowConfiguration>> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid window configurations in {}", input.display()))
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote: {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}
