mod cmd_calculate;
mod cmd_estimate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use travel_budget_core::{DestinationTier, TravelStyle};

#[derive(Parser)]
#[command(name = "travel-budget", version, about = "Trip budget estimates and itinerary budgeting")]
struct Cli {
    /// Log debug detail to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Per-person daily budget for a style and destination tier
    Daily {
        /// budget, moderate (mid-range) or luxury
        #[arg(long, default_value = "moderate")]
        style: TravelStyle,
        /// expensive, moderate or affordable
        #[arg(long, default_value = "moderate")]
        tier: DestinationTier,
        /// Estimate for a city instead of a tier
        #[arg(long)]
        city: Option<String>,
        #[arg(long, default_value = "1")]
        travelers: u32,
    },
    /// Whole-trip breakdown for one destination
    Total {
        #[arg(long)]
        days: u32,
        #[arg(long, default_value = "moderate")]
        style: TravelStyle,
        #[arg(long, default_value = "moderate")]
        tier: DestinationTier,
        #[arg(long, default_value = "1")]
        travelers: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Estimate a multi-city itinerary (JSON file)
    Itinerary {
        file: PathBuf,
    },
    /// Print a text report for a multi-city itinerary (JSON file)
    Report {
        file: PathBuf,
    },
    /// Walk a day-by-day plan and print the remaining budget (JSON file)
    Calculate {
        file: PathBuf,
        /// Seed for `random` tiers (overrides the request's seed)
        #[arg(long)]
        seed: Option<u64>,
        /// Walk every day of every location instead of stopping after day 0
        #[arg(long)]
        full: bool,
        /// Output the full outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a budget against a target range
    Suggest {
        #[arg(long)]
        current: f64,
        #[arg(long)]
        min: f64,
        #[arg(long)]
        max: f64,
    },
    /// Pull a budget amount out of free text
    Extract {
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Command::Daily {
            style,
            tier,
            city,
            travelers,
        } => cmd_estimate::daily(style, tier, city.as_deref(), travelers),
        Command::Total {
            days,
            style,
            tier,
            travelers,
            json,
        } => cmd_estimate::total(days, style, tier, travelers, json),
        Command::Itinerary { file } => cmd_estimate::itinerary(&file),
        Command::Report { file } => cmd_estimate::report(&file),
        Command::Calculate {
            file,
            seed,
            full,
            json,
        } => cmd_calculate::execute(&file, seed, full, json),
        Command::Suggest { current, min, max } => cmd_estimate::suggest(current, min, max),
        Command::Extract { text } => cmd_estimate::extract(&text),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
