use clap::{Parser, Subcommand};
use gesture_grid::config::GridConfig;
use gesture_grid::Grid;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    config: GridConfig,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show every hitbox of the layout
    Inspect(cmd::inspect::InspectArgs),
    /// Resolve a point to a key label
    Lookup(cmd::lookup::LookupArgs),
    /// Convert words to gesture curves
    Curve(cmd::curve::CurveArgs),
    /// Convert a word list file to gesture curves
    Batch(cmd::batch::BatchArgs),
}

fn main() {
    let cli = Cli::parse();

    // stdout is reserved for results
    tracing_subscriber::fmt()
        .with_max_level(cli.config.log_level())
        .with_writer(std::io::stderr)
        .init();

    info!("📂 Loading Layout: {}", cli.config.layout);
    let grid = Grid::load_from_file(&cli.config.layout).unwrap_or_else(|e| {
        error!("❌ Failed to load layout '{}': {}", cli.config.layout, e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Inspect(args) => cmd::inspect::run(args, &grid),
        Commands::Lookup(args) => cmd::lookup::run(args, &grid),
        Commands::Curve(args) => cmd::curve::run(args, &grid),
        Commands::Batch(args) => cmd::batch::run(args, &grid),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
