mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::{
    catalog::{RecipesCommand, TripsCommand},
    groceries::GroceriesCommand,
};

/// tripkit - Trip meal planning
#[derive(Parser)]
#[command(name = "tripkit")]
#[command(about = "Plan trip meals and build the grocery list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grocery list
    Groceries {
        #[command(subcommand)]
        command: GroceriesCommand,
    },
    /// Recipe catalog
    Recipes {
        #[command(subcommand)]
        command: RecipesCommand,
    },
    /// Planned trips
    Trips {
        #[command(subcommand)]
        command: TripsCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = tripkit::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    tripkit::observability::init_observability(
        "tripkit",
        env!("CARGO_PKG_VERSION"),
        &config.logging.level,
        &config.logging.format,
    )?;

    match cli.command {
        Commands::Groceries { command } => cli::groceries::run(config, command),
        Commands::Recipes { command } => cli::catalog::recipes(config, command),
        Commands::Trips { command } => cli::catalog::trips(config, command),
    }
}
