use std::path::PathBuf;

use clap::Subcommand;
use tripkit::Store;
use tripkit_shared::{mealplan::Trip, recipe::Recipe};

#[derive(Subcommand)]
pub enum RecipesCommand {
    /// Print the recipe catalog
    List,
    /// Insert or replace recipes from a JSON array file
    Import { file: PathBuf },
}

#[derive(Subcommand)]
pub enum TripsCommand {
    /// Print planned trips
    List,
    /// Insert or replace trips from a JSON array file
    Import { file: PathBuf },
}

#[tracing::instrument(skip_all)]
pub fn recipes(config: tripkit::Config, command: RecipesCommand) -> anyhow::Result<()> {
    let mut store = Store::open(&config.store.path)?;

    match command {
        RecipesCommand::List => {
            for recipe in store.recipes() {
                println!(
                    "{:<20} {:<30} {} ingredients",
                    recipe.id,
                    recipe.title,
                    recipe.ingredients.len()
                );
            }
        }
        RecipesCommand::Import { file } => {
            let recipes: Vec<Recipe> = serde_json::from_str(&std::fs::read_to_string(&file)?)?;
            let total = recipes.len();
            let added = store.upsert_recipes(recipes);
            store.save()?;
            tracing::info!(file = %file.display(), total, added, "recipes imported");
            println!("{added} new, {} updated", total - added);
        }
    }

    Ok(())
}

#[tracing::instrument(skip_all)]
pub fn trips(config: tripkit::Config, command: TripsCommand) -> anyhow::Result<()> {
    let mut store = Store::open(&config.store.path)?;

    match command {
        TripsCommand::List => {
            for trip in store.trips() {
                println!(
                    "{:<20} {:<30} {} -> {} ({} days planned)",
                    trip.id,
                    trip.name,
                    trip.start_date,
                    trip.end_date,
                    trip.days.len()
                );
            }
        }
        TripsCommand::Import { file } => {
            let trips: Vec<Trip> = serde_json::from_str(&std::fs::read_to_string(&file)?)?;
            let total = trips.len();
            let added = store.upsert_trips(trips);
            store.save()?;
            tracing::info!(file = %file.display(), total, added, "trips imported");
            println!("{added} new, {} updated", total - added);
        }
    }

    Ok(())
}
