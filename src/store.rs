use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tripkit_shared::{
    mealplan::{MealType, Trip},
    recipe::Recipe,
    shopping::GroceryItem,
};
use tripkit_shopping::{GroceryAggregator, catalog_from};

use crate::error::AppError;

/// Everything the planner keeps on disk, as one JSON document.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreData {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub groceries: Vec<GroceryItem>,
}

pub struct Store {
    path: PathBuf,
    data: StoreData,
}

impl Store {
    /// Load the document at `path`; a missing file opens an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let data = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            tracing::info!(path = %path.display(), "store not found, starting empty");
            StoreData::default()
        };

        Ok(Self { path, data })
    }

    /// Write the whole document back, through a temporary file so a failed
    /// write never leaves a truncated store behind.
    pub fn save(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&self.data)?)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), "store saved");

        Ok(())
    }

    pub fn data(&self) -> &StoreData {
        &self.data
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.data.recipes
    }

    pub fn trips(&self) -> &[Trip] {
        &self.data.trips
    }

    pub fn groceries(&self) -> &[GroceryItem] {
        &self.data.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut Vec<GroceryItem> {
        &mut self.data.groceries
    }

    /// Snapshot of the recipe catalog keyed by recipe id.
    pub fn catalog(&self) -> HashMap<String, Recipe> {
        catalog_from(self.data.recipes.iter().cloned())
    }

    pub fn trip(&self, id: &str) -> Result<&Trip, AppError> {
        self.data
            .trips
            .iter()
            .find(|trip| trip.id == id)
            .ok_or_else(|| AppError::TripNotFound(id.to_string()))
    }

    /// Insert or replace recipes by id. Returns how many were new.
    pub fn upsert_recipes(&mut self, recipes: Vec<Recipe>) -> usize {
        let mut added = 0;
        for recipe in recipes {
            match self.data.recipes.iter_mut().find(|r| r.id == recipe.id) {
                Some(existing) => *existing = recipe,
                None => {
                    self.data.recipes.push(recipe);
                    added += 1;
                }
            }
        }

        added
    }

    /// Insert or replace trips by id. Returns how many were new.
    pub fn upsert_trips(&mut self, trips: Vec<Trip>) -> usize {
        let mut added = 0;
        for trip in trips {
            match self.data.trips.iter_mut().find(|t| t.id == trip.id) {
                Some(existing) => *existing = trip,
                None => {
                    self.data.trips.push(trip);
                    added += 1;
                }
            }
        }

        added
    }

    pub fn replace_groceries(&mut self, items: Vec<GroceryItem>) {
        self.data.groceries = items;
    }

    /// Rebuild the grocery list from a trip, discarding manual lines and
    /// checked state. Returns the number of lines.
    pub fn generate_groceries(&mut self, trip_id: &str) -> Result<usize, AppError> {
        let catalog = self.catalog();
        let items = GroceryAggregator::aggregate(self.trip(trip_id)?, &catalog);
        let count = items.len();

        self.replace_groceries(items);
        tracing::info!(trip_id, items = count, "grocery list generated");

        Ok(count)
    }

    /// Merge a few recipes into the current grocery list through a one-day
    /// trip. Returns the number of lines afterwards.
    pub fn quick_pack(
        &mut self,
        recipe_ids: &[String],
        meal_type: MealType,
        date: NaiveDate,
    ) -> usize {
        let trip = Trip::single_day("Quick pack", date, meal_type, recipe_ids.iter().cloned());
        let items =
            GroceryAggregator::merge_into_existing(&self.data.groceries, &trip, &self.catalog());
        let count = items.len();

        self.replace_groceries(items);
        tracing::info!(
            recipes = recipe_ids.len(),
            items = count,
            "recipes packed into grocery list"
        );

        count
    }
}
