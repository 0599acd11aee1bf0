use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tripkit_shared::{mealplan::Trip, recipe::Ingredient, shopping::GroceryItem};

use crate::catalog::RecipeLookup;

/// Grocery Aggregator
///
/// Stateless service that walks every recipe planned in a trip and folds the
/// ingredient requirements into one deduplicated grocery list.
///
/// Merge rules:
/// - "Milk 200 ml" + "milk 100 ml" = "Milk 300 ml" (key is the trimmed, lowercased name)
/// - "Oil 1 tbsp" + "Oil" = "Oil 1 tbsp" (no quantity on one side, nothing summed)
/// - "Flour 1 cup" + "Flour 200 g" = "Flour 1 cup" (units differ, first line kept as is)
///
/// Recipe ids missing from the catalog are skipped. No input ever makes it fail.
pub struct GroceryAggregator;

impl GroceryAggregator {
    /// Build a fresh grocery list for `trip`, meant to replace the current one.
    ///
    /// Items come back sorted by name using ordinal (byte) comparison. Every
    /// call creates new item ids, even for identical input.
    pub fn aggregate(trip: &Trip, lookup: &impl RecipeLookup) -> Vec<GroceryItem> {
        let mut accumulator = Accumulator::default();
        accumulator.collect(trip, lookup);

        let items = accumulator.into_sorted(Vec::new());
        tracing::debug!(trip_id = %trip.id, items = items.len(), "grocery list aggregated");

        items
    }

    /// Fold `trip` into an existing grocery list instead of replacing it.
    ///
    /// Existing items seed the accumulator under the same key, so a matching
    /// ingredient sums into them following the usual rule while their id,
    /// name, aisle, unit and checked flag stay as they were. Items no
    /// ingredient touched are returned unchanged. When several existing items
    /// share a key, the first one takes contributions and the others pass
    /// through untouched.
    pub fn merge_into_existing(
        existing: &[GroceryItem],
        trip: &Trip,
        lookup: &impl RecipeLookup,
    ) -> Vec<GroceryItem> {
        let mut accumulator = Accumulator::default();
        let mut passthrough = Vec::new();

        for item in existing {
            if !accumulator.seed(item) {
                passthrough.push(item.clone());
            }
        }

        accumulator.collect(trip, lookup);

        let items = accumulator.into_sorted(passthrough);
        tracing::debug!(
            trip_id = %trip.id,
            existing = existing.len(),
            items = items.len(),
            "trip merged into grocery list"
        );

        items
    }
}

/// Accumulating grocery lines keyed by normalized name, in first-seen order.
#[derive(Default)]
struct Accumulator {
    index: HashMap<String, usize>,
    items: Vec<GroceryItem>,
}

impl Accumulator {
    /// Returns false when the key is already taken.
    fn seed(&mut self, item: &GroceryItem) -> bool {
        match self.index.entry(item.key()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(self.items.len());
                self.items.push(item.clone());
                true
            }
        }
    }

    fn collect(&mut self, trip: &Trip, lookup: &impl RecipeLookup) {
        for recipe_id in trip.planned_recipe_ids() {
            let Some(recipe) = lookup.recipe(recipe_id) else {
                tracing::debug!(trip_id = %trip.id, recipe_id, "skipping unknown recipe");
                continue;
            };

            for ingredient in &recipe.ingredients {
                self.accumulate(ingredient);
            }
        }
    }

    fn accumulate(&mut self, ingredient: &Ingredient) {
        match self.index.entry(ingredient.key()) {
            Entry::Vacant(entry) => {
                entry.insert(self.items.len());
                self.items.push(GroceryItem::from_ingredient(ingredient));
            }
            Entry::Occupied(entry) => {
                let item = &mut self.items[*entry.get()];
                if !sum_quantity(item, ingredient) {
                    tracing::trace!(
                        name = %item.name,
                        unit = ?item.unit,
                        incoming_unit = ?ingredient.unit,
                        "quantity kept, units differ or quantity missing"
                    );
                }
            }
        }
    }

    fn into_sorted(self, mut extra: Vec<GroceryItem>) -> Vec<GroceryItem> {
        let mut items = self.items;
        items.append(&mut extra);

        // Ordinal comparison, stable for equal names.
        items.sort_by(|a, b| a.name.cmp(&b.name));

        items
    }
}

/// Add the ingredient quantity when both sides carry one and units match
/// exactly (no unit on both sides counts as a match).
fn sum_quantity(item: &mut GroceryItem, ingredient: &Ingredient) -> bool {
    match (item.quantity, ingredient.quantity) {
        (Some(current), Some(extra)) if item.unit == ingredient.unit => {
            item.quantity = Some(current + extra);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripkit_shared::recipe::{Aisle, IngredientUnit};

    fn item(name: &str, quantity: Option<f64>, unit: Option<IngredientUnit>) -> GroceryItem {
        GroceryItem::manual(name, quantity, unit, Aisle::Other)
    }

    #[test]
    fn test_sum_quantity_same_unit() {
        let mut milk = item("Milk", Some(200.0), Some(IngredientUnit::Milliliter));
        let extra = Ingredient::new("milk")
            .with_quantity(100.0)
            .with_unit(IngredientUnit::Milliliter);

        assert!(sum_quantity(&mut milk, &extra));
        assert_eq!(milk.quantity, Some(300.0));
    }

    #[test]
    fn test_sum_quantity_both_without_unit() {
        let mut eggs = item("Eggs", Some(2.0), None);
        let extra = Ingredient::new("eggs").with_quantity(4.0);

        assert!(sum_quantity(&mut eggs, &extra));
        assert_eq!(eggs.quantity, Some(6.0));
    }

    #[test]
    fn test_sum_quantity_unit_mismatch() {
        let mut flour = item("Flour", Some(1.0), Some(IngredientUnit::Cup));
        let extra = Ingredient::new("flour")
            .with_quantity(200.0)
            .with_unit(IngredientUnit::Gram);

        assert!(!sum_quantity(&mut flour, &extra));
        assert_eq!(flour.quantity, Some(1.0));
        assert_eq!(flour.unit, Some(IngredientUnit::Cup));
    }

    #[test]
    fn test_sum_quantity_missing_on_either_side() {
        let mut oil = item("Oil", Some(1.0), Some(IngredientUnit::Tablespoon));
        assert!(!sum_quantity(&mut oil, &Ingredient::new("Oil")));
        assert_eq!(oil.quantity, Some(1.0));

        let mut salt = item("Salt", None, None);
        assert!(!sum_quantity(&mut salt, &Ingredient::new("salt").with_quantity(5.0)));
        assert_eq!(salt.quantity, None);
    }

    #[test]
    fn test_accumulator_keeps_first_seen_line() {
        let mut accumulator = Accumulator::default();
        accumulator.accumulate(&Ingredient::new("Tomato").with_aisle(Aisle::Produce));
        accumulator.accumulate(&Ingredient::new(" tomato ").with_aisle(Aisle::Pantry));

        let items = accumulator.into_sorted(Vec::new());

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Tomato");
        assert_eq!(items[0].aisle, Aisle::Produce);
    }

    #[test]
    fn test_seed_rejects_duplicate_key() {
        let mut accumulator = Accumulator::default();

        assert!(accumulator.seed(&item("Salt", None, None)));
        assert!(!accumulator.seed(&item("SALT", Some(1.0), None)));
    }

    #[test]
    fn test_ordinal_sort_puts_uppercase_first() {
        let mut accumulator = Accumulator::default();
        accumulator.accumulate(&Ingredient::new("apple"));
        accumulator.accumulate(&Ingredient::new("Zucchini"));
        accumulator.accumulate(&Ingredient::new("Banana"));

        let names: Vec<_> = accumulator
            .into_sorted(Vec::new())
            .into_iter()
            .map(|i| i.name)
            .collect();

        assert_eq!(names, vec!["Banana", "Zucchini", "apple"]);
    }
}
