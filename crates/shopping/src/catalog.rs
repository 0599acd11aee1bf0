use std::collections::{BTreeMap, HashMap};

use tripkit_shared::recipe::Recipe;

/// Read access to the recipe catalog by identifier.
pub trait RecipeLookup {
    fn recipe(&self, id: &str) -> Option<&Recipe>;
}

impl RecipeLookup for HashMap<String, Recipe> {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.get(id)
    }
}

impl RecipeLookup for BTreeMap<String, Recipe> {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.get(id)
    }
}

impl<T: RecipeLookup + ?Sized> RecipeLookup for &T {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        (**self).recipe(id)
    }
}

/// Snapshot of recipes keyed by id. A later recipe with a duplicate id wins.
pub fn catalog_from<I>(recipes: I) -> HashMap<String, Recipe>
where
    I: IntoIterator<Item = Recipe>,
{
    recipes
        .into_iter()
        .map(|recipe| (recipe.id.to_owned(), recipe))
        .collect()
}
