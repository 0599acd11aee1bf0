use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::recipe::{Aisle, Ingredient, IngredientUnit, QuantityFormat, normalize_name};

/// One line of the grocery list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroceryItem {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub aisle: Aisle,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<IngredientUnit>,
    #[serde(default)]
    pub is_checked: bool,
    #[serde(default)]
    pub source_recipe_id: Option<String>,
}

impl GroceryItem {
    /// Fresh unchecked line copied from an ingredient, without recipe back-reference.
    pub fn from_ingredient(ingredient: &Ingredient) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: ingredient.name.to_owned(),
            aisle: ingredient.aisle,
            quantity: ingredient.quantity,
            unit: ingredient.unit,
            is_checked: false,
            source_recipe_id: None,
        }
    }

    pub fn manual(
        name: impl Into<String>,
        quantity: Option<f64>,
        unit: Option<IngredientUnit>,
        aisle: Aisle,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            aisle,
            quantity,
            unit,
            is_checked: false,
            source_recipe_id: None,
        }
    }

    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }

    pub fn display_quantity(&self) -> String {
        self.unit.format(self.quantity)
    }
}
