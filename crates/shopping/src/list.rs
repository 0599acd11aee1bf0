use tripkit_shared::{
    recipe::{Aisle, IngredientUnit},
    shopping::GroceryItem,
};
use uuid::Uuid;

use crate::categorization::CategorizationService;

/// Flip the checked flag of one item and return its new state.
pub fn toggle(items: &mut [GroceryItem], id: Uuid) -> tripkit_shared::Result<bool> {
    let Some(item) = items.iter_mut().find(|item| item.id == id) else {
        tripkit_shared::not_found!("grocery item {}", id);
    };

    item.is_checked = !item.is_checked;
    tracing::debug!(%id, checked = item.is_checked, "grocery item toggled");

    Ok(item.is_checked)
}

/// Uncheck everything for the next shopping run. Returns how many items changed.
pub fn reset(items: &mut [GroceryItem]) -> usize {
    let mut changed = 0;
    for item in items.iter_mut().filter(|item| item.is_checked) {
        item.is_checked = false;
        changed += 1;
    }

    changed
}

/// Append a hand-written line. The aisle is guessed from the name when not given.
pub fn add_manual<'a>(
    items: &'a mut Vec<GroceryItem>,
    name: &str,
    quantity: Option<f64>,
    unit: Option<IngredientUnit>,
    aisle: Option<Aisle>,
) -> tripkit_shared::Result<&'a GroceryItem> {
    let name = name.trim();
    if name.is_empty() {
        tripkit_shared::user!("grocery item name cannot be empty");
    }

    if quantity.is_some_and(|q| !q.is_finite() || q < 0.0) {
        tripkit_shared::user!("quantity must be a non-negative number");
    }

    let aisle = aisle.unwrap_or_else(|| CategorizationService::categorize(name));
    items.push(GroceryItem::manual(name, quantity, unit, aisle));

    let position = items.len() - 1;
    Ok(&items[position])
}

/// Drop every checked item. Returns how many were removed.
pub fn clear_checked(items: &mut Vec<GroceryItem>) -> usize {
    let before = items.len();
    items.retain(|item| !item.is_checked);

    before - items.len()
}
