//! Tests for the JSON store and the grocery flows built on it

use chrono::NaiveDate;
use temp_dir::TempDir;
use tripkit::{AppError, Store};
use tripkit_shared::{
    mealplan::{MealPlanDay, MealSlot, MealType, Trip},
    recipe::{Aisle, Ingredient, IngredientUnit, Recipe},
    shopping::GroceryItem,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, day).unwrap()
}

fn seeded(dir: &TempDir) -> Store {
    let mut store = Store::open(dir.child("tripkit.json")).unwrap();

    store.upsert_recipes(vec![
        Recipe::new("pasta", "Pasta")
            .with_ingredient(
                Ingredient::new("Pasta")
                    .with_quantity(500.0)
                    .with_unit(IngredientUnit::Gram),
            )
            .with_ingredient(
                Ingredient::new("Tomato")
                    .with_quantity(3.0)
                    .with_aisle(Aisle::Produce),
            ),
        Recipe::new("salad", "Salad")
            .with_ingredient(Ingredient::new("tomato").with_quantity(2.0))
            .with_ingredient(
                Ingredient::new("Olive oil")
                    .with_quantity(2.0)
                    .with_unit(IngredientUnit::Tablespoon),
            ),
    ]);

    let dinner = MealSlot::new(MealType::Dinner, ["pasta"]);
    let lunch = MealSlot::new(MealType::Lunch, ["salad", "gone"]);
    store.upsert_trips(vec![
        Trip::new("alps", "Alps", date(1), date(2))
            .with_day(MealPlanDay::new(date(1)).with_slot(dinner))
            .with_day(MealPlanDay::new(date(2)).with_slot(lunch)),
    ]);

    store
}

#[test]
fn test_missing_file_opens_empty_store() {
    let dir = TempDir::new().unwrap();

    let store = Store::open(dir.child("nothing-here.json")).unwrap();

    assert!(store.recipes().is_empty());
    assert!(store.trips().is_empty());
    assert!(store.groceries().is_empty());
}

#[test]
fn test_save_and_reopen() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded(&dir);
    store.generate_groceries("alps").unwrap();
    store.save().unwrap();

    let reopened = Store::open(dir.child("tripkit.json")).unwrap();

    assert_eq!(reopened.data(), store.data());
    assert!(!dir.child("tripkit.json.tmp").exists());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.child("nested").join("store.json")).unwrap();

    store.save().unwrap();

    assert!(dir.child("nested").join("store.json").exists());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.child("tripkit.json"), "{ not json").unwrap();

    let result = Store::open(dir.child("tripkit.json"));

    assert!(matches!(result, Err(AppError::Serialization(_))));
}

#[test]
fn test_generate_replaces_existing_list() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded(&dir);
    let mut manual = GroceryItem::manual("Sunscreen", None, None, Aisle::Other);
    manual.is_checked = true;
    store.replace_groceries(vec![manual]);

    let count = store.generate_groceries("alps").unwrap();

    let names: Vec<_> = store.groceries().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(count, 3);
    assert_eq!(names, vec!["Olive oil", "Pasta", "Tomato"]);
    assert!(store.groceries().iter().all(|i| !i.is_checked));

    let tomato = &store.groceries()[2];
    assert_eq!(tomato.quantity, Some(5.0));
    assert_eq!(tomato.aisle, Aisle::Produce);
}

#[test]
fn test_generate_unknown_trip() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded(&dir);

    let result = store.generate_groceries("moon");

    assert!(matches!(result, Err(AppError::TripNotFound(id)) if id == "moon"));
}

#[test]
fn test_quick_pack_keeps_manual_items() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded(&dir);
    let mut manual = GroceryItem::manual("Salt", None, None, Aisle::Pantry);
    manual.is_checked = true;
    store.replace_groceries(vec![manual.clone()]);

    let count = store.quick_pack(&["salad".to_string()], MealType::Lunch, date(5));

    assert_eq!(count, 3);
    let salt = store.groceries().iter().find(|i| i.name == "Salt").unwrap();
    assert_eq!(salt, &manual);
}

#[test]
fn test_upsert_replaces_by_id() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded(&dir);

    let added = store.upsert_recipes(vec![
        Recipe::new("pasta", "Pasta al pomodoro"),
        Recipe::new("soup", "Soup"),
    ]);

    assert_eq!(added, 1);
    assert_eq!(store.recipes().len(), 3);
    assert_eq!(store.catalog()["pasta"].title, "Pasta al pomodoro");
}
