use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Merge key shared by ingredients and grocery items: trimmed, lowercased name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum IngredientUnit {
    #[serde(alias = "pc", alias = "pcs")]
    #[strum(
        to_string = "piece",
        serialize = "pc",
        serialize = "pcs",
        serialize = "pieces"
    )]
    Piece,
    #[serde(alias = "g")]
    #[strum(to_string = "gram", serialize = "g", serialize = "grams")]
    Gram,
    #[serde(alias = "kg")]
    #[strum(to_string = "kilogram", serialize = "kg", serialize = "kilograms")]
    Kilogram,
    #[serde(alias = "ml")]
    #[strum(to_string = "milliliter", serialize = "ml", serialize = "milliliters")]
    Milliliter,
    #[serde(alias = "l")]
    #[strum(to_string = "liter", serialize = "l", serialize = "liters")]
    Liter,
    #[serde(alias = "tbsp")]
    #[strum(
        to_string = "tablespoon",
        serialize = "tbsp",
        serialize = "tablespoons"
    )]
    Tablespoon,
    #[serde(alias = "tsp")]
    #[strum(to_string = "teaspoon", serialize = "tsp", serialize = "teaspoons")]
    Teaspoon,
    #[strum(to_string = "cup", serialize = "cups")]
    Cup,
}

impl IngredientUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            IngredientUnit::Piece => "pc",
            IngredientUnit::Gram => "g",
            IngredientUnit::Kilogram => "kg",
            IngredientUnit::Milliliter => "ml",
            IngredientUnit::Liter => "l",
            IngredientUnit::Tablespoon => "tbsp",
            IngredientUnit::Teaspoon => "tsp",
            IngredientUnit::Cup => "cup",
        }
    }
}

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Aisle {
    /// Fresh fruits, vegetables and herbs
    Produce,
    /// Milk, butter, cheese, yogurt, eggs
    Dairy,
    /// Butcher and fishmonger counters
    Meat,
    Bakery,
    /// Dry goods, spices, oils, canned and jarred food
    Pantry,
    Frozen,
    Beverages,
    #[default]
    Other,
}

impl Aisle {
    pub fn label(&self) -> &'static str {
        match self {
            Aisle::Produce => "Produce",
            Aisle::Dairy => "Dairy",
            Aisle::Meat => "Meat & Fish",
            Aisle::Bakery => "Bakery",
            Aisle::Pantry => "Pantry",
            Aisle::Frozen => "Frozen",
            Aisle::Beverages => "Beverages",
            Aisle::Other => "Other",
        }
    }
}

pub trait QuantityFormat {
    fn format(&self, quantity: Option<f64>) -> String;
}

impl QuantityFormat for Option<IngredientUnit> {
    fn format(&self, quantity: Option<f64>) -> String {
        match (quantity, self) {
            (Some(value), Some(unit)) => format!("{} {}", format_number(value), unit.symbol()),
            (Some(value), None) => format_number(value),
            (None, Some(unit)) => unit.symbol().to_string(),
            (None, None) => String::new(),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }

    let formatted = format!("{:.2}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<IngredientUnit>,
    #[serde(default)]
    pub aisle: Aisle,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            unit: None,
            aisle: Aisle::default(),
        }
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_unit(mut self, unit: IngredientUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn with_aisle(mut self, aisle: Aisle) -> Self {
        self.aisle = aisle;
        self
    }

    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Authored order is significant.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: vec![],
            ingredients: vec![],
            steps: vec![],
        }
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }
}
