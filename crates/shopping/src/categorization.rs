use tripkit_shared::recipe::{Aisle, normalize_name};

/// Categorization Service
///
/// Guesses the store aisle of a manually added grocery item from its name.
/// Aggregated items never go through here, they keep the aisle authored on
/// the recipe ingredient.
pub struct CategorizationService;

impl CategorizationService {
    /// Exact match on the normalized name first, then on its last word
    /// ("red onion" -> "onion"). Unknown names land in `Aisle::Other`.
    pub fn categorize(ingredient_name: &str) -> Aisle {
        let normalized = normalize_name(ingredient_name);

        if let Some(aisle) = Self::lookup(&normalized) {
            return aisle;
        }

        normalized
            .rsplit(' ')
            .next()
            .filter(|last| *last != normalized)
            .and_then(Self::lookup)
            .unwrap_or_default()
    }

    fn lookup(name: &str) -> Option<Aisle> {
        if Self::is_produce(name) {
            Some(Aisle::Produce)
        } else if Self::is_dairy(name) {
            Some(Aisle::Dairy)
        } else if Self::is_meat(name) {
            Some(Aisle::Meat)
        } else if Self::is_bakery(name) {
            Some(Aisle::Bakery)
        } else if Self::is_pantry(name) {
            Some(Aisle::Pantry)
        } else if Self::is_frozen(name) {
            Some(Aisle::Frozen)
        } else if Self::is_beverage(name) {
            Some(Aisle::Beverages)
        } else {
            None
        }
    }

    fn is_produce(name: &str) -> bool {
        matches!(
            name,
            "tomato" | "tomatoes"
                | "onion" | "onions"
                | "garlic"
                | "carrot" | "carrots"
                | "potato" | "potatoes"
                | "zucchini"
                | "pepper" | "peppers"
                | "lettuce"
                | "spinach"
                | "cucumber"
                | "mushroom" | "mushrooms"
                | "avocado" | "avocados"
                | "ginger"
                | "parsley"
                | "basil"
                | "apple" | "apples"
                | "banana" | "bananas"
                | "lemon" | "lemons"
                | "lime" | "limes"
                | "orange" | "oranges"
                | "berries"
        )
    }

    fn is_dairy(name: &str) -> bool {
        matches!(
            name,
            "milk"
                | "butter"
                | "cream"
                | "cheese"
                | "parmesan"
                | "mozzarella"
                | "yogurt"
                | "egg" | "eggs"
        )
    }

    fn is_meat(name: &str) -> bool {
        matches!(
            name,
            "chicken"
                | "beef"
                | "pork"
                | "bacon"
                | "ham"
                | "sausage" | "sausages"
                | "lamb"
                | "turkey"
                | "fish"
                | "salmon"
                | "tuna"
                | "shrimp"
        )
    }

    fn is_bakery(name: &str) -> bool {
        matches!(
            name,
            "bread" | "baguette" | "buns" | "rolls" | "tortillas" | "croissants" | "bagels"
        )
    }

    fn is_pantry(name: &str) -> bool {
        matches!(
            name,
            "flour"
                | "sugar"
                | "salt"
                | "rice"
                | "pasta"
                | "oats"
                | "oil"
                | "olive oil"
                | "vinegar"
                | "honey"
                | "beans"
                | "lentils"
                | "coffee"
                | "tea"
                | "cinnamon"
                | "paprika"
                | "black pepper"
        )
    }

    fn is_frozen(name: &str) -> bool {
        matches!(
            name,
            "ice cream" | "frozen peas" | "frozen berries" | "frozen pizza" | "ice"
        )
    }

    fn is_beverage(name: &str) -> bool {
        matches!(
            name,
            "water" | "juice" | "beer" | "wine" | "soda" | "orange juice" | "sparkling water"
        )
    }
}
