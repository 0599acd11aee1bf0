use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

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
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
}

impl MealType {
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

/// One meal occasion of a day. Recipe ids may repeat or point at recipes
/// that no longer exist in the catalog.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MealSlot {
    pub meal_type: MealType,
    #[serde(default)]
    pub recipe_ids: Vec<String>,
}

impl MealSlot {
    pub fn new<I, S>(meal_type: MealType, recipe_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            meal_type,
            recipe_ids: recipe_ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MealPlanDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub slots: Vec<MealSlot>,
}

impl MealPlanDay {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            slots: vec![],
        }
    }

    pub fn with_slot(mut self, slot: MealSlot) -> Self {
        self.slots.push(slot);
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub days: Vec<MealPlanDay>,
}

impl Trip {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_date,
            end_date,
            days: vec![],
        }
    }

    /// Synthetic one-day trip holding a single slot, used to push a handful
    /// of recipes onto the grocery list without planning a real trip.
    pub fn single_day<I, S>(
        name: impl Into<String>,
        date: NaiveDate,
        meal_type: MealType,
        recipe_ids: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            start_date: date,
            end_date: date,
            days: vec![MealPlanDay::new(date).with_slot(MealSlot::new(meal_type, recipe_ids))],
        }
    }

    pub fn with_day(mut self, day: MealPlanDay) -> Self {
        self.days.push(day);
        self
    }

    /// Every planned recipe id in day, slot, then list order.
    pub fn planned_recipe_ids(&self) -> impl Iterator<Item = &str> {
        self.days
            .iter()
            .flat_map(|day| day.slots.iter())
            .flat_map(|slot| slot.recipe_ids.iter())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, day).unwrap()
    }

    #[test]
    fn test_planned_recipe_ids_keep_plan_order() {
        let trip = Trip::new("t1", "Lakes", date(1), date(2))
            .with_day(
                MealPlanDay::new(date(1))
                    .with_slot(MealSlot::new(MealType::Breakfast, ["oats"]))
                    .with_slot(MealSlot::new(MealType::Dinner, ["stew", "bread"])),
            )
            .with_day(
                MealPlanDay::new(date(2)).with_slot(MealSlot::new(MealType::Lunch, ["stew"])),
            );

        let ids: Vec<_> = trip.planned_recipe_ids().collect();

        assert_eq!(ids, vec!["oats", "stew", "bread", "stew"]);
    }

    #[test]
    fn test_single_day_trip() {
        let trip = Trip::single_day("Quick pack", date(3), MealType::Snack, ["a", "b"]);

        assert_eq!(trip.start_date, trip.end_date);
        assert_eq!(trip.days.len(), 1);
        assert_eq!(trip.days[0].slots[0].meal_type, MealType::Snack);
        let ids: Vec<_> = trip.planned_recipe_ids().collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_meal_type_parse() {
        assert_eq!("breakfast".parse::<MealType>(), Ok(MealType::Breakfast));
        assert_eq!("Snack".parse::<MealType>(), Ok(MealType::Snack));
        assert_eq!(MealType::Lunch.to_string(), "lunch");
        assert_eq!(MealType::Lunch.label(), "Lunch");
    }
}
