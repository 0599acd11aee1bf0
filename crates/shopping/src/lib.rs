pub mod aggregation;
pub mod catalog;
pub mod categorization;
pub mod list;

// Re-export commonly used types
pub use aggregation::GroceryAggregator;
pub use catalog::{RecipeLookup, catalog_from};
pub use categorization::CategorizationService;
