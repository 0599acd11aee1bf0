pub mod catalog;
pub mod groceries;
