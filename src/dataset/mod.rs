// Recipe collection: CSV loading and row models

pub mod loader;
pub mod models;

pub use loader::{load_recipes, read_recipes};
pub use models::{parse_ingredients, Recipe, RecipeTable};
