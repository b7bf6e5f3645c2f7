// Query expansion, overlap scoring and ranking over the recipe collection

pub mod expansion;
pub mod ranking;
pub mod scoring;

// Re-exports
pub use expansion::IngredientExpander;
pub use ranking::{rank_recipes, score_all, top_with_ingredient, zero_match, ScoredRecipe};
pub use scoring::match_percentage;
