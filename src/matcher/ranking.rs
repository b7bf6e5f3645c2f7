use crate::dataset::{Recipe, RecipeTable};
use crate::matcher::scoring::match_percentage;
use std::collections::HashSet;
use tracing::debug;

/// A recipe paired with its score against one query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a Recipe,
    pub score: f64,
}

/// Score every recipe, keeping collection order
pub fn score_all<'a, S: AsRef<str>>(
    query: &[S],
    table: &'a RecipeTable,
) -> Vec<ScoredRecipe<'a>> {
    table
        .iter()
        .map(|recipe| ScoredRecipe {
            recipe,
            score: match_percentage(&recipe.ingredients, query),
        })
        .collect()
}

/// Rank the whole collection against a query.
///
/// Scores are sorted descending with a stable sort, so equal scores keep
/// collection order. Later rows repeating a recipe name are dropped.
pub fn rank_recipes<'a, S: AsRef<str>>(
    query: &[S],
    table: &'a RecipeTable,
) -> Vec<ScoredRecipe<'a>> {
    let mut ranked = score_all(query, table);
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    // missing names count as one name
    let mut seen: HashSet<Option<&str>> = HashSet::new();
    ranked.retain(|scored| seen.insert(scored.recipe.name.as_deref()));

    debug!(
        "Ranked {} recipes ({} unique names)",
        table.len(),
        ranked.len()
    );
    ranked
}

/// First recipe in collection order that shares nothing with the query
pub fn zero_match<'a, S: AsRef<str>>(
    query: &[S],
    table: &'a RecipeTable,
) -> Option<&'a Recipe> {
    score_all(query, table)
        .into_iter()
        .find(|scored| scored.score == 0.0)
        .map(|scored| scored.recipe)
}

/// Best recipe for the query extended with `ingredient`, among recipes whose
/// ingredient text mentions it
pub fn top_with_ingredient<'a, S: AsRef<str>>(
    query: &[S],
    ingredient: &str,
    table: &'a RecipeTable,
) -> Option<ScoredRecipe<'a>> {
    let mut extended: Vec<&str> = query.iter().map(AsRef::as_ref).collect();
    extended.push(ingredient);

    rank_recipes(&extended, table)
        .into_iter()
        .find(|scored| scored.recipe.ingredients.contains(ingredient))
}
