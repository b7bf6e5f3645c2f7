// Per-query report entries and the files they are written to

pub mod value;
pub mod writer;

pub use value::Value;
pub use writer::{write_fixed_report, write_ranked_csv, write_raw_report};

use crate::dataset::models::{DIETARY_COLUMN, INGREDIENTS_COLUMN, NAME_COLUMN, SCORE_COLUMN};
use crate::dataset::Recipe;
use crate::evaluation::QueryResult;
use crate::matcher::ScoredRecipe;

pub const QUERY_KEY: &str = "Query";
pub const SUGGESTED_KEY: &str = "Suggested Ingredients";
pub const TOP_MATCHES_KEY: &str = "Top Matching Recipes";
pub const SUGGESTION_PICK_KEY: &str = "Top Recipe Using Suggested Ingredient";
pub const ZERO_MATCH_KEY: &str = "Non-Relevant Dish (0% Match)";

/// Report record for a scored recipe
pub fn scored_record(scored: &ScoredRecipe<'_>) -> Value {
    let recipe = scored.recipe;
    Value::Object(vec![
        (NAME_COLUMN.to_string(), cell(recipe.name.as_deref())),
        (SCORE_COLUMN.to_string(), scored.score.into()),
        (INGREDIENTS_COLUMN.to_string(), recipe.ingredients.as_str().into()),
        (DIETARY_COLUMN.to_string(), cell(recipe.dietary_filters.as_deref())),
    ])
}

/// Report record for a recipe without a score
pub fn recipe_record(recipe: &Recipe) -> Value {
    Value::Object(vec![
        (NAME_COLUMN.to_string(), cell(recipe.name.as_deref())),
        (INGREDIENTS_COLUMN.to_string(), recipe.ingredients.as_str().into()),
        (DIETARY_COLUMN.to_string(), cell(recipe.dietary_filters.as_deref())),
    ])
}

// Missing cells stay NaN until the fixed report is written
fn cell(text: Option<&str>) -> Value {
    text.map(Value::from).unwrap_or_else(Value::missing)
}

/// One report entry
pub fn query_entry(result: &QueryResult<'_>) -> Value {
    let strings = |items: &[String]| {
        Value::Array(items.iter().map(|s| s.as_str().into()).collect())
    };

    Value::Object(vec![
        (QUERY_KEY.to_string(), strings(&result.query)),
        (SUGGESTED_KEY.to_string(), strings(&result.suggested)),
        (
            TOP_MATCHES_KEY.to_string(),
            Value::Array(result.top_matches.iter().map(scored_record).collect()),
        ),
        (
            SUGGESTION_PICK_KEY.to_string(),
            result.suggestion_pick.as_ref().map(scored_record).into(),
        ),
        (
            ZERO_MATCH_KEY.to_string(),
            result
                .zero_match
                .map(|recipe| Value::Array(vec![recipe_record(recipe)]))
                .into(),
        ),
    ])
}

/// The full report: one entry per query, in query order
pub fn build_report(results: &[QueryResult<'_>]) -> Value {
    Value::Array(results.iter().map(query_entry).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RecipeTable;

    #[test]
    fn test_query_entry_shape() {
        let table = RecipeTable::from_recipes(vec![
            Recipe::new("Toast", "bread, butter", Some("Vegetarian")),
            Recipe::new("Salad", "lettuce", None),
        ]);
        let result = QueryResult {
            query: vec!["bread".to_string()],
            suggested: vec![],
            top_matches: vec![ScoredRecipe {
                recipe: &table.recipes[0],
                score: 100.0,
            }],
            suggestion_pick: None,
            zero_match: Some(&table.recipes[1]),
        };

        let entry = query_entry(&result);

        assert_eq!(entry.get(QUERY_KEY), Some(&Value::Array(vec!["bread".into()])));
        assert_eq!(entry.get(SUGGESTED_KEY), Some(&Value::Array(vec![])));
        assert_eq!(entry.get(SUGGESTION_PICK_KEY), Some(&Value::Null));

        let top = match entry.get(TOP_MATCHES_KEY) {
            Some(Value::Array(items)) => items,
            other => panic!("unexpected top matches: {other:?}"),
        };
        assert_eq!(top[0].get(SCORE_COLUMN), Some(&Value::Number(100.0)));

        let zero = match entry.get(ZERO_MATCH_KEY) {
            Some(Value::Array(items)) => items,
            other => panic!("unexpected zero match: {other:?}"),
        };
        assert_eq!(zero.len(), 1);
        assert!(zero[0].get(SCORE_COLUMN).is_none());
        assert!(zero[0].get(DIETARY_COLUMN).is_some_and(Value::is_nan));
    }

    #[test]
    fn test_unnamed_recipe_is_missing_then_null() {
        let csv = "Recipe Name,Ingredients,Dietary Filters\n,\"milk, egg\",Vegan\n";
        let table = crate::dataset::read_recipes(csv.as_bytes()).unwrap();

        let record = recipe_record(&table.recipes[0]);
        assert!(record.get(NAME_COLUMN).is_some_and(Value::is_nan));
        assert_eq!(record.get(DIETARY_COLUMN), Some(&Value::from("Vegan")));

        let fixed = record.replace_nan_with_null();
        assert_eq!(fixed.get(NAME_COLUMN), Some(&Value::Null));

        let scored = scored_record(&ScoredRecipe {
            recipe: &table.recipes[0],
            score: 50.0,
        });
        assert!(scored.get(NAME_COLUMN).is_some_and(Value::is_nan));
    }
}
