use std::collections::HashSet;

pub const NAME_COLUMN: &str = "Recipe Name";
pub const INGREDIENTS_COLUMN: &str = "Ingredients";
pub const DIETARY_COLUMN: &str = "Dietary Filters";
pub const SCORE_COLUMN: &str = "Match Score (%)";

/// Separator between ingredients in the `Ingredients` column
pub const INGREDIENT_DELIMITER: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// `None` when the cell is empty
    pub name: Option<String>,
    /// Raw ingredient text, e.g. `"chicken, cheese, garlic"`
    pub ingredients: String,
    /// `None` when the cell is empty
    pub dietary_filters: Option<String>,
    /// Every cell of the source row, in header order
    pub fields: Vec<String>,
}

impl Recipe {
    /// Build a recipe from its three required cells only
    pub fn new(name: &str, ingredients: &str, dietary_filters: Option<&str>) -> Self {
        let fields = vec![
            name.to_string(),
            ingredients.to_string(),
            dietary_filters.unwrap_or_default().to_string(),
        ];

        Self {
            name: Some(name.to_string()),
            ingredients: ingredients.to_string(),
            dietary_filters: dietary_filters.map(str::to_string),
            fields,
        }
    }
}

/// Split an ingredient string on the `", "` delimiter.
///
/// No trimming or case folding: `"egg,milk"` is a single member.
pub fn parse_ingredients(text: &str) -> HashSet<&str> {
    text.split(INGREDIENT_DELIMITER).collect()
}

/// Deduplicated recipe collection with the headers it was read with
#[derive(Debug, Clone, Default)]
pub struct RecipeTable {
    pub headers: Vec<String>,
    pub recipes: Vec<Recipe>,
}

impl RecipeTable {
    /// Table with the three required columns
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            headers: vec![
                NAME_COLUMN.to_string(),
                INGREDIENTS_COLUMN.to_string(),
                DIETARY_COLUMN.to_string(),
            ],
            recipes,
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ingredients() {
        let set = parse_ingredients("chicken, cheese, garlic");
        assert_eq!(set.len(), 3);
        assert!(set.contains("cheese"));
    }

    #[test]
    fn test_parse_ingredients_keeps_malformed_members() {
        let set = parse_ingredients("egg,milk, flour");
        assert!(set.contains("egg,milk"));
        assert!(!set.contains("egg"));
    }

    #[test]
    fn test_recipe_new_fills_fields() {
        let recipe = Recipe::new("Omelette", "egg, milk", None);
        assert_eq!(recipe.fields, vec!["Omelette", "egg, milk", ""]);
        assert_eq!(recipe.dietary_filters, None);
        assert_eq!(recipe.name.as_deref(), Some("Omelette"));
        assert_eq!(parse_ingredients(&recipe.ingredients).len(), 2);
    }
}
