use crate::config::ExpansionConfig;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Read-only ingredient -> related ingredients lookup
#[derive(Debug, Clone, Default)]
pub struct IngredientExpander {
    table: BTreeMap<String, Vec<String>>,
}

impl IngredientExpander {
    pub fn new(table: BTreeMap<String, Vec<String>>) -> Self {
        Self { table }
    }

    /// Related ingredients for every query ingredient found in the table,
    /// minus the query's own ingredients. Sorted, no repeats.
    pub fn suggest<S: AsRef<str>>(&self, query: &[S]) -> Vec<String> {
        let original: HashSet<&str> = query.iter().map(AsRef::as_ref).collect();

        let candidates: BTreeSet<&str> = query
            .iter()
            .filter_map(|ingredient| self.table.get(ingredient.as_ref()))
            .flatten()
            .map(String::as_str)
            .collect();

        candidates
            .into_iter()
            .filter(|c| !original.contains(c))
            .map(str::to_string)
            .collect()
    }
}

impl From<ExpansionConfig> for IngredientExpander {
    fn from(config: ExpansionConfig) -> Self {
        Self::new(config.expansions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expander() -> IngredientExpander {
        ExpansionConfig::default().into()
    }

    #[test]
    fn test_suggest_from_single_key() {
        let suggested = expander().suggest(&["chicken", "cheese"]);
        assert_eq!(suggested, vec!["flour", "garlic", "potato"]);
    }

    #[test]
    fn test_suggest_excludes_query_ingredients() {
        // "pasta" expands to cheese, flour, olive oil; "tomato" to basil, olive oil, cheese
        let suggested = expander().suggest(&["pasta", "tomato", "cheese"]);
        assert_eq!(suggested, vec!["basil", "flour", "olive oil"]);
        assert!(!suggested.contains(&"cheese".to_string()));
    }

    #[test]
    fn test_unknown_ingredients_contribute_nothing() {
        assert!(expander().suggest(&["milk", "ginger"]).is_empty());
        assert!(expander().suggest::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_repeated_query_ingredient() {
        let suggested = expander().suggest(&["quinoa", "quinoa"]);
        assert_eq!(suggested, vec!["avocado", "chickpeas", "lemon"]);
    }
}
