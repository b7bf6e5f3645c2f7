use crate::dataset::parse_ingredients;
use std::collections::HashSet;

/// Percentage of distinct query ingredients present in the recipe's ingredient
/// text, rounded to two decimals. An empty query scores 0.
pub fn match_percentage<S: AsRef<str>>(recipe_ingredients: &str, query: &[S]) -> f64 {
    let query_set: HashSet<&str> = query.iter().map(AsRef::as_ref).collect();
    if query_set.is_empty() {
        return 0.0;
    }

    let recipe_set = parse_ingredients(recipe_ingredients);
    let matches = recipe_set.intersection(&query_set).count();

    round2(matches as f64 / query_set.len() as f64 * 100.0)
}

// Ties round to even on the exact binary value: 3.125 -> 3.12, 9.375 -> 9.38
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_match() {
        assert_eq!(
            match_percentage("chicken, cheese, garlic", &["chicken", "cheese"]),
            100.0
        );
    }

    #[test]
    fn test_partial_match_is_rounded() {
        let score = match_percentage("chicken, rice", &["chicken", "lemon", "rice"]);
        assert_eq!(score, 66.67);

        let score = match_percentage("rice", &["chicken", "lemon", "rice"]);
        assert_eq!(score, 33.33);
    }

    #[test]
    fn test_rounding_ties_go_to_even() {
        let query: Vec<String> = (0..32).map(|i| format!("i{i}")).collect();

        assert_eq!(match_percentage("i0", &query), 3.12);
        assert_eq!(match_percentage("i0, i1, i2", &query), 9.38);
        assert_eq!(match_percentage("i0, i1, i2, i3, i4", &query), 15.62);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        assert_eq!(match_percentage::<&str>("chicken, cheese", &[]), 0.0);
    }

    #[test]
    fn test_repeated_query_ingredients_count_once() {
        assert_eq!(match_percentage("egg, milk", &["egg", "egg", "flour"]), 50.0);
    }

    #[test]
    fn test_score_is_bounded() {
        let queries: &[&[&str]] = &[&["a"], &["a", "b"], &["x", "y", "z"], &["a", "a"]];
        for query in queries {
            let score = match_percentage("a, b, c", *query);
            assert!((0.0..=100.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn test_malformed_delimiter_misses() {
        assert_eq!(match_percentage("chicken,cheese", &["chicken"]), 0.0);
    }
}
