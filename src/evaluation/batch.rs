use crate::dataset::{Recipe, RecipeTable};
use crate::matcher::{
    rank_recipes, top_with_ingredient, zero_match, IngredientExpander, ScoredRecipe,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Everything collected for one query
#[derive(Debug, Clone)]
pub struct QueryResult<'a> {
    pub query: Vec<String>,
    pub suggested: Vec<String>,
    pub top_matches: Vec<ScoredRecipe<'a>>,
    /// Best recipe for the query plus the first suggestion, if any mention it
    pub suggestion_pick: Option<ScoredRecipe<'a>>,
    pub zero_match: Option<&'a Recipe>,
}

#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub queries: usize,
    pub with_suggestions: usize,
    pub with_suggestion_pick: usize,
    pub with_zero_match: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

pub struct BatchEvaluator<'a> {
    table: &'a RecipeTable,
    expander: &'a IngredientExpander,
    top_k: usize,
}

impl<'a> BatchEvaluator<'a> {
    pub fn new(table: &'a RecipeTable, expander: &'a IngredientExpander, top_k: usize) -> Self {
        Self {
            table,
            expander,
            top_k,
        }
    }

    /// Expand, rank and collect the report pieces for a single query
    pub fn evaluate_query<S: AsRef<str>>(&self, query: &[S]) -> QueryResult<'a> {
        self.evaluate_with_ranking(query).0
    }

    /// Like [`evaluate_query`](Self::evaluate_query), also returning the full
    /// ranking the top matches were cut from
    pub fn evaluate_with_ranking<S: AsRef<str>>(
        &self,
        query: &[S],
    ) -> (QueryResult<'a>, Vec<ScoredRecipe<'a>>) {
        let suggested = self.expander.suggest(query);

        let ranked = rank_recipes(query, self.table);
        let top_matches = ranked.iter().take(self.top_k).copied().collect();

        let suggestion_pick = suggested
            .first()
            .and_then(|first| top_with_ingredient(query, first, self.table));

        let result = QueryResult {
            query: query.iter().map(|s| s.as_ref().to_string()).collect(),
            suggested,
            top_matches,
            suggestion_pick,
            zero_match: zero_match(query, self.table),
        };
        (result, ranked)
    }

    /// Evaluate every query in order
    pub fn run(&self, queries: &[Vec<String>]) -> (Vec<QueryResult<'a>>, BatchSummary) {
        let started_at = Utc::now();
        info!("Evaluating {} queries over {} recipes", queries.len(), self.table.len());

        let results: Vec<QueryResult<'a>> = queries
            .iter()
            .map(|query| {
                let result = self.evaluate_query(query);
                debug!(
                    "Query {:?}: {} suggestions, best score {}",
                    query,
                    result.suggested.len(),
                    result.top_matches.first().map(|s| s.score).unwrap_or(0.0)
                );
                result
            })
            .collect();

        let summary = BatchSummary {
            queries: results.len(),
            with_suggestions: results.iter().filter(|r| !r.suggested.is_empty()).count(),
            with_suggestion_pick: results.iter().filter(|r| r.suggestion_pick.is_some()).count(),
            with_zero_match: results.iter().filter(|r| r.zero_match.is_some()).count(),
            started_at,
            finished_at: Utc::now(),
        };

        info!(
            "Batch complete: {} queries, {} with suggestions, {} with a suggestion pick, {} with a zero-match example",
            summary.queries, summary.with_suggestions, summary.with_suggestion_pick, summary.with_zero_match
        );

        (results, summary)
    }
}
