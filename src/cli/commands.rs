use crate::config::queries::DEMO_QUERY;
use crate::config::Settings;
use crate::dataset::{load_recipes, Recipe};
use crate::evaluation::metrics::{DEMO_PREDICTED, DEMO_TRUTH};
use crate::evaluation::{
    evaluate, parse_labels, BatchEvaluator, BatchSummary, ClassificationMetrics, QueryResult,
};
use crate::matcher::{rank_recipes, IngredientExpander, ScoredRecipe};
use crate::report::{build_report, write_fixed_report, write_ranked_csv, write_raw_report};
use crate::utils::{format_list, truncate};
use crate::Result;
use std::path::Path;
use tracing::info;

/// Full run: demo walkthrough, demo metrics, ranked CSV, batch reports
pub fn run(settings: &Settings) -> Result<()> {
    let table = load_recipes(&settings.dataset.recipes_path)?;
    let expander: IngredientExpander = settings.load_expansion()?.into();
    let queries = settings.load_queries()?;
    let evaluator = BatchEvaluator::new(&table, &expander, settings.ranking.top_k);

    let demo: Vec<String> = DEMO_QUERY.iter().map(|s| s.to_string()).collect();
    let (result, ranked) = evaluator.evaluate_with_ranking(&demo);
    print_query_result(&result);

    let metrics = evaluate(DEMO_TRUTH, DEMO_PREDICTED)?;
    print_metrics(&metrics);

    write_ranked_csv(&settings.output.ranked_path, &table.headers, &ranked)?;
    println!(
        "Ranked recipes saved as '{}'.",
        settings.output.ranked_path.display()
    );

    let summary = write_reports(
        &evaluator,
        &queries.queries,
        &settings.output.report_path,
        &settings.output.fixed_report_path,
    )?;
    print_summary(&summary);

    Ok(())
}

/// Rank recipes for an ad-hoc query
pub fn search(settings: &Settings, ingredients: &[String], expand: bool) -> Result<()> {
    let table = load_recipes(&settings.dataset.recipes_path)?;
    let top_k = settings.ranking.top_k;

    if expand {
        let expander: IngredientExpander = settings.load_expansion()?.into();
        let evaluator = BatchEvaluator::new(&table, &expander, top_k);
        print_query_result(&evaluator.evaluate_query(ingredients));
        return Ok(());
    }

    let mut ranked = rank_recipes(ingredients, &table);
    ranked.truncate(top_k);
    println!("Query: {}", format_list(ingredients));
    print_recipe_table(&ranked);
    Ok(())
}

/// Batch evaluation only
pub fn batch(settings: &Settings, output: &Path, fixed_output: &Path) -> Result<()> {
    let table = load_recipes(&settings.dataset.recipes_path)?;
    let expander: IngredientExpander = settings.load_expansion()?.into();
    let queries = settings.load_queries()?;
    let evaluator = BatchEvaluator::new(&table, &expander, settings.ranking.top_k);

    let summary = write_reports(&evaluator, &queries.queries, output, fixed_output)?;
    print_summary(&summary);
    Ok(())
}

/// Metrics for two comma-separated label lists
pub fn metrics(truth: &str, predicted: &str) -> Result<()> {
    let metrics = evaluate(&parse_labels(truth)?, &parse_labels(predicted)?)?;
    print_metrics(&metrics);
    Ok(())
}

fn write_reports(
    evaluator: &BatchEvaluator<'_>,
    queries: &[Vec<String>],
    output: &Path,
    fixed_output: &Path,
) -> Result<BatchSummary> {
    let (results, summary) = evaluator.run(queries);
    let report = build_report(&results);

    write_raw_report(output, &report)?;
    write_fixed_report(fixed_output, &report)?;
    info!(
        "Reports written: {} and {}",
        output.display(),
        fixed_output.display()
    );
    println!("Query results saved as '{}'.", fixed_output.display());

    Ok(summary)
}

// Console output

fn print_query_result(result: &QueryResult<'_>) {
    println!("Original Query: {}", format_list(&result.query));
    println!("Suggested Ingredients: {}", format_list(&result.suggested));

    println!("Top Matching Recipes:");
    print_recipe_table(&result.top_matches);

    if let Some(pick) = &result.suggestion_pick {
        println!("\nTop Recipe Using Suggested Ingredient:");
        print_recipe_table(std::slice::from_ref(pick));
    }
}

fn print_recipe_table(rows: &[ScoredRecipe<'_>]) {
    if rows.is_empty() {
        println!("No recipes found");
        return;
    }

    println!(
        "{:<32} {:>15} {:<40} {:<20}",
        "Recipe Name", "Match Score (%)", "Ingredients", "Dietary Filters"
    );
    println!("{}", "-".repeat(110));

    for scored in rows {
        let recipe = scored.recipe;
        println!(
            "{:<32} {:>15.2} {:<40} {:<20}",
            truncate(recipe.name.as_deref().unwrap_or("-"), 30),
            scored.score,
            truncate(&recipe.ingredients, 38),
            truncate(dietary_label(recipe), 18)
        );
    }
}

fn dietary_label(recipe: &Recipe) -> &str {
    recipe.dietary_filters.as_deref().unwrap_or("-")
}

fn print_metrics(metrics: &ClassificationMetrics) {
    println!("\nEvaluation Metrics:");
    for (name, value) in metrics.entries() {
        println!("{name}: {value:.2}");
    }
}

fn print_summary(summary: &BatchSummary) {
    println!("\nQueries evaluated: {}", summary.queries);
    println!("  With suggestions: {}", summary.with_suggestions);
    println!("  With a suggested-ingredient pick: {}", summary.with_suggestion_pick);
    println!("  With a zero-match example: {}", summary.with_zero_match);
    println!(
        "  Finished at {} ({} ms)",
        summary.finished_at.format("%Y-%m-%d %H:%M:%S UTC"),
        (summary.finished_at - summary.started_at).num_milliseconds()
    );
}
