use clap::Parser;
use recipe_ranker::{
    cli::{commands, Cli, Commands},
    config::Settings,
    Result,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries the console report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recipe_ranker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(recipes) = cli.recipes {
        settings.dataset.recipes_path = recipes;
    }
    if let Some(top_k) = cli.top_k {
        settings.ranking.top_k = top_k;
    }
    settings.validate()?;
    debug!("Settings: {:?}", settings);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run(&settings)?,
        Commands::Search {
            ingredients,
            expand,
        } => commands::search(&settings, &ingredients, expand)?,
        Commands::Batch {
            output,
            fixed_output,
        } => {
            let output = output.unwrap_or_else(|| settings.output.report_path.clone());
            let fixed_output =
                fixed_output.unwrap_or_else(|| settings.output.fixed_report_path.clone());
            commands::batch(&settings, &output, &fixed_output)?;
        }
        Commands::Metrics { truth, predicted } => commands::metrics(&truth, &predicted)?,
    }

    Ok(())
}
