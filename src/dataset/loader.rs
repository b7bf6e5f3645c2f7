use crate::dataset::models::{
    Recipe, RecipeTable, DIETARY_COLUMN, INGREDIENTS_COLUMN, NAME_COLUMN,
};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Load the recipe collection from a CSV file
pub fn load_recipes(path: impl AsRef<Path>) -> Result<RecipeTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::Dataset(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let table = read_recipes(file)?;
    info!(
        "Loaded {} recipes from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Read recipes from CSV data, dropping rows that repeat an earlier row exactly
pub fn read_recipes<R: Read>(source: R) -> Result<RecipeTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| Error::Dataset(format!("Missing required column: {name}")))
    };

    let name_idx = column(NAME_COLUMN)?;
    let ingredients_idx = column(INGREDIENTS_COLUMN)?;
    let dietary_idx = column(DIETARY_COLUMN)?;

    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut recipes = Vec::new();
    let mut duplicates = 0usize;

    for result in reader.records() {
        let record = result?;
        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
        fields.resize(headers.len(), String::new());

        if !seen.insert(fields.clone()) {
            duplicates += 1;
            continue;
        }

        let cell = |idx: usize| (!fields[idx].is_empty()).then(|| fields[idx].clone());
        recipes.push(Recipe {
            name: cell(name_idx),
            ingredients: fields[ingredients_idx].clone(),
            dietary_filters: cell(dietary_idx),
            fields,
        });
    }

    debug!("Dropped {} duplicate rows", duplicates);

    Ok(RecipeTable { headers, recipes })
}
