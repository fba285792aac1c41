use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use timeblock_core::Suggestion;

use super::AppContext;

/// Accepts either a bare JSON array of suggestions or `{"suggestions": [...]}`.
pub fn run(file: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let incoming = parse_suggestions(&contents)
        .with_context(|| format!("Failed to parse suggestions in {}", file.display()))?;

    let mut ctx = AppContext::load()?;
    let count = ctx.schedule.add_suggestions(incoming)?;

    println!("{}", format!("  Imported {} suggestion(s)", count).green());
    ctx.save()
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum SuggestionFile {
    List(Vec<Suggestion>),
    Wrapped { suggestions: Vec<Suggestion> },
}

fn parse_suggestions(contents: &str) -> Result<Vec<Suggestion>> {
    let file: SuggestionFile = serde_json::from_str(contents)?;
    Ok(match file {
        SuggestionFile::List(list) => list,
        SuggestionFile::Wrapped { suggestions } => suggestions,
    })
}
