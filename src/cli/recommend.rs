use colored::Colorize;
use tabled::{Table, settings::Style};

use crate::{
    info,
    resolver::Resolver,
    types::{OptionTableRow, Source},
};

/// Resolves one recommendation from the command line and prints it.
///
/// Builds the production resolver, runs a single resolution and renders
/// the outcome: primary playlist, curator note, source tag and a table of
/// the returned options. Never fails; in fully degraded setups it simply
/// prints the curated fallback.
pub async fn recommend(mood: Option<String>, city: Option<String>) {
    let mood = mood.unwrap_or_else(|| "DeepFocus".to_string());

    let resolver = Resolver::from_config();
    let rec = resolver.resolve(&mood, city.as_deref()).await;

    let source = match rec.source {
        Source::Catalog => "catalog".green(),
        Source::Fallback => "fallback".yellow(),
    };

    info!(
        "{} / {} ({})",
        rec.mood.bold(),
        rec.weather.to_string().bold(),
        source
    );
    println!("{}", rec.playlist_name.bold());
    println!("{}", rec.playlist_url);
    println!("{}", rec.note.italic());

    let rows: Vec<OptionTableRow> = rec
        .options
        .iter()
        .map(|opt| OptionTableRow {
            name: opt.name.clone(),
            owner: opt.owner.clone().unwrap_or_default(),
            url: opt.url.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}
