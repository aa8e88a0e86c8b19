use anyhow::Context;
use catalog::CatalogError;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use core_types::{AnalysisKind, Category};
use datastore::DataStore;
use dispatcher::{AnalysisOutput, DispatchError, Params};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod settings;

/// The main entry point for the crease analytics application.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => handle_run(&cli.data, args),
        Commands::List => {
            handle_list();
            Ok(())
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Ranked leaderboards and comparison tables over league match data.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
struct DataArgs {
    /// Path to a settings file (defaults to ./crease.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the match collection CSV (overrides the settings file).
    #[arg(long, global = true)]
    matches: Option<PathBuf>,

    /// Path to the delivery collection CSV (overrides the settings file).
    #[arg(long, global = true)]
    deliveries: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one analysis and print its result table.
    Run(RunArgs),
    /// List every analysis the engine offers, grouped by category.
    List,
}

#[derive(Parser)]
struct RunArgs {
    /// The analysis category ("batting", "bowling", "team", or "player").
    #[arg(long)]
    category: Category,

    /// The analysis name (e.g. "Top Batsmen", "Economy Rate").
    #[arg(long)]
    analysis: AnalysisKind,

    /// The season to scope to, for season-scoped analyses.
    #[arg(long)]
    season: Option<String>,

    /// A selected player; repeat for comparison analyses.
    #[arg(long = "player")]
    players: Vec<String>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Loads the dataset, dispatches the selected analysis, and renders it.
fn handle_run(data: &DataArgs, args: RunArgs) -> anyhow::Result<()> {
    let store = build_store(data)?;
    let params = Params {
        season: args.season,
        players: args.players,
    };

    match dispatcher::dispatch(&store, args.category, args.analysis, &params) {
        Ok(output) => {
            render(&args.analysis, &output);
            Ok(())
        }
        // An absent optional column makes the analysis unavailable, which is
        // not the same thing as an empty result.
        Err(DispatchError::Catalog(CatalogError::MissingColumn(column))) => {
            println!(
                "'{}' is unavailable: the loaded data has no '{}' column.",
                args.analysis, column
            );
            Ok(())
        }
        Err(e) => Err(e).context("analysis failed"),
    }
}

fn handle_list() {
    for kind in AnalysisKind::all() {
        println!("{:<28} [{}]", kind.display_name(), kind.category());
    }
}

fn build_store(data: &DataArgs) -> anyhow::Result<DataStore> {
    let mut settings = settings::load_settings(data.config.as_deref())
        .context("failed to load settings")?;
    if let Some(path) = &data.matches {
        settings.data.matches = path.clone();
    }
    if let Some(path) = &data.deliveries {
        settings.data.deliveries = path.clone();
    }

    let matches = loader::load_matches(&settings.data.matches)
        .with_context(|| format!("loading {}", settings.data.matches.display()))?;
    let deliveries = loader::load_deliveries(&settings.data.deliveries)
        .with_context(|| format!("loading {}", settings.data.deliveries.display()))?;

    let store = DataStore::new(
        matches.records,
        deliveries.records,
        matches.schema,
        deliveries.schema,
    )
    .context("the loaded collections are inconsistent")?;
    tracing::info!(
        seasons = store.seasons().len(),
        players = store.player_identities().len(),
        "dataset ready"
    );
    Ok(store)
}

// ==============================================================================
// Rendering
// ==============================================================================

fn render(analysis: &AnalysisKind, output: &AnalysisOutput) {
    println!("{}", analysis.display_name());
    match output {
        AnalysisOutput::Ranking(table) => {
            let mut t = Table::new();
            t.load_preset(UTF8_FULL)
                .set_header(vec![table.key_label, table.value_label]);
            for (key, value) in &table.rows {
                t.add_row(vec![key.clone(), value.to_string()]);
            }
            println!("{t}");
        }
        AnalysisOutput::Matrix(matrix) => {
            let mut header = vec!["Season".to_string()];
            header.extend(matrix.players.iter().cloned());
            let mut t = Table::new();
            t.load_preset(UTF8_FULL).set_header(header);
            for row in &matrix.rows {
                let mut cells = vec![row.season.clone()];
                cells.extend(row.values.iter().map(u64::to_string));
                t.add_row(cells);
            }
            println!("{t}");
        }
        AnalysisOutput::Metrics(metrics) => {
            let mut t = Table::new();
            t.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);
            for (name, value) in &metrics.rows {
                t.add_row(vec![name.to_string(), value.to_string()]);
            }
            println!("{t}");
        }
        AnalysisOutput::Matches(list) => {
            let mut t = Table::new();
            t.load_preset(UTF8_FULL)
                .set_header(vec!["Season", "Team 1", "Team 2", "Winner"]);
            for row in &list.rows {
                t.add_row(vec![
                    row.season.clone(),
                    row.team1.clone(),
                    row.team2.clone(),
                    row.winner.clone().unwrap_or_else(|| "no result".to_string()),
                ]);
            }
            println!("{t}");
        }
        AnalysisOutput::Percent(pct) => println!("{pct}"),
    }
}
