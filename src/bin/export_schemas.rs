//! Exports the JSON Schemas of the persisted contracts and the option
//! catalogs, for front-ends and downstream quote handling.
//!
//! ```text
//! cargo run --features cli --bin export_schemas -- schemas --out schemas/
//! cargo run --features cli --bin export_schemas -- catalog --service website
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quote_configurator::application::services::{
    BuilderState, QuoteRequest, UnifiedQuoteState,
};
use quote_configurator::config::AppConfig;
use quote_configurator::domain::catalog::catalog_for;
use quote_configurator::domain::entities::QuoteSnapshot;
use quote_configurator::domain::value_objects::ServiceType;
use quote_configurator::telemetry::init_tracing;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "export_schemas", version, about = "Quote configurator schema export")]
struct Cli {
    /// Configuration file path (extension optional)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Write the JSON Schemas of snapshots, wizard state and quote requests
    Schemas {
        /// Output directory; prints to stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print option catalogs as JSON
    Catalog {
        /// Only this service (kebab-case id); every service when omitted
        #[arg(short, long)]
        service: Option<ServiceType>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(Some(path.as_path())),
        None => AppConfig::load(),
    }
    .context("failed to load configuration")?;
    init_tracing(&config.logging).context("failed to initialise tracing")?;

    match cli.command {
        Commands::Schemas { out } => export_schemas(out.as_deref()),
        Commands::Catalog { service } => print_catalogs(service),
    }
}

fn schemas() -> Vec<(&'static str, RootSchema)> {
    vec![
        ("quote-snapshot", schema_for!(QuoteSnapshot)),
        ("quote-request", schema_for!(QuoteRequest)),
        ("builder-state", schema_for!(BuilderState)),
        ("unified-quote-state", schema_for!(UnifiedQuoteState)),
    ]
}

fn export_schemas(out: Option<&Path>) -> Result<()> {
    let Some(dir) = out else {
        let all: serde_json::Map<_, _> = schemas()
            .into_iter()
            .map(|(name, schema)| Ok((name.to_string(), serde_json::to_value(schema)?)))
            .collect::<Result<_>>()?;
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    };

    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    for (name, schema) in schemas() {
        let path = dir.join(format!("{name}.schema.json"));
        write_json(&path, &schema)?;
        info!(path = %path.display(), "schema written");
    }
    Ok(())
}

fn print_catalogs(service: Option<ServiceType>) -> Result<()> {
    let catalogs: Vec<_> = match service {
        Some(service) => vec![catalog_for(service)],
        None => ServiceType::ALL.into_iter().map(catalog_for).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&catalogs)?);
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
