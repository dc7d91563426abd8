//! immucert: FHIR Immunization bundles → eHN minimum data sets.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use immucert_client::FhirQuery;
use immucert_core::{Bundle, DisclosureLevel, UvciInfo, VaccEntryParser};

#[derive(Parser)]
#[command(
    name = "immucert",
    about = "Extract eHN minimum data sets from FHIR Immunization bundles"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query a FHIR server and write the merged, _include-expanded bundle
    Fetch {
        /// FHIR service root URL
        #[arg(long, default_value = immucert_client::DEFAULT_SERVER)]
        server: String,

        /// Only include immunizations on or after this date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<NaiveDate>,

        /// Output file for the bundle JSON
        #[arg(long)]
        out: PathBuf,
    },
    /// Resolve every Immunization entry of a bundle into minimum data sets
    Extract {
        /// Bundle JSON file (e.g. written by `fetch`)
        #[arg(long)]
        bundle: PathBuf,

        /// Disclosure level for field selection
        #[arg(long, value_enum, default_value_t = Level::Pv)]
        level: Level,

        /// Certificate identifier to embed; generated when omitted
        #[arg(long)]
        uvci: Option<String>,

        /// Issuer code used when generating a UVCI
        #[arg(long, default_value = "XX")]
        issuer: String,
    },
}

/// CLI-facing mirror of [`DisclosureLevel`]
#[derive(Clone, Copy, ValueEnum)]
enum Level {
    Pv,
    Bc,
    Md,
}

impl From<Level> for DisclosureLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Pv => DisclosureLevel::Pv,
            Level::Bc => DisclosureLevel::Bc,
            Level::Md => DisclosureLevel::Md,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match Cli::parse().command {
        Command::Fetch { server, since, out } => fetch(&server, since, &out).await,
        Command::Extract {
            bundle,
            level,
            uvci,
            issuer,
        } => extract(&bundle, level.into(), uvci, &issuer),
    }
}

async fn fetch(server: &str, since: Option<NaiveDate>, out: &Path) -> anyhow::Result<()> {
    let bundle = FhirQuery::new(server).find(since).await?;
    let json = serde_json::to_string_pretty(&bundle)?;
    std::fs::write(out, json).with_context(|| format!("Failed to write {}", out.display()))?;
    tracing::info!(entries = bundle.entry.len(), path = %out.display(), "Bundle written");
    Ok(())
}

fn extract(
    path: &Path,
    level: DisclosureLevel,
    uvci: Option<String>,
    issuer: &str,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let bundle: Bundle = serde_json::from_str(&raw).context("Bundle JSON is malformed")?;

    let uvci = match uvci {
        Some(value) => UvciInfo::new(value),
        None => UvciInfo::generate(issuer),
    };

    let parser = VaccEntryParser::new(&bundle, uvci)?;
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for entry in &bundle.entry {
        match parser.resolve_entry(entry, level)? {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    tracing::debug!(resolved = records.len(), skipped, "Bundle entries processed");

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
