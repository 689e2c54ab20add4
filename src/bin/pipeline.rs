//! CLI pipeline tool for domain-scout.
//!
//! Drives the generation and enrichment passes directly against the
//! database, without requiring the HTTP API to be running.
//!
//! # Usage
//!
//! ```bash
//! # Seed every category of candidate domains
//! cargo run --bin pipeline -- generate
//!
//! # Seed only short categories
//! cargo run --bin pipeline -- generate singles pairs
//!
//! # Price the next 500 unpriced candidates
//! cargo run --bin pipeline -- price --limit 500
//!
//! # Score the next 100 unscored candidates
//! cargo run --bin pipeline -- score --limit 100
//!
//! # Pricing pass followed by scoring pass
//! cargo run --bin pipeline -- run --limit 500
//!
//! # Show store statistics
//! cargo run --bin pipeline -- stats
//!
//! # Delete all records
//! cargo run --bin pipeline -- reset
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite connection string
//! - `PRICING_BASE_URL` (required for price/run): registrar gateway
//! - `OPENAI_API_KEY` (required for score/run): scoring API key

use domain_scout::application::services::{
    EnrichmentService, GenerationService, PassSummary,
};
use domain_scout::config::Config;
use domain_scout::domain::generator::Category;
use domain_scout::domain::repositories::DomainRecordRepository;
use domain_scout::infrastructure::clients::{HttpPricingClient, OpenAiScoringClient};
use domain_scout::infrastructure::persistence::SqliteDomainRecordRepository;
use domain_scout::server::init_db;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for running the domain discovery pipeline.
#[derive(Parser)]
#[command(name = "pipeline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate candidate domains and seed the store
    Generate {
        /// Categories to seed: singles, pairs, hyphen-pairs, triples
        /// (default: all)
        categories: Vec<String>,
    },

    /// Run the availability/pricing pass
    Price {
        /// Maximum number of domains to price
        #[arg(short, long, default_value_t = 500)]
        limit: i64,
    },

    /// Run the AI scoring pass
    Score {
        /// Maximum number of domains to score
        #[arg(short, long, default_value_t = 100)]
        limit: i64,
    },

    /// Seed all categories, then run the pricing and scoring passes
    Run {
        /// Maximum number of domains per pass
        #[arg(short, long, default_value_t = 500)]
        limit: i64,
    },

    /// Show store statistics
    Stats,

    /// Delete all records
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let pool = init_db(&config).await?;
    let repository = Arc::new(SqliteDomainRecordRepository::new(pool));

    match cli.command {
        Commands::Generate { categories } => generate(repository, &categories).await?,
        Commands::Price { limit } => {
            let summary = enrichment(&config, repository)?.run_pricing_pass(limit).await?;
            print_pass("Pricing", &summary);
        }
        Commands::Score { limit } => {
            config.require_openai_key()?;
            let summary = enrichment(&config, repository)?.run_scoring_pass(limit).await?;
            print_pass("Scoring", &summary);
        }
        Commands::Run { limit } => {
            config.require_openai_key()?;
            generate(repository.clone(), &[]).await?;
            let service = enrichment(&config, repository)?;
            let summary = service.run_pricing_pass(limit).await?;
            print_pass("Pricing", &summary);
            let summary = service.run_scoring_pass(limit).await?;
            print_pass("Scoring", &summary);
        }
        Commands::Stats => stats(repository).await?,
        Commands::Reset { yes } => reset(repository, yes).await?,
    }

    Ok(())
}

/// Parses category names, defaulting to every category.
fn parse_categories(names: &[String]) -> Result<Vec<Category>> {
    if names.is_empty() {
        return Ok(Category::ALL.to_vec());
    }

    names
        .iter()
        .map(|name| {
            Category::ALL
                .into_iter()
                .find(|c| c.as_str() == name)
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "unknown category '{name}' (expected singles, pairs, hyphen-pairs, triples)"
                    )
                })
        })
        .collect()
}

/// Seeds the requested categories.
async fn generate(
    repository: Arc<SqliteDomainRecordRepository>,
    categories: &[String],
) -> Result<()> {
    let categories = parse_categories(categories)?;

    println!("{}", "🌱 Seeding candidate domains".bright_blue().bold());
    println!(
        "  Categories: {}",
        categories
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
            .cyan()
    );

    let service = GenerationService::new(repository);
    let summary = service.seed(&categories).await?;

    println!();
    println!("{}", "✅ Seeding complete".green().bold());
    println!("  Candidates: {}", summary.candidates.to_string().cyan());
    println!(
        "  New rows:   {}",
        summary.inserted.to_string().bright_yellow()
    );

    Ok(())
}

/// Builds the enrichment service from configuration.
///
/// The scoring client is constructed even for price-only runs; it is never
/// called unless a scoring pass executes, and key presence is checked before
/// those.
fn enrichment(
    config: &Config,
    repository: Arc<SqliteDomainRecordRepository>,
) -> Result<
    EnrichmentService<SqliteDomainRecordRepository, HttpPricingClient, OpenAiScoringClient>,
> {
    let timeout = Duration::from_secs(config.http_timeout_seconds);

    let pricing = HttpPricingClient::new(&config.pricing_base_url, timeout)?;
    let scoring = OpenAiScoringClient::new(
        &config.openai_base_url,
        config.openai_api_key.clone().unwrap_or_default(),
        &config.openai_model,
        timeout,
    )?;

    Ok(EnrichmentService::new(
        repository,
        Arc::new(pricing),
        Arc::new(scoring),
        config.pricing_concurrency,
        config.scoring_batch_size,
    ))
}

fn print_pass(name: &str, summary: &PassSummary) {
    println!();
    println!("{}", format!("✅ {name} pass complete").green().bold());
    println!("  Processed: {}", summary.processed.to_string().cyan());
    if summary.errors > 0 {
        println!("  Errors:    {}", summary.errors.to_string().red());
    } else {
        println!("  Errors:    {}", "0".green());
    }
}

/// Prints aggregate store statistics.
async fn stats(repository: Arc<SqliteDomainRecordRepository>) -> Result<()> {
    let stats = repository.stats().await?;

    println!("{}", "📊 Store statistics".bright_blue().bold());
    println!();
    println!("  Total records: {}", stats.total.to_string().cyan());
    match stats.averages.avg_average_score {
        Some(avg) => println!("  Mean score:    {}", format!("{avg:.2}").bright_yellow()),
        None => println!("  Mean score:    {}", "n/a".dimmed()),
    }
    println!("  Price errors:  {}", stats.errors.to_string().red());

    if !stats.price_stats.is_empty() {
        println!();
        println!("{}", "  By price type:".bright_white().bold());
        for entry in &stats.price_stats {
            let avg = entry
                .avg_price
                .map(|p| format!("${p:.2}"))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "    {:10} {:>8}  avg {}",
                entry.price_type.to_string().cyan(),
                entry.count,
                avg.bright_yellow()
            );
        }
    }

    if !stats.tlds.is_empty() {
        println!();
        println!("{}", "  Top TLDs:".bright_white().bold());
        for entry in stats.tlds.iter().take(10) {
            println!("    .{:6} {:>8}", entry.tld.cyan(), entry.count);
        }
    }

    Ok(())
}

/// Deletes every record after confirmation.
async fn reset(repository: Arc<SqliteDomainRecordRepository>, skip_confirm: bool) -> Result<()> {
    let count = repository.count().await?;

    if count == 0 {
        println!("{}", "Store is already empty".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!("⚠️  This will delete all {count} records").red().bold()
    );

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete everything?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repository.delete_all().await?;
    println!(
        "{}",
        format!("✅ Deleted {deleted} records").green().bold()
    );

    Ok(())
}
