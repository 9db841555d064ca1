use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use ftsquery::query::QueryStringQuery;
use ftsquery::{FacetSpec, QueryNode, SearchOptions, SearchRequest, SearchResult, SortSpec};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "ftsq")]
#[command(about = "Encode full-text search requests and decode their responses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the request payload for a query string
    Encode(EncodeArgs),
    /// Summarize a search response read from a file
    Decode(DecodeArgs),
}

#[derive(Args)]
struct EncodeArgs {
    /// Query in the query-string syntax
    query: String,

    /// Name of the index to search
    #[arg(long, env = "FTSQ_INDEX", default_value = "default")]
    index: String,

    /// Maximum number of rows
    #[arg(long)]
    limit: Option<u32>,

    /// Number of rows to skip
    #[arg(long)]
    skip: Option<u32>,

    /// Request score explanations
    #[arg(long)]
    explain: bool,

    /// Server-side timeout in milliseconds
    #[arg(long, env = "FTSQ_TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    /// Sort order (_score, _id or a field name; prefix with '-' for descending)
    #[arg(long, allow_hyphen_values = true)]
    sort: Vec<String>,

    #[command(flatten)]
    facets: FacetArgs,
}

#[derive(Args)]
struct DecodeArgs {
    /// Response JSON file
    path: PathBuf,

    #[command(flatten)]
    facets: FacetArgs,
}

#[derive(Args)]
struct FacetArgs {
    /// Term facet as name=field (repeatable)
    #[arg(long = "term-facet")]
    term_facets: Vec<String>,
}

impl FacetArgs {
    fn apply(&self, mut options: SearchOptions) -> Result<SearchOptions> {
        for facet in &self.term_facets {
            let Some((name, field)) = facet.split_once('=') else {
                bail!("invalid term facet '{}', expected name=field", facet);
            };
            if name.is_empty() || field.is_empty() {
                bail!("invalid term facet '{}', expected name=field", facet);
            }
            options = options.with_facet(name, FacetSpec::term(field));
        }
        Ok(options)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    match Cli::parse().command {
        Command::Encode(args) => encode(args),
        Command::Decode(args) => decode(args),
    }
}

fn encode(args: EncodeArgs) -> Result<()> {
    let mut options = SearchOptions::new().with_explain(args.explain);
    if let Some(limit) = args.limit {
        options = options.with_limit(limit);
    }
    if let Some(skip) = args.skip {
        options = options.with_skip(skip);
    }
    if let Some(timeout_ms) = args.timeout_ms {
        options = options.with_timeout(Duration::from_millis(timeout_ms));
    }
    for sort in &args.sort {
        options = options.with_sort(SortSpec::from(sort.as_str()));
    }
    let options = args.facets.apply(options)?;

    let query: QueryNode = QueryStringQuery::new(args.query).into();
    let payload = SearchRequest::new(&args.index, &query, &options)
        .to_json()
        .context("failed to encode search request")?;

    info!("Encoded search request for index '{}'", args.index);
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn decode(args: DecodeArgs) -> Result<()> {
    let options = args.facets.apply(SearchOptions::new())?;
    let bytes = std::fs::read(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let response: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is not valid JSON", args.path.display()))?;
    let result = SearchResult::decode(&response, &options).context("failed to decode response")?;

    let metrics = &result.meta_data.metrics;
    info!(
        "Decoded {} rows of {} total in {}",
        result.rows.len(),
        metrics.total_rows,
        metrics.took
    );
    println!(
        "rows: {} of {} (max score {})",
        result.rows.len(),
        metrics.total_rows,
        metrics.max_score
    );
    println!(
        "partitions: {} ok, {} failed",
        metrics.success_partition_count, metrics.error_partition_count
    );
    for (partition, message) in &result.meta_data.errors {
        println!("  error on {}: {}", partition, message);
    }
    for row in &result.rows {
        println!("  {} [{}] score={:.4}", row.id, row.index, row.score);
    }

    let mut names: Vec<_> = result.facets.keys().collect();
    names.sort();
    for name in names {
        let facet = &result.facets[name];
        println!(
            "facet {} ({}) on {}: total={} missing={} other={}",
            name,
            facet.kind(),
            facet.field(),
            facet.total(),
            facet.missing(),
            facet.other()
        );
        if let Some(term) = facet.as_term() {
            for t in &term.terms {
                println!("  {} = {}", t.term, t.count);
            }
        }
    }
    Ok(())
}
