use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use skumatch::{
    load_catalog, Catalog, ItemRecord, MembershipAxis, PrefixRule, RankedResult,
    RecommendationResponse, Recommender, RecommenderConfig, DEFAULT_TOP_N,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Rank the SKUs of a catalog by how many attributes they share with a chosen SKU
#[derive(Parser, Debug)]
#[command(name = "skumatch")]
#[command(about = "Find the SKUs most similar to a given SKU", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the attribute-major JSON catalog
    #[arg(short, long, default_value = "catalog.json")]
    input: PathBuf,

    /// SKU to find neighbours for (prompted on stdin if omitted)
    #[arg(short, long)]
    sku: Option<String>,

    /// Number of neighbours to return besides the SKU itself
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Lines)]
    format: OutputFormat,

    /// Treat the first N bytes of each value as its prefix instead of
    /// `len(column) + 1`
    #[arg(long)]
    prefix_length: Option<usize>,

    /// Catalog axis the SKU is looked up on
    #[arg(long, value_enum, default_value_t = Axis::Items)]
    membership: Axis,

    /// Do not require item labels to be sku-1, sku-2, ... in row order
    #[arg(long)]
    skip_item_labels: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One JSON object per item, keyed by SKU, without scores
    Lines,
    /// A single JSON document with scores and statistics
    Json,
    /// Human-readable table
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Axis {
    Items,
    Attributes,
}

impl From<Axis> for MembershipAxis {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Items => MembershipAxis::Items,
            Axis::Attributes => MembershipAxis::Attributes,
        }
    }
}

impl Args {
    fn recommender_config(&self) -> RecommenderConfig {
        let mut config = RecommenderConfig::default();
        config.validator.prefix = match self.prefix_length {
            Some(n) => PrefixRule::Fixed(n),
            None => PrefixRule::Derived,
        };
        config.validator.check_item_labels = !self.skip_item_labels;
        config.resolver.axis = self.membership.into();
        config.scorer.top_n = self.top_n;
        config
    }
}

fn main() {
    let args = Args::parse();

    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(env_directives.as_deref(), &args.log_level))
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }

    info!("Starting main process");
    let stdout = io::stdout();
    let outcome = run(&args, &mut stdout.lock());
    if let Err(e) = &outcome {
        error!("{:#}", e);
    }
    info!("Ending main process");

    if outcome.is_err() {
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins when it parses, then `--log-level`, then info
fn log_filter(env_directives: Option<&str>, level: &str) -> EnvFilter {
    if let Some(filter) = env_directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
    {
        return filter;
    }

    let level = match level {
        "trace" | "debug" | "info" | "warn" | "error" => level,
        _ => "info",
    };
    EnvFilter::new(level)
}

fn run(args: &Args, out: &mut dyn Write) -> Result<()> {
    let recommender = Recommender::new(args.recommender_config());

    let catalog = phase("read", || load_catalog(&args.input))?;

    phase("validation", || {
        recommender.validator().validate(&catalog)?;
        Ok(())
    })?;

    let index = phase("user request", || {
        let sku = match &args.sku {
            Some(sku) => sku.clone(),
            None => prompt_sku(&mut *out)?,
        };
        Ok(recommender.resolver().resolve(&catalog, &sku)?)
    })?;

    phase("get recommendations", || {
        let result = recommender.scorer().score_and_rank(&catalog, index)?;
        render(out, &catalog, &result, args.format)
    })
}

/// Run one named step between start/end log markers
fn phase<T>(name: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    info!("Starting {} process", name);
    let out = f()?;
    info!("Ending {} process", name);
    Ok(out)
}

fn prompt_sku(out: &mut dyn Write) -> Result<String> {
    write!(out, "Hi, please enter sku code (sku-number): ")?;
    out.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read sku code from stdin")?;
    Ok(line.trim().to_string())
}

fn render(
    out: &mut dyn Write,
    catalog: &Catalog,
    result: &RankedResult,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Lines => {
            for record in ItemRecord::to_json_list(catalog, result) {
                writeln!(out, "{}", record)?;
            }
        }
        OutputFormat::Json => {
            let response = RecommendationResponse::from_ranked(catalog, result);
            writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
        }
        OutputFormat::Table => {
            writeln!(out, "{:>4}  {:<12} {:>5}", "rank", "sku", "score")?;
            for (i, item) in result.iter().enumerate() {
                writeln!(
                    out,
                    "{:>4}  {:<12} {:>2}/{}",
                    i + 1,
                    item.sku,
                    item.score,
                    result.attribute_count()
                )?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
