//! playlint
//!
//! Checks Play Store listing text files against their length limits.

mod report;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use playlint_core::impls::FsAssetSource;
use playlint_core::ports::AssetSource;
use playlint_core::{
    AccessError, LengthLimit, LengthValidator, LintConfig, ListingDetail, OverflowPolicy,
    PlaylintError, read_processed,
};
use tokio::task::JoinSet;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::report::{AssetReport, EXIT_OK, EXIT_TOO_LONG, EXIT_UNREADABLE, exit_code};

#[derive(Parser)]
#[command(name = "playlint")]
#[command(about = "Validate Play Store listing text against its length limits")]
#[command(version)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check files against the limit of a listing detail
    Check(CheckArgs),
    /// Print a file's processed text
    Read(ReadArgs),
    /// Print every listing detail and its limit
    Limits(LimitsArgs),
}

#[derive(Args)]
struct CheckArgs {
    /// Listing detail the files hold (e.g. short-description, whatsnew)
    #[arg(short, long, value_parser = parse_detail)]
    detail: ListingDetail,

    /// Override the detail's limit
    #[arg(long)]
    max_length: Option<usize>,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Args)]
struct ReadArgs {
    #[arg(short, long, value_parser = parse_detail)]
    detail: ListingDetail,

    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Truncate oversized text instead of failing
    #[arg(long)]
    truncate: bool,

    file: PathBuf,
}

#[derive(Args)]
struct LimitsArgs {
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn parse_detail(s: &str) -> Result<ListingDetail, String> {
    s.parse::<ListingDetail>().map_err(|e| e.to_string())
}

fn load_config(path: Option<&PathBuf>) -> Result<LintConfig, PlaylintError> {
    match path {
        Some(path) => Ok(LintConfig::load(path)?),
        None => Ok(LintConfig::default()),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Validates every file on the blocking pool and returns one report per
/// file, in input order. A task that never reports back counts as
/// unreadable.
async fn check_files<S: AssetSource + 'static>(
    validator: Arc<LengthValidator<S>>,
    detail: ListingDetail,
    files: Vec<PathBuf>,
) -> Vec<AssetReport> {
    let mut set = JoinSet::new();
    for (idx, path) in files.iter().cloned().enumerate() {
        let validator = Arc::clone(&validator);
        set.spawn_blocking(move || {
            let result = validator.check(&path);
            (idx, AssetReport::from_check(&path, detail, result))
        });
    }

    let mut slots: Vec<Option<AssetReport>> = vec![None; files.len()];
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((idx, report)) => slots[idx] = Some(report),
            Err(e) => error!("validation task failed: {e}"),
        }
    }
    files
        .iter()
        .zip(slots)
        .map(|(path, slot)| slot.unwrap_or_else(|| AssetReport::incomplete(path, detail)))
        .collect()
}

async fn run_check(args: CheckArgs) -> Result<u8, PlaylintError> {
    let config = load_config(args.config.as_ref())?;
    let limit = args
        .max_length
        .map(LengthLimit::new)
        .unwrap_or_else(|| config.limit_for(args.detail));
    debug!(detail = %args.detail, %limit, files = args.files.len(), "checking files");

    let validator = Arc::new(LengthValidator::new(limit));
    let reports = check_files(validator, args.detail, args.files).await;

    match args.format {
        Format::Text => {
            for r in &reports {
                println!("{}", r.render_text());
            }
        }
        Format::Json => match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("failed to encode report: {e}"),
        },
    }
    Ok(exit_code(&reports))
}

fn run_read(args: ReadArgs) -> Result<u8, PlaylintError> {
    let config = load_config(args.config.as_ref())?;
    let policy = if args.truncate {
        OverflowPolicy::Truncate
    } else {
        config.overflow_policy()
    };

    // An explicitly named file must exist; read_processed treats missing
    // listing files as empty.
    std::fs::metadata(&args.file).map_err(|e| AccessError::from_io(&args.file, e))?;

    let text = read_processed(
        &FsAssetSource,
        &args.file,
        config.limit_for(args.detail),
        policy,
    )?;
    if let Some(text) = text {
        println!("{text}");
    }
    Ok(EXIT_OK)
}

fn run_limits(args: LimitsArgs) -> Result<u8, PlaylintError> {
    let config = load_config(args.config.as_ref())?;
    match args.format {
        Format::Text => {
            for detail in ListingDetail::ALL {
                println!(
                    "{:<18} {:<18} {}",
                    detail.kebab_name(),
                    detail.file_name(),
                    config.limit_for(detail)
                );
            }
        }
        Format::Json => {
            let limits: BTreeMap<&str, LengthLimit> = ListingDetail::ALL
                .into_iter()
                .map(|d| (d.file_name(), config.limit_for(d)))
                .collect();
            match serde_json::to_string(&limits) {
                Ok(json) => println!("{json}"),
                Err(e) => error!("failed to encode limits: {e}"),
            }
        }
    }
    Ok(EXIT_OK)
}

fn failure_code(err: &PlaylintError) -> u8 {
    match err {
        PlaylintError::LimitExceeded(_) => EXIT_TOO_LONG,
        PlaylintError::Access(_) | PlaylintError::Config(_) => EXIT_UNREADABLE,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check(args) => run_check(args).await,
        Commands::Read(args) => run_read(args),
        Commands::Limits(args) => run_limits(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("playlint: {e}");
            ExitCode::from(failure_code(&e))
        }
    }
}
