mod logging;
mod overrides;
mod workspace;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use idmint_core::DEFAULT_LOCALE;
use idmint_generate::checksum::{is_luhn_valid, luhn_check_digit};
use idmint_generate::generators::GeneratorRegistry;
use idmint_generate::output::csv::write_batch_csv;
use idmint_generate::output::text::write_batch_text;
use idmint_generate::{Batch, BatchEngine, GenerateOptions, GenerationError};
use logging::{LoggingError, init_logging};
use overrides::{ParamOverride, build_requests, parse_param};
use thiserror::Error;
use workspace::{OutputFormat, WorkspaceError, load_settings, write_bytes_atomic};

#[derive(Debug, Error)]
enum CliError {
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "idmint", version, about = "Mask-driven identifier generator")]
struct Cli {
    /// Settings file (defaults to ./idmint.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Append JSON logs to this file instead of writing to stderr.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List generator ids, descriptions and params.
    List,
    /// Generate rows of identifiers, one column per generator id.
    Generate(GenerateArgs),
    /// Compute or verify a Luhn check digit.
    Luhn(LuhnArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Generator ids, e.g. code.isbn or file.name.
    #[arg(value_name = "ID", required = true)]
    ids: Vec<String>,
    /// Generator param as KEY=VALUE, or ID.KEY=VALUE for one generator.
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    params: Vec<ParamOverride>,
    /// Rows to generate.
    #[arg(short = 'n', long)]
    count: Option<usize>,
    /// Seed for reproducible output; random when unset.
    #[arg(long)]
    seed: Option<u64>,
    /// Locale for locale-aware generators.
    #[arg(long)]
    locale: Option<String>,
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,
    /// Write to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct LuhnArgs {
    /// Decimal digits.
    digits: String,
    /// Check that DIGITS already ends with a valid check digit.
    #[arg(long, default_value_t = false)]
    verify: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Command::List => run_list(),
        Command::Generate(args) => run_generate(args, cli.config.as_deref()),
        Command::Luhn(args) => run_luhn(args),
    }
}

fn run_list() -> Result<(), CliError> {
    let registry = GeneratorRegistry::new();
    let mut stdout = io::stdout().lock();
    for generator in registry.describe() {
        let params: Vec<String> = generator
            .params()
            .iter()
            .map(|spec| format!("{}:{}", spec.key, spec.kind.as_str()))
            .collect();
        if params.is_empty() {
            writeln!(stdout, "{:<16} {}", generator.id(), generator.description())?;
        } else {
            writeln!(
                stdout,
                "{:<16} {} [{}]",
                generator.id(),
                generator.description(),
                params.join(", ")
            )?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn run_generate(args: GenerateArgs, config: Option<&Path>) -> Result<(), CliError> {
    let settings = load_settings(config)?;
    let registry = GeneratorRegistry::new();
    let requests = build_requests(&registry, &args.ids, &args.params)?;

    let options = GenerateOptions {
        seed: args.seed.or(settings.seed).unwrap_or_else(rand::random),
        count: args.count.or(settings.count).unwrap_or(1),
        locale: args
            .locale
            .or(settings.locale)
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
    };
    let format = args.output.or(settings.output).unwrap_or_default();
    tracing::info!(
        seed = options.seed,
        count = options.count,
        locale = %options.locale,
        format = ?format,
        "generate requested"
    );

    let batch = BatchEngine::new(options).run(&registry, &requests)?;
    let rendered = render(&batch, format)?;

    match args.out {
        Some(path) => {
            write_bytes_atomic(&path, &rendered)?;
            tracing::info!(path = %path.display(), bytes = rendered.len(), "output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&rendered)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn render(batch: &Batch, format: OutputFormat) -> Result<Vec<u8>, CliError> {
    let mut buffer = Vec::new();
    match format {
        OutputFormat::Text => write_batch_text(&mut buffer, batch)?,
        OutputFormat::Csv => {
            write_batch_csv(&mut buffer, batch).map_err(GenerationError::from)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut buffer, batch)?;
            buffer.push(b'\n');
        }
    }
    Ok(buffer)
}

fn run_luhn(args: LuhnArgs) -> Result<(), CliError> {
    if args.verify {
        println!("{}", is_luhn_valid(&args.digits));
    } else {
        println!("{}", luhn_check_digit(&args.digits)?);
    }
    Ok(())
}
