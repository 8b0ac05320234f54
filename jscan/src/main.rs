//! jscan CLI - Scan JavaScript-like source into classified tokens.
//!
//! This is the main entry point for the jscan CLI application.
//! It uses clap for argument parsing, loads the source text, runs the
//! scanner and prints the token stream.

mod config;
mod error;
mod render;
mod source;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jslex_lex::tokenize_with_handler;
use jslex_util::Handler;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use error::{JscanError, Result};
use render::{render_diagnostics, render_tokens, OutputFormat};
use source::Input;

/// jscan - Print the tokens of a JavaScript-like source file
///
/// Every token is printed with its category. Lexical errors show up as
/// error tokens; the scan never stops early.
#[derive(Parser, Debug)]
#[command(name = "jscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan JavaScript-like source into classified tokens", long_about = None)]
struct Cli {
    /// Source file to scan (`-` for standard input)
    #[arg(conflicts_with_all = ["stdin", "sample"])]
    file: Option<PathBuf>,

    /// Read the source from standard input
    #[arg(long, conflicts_with = "sample")]
    stdin: bool,

    /// Scan the built-in sample program
    #[arg(long)]
    sample: bool,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Prefix each text line with `line:column`
    #[arg(long)]
    spans: bool,

    /// Exit with status 1 and print diagnostics if any error token is produced
    #[arg(long)]
    deny_errors: bool,

    /// Enable verbose output
    #[arg(short, long, env = "JSCAN_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "JSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "JSCAN_NO_COLOR")]
    no_color: bool,
}

/// Effective settings after merging the config file with the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    verbose: bool,
    format: OutputFormat,
    spans: bool,
    deny_errors: bool,
}

impl Settings {
    /// Flags win over the file. Boolean flags can only switch a setting on.
    fn merge(cli: &Cli, config: &Config) -> Self {
        Self {
            verbose: cli.verbose || config.verbose,
            format: cli.format.unwrap_or(config.output.format),
            spans: cli.spans || config.output.spans,
            deny_errors: cli.deny_errors || config.output.deny_errors,
        }
    }
}

/// Main entry point for the jscan CLI.
///
/// Exits with status 1 when `--deny-errors` is in effect and the source has
/// lexical errors; any other failure is returned as an error.
fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::merge(&cli, &config);

    init_logging(settings.verbose, cli.no_color)?;
    debug!(?settings, "effective settings");

    let input = Input::select(cli.file, cli.stdin, cli.sample)?;
    run(&input, &settings)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with the token listing.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| JscanError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Scan one input and print the result.
fn run(input: &Input, settings: &Settings) -> Result<ExitCode> {
    let source = input.read()?;
    debug!(input = %input.name(), bytes = source.len(), "scanning");

    let handler = Handler::new();
    let stream = tokenize_with_handler(&source, &handler);

    let rendered = render_tokens(&stream, settings.format, settings.spans)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    let error_count = handler.error_count();
    if error_count == 0 {
        return Ok(ExitCode::SUCCESS);
    }

    if settings.deny_errors {
        eprint!("{}", render_diagnostics(handler.take_diagnostics(), &source));
        info!(errors = error_count, input = %input.name(), "scan produced error tokens");
        Ok(ExitCode::FAILURE)
    } else {
        warn!(errors = error_count, input = %input.name(), "scan produced error tokens");
        Ok(ExitCode::SUCCESS)
    }
}
