//! nlparse CLI - natural-language parsing from the command line.
//!
//! Selects a parser by language identifier and prints the parse of a text
//! either as an indented tree or as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// nlparse: language-keyed natural-language parsers.
#[derive(Parser)]
#[command(name = "nlparse")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse text (read from stdin when TEXT is omitted)
    Parse {
        /// Text to parse
        text: Option<String>,

        /// Language identifier (e.g. "en", "de")
        #[arg(short, long)]
        language: Option<String>,

        /// Generate lemma annotations
        #[arg(long)]
        lemmas: bool,

        /// Perform coreference resolution
        #[arg(long)]
        resolve_corefs: bool,

        /// YAML parser request supplying defaults for the options above
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List supported language identifiers
    Languages,
}

/// How parse results are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Indented tree
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Parse {
            text,
            language,
            lemmas,
            resolve_corefs,
            request,
            format,
        } => cli::parse::run(&cli::parse::ParseArgs {
            text,
            language,
            lemmas,
            resolve_corefs,
            request,
            json: format == OutputFormat::Json,
        }),
        Commands::Languages => {
            cli::languages::run();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {cause}", "caused by".dimmed());
            }
            ExitCode::FAILURE
        }
    }
}
