//! docnav CLI - Documentation navigation builder.
//!
//! Provides commands for:
//! - `toc`: Resolve a TOC file into a navigation tree
//! - `xref`: Look up a uid in cross-reference archives

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{TocArgs, XrefArgs};
use output::Output;

/// docnav - Documentation navigation builder.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a TOC file and print the navigation tree.
    Toc(TocArgs),
    /// Look up a uid in cross-reference archives.
    Xref(XrefArgs),
}

/// Directives used by `--verbose`: INFO everywhere, plus the file, archive
/// and cache events the library crates log at DEBUG.
const VERBOSE_DIRECTIVES: &str = "info,docnav_toc=debug,docnav_xref=debug";

/// Log filter: `--verbose` directives, otherwise `RUST_LOG` (default WARN).
fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_DIRECTIVES)
    } else {
        EnvFilter::from_default_env()
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Toc(args) => args.verbose,
        Commands::Xref(args) => args.verbose,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Toc(args) => args.execute(),
        Commands::Xref(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
