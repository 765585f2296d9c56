mod args;
mod commands;
mod input;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use args::{AlignArgs, CrossArgs, MeiosisArgs, OutputFormat, PairArgs};
use commands::{align, config, cross, meiosis, pair};

/// Synapsis: meiotic recombination of arbitrary token sequences
///
/// Pairs homologous sequences, aligns them by longest common subsequence and
/// crosses them over. Input files hold one sequence per line with
/// whitespace-separated tokens; blank lines and lines starting with `#` are
/// ignored.
#[derive(Parser, Debug)]
#[command(name = "synapsis")]
#[command(author, version, about = "Pairs, aligns and recombines token sequences", long_about = None)]
struct Cli {
    /// Engine configuration file (JSON)
    ///
    /// Command line flags override values from this file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log engine decisions to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pair every sequence with its most similar homolog.
    Pair(PairArgs),

    /// Align the first two sequences and show the correspondence.
    Align(AlignArgs),

    /// Cross over the first two sequences.
    Cross(CrossArgs),

    /// Run a full meiosis over every sequence in the file.
    ///
    /// Homologous pairs are crossed over into two gametes; sequences without
    /// a homolog are copied into both.
    Meiosis(MeiosisArgs),

    /// Print the effective engine configuration as JSON.
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins unless verbosity was asked for explicitly
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("warn,synapsis=debug"),
        _ => EnvFilter::new("warn,synapsis=trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let engine_config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Pair(args) => pair::pair_sequences(&args, engine_config, cli.format)?,
        Commands::Align(args) => align::align_sequences(&args, cli.format)?,
        Commands::Cross(args) => cross::cross_sequences(&args, engine_config, cli.format)?,
        Commands::Meiosis(args) => meiosis::run_meiosis(&args, engine_config, cli.format)?,
        Commands::Config => config::show_config(&engine_config)?,
    }

    Ok(())
}
