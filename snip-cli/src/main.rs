//! Snip CLI - Literate Tangling Engine

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use snip::interface::Context;
use snip::Mode;

#[derive(Parser)]
#[command(name = "snip")]
#[command(author, version, about = "Literate tangling engine", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    directory: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Execution mode (overrides config file)
    #[arg(short, long, global = true, value_enum)]
    mode: Option<Mode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write file blocks and execute run blocks, in document order
    Tangle {
        /// Preview only: print run blocks, write no files
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Suppress the summary
        #[arg(short, long)]
        quiet: bool,

        /// Documents to tangle (default: source_patterns)
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Print the program text selected by scissor markers
    Extract {
        /// Document to extract from
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the effective configuration
    Config,

    /// Write a default snip.toml
    Init,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Determine working directory
    let base_dir = cli
        .directory
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    // Read configuration from file or use defaults
    let config = match cli.config {
        Some(ref path) => snip::config::read_config_file(path),
        None => snip::config::read_config(&base_dir),
    };
    let mut config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Override mode if specified on command line
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }

    let result = match cli.command {
        Commands::Tangle {
            dry_run,
            quiet,
            files,
        } => {
            if dry_run {
                config.mode = Mode::Preview;
            }
            let ctx = Context::new(config, base_dir);
            let options = commands::TangleOptions { quiet, files };
            commands::tangle(&ctx, options).map(|_| ())
        }

        Commands::Extract { file } => commands::extract(&Context::new(config, base_dir), &file),

        Commands::Config => commands::config(&Context::new(config, base_dir)),

        Commands::Init => commands::init(&base_dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_status())
        }
    }
}
