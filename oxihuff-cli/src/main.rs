//! OxiHuff CLI - The Oxidized Huffman compressor
//!
//! Compresses and decompresses single files with a static Huffman code.

mod commands;
mod utils;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{
    CodecOptions, cmd_completions, cmd_compress, cmd_decompress, cmd_info, cmd_test,
};
use oxihuff_huffman::HuffmanConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(author, version, about = "The Oxidized Huffman - Pure Rust file compressor")]
#[command(long_about = "
OxiHuff compresses files with a static Huffman code. The container stores
the byte frequency table, so the decoder rebuilds the same code on its own.

Use `-` as a file name to read from stdin or write to stdout.

Examples:
  oxihuff compress -f notes.txt -o notes.huf
  oxihuff c -f notes.txt -o notes.huf
  oxihuff decompress -f notes.huf -o notes.txt --force
  oxihuff u -f notes.huf -o -
  cat notes.txt | oxihuff c -f - -o notes.huf
  oxihuff info notes.huf --json
  oxihuff test notes.huf
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress statistics and progress output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// Input file (`-` for stdin)
        #[arg(short = 'f', long = "file", value_name = "IN")]
        input: PathBuf,

        /// Output file (`-` for stdout)
        #[arg(short, long, value_name = "OUT")]
        output: PathBuf,

        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,

        /// Refuse inputs larger than this many bytes
        #[arg(long, value_name = "BYTES")]
        max_size: Option<u64>,
    },

    /// Decompress a file
    #[command(alias = "u")]
    Decompress {
        /// Compressed input file (`-` for stdin)
        #[arg(short = 'f', long = "file", value_name = "IN")]
        input: PathBuf,

        /// Output file (`-` for stdout)
        #[arg(short, long, value_name = "OUT")]
        output: PathBuf,

        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,

        /// Skip the decoded-histogram and trailing-data checks
        #[arg(long)]
        no_verify: bool,

        /// Refuse containers that decode to more than this many bytes
        #[arg(long, value_name = "BYTES")]
        max_size: Option<u64>,
    },

    /// Show information about a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Test compressed file integrity
    #[command(alias = "t")]
    Test {
        /// Compressed file to test
        file: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let quiet = cli.quiet;
    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            force,
            max_size,
        } => cmd_compress(&CodecOptions {
            input: &input,
            output: &output,
            force,
            quiet,
            config: HuffmanConfig::default().with_max_input_size(max_size),
        }),
        Commands::Decompress {
            input,
            output,
            force,
            no_verify,
            max_size,
        } => cmd_decompress(&CodecOptions {
            input: &input,
            output: &output,
            force,
            quiet,
            config: HuffmanConfig::default()
                .with_verify(!no_verify)
                .with_max_input_size(max_size),
        }),
        Commands::Info { file, json } => cmd_info(&file, json),
        Commands::Test { file } => cmd_test(&file),
        Commands::Completions { shell } => cmd_completions(shell, &mut Cli::command()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
