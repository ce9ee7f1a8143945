//! ti - command-line interface for typed personal logs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ti_config::ConfigResolver;

mod commands;
mod output;
mod paths;
mod telemetry;

use commands::{config, del, log, mark, out};

#[derive(Parser)]
#[command(name = "ti")]
#[command(about = "Log typed messages, list them, mark them done, delete them")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Path to the ti process config (default: ~/.ticonfig.json)
    #[arg(long, global = true, env = "TI_CONFIG", value_name = "PATH")]
    ti_config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the configuration file
    Config {
        /// Path of the configuration file
        file: PathBuf,
    },
    /// Log a message
    Log {
        /// The type of message to log
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// The message to log
        message: String,
    },
    /// Output all messages of type
    Out {
        /// The types of message to output
        #[arg(value_name = "TYPE", required = true)]
        types: Vec<String>,
        /// Only output messages
        #[arg(short, long)]
        simple: bool,
        /// Output as JSON, one entry per line
        #[arg(long, conflicts_with = "simple")]
        json: bool,
    },
    /// Mark message(s) at index(s)
    Mark {
        /// The type of message to mark
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Index to mark or two to indicate a range
        #[arg(required = true)]
        range: Vec<usize>,
    },
    /// Unmark message(s) at index(s)
    Unmark {
        /// The type of message to unmark
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Index to unmark or two to indicate a range
        #[arg(required = true)]
        range: Vec<usize>,
    },
    /// Delete message(s) at index(s)
    Del {
        /// The type of message to delete
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Index to delete or two to indicate a range
        #[arg(required = true)]
        range: Vec<usize>,
    },
}

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    telemetry::init(verbose);

    let resolver = ConfigResolver::new(paths::process_config_path(cli.ti_config));

    let result = match cli.command {
        Commands::Config { file } => config::run(&resolver, file),
        Commands::Log { type_name, message } => log::run(&resolver, type_name, message),
        Commands::Out {
            types,
            simple,
            json,
        } => out::run(&resolver, types, simple, json),
        Commands::Mark { type_name, range } => mark::run(&resolver, type_name, range, true),
        Commands::Unmark { type_name, range } => mark::run(&resolver, type_name, range, false),
        Commands::Del { type_name, range } => del::run(&resolver, type_name, range),
    };

    if let Err(e) = result {
        output::print_error(e.as_ref(), verbose);
        std::process::exit(1);
    }
}
