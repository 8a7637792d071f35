//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use strcalc::output::OutputMode;

/// strcalc - sum delimiter-separated number strings
#[derive(Parser, Debug)]
#[command(
    name = "strcalc",
    version,
    about = "Sum delimiter-separated number strings",
    long_about = "Sum the numbers in a text input.\n\n\
                  Numbers are separated by commas by default. A custom delimiter\n\
                  set can be declared at the start of the input: //<delims>\\n<numbers>"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sum the numbers in the given input
    Add {
        /// The input string (omit together with --stdin for the absent state)
        numbers: Option<String>,

        /// Read the input from stdin instead (allows embedded newlines)
        #[arg(long, conflicts_with = "numbers")]
        stdin: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Add { numbers, stdin }) => commands::add(numbers, stdin, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("strcalc v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("strcalc v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'strcalc --help' for usage");
                println!("Run 'strcalc add \"1,2\"' to sum numbers");
            }
            Ok(())
        },
    }
}
