mod config;
mod server;

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use arithmetic_calculator::interpreter::calculate;
use arithmetic_calculator::interpreter::formatter::format_general;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::LevelFilter;

/// Evaluates arithmetic expressions, either once or as an HTTP service
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    #[clap(subcommand)]
    command: Option<Command>,
    #[clap(flatten)]
    verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serves `POST /api/v1/calculate` (the default)
    Serve(ServerConfig),
    /// Evaluates the given expression and prints the result
    Eval {
        /// The expression to evaluate, e.g. "(2 + 3) * 4"
        expression: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let arguments = Arguments::parse();
    init_logging(&arguments.verbose);

    match arguments.command {
        Some(Command::Serve(config)) => server::run(config).await,
        None => server::run(ServerConfig::default()).await,
        Some(Command::Eval { expression }) => evaluate_once(&expression),
    }
}

fn init_logging(verbose: &Verbosity<InfoLevel>) {
    let level = match verbose.log_level() {
        Some(level) => level.to_level_filter(),
        None => LevelFilter::Off,
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn evaluate_once(expression: &str) -> Result<()> {
    let value = calculate(expression)
        .with_context(|| format!("could not evaluate expression '{}'", expression))?;
    println!("{}", format_general(value));
    Ok(())
}
