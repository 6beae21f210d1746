//! # maquette
//!
//! Maquette - Component playground tooling for custom elements.
//!
//! ## Name Origin
//!
//! A **maquette** is the small-scale model a sculptor builds to try a piece
//! out before committing to it. This binary does the same for design-system
//! elements: it loads a playground definition, renders it against an
//! in-memory element and prints the controls and usage markup.

mod commands;
mod logging;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "maquette")]
#[command(about = "Component playground tooling for custom elements", long_about = None)]
#[command(version)]
struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the usage snippet of a playground definition
    Usage(commands::usage::UsageArgs),

    /// Mount a playground definition and show its controls and element state
    #[command(visible_alias = "atelier")]
    Inspect(commands::inspect::InspectArgs),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Usage(args) => commands::usage::run(args),
        Commands::Inspect(args) => commands::inspect::run(args, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("\x1b[31mError:\x1b[0m {}", e);
        std::process::exit(1);
    }
}
