//! Catalog runner: list the patterns, run one, or run them all.
//!
//! Run with: cargo run --bin catalog -- list
//!           cargo run --bin catalog -- run mediator
//!           cargo run --bin catalog -- -v all

use clap::{Parser, Subcommand};
use colored::Colorize;

use design_patterns::catalog::{self, Category, Pattern};
use design_patterns::{logging, CatalogError};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Runnable demonstrations of the classic design patterns.")]
struct CommandLine {
    /// Diagnostic verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every pattern by category
    #[command(alias = "l")]
    List {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a single pattern, e.g. `template-method`
    #[command(alias = "r")]
    Run { pattern: String },
    /// Run every pattern in catalog order
    #[command(alias = "a")]
    All,
}

fn header(text: &str) {
    println!("{}", format!("=== {text} ===").bold().cyan());
}

fn run(pattern: &Pattern) -> Result<(), CatalogError> {
    header(&format!("{} ({})", pattern.name, pattern.category));
    let out = pattern.run()?;
    print!("{out}");
    Ok(())
}

fn list(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog::patterns())?);
        return Ok(());
    }

    for category in Category::ALL {
        println!("{}", category.to_string().bold());
        for pattern in catalog::by_category(category) {
            let name = format!("{:<16}", pattern.name);
            println!("  {} {}", name.green(), pattern.summary.dimmed());
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse();
    logging::init(commands.verbose);

    match commands.command {
        Commands::List { json } => list(json),
        Commands::Run { pattern } => {
            let pattern = catalog::find(&pattern).map_err(|err| match err.suggestion() {
                Some(hint) => anyhow::anyhow!("{err}, did you mean '{hint}'?"),
                None => anyhow::Error::new(err),
            })?;
            Ok(run(pattern)?)
        }
        Commands::All => {
            for (i, pattern) in catalog::patterns().iter().enumerate() {
                if i > 0 {
                    println!();
                }
                run(pattern)?;
            }
            Ok(())
        }
    }
}
