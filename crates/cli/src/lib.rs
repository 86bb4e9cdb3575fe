pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "stockpilot",
    about = "Stockpilot operator CLI",
    long_about = "Run purchase recommendations, inventory analysis, and marketplace \
                  discovery against local JSON data without a running server.",
    after_help = "Examples:\n  stockpilot recommend --items items.json --vendors vendors.json\n  stockpilot insights --items items.json\n  stockpilot discover \"USB Cable\" --quantity 50"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Plan purchase recommendations for an item list against a vendor pool")]
    Recommend {
        #[arg(long, help = "Path to a JSON file with the item list")]
        items: PathBuf,
        #[arg(long, help = "Path to a JSON file with the vendor pool")]
        vendors: PathBuf,
    },
    #[command(about = "Analyze inventory health and print the insights report")]
    Insights {
        #[arg(long, help = "Path to a JSON file with the item list")]
        items: PathBuf,
    },
    #[command(about = "Search the seeded marketplaces for vendors selling a product")]
    Discover {
        #[arg(help = "Product name to search for")]
        product: String,
        #[arg(long, default_value_t = 1, help = "Requested order quantity")]
        quantity: u32,
    },
    #[command(about = "Inspect effective configuration values with redacted secrets")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Recommend { items, vendors } => commands::recommend::run(&items, &vendors),
        Command::Insights { items } => commands::insights::run(&items),
        Command::Discover { product, quantity } => commands::discover::run(&product, quantity),
        Command::Config => commands::config::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
