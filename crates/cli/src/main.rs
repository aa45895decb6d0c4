//! Ninety-Six CLI - order history management.
//!
//! # Usage
//!
//! ```bash
//! # List placed orders
//! ns-cli orders list
//!
//! # List placed orders as JSON
//! ns-cli orders list --json
//!
//! # Clear order history without prompting
//! ns-cli --data-dir ./data orders clear --yes
//! ```
//!
//! # Commands
//!
//! - `orders list` - Show order history, most recent first
//! - `orders clear` - Remove all order history

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ninetysix_storefront::shop::Confirmation;

mod commands;

#[derive(Parser)]
#[command(name = "ns-cli")]
#[command(author, version, about = "Ninety-Six CLI tools")]
struct Cli {
    /// Directory holding the storefront's durable store
    #[arg(long, global = true, env = "STOREFRONT_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or clear order history
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List placed orders, most recent first
    List {
        /// Print the stored JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Clear all order history
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() {
    // Load .env so STOREFRONT_DATA_DIR matches the server's
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::orders::OrdersError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Orders { action } => {
            let mut log = commands::orders::open(&cli.data_dir)?;
            match action {
                OrdersAction::List { json } => commands::orders::list(&log, json, &mut out)?,
                OrdersAction::Clear { yes } => {
                    let confirmation = if yes {
                        Confirmation::Confirmed
                    } else {
                        commands::orders::prompt(&mut io::stdin().lock(), &mut out)?
                    };
                    commands::orders::clear(&mut log, confirmation, &mut out)?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}
