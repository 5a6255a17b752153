//! shopcart CLI - Interactive shopping cart shell.
//!
//! # Usage
//!
//! ```bash
//! # Start the interactive shell on the built-in catalog
//! shopcart
//!
//! # Start the shell on a seed catalog, without adding new products to the cart
//! shopcart --catalog catalog.yaml --no-auto-add shell
//!
//! # Print the catalog as JSON and exit
//! shopcart catalog --format json
//! ```
//!
//! # Commands
//!
//! - `shell` - Interactive shell (default)
//! - `catalog` - Print the catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shopcart::{Catalog, QuantityPolicy, Session, ShopConfig, load_catalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod console;

use commands::catalog::OutputFormat;

#[derive(Parser)]
#[command(name = "shopcart")]
#[command(author, version, about = "Interactive shopping cart")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// YAML seed catalog (overrides `SHOPCART_CATALOG_PATH`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Do not put newly created products in the cart
    #[arg(long, global = true)]
    no_auto_add: bool,

    /// How repeated additions combine (`clamp`, `unbounded`)
    #[arg(long, global = true)]
    quantity_policy: Option<QuantityPolicy>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive shell
    Shell,
    /// Print the catalog and exit
    Catalog {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() {
    // Logs go to stderr so they never mix with shell output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopcart=warn,shopcart_cli=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ShopConfig::from_env()?;
    if cli.catalog.is_some() {
        config.catalog_path = cli.catalog;
    }
    if cli.no_auto_add {
        config.session.also_add_to_cart = false;
    }
    if let Some(policy) = cli.quantity_policy {
        config.session.quantity_policy = policy;
    }
    tracing::debug!(?config, "Configuration loaded");

    let catalog = match &config.catalog_path {
        Some(path) => load_catalog(path)?,
        None => Catalog::builtin(),
    };
    let mut session = Session::with_catalog(catalog, config.session);

    let stdout = std::io::stdout();
    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = std::io::stdin();
            commands::shell::run(&mut session, stdin.lock(), stdout.lock(), std::io::stderr())?;
        }
        Commands::Catalog { format } => {
            commands::catalog::print(&session, format, stdout.lock())?;
        }
    }
    Ok(())
}
