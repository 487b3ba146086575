use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shopfront")]
#[command(about = "Cart and favorites for the Shopfront catalog")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
    /// Config file (defaults to shopfront.toml in the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database holding the shop state
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Storage slot key
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add units of a product to the cart
    Add {
        /// Product id
        id: String,
        /// Units to add
        #[arg(long, short = 'n', default_value_t = 1)]
        qty: u32,
    },
    /// Remove units of a product from the cart
    Remove {
        /// Product id
        id: String,
        /// Units to remove
        #[arg(long, short = 'n', default_value_t = 1)]
        qty: u32,
    },
    /// Toggle a product in the favorites list
    Fav {
        /// Product id
        id: String,
    },
    /// Show cart and favorites
    Show {
        /// Print the store view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Empty the cart
    Clear,
    /// List catalog products
    Catalog {
        /// Search text matched against name, description and tags
        #[arg(long)]
        q: Option<String>,
        /// Only show this category
        #[arg(long)]
        cat: Option<String>,
    },
    /// Print the effective configuration
    Config,
}
