//! # Shopfront CLI Library
//!
//! Wires a SQLite storage slot to a mounted shop store and runs one command
//! against it.
//!
//! ## Module Organization
//! ```text
//! shopfront_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── AppConfig (file + env layering)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatch
//! │   ├── cart.rs     ◄─── add / remove / fav / clear / show
//! │   ├── catalog.rs  ◄─── catalog listing
//! │   └── config.rs   ◄─── effective config
//! └── error.rs        ◄─── CliError
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use std::io::Write;
use std::sync::Arc;

use shopfront_state::ShopProvider;
use shopfront_storage::{Database, DbConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::CommandContext;
use config::AppConfig;
use error::CliResult;

/// Runs one CLI invocation.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Invocation                                        │
/// │                                                                         │
/// │  1. Load Config ──────────────────────────────────────────────────────► │
/// │     • defaults → shopfront.toml → SHOPFRONT_* → --db / --key            │
/// │                                                                         │
/// │  2. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • configured JSON file or the built-in list                         │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, pending migrations applied                  │
/// │                                                                         │
/// │  4. Mount Store & Hydrate ────────────────────────────────────────────► │
/// │     • ShopProvider on the slot, wait for the persisted snapshot         │
/// │                                                                         │
/// │  5. Execute Command, Flush, Close ────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli, out: &mut impl Write) -> CliResult<()> {
    let mut config = AppConfig::load(cli.config)?;
    if let Some(db) = cli.db {
        config.db_path = Some(db);
    }
    if let Some(key) = cli.key {
        config.store.storage_key = key;
    }
    config.validate()?;

    let catalog = config.load_catalog()?;
    debug!(products = catalog.len(), "Catalog loaded");

    // `config` needs no database.
    if cli.command == Command::Config {
        return commands::config::show(&config, out);
    }

    let db_path = config.database_path()?;
    info!(?db_path, "Database path determined");
    let db = Database::new(DbConfig::new(db_path)).await?;

    let provider = ShopProvider::mount(Arc::new(db.slots()), config.store.clone())?;
    let store = provider.use_shop();
    store.hydrated().await;

    let ctx = CommandContext { store: &store, catalog: &catalog, config: &config };
    let result = commands::execute(&ctx, &cli.command, out);

    store.flush().await;
    provider.unmount();
    db.close().await;

    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout carries command output only.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopfront_state=trace` - Trace the store only
/// - Default: INFO, DEBUG for shopfront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopfront=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
