//! # Command Handlers
//!
//! One function per subcommand. Handlers take the mounted store and write
//! their output to any `io::Write`, so tests can capture it.
//!
//! ## Command Categories
//! - [`cart`] - add, remove, fav, clear, show
//! - [`catalog`] - catalog listing with `q` / `cat` filtering
//! - [`config`] - effective configuration

pub mod cart;
pub mod catalog;
pub mod config;

use std::io::Write;

use shopfront_core::Catalog;
use shopfront_state::ShopStore;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::error::CliResult;

/// Everything a handler may read.
pub struct CommandContext<'a> {
    pub store: &'a ShopStore,
    pub catalog: &'a Catalog,
    pub config: &'a AppConfig,
}

/// Runs `command` against a hydrated store.
pub fn execute(ctx: &CommandContext<'_>, command: &Command, out: &mut impl Write) -> CliResult<()> {
    match command {
        Command::Add { id, qty } => cart::add(ctx, id, *qty, out),
        Command::Remove { id, qty } => cart::remove(ctx, id, *qty, out),
        Command::Fav { id } => cart::toggle_favorite(ctx, id, out),
        Command::Show { json } => cart::show(ctx, *json, out),
        Command::Clear => cart::clear(ctx, out),
        Command::Catalog { q, cat } => catalog::list(ctx, q.as_deref(), cat.as_deref(), out),
        Command::Config => config::show(ctx.config, out),
    }
}
