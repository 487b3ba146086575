//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   add    ┌──────────┐   remove (last unit)   ┌────────┐  │
//! │  │  Empty   │─────────►│ In Cart  │───────────────────────►│ Empty  │  │
//! │  │  Cart    │          │  qty ≥ 1 │                        │  Cart  │  │
//! │  └──────────┘          └──────────┘                        └────────┘  │
//! │                             │                                           │
//! │                           clear ─────────────────────────────────►      │
//! │                                                                         │
//! │  Favorites are independent: fav toggles membership, clear keeps them.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are checked against the catalog before touching the store. The store
//! itself accepts any id.

use std::io::Write;

use shopfront_core::validation::{validate_product_id, validate_quantity};
use shopfront_core::Product;
use tracing::debug;

use super::CommandContext;
use crate::error::{CliError, CliResult};

fn lookup<'a>(ctx: &CommandContext<'a>, id: &str) -> CliResult<&'a Product> {
    validate_product_id(id)?;
    ctx.catalog
        .get(id)
        .ok_or_else(|| CliError::UnknownProduct(id.to_string()))
}

/// `shopfront add <id> [-n qty]`
pub fn add(ctx: &CommandContext<'_>, id: &str, qty: u32, out: &mut impl Write) -> CliResult<()> {
    validate_quantity(qty)?;
    let product = lookup(ctx, id)?;

    let now = ctx.store.add_to_cart(id, qty);
    debug!(product_id = %id, qty, now, "add command");

    writeln!(out, "Added {qty} × {} ({now} in cart)", product.name)?;
    writeln!(out, "Cart: {} items", ctx.store.cart_count())?;
    Ok(())
}

/// `shopfront remove <id> [-n qty]`
pub fn remove(ctx: &CommandContext<'_>, id: &str, qty: u32, out: &mut impl Write) -> CliResult<()> {
    validate_quantity(qty)?;
    validate_product_id(id)?;

    if ctx.store.get_qty(id) == 0 {
        writeln!(out, "{id} is not in the cart")?;
        return Ok(());
    }

    let left = ctx.store.remove_from_cart(id, qty);
    let name = ctx.catalog.get(id).map_or(id, |p| p.name.as_str());

    if left == 0 {
        writeln!(out, "Removed {name} from the cart")?;
    } else {
        writeln!(out, "Removed {qty} × {name} ({left} left)")?;
    }
    writeln!(out, "Cart: {} items", ctx.store.cart_count())?;
    Ok(())
}

/// `shopfront fav <id>`
pub fn toggle_favorite(ctx: &CommandContext<'_>, id: &str, out: &mut impl Write) -> CliResult<()> {
    let product = lookup(ctx, id)?;

    if ctx.store.toggle_favorite(id) {
        writeln!(out, "★ {} added to favorites", product.name)?;
    } else {
        writeln!(out, "☆ {} removed from favorites", product.name)?;
    }
    writeln!(out, "Favorites: {}", ctx.store.favorites_count())?;
    Ok(())
}

/// `shopfront clear`
pub fn clear(ctx: &CommandContext<'_>, out: &mut impl Write) -> CliResult<()> {
    ctx.store.clear_cart();
    writeln!(out, "Cart cleared")?;
    Ok(())
}

/// `shopfront show [--json]`
///
/// Ids missing from the catalog (e.g. products removed since they were
/// added) are still listed, by id.
pub fn show(ctx: &CommandContext<'_>, json: bool, out: &mut impl Write) -> CliResult<()> {
    let view = ctx.store.view();

    if json {
        serde_json::to_writer_pretty(&mut *out, &view)?;
        writeln!(out)?;
        return Ok(());
    }

    if view.cart.is_empty() {
        writeln!(out, "Cart is empty")?;
    } else {
        writeln!(out, "Cart ({} items)", view.cart_count)?;
        for line in &view.cart {
            match ctx.catalog.get(&line.product_id) {
                Some(p) => writeln!(out, "  {} × {} [{}]", line.quantity, p.name, p.id)?,
                None => writeln!(out, "  {} × {}", line.quantity, line.product_id)?,
            }
        }
    }

    if view.favorites.is_empty() {
        writeln!(out, "No favorites")?;
    } else {
        writeln!(out, "Favorites ({})", view.favorites_count)?;
        for id in &view.favorites {
            match ctx.catalog.get(id) {
                Some(p) => writeln!(out, "  ★ {} [{}]", p.name, p.id)?,
                None => writeln!(out, "  ★ {id}")?,
            }
        }
    }

    Ok(())
}
