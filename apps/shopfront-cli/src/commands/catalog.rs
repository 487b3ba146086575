//! # Catalog Commands
//!
//! Prints the product grid as text, one product per line:
//!
//! ```text
//!   ♥ 2× mint-10        Mint Drops 10mg          ₿ 0.0004 • Ξ 0.0081   NUEVO
//!        berry-25       Berry Gummies 25mg       Solo premium          LIMITADO
//! ```
//!
//! The `♥` and quantity columns reflect the store, so the listing doubles as
//! a view of what is in the cart.

use std::io::Write;

use shopfront_core::CatalogFilter;

use super::CommandContext;
use crate::error::CliResult;

/// `shopfront catalog [--q text] [--cat category]`
pub fn list(
    ctx: &CommandContext<'_>,
    q: Option<&str>,
    cat: Option<&str>,
    out: &mut impl Write,
) -> CliResult<()> {
    let filter = CatalogFilter::new(q.unwrap_or(""), cat);

    let mut shown = 0;
    for product in ctx.catalog.filter(&filter) {
        let fav = if ctx.store.is_favorite(&product.id) { '♥' } else { ' ' };
        let qty = match ctx.store.get_qty(&product.id) {
            0 => String::new(),
            n => format!("{n}×"),
        };
        let badge = product
            .badge()
            .map(|b| b.label().to_uppercase())
            .unwrap_or_default();

        writeln!(
            out,
            "  {fav} {qty:>3} {:<14} {:<24} {:<21} {badge}",
            product.id,
            product.name,
            product.price_label()
        )?;
        shown += 1;
    }

    if shown == 0 {
        writeln!(out, "No products match")?;
        writeln!(out, "Categories: {}", ctx.catalog.categories().join(", "))?;
    }

    Ok(())
}
