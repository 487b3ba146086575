//! # Shopfront CLI Entry Point
//!
//! ```text
//! $ shopfront add mint-10 -n 2
//! Added 2 × Mint Drops 10mg (2 in cart)
//! Cart: 2 items
//!
//! $ shopfront catalog --q mint
//! $ shopfront show --json
//! ```

use std::process::ExitCode;

use clap::Parser;
use shopfront_cli::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    shopfront_cli::init_tracing();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match shopfront_cli::run(cli, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
