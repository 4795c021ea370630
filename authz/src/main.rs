//! Maestro Access Console - Main Entry Point
//!
//! Inspects roles, users and the current user's permissions from the command line.

use anyhow::Result;
use tracing::info;

use maestro_authz::console::Command;
use maestro_authz::{config, observability, AccessContext, UserDirectory};

fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    // Initialize tracing
    observability::init_tracing(&config)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Maestro access console"
    );

    let mut directory = UserDirectory::seeded();
    let mut ctx = AccessContext::new(config.default_user.resolve(&directory));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let output = Command::parse(&args)?.execute(&mut directory, &mut ctx)?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
