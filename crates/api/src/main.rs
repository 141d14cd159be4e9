//! User API - HTTP entry point.

use clap::Parser;

use common::telemetry;
use user_api_lib::config::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = telemetry::init(&cli.log) {
        eprintln!("Failed to initialize tracing: {}", e);
    }

    let result = match cli.command {
        Commands::Serve(args) => {
            tracing::debug!(?args, "Configuration loaded");
            user_api_lib::serve(args).await
        }
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}
