//! End-to-End Integration Tests for the Stockroom Server
//!
//! This binary starts a real `stockroom` server process against a throwaway
//! SQLite database and exercises the complete REST API over HTTP.


use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Command line arguments for the integration test run
#[derive(Parser)]
#[command(name = "stockroom-integration-tests")]
#[command(about = "HTTP-based integration tests for the Stockroom inventory server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct TestArgs {
    /// Path to the stockroom binary to test
    #[arg(short, long, default_value = "./target/debug/stockroom")]
    pub server_binary: PathBuf,

    /// Port for the HTTP server to listen on
    #[arg(long, default_value = "8891")]
    pub server_port: u16,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = TestArgs::parse();

    // Set up logging level based on verbose flag
    let log_level = if args.verbose { "debug" } else { "info" };
    std::env::set_var("RUST_LOG", log_level);

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("🚀 Starting Stockroom integration tests");
    info!("📍 Server Binary: {:?}", args.server_binary);
    info!("📍 Server Port: {}", args.server_port);

    // Verify the server binary exists
    if !args.server_binary.exists() {
        return Err(anyhow::anyhow!(
            "Server binary not found at {:?}. Please build it first with: cargo build --bin stockroom",
            args.server_binary
        ));
    }

    // Run the HTTP integration tests
    http_tests::run_http_integration_tests(args.server_binary, args.server_port).await?;

    info!("🎉 All Stockroom integration tests completed successfully!");
    Ok(())
}
