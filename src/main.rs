use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod models;
mod services;
mod session;
mod utils;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("walletx=info".parse().unwrap())
                .add_directive("reqwest=warn".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = commands::Cli::parse();

    if let Err(e) = commands::dispatch(cli).await {
        error!("Command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
