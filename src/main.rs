//! consolectl - main entry point

use clap::Parser;
use log::{debug, info};

use consolectl::{commands, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting consolectl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: host={}, config={:?}, batch={}",
        cli.host, cli.config, cli.batch
    );

    if let Err(e) = commands::run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
