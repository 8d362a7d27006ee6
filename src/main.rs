mod cli;
mod processor;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use processor::BatchProcessor;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "batch265=debug".to_string()
        } else {
            "batch265=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let config = cli.into_config();
    config.validate()?;

    BatchProcessor::new(config).run()
}
