// src/main.rs

//! birdref: Bird Reference Site Crawler CLI
//!
//! Wires the HTTP page and the JSON file sink together and runs a single
//! traversal to completion.

use clap::Parser;

use birdref::error::Result;
use birdref::models::Config;
use birdref::page::HttpPage;
use birdref::pipeline::run_crawl;
use birdref::storage::JsonFileSink;

#[derive(Parser, Debug)]
#[command(
    name = "birdref",
    version,
    about = "Crawls a Russian bird reference site and extracts species records"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    /// Override the output file path
    #[arg(short, long)]
    output: Option<String>,

    /// Suppress informational output
    #[arg(short, long)]
    quiet: bool,
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = Config::load_or_default(&cli.config);
    if let Some(path) = cli.output {
        config.output.path = path;
    }
    config.validate()?;

    let mut page = HttpPage::new(&config.crawler)?;
    let sink = JsonFileSink::new(&config.output.path);

    run_crawl(&config, &mut page, &sink).await?;

    Ok(())
}
