//! Versicle - scripture citation scanner.
//!
//! Reads chat lines from stdin, standing in for the hosting chat framework,
//! and prints one reply line per verse found.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use versicle::config::{env::get_config_path, load_and_validate, Config};
use versicle::scan::CitationScanner;
use versicle::tables::describe_editions;

/// Channel identity used for stdin input.
const STDIN_CHANNEL: &str = "stdin";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Versicle v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = get_config_path();
    let config = match load_and_validate(&config_path) {
        Ok(config) => {
            info!("Configuration loaded from {}", config_path);
            config
        }
        Err(e) => {
            warn!("Failed to load configuration from {}: {}", config_path, e);
            warn!("Continuing with built-in defaults");
            Config::builtin_defaults()
        }
    };

    let default_translation = config.default_translation(STDIN_CHANNEL).to_string();
    info!("  API host: {}", config.api_host());
    info!("  Default translation: {}", default_translation);

    let scanner = CitationScanner::new(config.api_host());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        // "!bibles [language]" lists the translation catalog; anything else
        // is scanned for citations.
        if let Some(rest) = line.trim().strip_prefix("!bibles") {
            let language = rest.trim();
            let language = (!language.is_empty()).then_some(language);
            if let Some(listing) = describe_editions(language) {
                println!("{listing}");
            }
            continue;
        }

        scanner
            .handle_message(&line, &default_translation, |reply| println!("{reply}"))
            .await;
    }

    info!("Exiting...");
    Ok(())
}
