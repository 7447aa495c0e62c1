//! phone-display - demo entry point
//!
//! Formats the configured demo number and prints the display form of each
//! record type to stdout. Logs go to stderr.

use anyhow::Result;
use phone_display::{format_phone_number, Config, ContactCard, PhoneDirectory};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let fallback = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let raw = config.demo_number.digits();
    let formatted = match format_phone_number(&raw) {
        Ok(formatted) => formatted,
        Err(e) => {
            error!("Failed to format {}: {}", raw, e);
            return Err(e.into());
        }
    };
    info!(%raw, %formatted, "Formatted demo number");

    let card = ContactCard::new(config.demo_number, config.demo_sex, config.demo_intimacy);

    let mut directory = PhoneDirectory::new(config.directory_name.as_str())?;
    directory.insert(card.clone());

    println!("{}", formatted);
    println!("{}", card);
    println!("{}", card.sex());
    println!("{}", directory);

    Ok(())
}
