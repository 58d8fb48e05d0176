pub mod cli;
pub mod core;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::quote::QuoteCommand;
use crate::core::money::CurrencyDisplay;

/// Commands the library can execute once configuration is loaded. Setup is
/// handled separately by the binary since it runs before any config exists.
pub enum AppCommand {
    Quote(QuoteCommand),
    Catalog { currency: CurrencyDisplay },
    Cities,
    Faq,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Flatpack quoter starting...");

    let config = match config_path {
        Some(path) => core::config::AppConfig::load_from_path(path)?,
        None => core::config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Quote(cmd) => cli::quote::run(&config, &cmd),
        AppCommand::Catalog { currency } => cli::catalog::run(&config, currency),
        AppCommand::Cities => cli::cities::run(&config),
        AppCommand::Faq => cli::faq::run(&config),
    }
}
