use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use fpq::cli::quote::QuoteCommand;
use fpq::core::log::init_logging;
use fpq::core::money::CurrencyDisplay;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Currency {
    Usd,
    Bob,
}

impl From<Currency> for CurrencyDisplay {
    fn from(currency: Currency) -> CurrencyDisplay {
        match currency {
            Currency::Usd => CurrencyDisplay::Usd,
            Currency::Bob => CurrencyDisplay::Bob,
        }
    }
}

impl From<Commands> for fpq::AppCommand {
    fn from(cmd: Commands) -> fpq::AppCommand {
        match cmd {
            Commands::Quote {
                product,
                quantity,
                city,
                assembly,
                currency,
            } => fpq::AppCommand::Quote(QuoteCommand {
                product,
                quantity,
                city,
                assembly,
                currency: currency.into(),
            }),
            Commands::Catalog { currency } => fpq::AppCommand::Catalog {
                currency: currency.into(),
            },
            Commands::Cities => fpq::AppCommand::Cities,
            Commands::Faq => fpq::AppCommand::Faq,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Compute an estimate with shipping and the WhatsApp link
    Quote {
        /// Product id from the catalog (defaults to the first product)
        #[arg(short, long)]
        product: Option<String>,
        /// Number of units; values below 1 are treated as 1
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
        /// Destination city (defaults to the brand's default city)
        #[arg(long)]
        city: Option<String>,
        /// Add the assembly service surcharge
        #[arg(short, long)]
        assembly: bool,
        /// Currency for displayed amounts
        #[arg(long, value_enum, default_value = "usd")]
        currency: Currency,
    },
    /// Display the product catalog
    Catalog {
        /// Currency for displayed prices
        #[arg(long, value_enum, default_value = "usd")]
        currency: Currency,
    },
    /// Display shipping rates by city
    Cities,
    /// Display frequently asked questions
    Faq,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(cli.config_path.as_deref()),
        Some(cmd) => fpq::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup(config_path: Option<&str>) -> Result<()> {
    match config_path {
        Some(path) => fpq::cli::setup::setup_at_path(path),
        None => fpq::cli::setup::setup(),
    }
}
