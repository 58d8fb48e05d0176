//! Core business logic: configuration data, quote computation, formatting.

pub mod config;
pub mod log;
pub mod message;
pub mod money;
pub mod quote;

// Re-export main types for cleaner imports
pub use config::{AppConfig, Product, ShippingTable};
pub use money::CurrencyDisplay;
pub use quote::{Quote, QuoteSession, compute_quote};
