//! Pure quote computation over the catalog and rate tables.
use crate::core::config::{AppConfig, PricingConfig, Product, ShippingTable};
use crate::core::money::CurrencyDisplay;
use tracing::debug;

/// A derived, transient estimate. All amounts are in USD; the exact-sum
/// invariant `total = subtotal + assembly + shipping` holds with no rounding
/// applied before display.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Quantity actually used, after clamping to at least 1.
    pub quantity: i64,
    pub subtotal_usd: f64,
    pub assembly_usd: f64,
    pub shipping_usd: f64,
    pub total_usd: f64,
}

/// Computes an estimate for a product order. Total function: a non-positive
/// quantity is clamped to 1 and an unknown city resolves to the shipping
/// table's fallback entry, so no input combination fails.
pub fn compute_quote(
    product: &Product,
    quantity: i64,
    city: &str,
    assembly: bool,
    shipping: &ShippingTable,
    pricing: &PricingConfig,
) -> Quote {
    let quantity = quantity.max(1);
    let subtotal_usd = product.price_usd * quantity as f64;
    let assembly_usd = if assembly {
        subtotal_usd * pricing.assembly_rate
    } else {
        0.0
    };
    let shipping_bob = shipping.rate_for(city);
    let shipping_usd = shipping_bob / pricing.usd_to_bob;
    let total_usd = subtotal_usd + assembly_usd + shipping_usd;

    debug!(
        "Quote for {} x{quantity} to {city}: subtotal {subtotal_usd}, assembly {assembly_usd}, shipping {shipping_usd} ({shipping_bob} Bs), total {total_usd}",
        product.id
    );

    Quote {
        quantity,
        subtotal_usd,
        assembly_usd,
        shipping_usd,
        total_usd,
    }
}

/// Mutable selection state for an interactive quoting session. Field setters
/// only record the selection; a fresh [`Quote`] is derived on demand with
/// [`QuoteSession::recompute`].
#[derive(Debug, Clone)]
pub struct QuoteSession {
    pub product_id: String,
    pub quantity: i64,
    pub city: String,
    pub assembly: bool,
    pub display: CurrencyDisplay,
}

impl QuoteSession {
    /// Starts a session with the standard defaults: first catalog product,
    /// one unit, the brand's default city, no assembly, USD display.
    pub fn new(config: &AppConfig) -> Self {
        QuoteSession {
            product_id: config
                .catalog
                .first()
                .map(|p| p.id.clone())
                .unwrap_or_default(),
            quantity: 1,
            city: config.brand.default_city.clone(),
            assembly: false,
            display: CurrencyDisplay::Usd,
        }
    }

    pub fn set_product(&mut self, product_id: &str) {
        self.product_id = product_id.to_string();
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn set_city(&mut self, city: &str) {
        self.city = city.to_string();
    }

    pub fn set_assembly(&mut self, assembly: bool) {
        self.assembly = assembly;
    }

    pub fn set_display(&mut self, display: CurrencyDisplay) {
        self.display = display;
    }

    /// Resolves the selected product in the catalog.
    pub fn product<'a>(&self, catalog: &'a [Product]) -> Option<&'a Product> {
        catalog.iter().find(|p| p.id == self.product_id)
    }

    /// Derives a quote from the current selection. `None` only when the
    /// selected product id is not in the catalog.
    pub fn recompute(&self, config: &AppConfig) -> Option<Quote> {
        self.product(&config.catalog).map(|product| {
            compute_quote(
                product,
                self.quantity,
                &self.city,
                self.assembly,
                &config.shipping,
                &config.pricing,
            )
        })
    }
}
