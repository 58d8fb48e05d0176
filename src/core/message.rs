//! Builds the pre-filled WhatsApp summary and its deep link.
use crate::core::config::{BrandConfig, PricingConfig, Product};
use crate::core::money::{CurrencyDisplay, format_amount};
use crate::core::quote::{Quote, QuoteSession};

/// Renders the fixed multi-line summary sent over WhatsApp. Amounts are
/// always quoted in USD here, whatever display mode the session uses.
pub fn compose_message(
    brand: &BrandConfig,
    product: &Product,
    session: &QuoteSession,
    quote: &Quote,
    pricing: &PricingConfig,
) -> String {
    let usd = |amount: f64| format_amount(amount, CurrencyDisplay::Usd, pricing.usd_to_bob);
    format!(
        "Hola {}! Quiero cotizar:\n\
         Producto: {}\n\
         Cantidad: {}\n\
         Ciudad: {}\n\
         Armado: {}\n\
         Subtotal: {}\n\
         Envío estimado: {}\n\
         Total estimado: {}\n\
         ¿Me ayudas a coordinar?",
        brand.name,
        product.name,
        quote.quantity,
        session.city,
        if session.assembly { "Sí" } else { "No" },
        usd(quote.subtotal_usd),
        usd(quote.shipping_usd),
        usd(quote.total_usd),
    )
}

/// Builds the `wa.me` deep link. The whole message is percent-encoded so
/// newlines and reserved characters survive in the query string.
pub fn whatsapp_link(whatsapp_number: &str, text: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        whatsapp_number,
        urlencoding::encode(text)
    )
}
