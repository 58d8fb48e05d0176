use super::ui;
use crate::core::config::AppConfig;
use crate::core::message::{compose_message, whatsapp_link};
use crate::core::money::{CurrencyDisplay, format_amount};
use crate::core::quote::{Quote, QuoteSession};
use anyhow::{Result, anyhow};
use comfy_table::Cell;

/// Selections for a single quote, as given on the command line. Unset
/// fields fall back to the session defaults.
#[derive(Debug, Clone)]
pub struct QuoteCommand {
    pub product: Option<String>,
    pub quantity: i64,
    pub city: Option<String>,
    pub assembly: bool,
    pub currency: CurrencyDisplay,
}

pub fn run(config: &AppConfig, cmd: &QuoteCommand) -> Result<()> {
    let mut session = QuoteSession::new(config);
    if let Some(id) = &cmd.product {
        session.set_product(id);
    }
    session.set_quantity(cmd.quantity);
    if let Some(city) = &cmd.city {
        session.set_city(city);
    }
    session.set_assembly(cmd.assembly);
    session.set_display(cmd.currency);

    let product = session.product(&config.catalog).ok_or_else(|| {
        let known = config
            .catalog
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow!(
            "Unknown product id '{}'. Known ids: {known}",
            session.product_id
        )
    })?;
    let quote = session
        .recompute(config)
        .ok_or_else(|| anyhow!("Catalog lookup failed for '{}'", session.product_id))?;

    println!("{}", display_as_table(config, &session, &quote));

    let message = compose_message(&config.brand, product, &session, &quote, &config.pricing);
    let link = whatsapp_link(&config.brand.whatsapp_number, &message);
    println!("{}", display_footer(config, &link));
    Ok(())
}

fn display_footer(config: &AppConfig, link: &str) -> String {
    let mut output = format!(
        "\n{} {link}",
        ui::style_text("Solicitar por WhatsApp:", ui::StyleType::TotalLabel)
    );
    // An unset or empty contact email simply drops the line
    if let Some(email) = config.brand.email.as_deref().filter(|e| !e.is_empty()) {
        output.push_str(&format!(
            "\n{} {email}",
            ui::style_text("Email:", ui::StyleType::TotalLabel)
        ));
    }
    output.push_str(&format!(
        "\n{}",
        ui::style_text(
            "*Precios referenciales. Confirmaremos disponibilidad, colores y tiempos de entrega.",
            ui::StyleType::Subtle
        )
    ));
    output
}

fn display_as_table(config: &AppConfig, session: &QuoteSession, quote: &Quote) -> String {
    let rate = config.pricing.usd_to_bob;
    let amount = |usd: f64| format_amount(usd, session.display, rate);

    let product_name = session
        .product(&config.catalog)
        .map_or(session.product_id.clone(), |p| p.name.clone());

    let mut table = ui::new_styled_table();
    table.add_row(vec![Cell::new("Producto"), Cell::new(&product_name)]);
    table.add_row(vec![
        Cell::new("Cantidad"),
        ui::money_cell(&quote.quantity.to_string()),
    ]);
    table.add_row(vec![Cell::new("Ciudad"), Cell::new(&session.city)]);
    table.add_row(vec![
        Cell::new("Armado"),
        if session.assembly {
            ui::money_cell(&amount(quote.assembly_usd))
        } else {
            ui::money_cell("—")
        },
    ]);
    table.add_row(vec![
        Cell::new("Subtotal"),
        ui::money_cell(&amount(quote.subtotal_usd)),
    ]);
    table.add_row(vec![
        Cell::new("Envío"),
        ui::money_cell(&amount(quote.shipping_usd)),
    ]);

    // Heading at top
    let mut output = format!(
        "Cotización: {}\n\n",
        ui::style_text(&product_name, ui::StyleType::Title)
    );

    // Table in the middle
    output.push_str(&table.to_string());

    // Total at the bottom
    output.push_str(&format!(
        "\n\n{}: {}",
        ui::style_text("Total estimado", ui::StyleType::TotalLabel),
        ui::style_text(&amount(quote.total_usd), ui::StyleType::TotalValue)
    ));

    output
}
