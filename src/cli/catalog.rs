use super::ui;
use crate::core::config::AppConfig;
use crate::core::money::{CurrencyDisplay, format_amount};
use anyhow::Result;
use comfy_table::Cell;

pub fn run(config: &AppConfig, currency: CurrencyDisplay) -> Result<()> {
    println!("{}", render(config, currency));
    Ok(())
}

fn render(config: &AppConfig, currency: CurrencyDisplay) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Id"),
        ui::header_cell("Producto"),
        ui::header_cell("Descripción"),
        ui::header_cell("Precio"),
        ui::header_cell("Etiqueta"),
    ]);

    for product in &config.catalog {
        let mut description = product.subtitle.clone();
        for feature in &product.features {
            description.push_str("\n• ");
            description.push_str(feature);
        }
        let price = format_amount(product.price_usd, currency, config.pricing.usd_to_bob);
        table.add_row(vec![
            Cell::new(&product.id),
            Cell::new(&product.name),
            Cell::new(description),
            ui::money_cell(&price),
            ui::badge_cell(product.badge.as_deref()),
        ]);
    }

    format!(
        "Catálogo: {}\n\n{table}",
        ui::style_text(&config.brand.name, ui::StyleType::Title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // The table may wrap long cells depending on the detected width, so the
    // assertions stick to single words that survive wrapping.
    #[test]
    fn test_catalog_lists_every_product_in_order() {
        let config = AppConfig::default();
        let rendered = render(&config, CurrencyDisplay::Usd);
        let positions: Vec<usize> = ["Ropero", "Closet", "Cocina", "Rack"]
            .iter()
            .map(|name| rendered.find(name).expect("product listed"))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(rendered.contains("$179.00"));
        assert!(rendered.contains("vendido"));
    }

    #[test]
    fn test_catalog_prices_follow_display_currency() {
        let config = AppConfig::default();
        let rendered = render(&config, CurrencyDisplay::Bob);
        // 179 * 6.96 = 1245.84 rounds to 1246
        assert!(rendered.contains("1246"));
        assert!(!rendered.contains("USD"));
    }
}
