use super::ui;
use crate::core::config::AppConfig;
use crate::core::money::{CurrencyDisplay, format_amount};
use anyhow::Result;
use comfy_table::Cell;

pub fn run(config: &AppConfig) -> Result<()> {
    println!("{}", render(config));
    Ok(())
}

fn render(config: &AppConfig) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Ciudad"),
        ui::header_cell("Envío (Bs)"),
        ui::header_cell("Envío (USD)"),
    ]);

    for rate in &config.shipping.rates {
        let usd = rate.rate_bob / config.pricing.usd_to_bob;
        let city = if rate.city == config.shipping.fallback_city {
            format!("{} (por defecto)", rate.city)
        } else {
            rate.city.clone()
        };
        table.add_row(vec![
            Cell::new(city),
            ui::money_cell(&format_amount(
                usd,
                CurrencyDisplay::Bob,
                config.pricing.usd_to_bob,
            )),
            ui::money_cell(&format_amount(
                usd,
                CurrencyDisplay::Usd,
                config.pricing.usd_to_bob,
            )),
        ]);
    }

    format!(
        "{}\n\n{table}",
        ui::style_text("Tarifas de envío por ciudad", ui::StyleType::Title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cities_table_lists_all_rates() {
        let config = AppConfig::default();
        let rendered = render(&config);
        for rate in &config.shipping.rates {
            assert!(rendered.contains(&rate.city));
        }
        assert!(rendered.contains("Otra ciudad (por defecto)"));
        // 120 / 6.96 = 17.24
        assert!(rendered.contains("$17.24 USD"));
    }

    #[test]
    fn test_cities_columns_use_the_shared_amount_formats() {
        let config = AppConfig::default();
        let rendered = render(&config);
        for rate in &config.shipping.rates {
            let usd = rate.rate_bob / config.pricing.usd_to_bob;
            assert!(rendered.contains(&format_amount(
                usd,
                CurrencyDisplay::Bob,
                config.pricing.usd_to_bob
            )));
            assert!(rendered.contains(&format_amount(
                usd,
                CurrencyDisplay::Usd,
                config.pricing.usd_to_bob
            )));
        }
    }
}
