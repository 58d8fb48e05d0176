//! Two-mode amount formatting: USD with cents, or whole Bs.

/// Currency used when rendering amounts. Internally every amount is kept in
/// USD; this only affects display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    #[default]
    Usd,
    Bob,
}

/// Formats a USD amount for display. Bs amounts are rounded to the nearest
/// whole unit, matching how the rates are quoted.
pub fn format_amount(amount_usd: f64, display: CurrencyDisplay, usd_to_bob: f64) -> String {
    match display {
        CurrencyDisplay::Usd => format!("${amount_usd:.2} USD"),
        CurrencyDisplay::Bob => format!("{} Bs", (amount_usd * usd_to_bob).round() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_format_keeps_two_decimals() {
        assert_eq!(format_amount(179.0, CurrencyDisplay::Usd, 6.96), "$179.00 USD");
        assert_eq!(format_amount(53.7, CurrencyDisplay::Usd, 6.96), "$53.70 USD");
        assert_eq!(format_amount(0.0, CurrencyDisplay::Usd, 6.96), "$0.00 USD");
    }

    #[test]
    fn test_bob_format_rounds_to_whole_units() {
        assert_eq!(format_amount(179.0, CurrencyDisplay::Bob, 6.96), "1246 Bs");
        // 120 Bs of shipping survives the round trip through USD
        assert_eq!(
            format_amount(120.0 / 6.96, CurrencyDisplay::Bob, 6.96),
            "120 Bs"
        );
        assert_eq!(format_amount(0.0, CurrencyDisplay::Bob, 6.96), "0 Bs");
    }

    #[test]
    fn test_bob_format_matches_rounded_conversion() {
        for amount in [0.0, 1.0, 17.241379310344827, 149.0, 428.94137931034483] {
            let expected = format!("{} Bs", (amount * 6.96f64).round() as i64);
            assert_eq!(format_amount(amount, CurrencyDisplay::Bob, 6.96), expected);
        }
    }
}
