use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// Presentation palette carried as plain configuration data.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            primary: "#000000".to_string(),
            secondary: "#dd0000".to_string(),
            accent: "#ffcc00".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BrandConfig {
    pub name: String,
    /// Destination WhatsApp number, digits only (country code + number).
    pub whatsapp_number: String,
    #[serde(default)]
    pub email: Option<String>,
    pub default_city: String,
    #[serde(default)]
    pub palette: Palette,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub price_usd: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CityRate {
    pub city: String,
    pub rate_bob: f64,
}

/// Per-city shipping rates in Bs, with a designated fallback entry for
/// cities not present in the table.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShippingTable {
    #[serde(default = "default_fallback_city")]
    pub fallback_city: String,
    pub rates: Vec<CityRate>,
}

fn default_fallback_city() -> String {
    "Otra ciudad".to_string()
}

impl ShippingTable {
    /// Resolves the shipping rate for a city. Unknown cities resolve to the
    /// fallback entry, so this lookup is total.
    pub fn rate_for(&self, city: &str) -> f64 {
        self.rates
            .iter()
            .find(|r| r.city == city)
            .or_else(|| self.rates.iter().find(|r| r.city == self.fallback_city))
            .map_or(0.0, |r| r.rate_bob)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PricingConfig {
    /// Assembly service surcharge as a fraction of the subtotal.
    #[serde(default = "default_assembly_rate")]
    pub assembly_rate: f64,
    /// Conversion rate from USD to Bs.
    #[serde(default = "default_usd_to_bob")]
    pub usd_to_bob: f64,
}

fn default_assembly_rate() -> f64 {
    0.15
}

fn default_usd_to_bob() -> f64 {
    6.96
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            assembly_rate: default_assembly_rate(),
            usd_to_bob: default_usd_to_bob(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub brand: BrandConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    pub catalog: Vec<Product>,
    pub shipping: ShippingTable,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

impl AppConfig {
    /// Loads the config file from the default location, falling back to the
    /// built-in catalog when no file exists.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("bo", "flatpack", "fpq")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config.validate()?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Checks the invariants the quote calculator relies on. Runs once at
    /// load time so every later lookup stays total.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.is_empty() {
            bail!("Catalog must contain at least one product");
        }
        for product in &self.catalog {
            if product.price_usd < 0.0 {
                bail!("Product '{}' has a negative unit price", product.id);
            }
        }
        if !self
            .shipping
            .rates
            .iter()
            .any(|r| r.city == self.shipping.fallback_city)
        {
            bail!(
                "Shipping table is missing its fallback entry '{}'",
                self.shipping.fallback_city
            );
        }
        for rate in &self.shipping.rates {
            if rate.rate_bob < 0.0 {
                bail!("Shipping rate for '{}' is negative", rate.city);
            }
        }
        if self.pricing.usd_to_bob <= 0.0 {
            bail!("Conversion rate must be positive");
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            brand: BrandConfig {
                name: "Proyecto Flatpack".to_string(),
                whatsapp_number: "59162137080".to_string(),
                email: None,
                default_city: "Santa Cruz de la Sierra".to_string(),
                palette: Palette::default(),
            },
            pricing: PricingConfig::default(),
            catalog: vec![
                Product {
                    id: "kit-ropero-120".to_string(),
                    name: "Ropero Flatpack 120 cm".to_string(),
                    subtitle: "2 puertas, multiuso, listo para armar".to_string(),
                    price_usd: 179.0,
                    features: vec![
                        "Melamina 18mm premium".to_string(),
                        "Correderas metálicas".to_string(),
                        "Manual y tornillería inclusos".to_string(),
                    ],
                    badge: Some("Más vendido".to_string()),
                    image: Some(
                        "https://images.unsplash.com/photo-1582582621959-2c0e2b2a51a4?q=80&w=1200&auto=format&fit=crop"
                            .to_string(),
                    ),
                },
                Product {
                    id: "kit-closet-180".to_string(),
                    name: "Closet Flatpack 180 cm".to_string(),
                    subtitle: "3 puertas, cajones internos".to_string(),
                    price_usd: 239.0,
                    features: vec![
                        "Optimizador de espacio".to_string(),
                        "Bisagras soft-close".to_string(),
                        "Acabado alto brillo".to_string(),
                    ],
                    badge: Some("Nuevo".to_string()),
                    image: Some(
                        "https://images.unsplash.com/photo-1598300042247-3691643eb22d?q=80&w=1200&auto=format&fit=crop"
                            .to_string(),
                    ),
                },
                Product {
                    id: "kit-cocina-modular".to_string(),
                    name: "Módulo de Cocina 80 cm".to_string(),
                    subtitle: "Base con 2 puertas + cajón".to_string(),
                    price_usd: 165.0,
                    features: vec![
                        "Resistente a humedad".to_string(),
                        "Patas niveladoras".to_string(),
                        "Compatible sistema VB16".to_string(),
                    ],
                    badge: Some("Stock limitado".to_string()),
                    image: Some(
                        "https://images.unsplash.com/photo-1598300175460-fd616f38f5a0?q=80&w=1200&auto=format&fit=crop"
                            .to_string(),
                    ),
                },
                Product {
                    id: "kit-rack-tv".to_string(),
                    name: "Rack TV 150 cm".to_string(),
                    subtitle: "Moderno, con gestión de cables".to_string(),
                    price_usd: 149.0,
                    features: vec![
                        "Estilo minimalista".to_string(),
                        "Montaje rápido".to_string(),
                        "Acabado anti-rayas".to_string(),
                    ],
                    badge: None,
                    image: Some(
                        "https://images.unsplash.com/photo-1580041065738-e72023775cdc?q=80&w=1200&auto=format&fit=crop"
                            .to_string(),
                    ),
                },
            ],
            shipping: ShippingTable {
                fallback_city: "Otra ciudad".to_string(),
                rates: vec![
                    CityRate {
                        city: "Santa Cruz de la Sierra".to_string(),
                        rate_bob: 60.0,
                    },
                    CityRate {
                        city: "La Paz".to_string(),
                        rate_bob: 75.0,
                    },
                    CityRate {
                        city: "Cochabamba".to_string(),
                        rate_bob: 70.0,
                    },
                    CityRate {
                        city: "El Alto".to_string(),
                        rate_bob: 75.0,
                    },
                    CityRate {
                        city: "Tarija".to_string(),
                        rate_bob: 85.0,
                    },
                    CityRate {
                        city: "Oruro".to_string(),
                        rate_bob: 80.0,
                    },
                    CityRate {
                        city: "Potosí".to_string(),
                        rate_bob: 95.0,
                    },
                    CityRate {
                        city: "Chuquisaca (Sucre)".to_string(),
                        rate_bob: 85.0,
                    },
                    CityRate {
                        city: "Beni (Trinidad)".to_string(),
                        rate_bob: 90.0,
                    },
                    CityRate {
                        city: "Pando (Cobija)".to_string(),
                        rate_bob: 110.0,
                    },
                    CityRate {
                        city: "Otra ciudad".to_string(),
                        rate_bob: 120.0,
                    },
                ],
            },
            faq: vec![
                FaqEntry {
                    question: "¿Qué incluye cada kit?".to_string(),
                    answer: "Cada kit incluye todas las piezas pre-cortadas, tornillería, herrajes y manual de armado paso a paso.".to_string(),
                },
                FaqEntry {
                    question: "¿Hacen envíos a todo Bolivia?".to_string(),
                    answer: "Sí. Enviamos a todo el país. El costo varía por ciudad y se calcula en el cotizador.".to_string(),
                },
                FaqEntry {
                    question: "¿Puedo solicitar armado?".to_string(),
                    answer: "Sí. Ofrecemos servicio de armado opcional en ciudades principales.".to_string(),
                },
                FaqEntry {
                    question: "¿Qué métodos de pago aceptan?".to_string(),
                    answer: "Transferencia, QR y tarjeta (según disponibilidad en tu ciudad).".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
brand:
  name: "Proyecto Flatpack"
  whatsapp_number: "59162137080"
  default_city: "Santa Cruz de la Sierra"
catalog:
  - id: "kit-ropero-120"
    name: "Ropero Flatpack 120 cm"
    subtitle: "2 puertas, multiuso"
    price_usd: 179.0
    features:
      - "Melamina 18mm premium"
    badge: "Más vendido"
  - id: "kit-rack-tv"
    name: "Rack TV 150 cm"
    subtitle: "Moderno, con gestión de cables"
    price_usd: 149.0
shipping:
  rates:
    - city: "Santa Cruz de la Sierra"
      rate_bob: 60
    - city: "Otra ciudad"
      rate_bob: 120
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.brand.name, "Proyecto Flatpack");
        assert_eq!(config.brand.whatsapp_number, "59162137080");
        assert!(config.brand.email.is_none());
        assert_eq!(config.brand.palette.secondary, "#dd0000");

        assert_eq!(config.catalog.len(), 2);
        assert_eq!(config.catalog[0].id, "kit-ropero-120");
        assert_eq!(config.catalog[0].price_usd, 179.0);
        assert_eq!(config.catalog[0].badge.as_deref(), Some("Más vendido"));
        assert!(config.catalog[1].badge.is_none());
        assert!(config.catalog[1].features.is_empty());

        // Omitted pricing section takes the fixed defaults
        assert_eq!(config.pricing.assembly_rate, 0.15);
        assert_eq!(config.pricing.usd_to_bob, 6.96);

        assert_eq!(config.shipping.fallback_city, "Otra ciudad");
        assert_eq!(config.shipping.rates.len(), 2);
        config.validate().expect("Config should validate");
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("Built-in config should validate");
        assert_eq!(config.catalog.len(), 4);
        assert_eq!(config.shipping.rates.len(), 11);
        assert_eq!(config.brand.default_city, "Santa Cruz de la Sierra");
        assert_eq!(
            config.shipping.rate_for(&config.shipping.fallback_city),
            120.0
        );
    }

    #[test]
    fn test_rate_lookup_falls_back_for_unknown_city() {
        let config = AppConfig::default();
        assert_eq!(config.shipping.rate_for("La Paz"), 75.0);
        assert_eq!(config.shipping.rate_for("Narnia"), 120.0);
        assert_eq!(config.shipping.rate_for(""), 120.0);
    }

    #[test]
    fn test_validation_rejects_missing_fallback_entry() {
        let mut config = AppConfig::default();
        config.shipping.rates.retain(|r| r.city != "Otra ciudad");
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("fallback entry 'Otra ciudad'")
        );
    }

    #[test]
    fn test_validation_rejects_negative_price() {
        let mut config = AppConfig::default();
        config.catalog[0].price_usd = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_catalog() {
        let mut config = AppConfig::default();
        config.catalog.clear();
        assert!(config.validate().is_err());
    }
}
