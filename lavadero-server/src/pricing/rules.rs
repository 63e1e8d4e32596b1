//! Versioned pricing rules
//!
//! The softener surcharge formula used to live as inlined constants
//! next to the total computation. It is configuration now, versioned so
//! a stored note can always name the rule set that priced it.

use rust_decimal::Decimal;

/// Rule set applied when pricing a selection
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRules {
    /// Monotonically bumped whenever any rule value changes
    pub version: u32,
    /// Price of one softener surcharge unit
    pub suavitel_unit_price: Decimal,
    /// Kilograms of the bulk service covered by one surcharge unit
    pub suavitel_kilo_divisor: u32,
    /// Catalog name (case-insensitive) of the by-the-kilo bulk service
    pub bulk_service_name: String,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            version: 1,
            suavitel_unit_price: Decimal::new(10, 0),
            suavitel_kilo_divisor: 6,
            bulk_service_name: "Ropa Por Kilo".to_string(),
        }
    }
}

impl PricingRules {
    /// Load rules from environment variables, falling back to defaults
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | PRICING_RULES_VERSION | 1 |
    /// | SUAVITEL_UNIT_PRICE | 10 |
    /// | SUAVITEL_KILO_DIVISOR | 6 |
    /// | BULK_SERVICE_NAME | Ropa Por Kilo |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            version: std::env::var("PRICING_RULES_VERSION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.version),
            suavitel_unit_price: std::env::var("SUAVITEL_UNIT_PRICE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.suavitel_unit_price),
            suavitel_kilo_divisor: std::env::var("SUAVITEL_KILO_DIVISOR")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|d| *d > 0)
                .unwrap_or(defaults.suavitel_kilo_divisor),
            bulk_service_name: std::env::var("BULK_SERVICE_NAME")
                .unwrap_or(defaults.bulk_service_name),
        }
    }

    /// Surcharge units owed for `kilos` of the bulk service
    ///
    /// One unit per started `suavitel_kilo_divisor` kilograms.
    pub fn suavitel_units(&self, kilos: u32) -> u32 {
        kilos.div_ceil(self.suavitel_kilo_divisor)
    }
}
