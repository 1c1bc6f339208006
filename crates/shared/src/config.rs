//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Pricing reference data configuration.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Hardcoded business assumptions of the estimation models.
    #[serde(default)]
    pub assumptions: AssumptionsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Pricing reference data configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Optional path to a JSON ceremony catalog replacing the built-in one.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Maximum number of memoized wedding summaries.
    #[serde(default = "default_cache_capacity")]
    pub estimate_cache_capacity: u64,
    /// Time-to-live in seconds for memoized wedding summaries.
    #[serde(default = "default_cache_ttl")]
    pub estimate_cache_ttl_secs: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            estimate_cache_capacity: default_cache_capacity(),
            estimate_cache_ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_cache_capacity() -> u64 {
    256
}

fn default_cache_ttl() -> u64 {
    300 // 5 minutes
}

/// Business assumptions used by the estimation and scenario models.
///
/// These have no documented derivation; they are kept configurable rather
/// than re-derived.
#[derive(Debug, Clone, Deserialize)]
pub struct AssumptionsConfig {
    /// Low end of the generic per-guest estimate for events without a breakdown.
    #[serde(default = "default_fallback_per_guest_low")]
    pub fallback_per_guest_low: Decimal,
    /// High end of the generic per-guest estimate for events without a breakdown.
    #[serde(default = "default_fallback_per_guest_high")]
    pub fallback_per_guest_high: Decimal,
    /// Guest count used when an event reports zero or negative guests.
    #[serde(default = "default_guest_floor")]
    pub guest_floor: u32,
    /// Share of the total budget attributed to per-guest spend in scenarios.
    #[serde(default = "default_per_guest_share")]
    pub per_guest_share: Decimal,
    /// Share of the total budget attributed to the venue in scenarios.
    #[serde(default = "default_venue_share")]
    pub venue_share: Decimal,
    /// Share of the total budget attributed to catering in scenarios.
    #[serde(default = "default_catering_share")]
    pub catering_share: Decimal,
    /// Per-person cost used when the baseline budget or guest count is zero.
    #[serde(default = "default_fallback_per_person_cost")]
    pub fallback_per_person_cost: Decimal,
}

impl Default for AssumptionsConfig {
    fn default() -> Self {
        Self {
            fallback_per_guest_low: default_fallback_per_guest_low(),
            fallback_per_guest_high: default_fallback_per_guest_high(),
            guest_floor: default_guest_floor(),
            per_guest_share: default_per_guest_share(),
            venue_share: default_venue_share(),
            catering_share: default_catering_share(),
            fallback_per_person_cost: default_fallback_per_person_cost(),
        }
    }
}

fn default_fallback_per_guest_low() -> Decimal {
    Decimal::new(50, 0)
}

fn default_fallback_per_guest_high() -> Decimal {
    Decimal::new(100, 0)
}

fn default_guest_floor() -> u32 {
    20
}

fn default_per_guest_share() -> Decimal {
    Decimal::new(6, 1)
}

fn default_venue_share() -> Decimal {
    Decimal::new(25, 2)
}

fn default_catering_share() -> Decimal {
    Decimal::new(35, 2)
}

fn default_fallback_per_person_cost() -> Decimal {
    Decimal::new(150, 0)
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Layering order: `config/default`, `config/{RUN_MODE}`, then
    /// `MANDAP__SECTION__KEY` environment variables. Every section has
    /// defaults, so an empty environment yields a usable configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MANDAP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_match_business_assumptions() {
        let assumptions = AssumptionsConfig::default();
        assert_eq!(assumptions.fallback_per_guest_low, dec!(50));
        assert_eq!(assumptions.fallback_per_guest_high, dec!(100));
        assert_eq!(assumptions.guest_floor, 20);
        assert_eq!(assumptions.per_guest_share, dec!(0.6));
        assert_eq!(assumptions.venue_share, dec!(0.25));
        assert_eq!(assumptions.catering_share, dec!(0.35));
        assert_eq!(assumptions.fallback_per_person_cost, dec!(150));
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(["MANDAP__SERVER__PORT", "RUN_MODE"], || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.server.host, "0.0.0.0");
            assert!(config.pricing.catalog_path.is_none());
            assert_eq!(config.pricing.estimate_cache_capacity, 256);
        });
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("MANDAP__SERVER__PORT", Some("9090")),
                ("MANDAP__ASSUMPTIONS__VENUE_SHARE", Some("0.3")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.assumptions.venue_share, dec!(0.3));
                assert_eq!(config.assumptions.catering_share, dec!(0.35));
            },
        );
    }
}
