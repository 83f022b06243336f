use std::{env, path::PathBuf};

use crate::{
    error::CatalogResult,
    services::{catalog_service::Catalog, pricing_service::PricingPolicy},
};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub catalog_path: Option<PathBuf>,
    pub pricing: PricingPolicy,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| PORT.to_string())
            .parse()
            .unwrap_or(PORT);

        Self {
            host,
            port,
            catalog_path: env::var("SAFARI_CATALOG_PATH")
                .ok()
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            pricing: PricingPolicy::from_env(),
        }
    }

    /// Catalog from `SAFARI_CATALOG_PATH` when set, otherwise the embedded one.
    pub fn load_catalog(&self) -> CatalogResult<Catalog> {
        match &self.catalog_path {
            Some(path) => {
                log::info!("Loading catalog from {}", path.display());
                Catalog::from_path(path)
            }
            None => Catalog::embedded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pricing_service::AddOnCharge;
    use serial_test::serial;

    const KEYS: [&str; 6] = [
        "HOST",
        "PORT",
        "SAFARI_CATALOG_PATH",
        "PRICING_SERVICE_FEE_RATE",
        "PRICING_ADD_ON_CHARGE",
        "PRICING_ENFORCE_GROUP_SIZE",
    ];

    fn clear() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear();

        let config = AppConfig::from_env();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.pricing.service_fee_rate, 0.0);
        assert_eq!(config.pricing.add_on_charge, AddOnCharge::PerTraveler);
        assert!(config.load_catalog().is_ok());
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear();
        env::set_var("PORT", "9090");
        env::set_var("PRICING_SERVICE_FEE_RATE", "0.05");
        env::set_var("PRICING_ADD_ON_CHARGE", "per-booking");
        env::set_var("PRICING_ENFORCE_GROUP_SIZE", "false");

        let config = AppConfig::from_env();

        assert_eq!(config.port, 9090);
        assert_eq!(config.pricing.service_fee_rate, 0.05);
        assert_eq!(config.pricing.add_on_charge, AddOnCharge::PerBooking);
        assert!(!config.pricing.enforce_group_size);
        clear();
    }

    #[test]
    #[serial]
    fn test_invalid_values_fall_back() {
        clear();
        env::set_var("PORT", "not-a-port");
        env::set_var("PRICING_ADD_ON_CHARGE", "sometimes");

        let config = AppConfig::from_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.pricing.add_on_charge, AddOnCharge::PerTraveler);
        clear();
    }

    #[test]
    #[serial]
    fn test_missing_catalog_file() {
        clear();
        env::set_var("SAFARI_CATALOG_PATH", "/definitely/not/here.json");

        let config = AppConfig::from_env();

        assert!(config.load_catalog().is_err());
        clear();
    }
}
