pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

pub use error::{BookingError, CatalogError};
pub use services::catalog_service::{get_package_by_slug, Catalog};
pub use services::pricing_service::{PricingPolicy, PricingService, TravelerManifest};
