pub mod catalog_service;
pub mod catalog_validation;
pub mod pricing_service;
