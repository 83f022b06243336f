use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::env;
use std::sync::Arc;

use crate::services::catalog_service::Catalog;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    status: String,
    environment: String,
    version: String,
    packages: usize,
    add_ons: usize,
}

pub async fn health_check(catalog: web::Data<Arc<Catalog>>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        packages: catalog.packages().len(),
        add_ons: catalog.add_ons().len(),
    };

    // An empty catalog means the service has nothing to sell
    if health.packages == 0 {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}
