use std::{io, sync::Arc};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use safari_api::{config::AppConfig, routes, PricingService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let config = AppConfig::from_env();

    if let Err(reason) = config.pricing.validate() {
        log::error!("Invalid pricing policy: {}", reason);
        return Err(io::Error::new(io::ErrorKind::InvalidInput, reason));
    }
    let pricing = PricingService::with_policy(config.pricing.clone());
    log::info!("Pricing policy: {:?}", pricing.policy);

    let catalog = match config.load_catalog() {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            log::error!("Failed to load catalog: {}", err);
            return Err(io::Error::new(io::ErrorKind::InvalidData, err.to_string()));
        }
    };
    log::info!(
        "Catalog ready: {} packages, {} add-ons",
        catalog.packages().len(),
        catalog.add_ons().len()
    );

    log::info!("Attempting to bind to {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST"])
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(catalog.clone()))
            .app_data(web::Data::new(pricing.clone()))
            .configure(routes::configure)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
