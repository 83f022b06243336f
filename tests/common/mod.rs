use actix_web::{middleware::Logger, web, App};
use actix_cors::Cors;
use std::sync::Arc;

use safari_api::{routes, Catalog, PricingPolicy, PricingService};

pub struct TestApp {
    pub catalog: Arc<Catalog>,
    pub pricing: PricingService,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_policy(PricingPolicy::default())
    }

    pub fn with_policy(policy: PricingPolicy) -> Self {
        let catalog = Catalog::embedded().expect("embedded catalog should load");

        Self {
            catalog: Arc::new(catalog),
            pricing: PricingService::with_policy(policy),
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.catalog.clone()))
            .app_data(web::Data::new(self.pricing.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::configure)
    }
}

pub fn get_test_slug() -> String {
    "kenya-classic-safari".to_string()
}
