use actix_web::web;

pub mod add_on;
pub mod health;
pub mod safari;

/// Registers every route. Shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/add-ons", web::get().to(add_on::get_add_ons))
                .service(
                    web::scope("/safari")
                        .route("", web::get().to(safari::get_all))
                        .route("/featured", web::get().to(safari::get_featured))
                        .route("/{slug}", web::get().to(safari::get_by_slug))
                        .route("/{slug}/itinerary/{day}", web::get().to(safari::get_day))
                        .route("/{slug}/quote", web::post().to(safari::quote)),
                ),
        );
}
