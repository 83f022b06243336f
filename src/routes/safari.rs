use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    error::BookingError,
    models::QuoteRequest,
    services::{
        catalog_service::{Catalog, PackageFilter},
        pricing_service::PricingService,
    },
};

/*
    /api/safari
*/
pub async fn get_all(
    catalog: web::Data<Arc<Catalog>>,
    params: web::Query<PackageFilter>,
) -> impl Responder {
    let packages = catalog.filter(&params);
    HttpResponse::Ok().json(packages)
}

/*
    /api/safari/featured
*/
pub async fn get_featured(catalog: web::Data<Arc<Catalog>>) -> impl Responder {
    HttpResponse::Ok().json(catalog.featured_packages())
}

/*
    /api/safari/{slug}
*/
pub async fn get_by_slug(
    path: web::Path<String>,
    catalog: web::Data<Arc<Catalog>>,
) -> Result<HttpResponse, BookingError> {
    let package = catalog.find_package(&path)?;
    Ok(HttpResponse::Ok().json(package))
}

/*
    /api/safari/{slug}/itinerary/{day}
*/
pub async fn get_day(
    path: web::Path<(String, u32)>,
    catalog: web::Data<Arc<Catalog>>,
) -> Result<HttpResponse, BookingError> {
    let (slug, day) = path.into_inner();
    let package = catalog.find_package(&slug)?;

    match package.day(day) {
        Some(itinerary_day) => Ok(HttpResponse::Ok().json(itinerary_day)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("{} has no day {}", package.name, day)
        }))),
    }
}

/*
    /api/safari/{slug}/quote
*/
pub async fn quote(
    path: web::Path<String>,
    catalog: web::Data<Arc<Catalog>>,
    pricing: web::Data<PricingService>,
    input: web::Json<QuoteRequest>,
) -> Result<HttpResponse, BookingError> {
    let package = catalog.find_package(&path)?;
    let request = input.into_inner();

    match pricing.quote_request(package, &request, Utc::now().date_naive()) {
        Ok(quote) => {
            log::info!(
                "Quoted {} for {} travelers: {} {}",
                package.slug,
                quote.adults + quote.children,
                quote.breakdown.total,
                quote.breakdown.currency
            );
            Ok(HttpResponse::Ok().json(quote))
        }
        Err(err) => {
            log::warn!("Rejected quote for {}: {}", package.slug, err);
            Err(err)
        }
    }
}
