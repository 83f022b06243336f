use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::services::catalog_service::Catalog;

pub async fn get_add_ons(catalog: web::Data<Arc<Catalog>>) -> impl Responder {
    HttpResponse::Ok().json(catalog.add_ons())
}
