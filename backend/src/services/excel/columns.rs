use crate::catalog::column_catalog;
use actix_web::{HttpResponse, Responder};

pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(column_catalog())
}
