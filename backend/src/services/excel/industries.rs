use crate::catalog::INDUSTRIES;
use actix_web::{HttpResponse, Responder};

/// Actix web handler for `GET /api/industries`.
///
/// Returns the industry catalog as a JSON array, in catalog order. The same
/// list feeds the industry dropdown of every generated template.
pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(INDUSTRIES)
}
