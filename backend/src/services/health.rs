use actix_web::web::{get, resource};
use actix_web::{HttpResponse, Resource, Responder};
use serde_json::json;

/// `GET /`: liveness marker for load balancers and humans.
pub fn configure_routes() -> Resource {
    resource("/").route(get().to(process))
}

async fn process() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Excel Generator API is running!" }))
}
