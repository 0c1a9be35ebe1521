//! # Excel Template Service Module
//!
//! Groups every endpoint under `/api`:
//!
//! - `industries`: the industry catalog.
//! - `columns`: required headers and the optional-column picker entries.
//! - `generate`: builds and returns the customer-list template workbook.

mod columns;
mod generate;
mod industries;

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::web::{self, get, post, scope};
use actix_web::{HttpRequest, HttpResponse, ResponseError, Scope};
use log::warn;

/// The base path for all API endpoints.
const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` for the API routes.
///
/// # Registered Routes:
///
/// *   **`GET /industries`**:
///     - **Handler**: `industries::process`
///     - **Description**: Returns the industry catalog as a JSON array of strings.
///
/// *   **`GET /columns`**:
///     - **Handler**: `columns::process`
///     - **Description**: Returns a `ColumnCatalog`: the fixed required headers and the
///       optional columns (key and header label) a client may select.
///
/// *   **`POST /generate-excel`**:
///     - **Handler**: `generate::process`
///     - **Description**: Expects a `GenerationRequest` JSON payload and answers with the
///       generated `.xlsx` template as a file download.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/industries", get().to(industries::process))
        .route("/columns", get().to(columns::process))
        .route("/generate-excel", post().to(generate::process))
}

/// JSON extractor settings for request bodies.
///
/// Rejected bodies are logged and answered with a plain-text reason instead of
/// actix's empty default response.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(reject_payload)
}

fn reject_payload(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected body for {} {}: {}", req.method(), req.path(), err);
    let response =
        HttpResponse::build(err.status_code()).body(format!("Invalid request body: {}", err));
    InternalError::from_response(err, response).into()
}
