//! # Template Generation Service
//!
//! Backend logic for `POST /api/generate-excel`.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives a JSON `GenerationRequest`. Bodies that do
//!     not deserialize never reach it; they are answered by the `JsonConfig` error
//!     handler registered in `services::excel`.
//!
//! 2.  **Layout**: `SheetLayout::from_request` assembles the header row (required
//!     headers, then selected optional columns, then custom columns) and binds the
//!     industry, region and custom dropdown lists to their column positions. Option
//!     lists that cannot be stored in an xlsx list are rejected here with `400`.
//!
//! 3.  **Rendering**: the workbook is written on the blocking thread pool so the
//!     async workers keep serving other requests. The whole file is built in memory
//!     before anything is sent.
//!
//! 4.  **HTTP Response**: the bytes are returned as an attachment named
//!     `customer_list_format.xlsx`. Nothing is kept on the server.

use crate::error::GenerationError;
use crate::sheet::{write_workbook, SheetLayout};
use actix_web::http::header::CONTENT_DISPOSITION;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::GenerationRequest;
use log::{debug, error, info, warn};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const FILE_NAME: &str = "customer_list_format.xlsx";

/// Actix web handler for the `POST /api/generate-excel` endpoint.
///
/// # Returns
/// - `200 OK` with the workbook as an attachment.
/// - `400 Bad Request` when the requested columns cannot be represented.
/// - `500 Internal Server Error` when the workbook cannot be written.
pub async fn process(payload: web::Json<GenerationRequest>) -> impl Responder {
    match generate_workbook(payload.into_inner()).await {
        Ok(bytes) => {
            info!("Generated template ({} bytes)", bytes.len());
            HttpResponse::Ok()
                .content_type(XLSX_CONTENT_TYPE)
                .insert_header((CONTENT_DISPOSITION, format!("attachment; filename={}", FILE_NAME)))
                .body(bytes)
        }
        Err(e) => {
            if e.status_code().is_client_error() {
                warn!("Rejected generation request: {}", e);
            } else {
                error!("Template generation failed: {}", e);
            }
            e.error_response()
        }
    }
}

/// Builds the layout for `request` and renders it to xlsx bytes.
pub async fn generate_workbook(request: GenerationRequest) -> Result<Vec<u8>, GenerationError> {
    let layout = SheetLayout::from_request(&request)?;
    debug!(
        "Template layout: {} columns {:?}",
        layout.columns().len(),
        layout.header_row()
    );
    for (col, list) in layout.dropdowns() {
        debug!("Column {} restricted to {}", col + 1, list.formula());
    }

    tokio::task::spawn_blocking(move || write_workbook(&layout))
        .await
        .map_err(|join_err| GenerationError::Worker(join_err.to_string()))?
}
