use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Everything that can stop a template from being generated.
///
/// The first group is caused by the request and maps to `400 Bad Request`;
/// the rest are server faults and map to `500 Internal Server Error`.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("option {option:?} of column {column:?} contains {reserved:?}, which cannot appear in an Excel list")]
    ReservedCharacterInOption {
        column: String,
        option: String,
        reserved: char,
    },

    #[error("dropdown list of column {column:?} is {length} characters long, Excel allows at most {limit}")]
    ListTooLong {
        column: String,
        length: usize,
        limit: usize,
    },

    #[error("the template would have {count} columns, Excel allows at most {limit}")]
    TooManyColumns { count: usize, limit: usize },

    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("workbook worker stopped unexpectedly: {0}")]
    Worker(String),
}

impl ResponseError for GenerationError {
    fn status_code(&self) -> StatusCode {
        match self {
            GenerationError::ReservedCharacterInOption { .. }
            | GenerationError::ListTooLong { .. }
            | GenerationError::TooManyColumns { .. } => StatusCode::BAD_REQUEST,
            GenerationError::Xlsx(_) | GenerationError::Worker(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(format!("Excel generation failed: {}", self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_problems_are_client_errors() {
        let err = GenerationError::ReservedCharacterInOption {
            column: "Budget".to_string(),
            option: "a,b".to_string(),
            reserved: ',',
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = GenerationError::TooManyColumns {
            count: 20_000,
            limit: 16_384,
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn worker_failure_is_a_server_error() {
        let err = GenerationError::Worker("panicked".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn message_names_the_offending_column() {
        let err = GenerationError::ListTooLong {
            column: "Budget".to_string(),
            length: 300,
            limit: 255,
        };
        let message = err.to_string();
        assert!(message.contains("\"Budget\""));
        assert!(message.contains("300"));
    }
}
