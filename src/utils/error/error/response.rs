//! HTTP response handling for errors

use super::types::RelayError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidBlockId(_) | RelayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::HttpClient(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            RelayError::HttpClient(_) | RelayError::Network(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let code = match self {
            RelayError::Config(_) => "CONFIG_ERROR",
            RelayError::HttpClient(_) => "HTTP_CLIENT_ERROR",
            RelayError::Serialization(_) | RelayError::Yaml(_) => "SERIALIZATION_ERROR",
            RelayError::Io(_) => "IO_ERROR",
            RelayError::InvalidBlockId(_) => "INVALID_BLOCK_ID",
            RelayError::BadRequest(_) => "BAD_REQUEST",
            RelayError::Network(_) => "NETWORK_ERROR",
            RelayError::Internal(_) => "INTERNAL_ERROR",
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
