//! HTTP server utilities
//!
//! Response helpers shared by the routes and bind error formatting.

use crate::server::server::HttpServer;
use crate::utils::error::{RelayError, Result};
use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use serde::Serialize;
use std::io::ErrorKind;

/// Serialize `value` as indented JSON with the given status
pub fn pretty_json<T: Serialize>(status: StatusCode, value: &T) -> Result<HttpResponse> {
    let body = serde_json::to_string_pretty(value)?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::json())
        .body(body))
}

/// Map a status reported by Notion onto an actix status code
pub fn reflect_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}

impl HttpServer {
    /// Format a user-friendly error message for port binding failures
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> RelayError {
        match error.kind() {
            ErrorKind::AddrInUse => RelayError::internal(format!(
                "Port {} is already in use. Stop the other process or set RELAY_PORT={}",
                port,
                port.saturating_add(1)
            )),
            ErrorKind::PermissionDenied => RelayError::internal(format!(
                "Permission denied for port {}. Use a port >= 1024, e.g. RELAY_PORT=8787",
                port
            )),
            _ => RelayError::internal(format!("Failed to bind to {}: {}", bind_addr, error)),
        }
    }
}
