//! Single-block endpoints
//!
//! Thin wrappers around one Notion call each. They share id validation, the
//! payload budget and the archive idempotency rules with the batch engine.

use crate::core::batch::{
    ALREADY_ARCHIVED_NOTE, DeleteDisposition, NOT_FOUND_NOTE, archive_idempotent,
};
use crate::core::blocks::{BlockId, ContentBlock};
use crate::server::state::AppState;
use crate::server::utils::{pretty_json, reflect_status};
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

/// Body of `POST /append`
#[derive(Debug, Default, Deserialize)]
pub struct AppendRequest {
    /// Block to append; takes precedence over `text`
    pub block: Option<Value>,
    /// Text wrapped into a paragraph when no block is given
    pub text: Option<String>,
}

impl AppendRequest {
    fn into_content(self) -> ContentBlock {
        match self.block {
            Some(block) if !block.is_null() => ContentBlock::from_value(block),
            _ => ContentBlock::plain(self.text.unwrap_or_default()),
        }
    }
}

/// Query of `DELETE /delete`
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<String>,
}

/// List the children of the configured page
pub async fn read_blocks(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let page_size = state.config.batch.read_page_size;
    debug!(page_size, "Reading page children");

    let listing = state.client.list_children(state.page_id(), page_size).await?;
    Ok(pretty_json(reflect_status(listing.status), &listing.body)?)
}

/// Append a single block, rejecting payloads over the budget
pub async fn append_block(
    state: web::Data<AppState>,
    request: web::Json<AppendRequest>,
) -> ActixResult<HttpResponse> {
    let node = request.into_inner().into_content().to_node();

    let length = json!({ "children": [&node] }).to_string().chars().count();
    let limit = state.config.batch.max_payload;
    if length > limit {
        warn!(length, limit, "Rejecting oversized append");
        return Ok(pretty_json(
            StatusCode::BAD_REQUEST,
            &json!({ "error": "Payload too large for /append", "length": length }),
        )?);
    }

    let response = state
        .client
        .append_children(state.page_id(), vec![node])
        .await?;
    info!(status = response.status, "Appended single block");
    Ok(pretty_json(reflect_status(response.status), &response.body)?)
}

/// Archive a single block by id
pub async fn delete_block(
    state: web::Data<AppState>,
    query: web::Query<DeleteQuery>,
) -> ActixResult<HttpResponse> {
    let raw_id = match query.into_inner().id {
        Some(id) if !id.is_empty() => id,
        _ => return Ok(HttpResponse::BadRequest().body("Missing block ID")),
    };

    let id = match BlockId::parse(&raw_id) {
        Ok(id) => id,
        Err(_) => {
            return Ok(pretty_json(
                StatusCode::BAD_REQUEST,
                &json!({ "error": "Invalid Notion block ID format.", "provided": raw_id }),
            )?);
        }
    };

    let disposition = archive_idempotent(state.client.as_ref(), &id).await?;
    let response = match disposition {
        DeleteDisposition::NotFound => {
            pretty_json(StatusCode::OK, &json!({ "note": NOT_FOUND_NOTE, "id": id }))?
        }
        DeleteDisposition::AlreadyArchived => {
            pretty_json(StatusCode::OK, &json!({ "note": ALREADY_ARCHIVED_NOTE, "id": id }))?
        }
        DeleteDisposition::Archived { status, body }
        | DeleteDisposition::Rejected { status, body } => {
            info!(block_id = %id, status, "Archive finished");
            HttpResponse::build(reflect_status(status))
                .content_type(ContentType::json())
                .body(body)
        }
    };
    Ok(response)
}
