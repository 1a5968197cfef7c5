//! Batch endpoint

use crate::core::batch::BatchRequest;
use crate::server::state::AppState;
use crate::server::utils::pretty_json;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::info;

/// Run a batch of append and delete actions.
///
/// Always answers 200; per-action failures are listed under `errors`.
pub async fn execute_actions(
    state: web::Data<AppState>,
    request: web::Json<BatchRequest>,
) -> ActixResult<HttpResponse> {
    let actions = request.into_inner().parse_actions();
    info!(actions = actions.len(), "Executing batch");

    let report = state.executor.execute(&actions).await;
    Ok(pretty_json(StatusCode::OK, &report)?)
}
