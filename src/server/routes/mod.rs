//! HTTP route modules
//!
//! Single-block endpoints and the batch endpoint, mounted at the root.

pub mod blocks;
pub mod execute;

use actix_web::web;

/// Configure relay routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/read", web::get().to(blocks::read_blocks))
        .route("/append", web::post().to(blocks::append_block))
        .route("/delete", web::delete().to(blocks::delete_block))
        .route("/execute", web::post().to(execute::execute_actions));
}
