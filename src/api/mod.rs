// ============================================================================
// HTTP API - order submission endpoint
// ============================================================================

mod errors;
mod handlers;

use actix_web::web;

/// Mount the order routes. The caller provides `web::Data<OrderCommandHandler>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::json_config())
        .route("/api/orders", web::post().to(handlers::submit_order));
}
