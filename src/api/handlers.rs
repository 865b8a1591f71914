use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::order::{Order, OrderCommandHandler};

use super::errors::ApiError;

#[derive(Serialize)]
struct OrderProcessed {
    message: &'static str,
    order: Order,
}

/// POST /api/orders
pub async fn submit_order(
    handler: web::Data<OrderCommandHandler>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("submit_order", %request_id);
    let order = span.in_scope(|| handler.handle(&payload))?;

    Ok(HttpResponse::Ok().json(OrderProcessed {
        message: "Order processed successfully",
        order,
    }))
}

/// Reject unparseable bodies with the same 400 shape as validation failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::MalformedBody(err.to_string()).into())
}
