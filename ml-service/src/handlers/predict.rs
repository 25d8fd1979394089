//! Placeholder model endpoints. Neither reads its request.

use crate::dtos::StubMessage;
use axum::Json;
use metrics::counter;

pub const PREDICT_STUB_MESSAGE: &str = "predict stub";
pub const AVATAR_STUB_MESSAGE: &str = "avatar stub";

#[tracing::instrument]
pub async fn predict() -> Json<StubMessage> {
    counter!("ml_stub_requests_total", "endpoint" => "predict").increment(1);
    tracing::debug!("Serving predict stub");
    Json(StubMessage::new(PREDICT_STUB_MESSAGE))
}

#[tracing::instrument]
pub async fn avatar() -> Json<StubMessage> {
    counter!("ml_stub_requests_total", "endpoint" => "avatar").increment(1);
    tracing::debug!("Serving avatar stub");
    Json(StubMessage::new(AVATAR_STUB_MESSAGE))
}
