use axum::Json;
use serde::Serialize;

/// Banner returned by `GET /`. Field order is the key order on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub developer: &'static str,
}

pub const STATUS: StatusResponse = StatusResponse {
    message: "VipChatBot API is running! 🚀",
    version: "1.0.0",
    developer: "Vip (Phatra Wongsapsakul)",
};

pub async fn handler() -> Json<StatusResponse> {
    tracing::debug!("Serving status banner");
    Json(STATUS)
}
