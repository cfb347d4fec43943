use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gateway::GatewayError;
use serde_json::json;
use thiserror::Error;

pub const INITIATE_FAILED: &str = "Failed to initiate payment";
pub const LOOKUP_FAILED: &str = "Failed to verify payment";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Payment gateway timed out")]
    GatewayTimeout,

    #[error("{0}")]
    PaymentFailed(&'static str),
}

impl AppError {
    /// Collapses a gateway failure into the route's fixed message. The cause
    /// only reaches the server log.
    pub fn from_gateway(err: GatewayError, message: &'static str) -> Self {
        tracing::error!(error = %err, "{message}");
        match err {
            GatewayError::Timeout => AppError::GatewayTimeout,
            _ => AppError::PaymentFailed(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload => StatusCode::BAD_REQUEST,
            AppError::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::PaymentFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
