use super::{GatewayError, GatewayReply, PaymentGateway};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;

/// In-process gateway for local development. Every payment succeeds.
#[derive(Clone, Default)]
pub struct MockGateway;

impl MockGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn initiate(&self, payload: &Value) -> Result<GatewayReply, GatewayError> {
        let pidx = uuid::Uuid::new_v4().simple().to_string();
        let return_url = payload
            .get("return_url")
            .and_then(Value::as_str)
            .unwrap_or("/");

        Ok(GatewayReply {
            status: StatusCode::OK,
            body: json!({
                "pidx": pidx,
                "payment_url": format!("{return_url}?pidx={pidx}&status=Completed"),
                "expires_in": 1800,
            }),
        })
    }

    async fn lookup(&self, pidx: &str) -> Result<GatewayReply, GatewayError> {
        Ok(GatewayReply {
            status: StatusCode::OK,
            body: json!({
                "pidx": pidx,
                "status": "Completed",
                "transaction_id": format!("mock-{pidx}"),
                "refunded": false,
            }),
        })
    }
}
