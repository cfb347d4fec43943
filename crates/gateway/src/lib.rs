use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Upstream answer relayed back to the caller as-is, whether the gateway
/// accepted the request or rejected it.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayReply {
    pub status: StatusCode,
    pub body: Value,
}

impl GatewayReply {
    /// The payment identifier in the reply body, if the gateway returned one.
    pub fn pidx(&self) -> Option<&str> {
        self.body.get("pidx").and_then(Value::as_str)
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Payment gateway did not answer in time")]
    Timeout,

    #[error("Failed to reach payment gateway: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Payment gateway returned an unreadable body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl GatewayError {
    fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else {
            GatewayError::Transport(err)
        }
    }

    fn from_body(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else {
            GatewayError::Decode(err)
        }
    }
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Starts a payment. `payload` is forwarded without inspection.
    async fn initiate(&self, payload: &Value) -> Result<GatewayReply, GatewayError>;
    /// Looks up the state of the payment identified by `pidx`.
    async fn lookup(&self, pidx: &str) -> Result<GatewayReply, GatewayError>;
}

pub mod khalti;
pub mod mock;
