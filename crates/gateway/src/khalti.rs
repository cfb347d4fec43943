use super::{GatewayError, GatewayReply, PaymentGateway};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Khalti live secret key. Debug output never shows the value.
#[derive(Clone)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    fn header_value(&self) -> String {
        format!("Key {}", self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(***)")
    }
}

#[derive(Debug, Serialize)]
struct LookupRequest<'a> {
    pidx: &'a str,
}

/// Client for the Khalti ePayment API.
#[derive(Clone, Debug)]
pub struct KhaltiClient {
    pub base_url: String,
    secret: SecretKey,
    http_client: reqwest::Client,
}

impl KhaltiClient {
    /// Builds a client whose every request is bounded by `timeout`.
    pub fn new(
        base_url: String,
        secret: SecretKey,
        timeout: Duration,
    ) -> Result<Arc<Self>, GatewayError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .build()
            .map_err(GatewayError::Client)?;

        Ok(Arc::new(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            secret,
            http_client,
        }))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/epayment/{}/", self.base_url, path)
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<GatewayReply, GatewayError> {
        let resp = self
            .http_client
            .post(url)
            .header("Authorization", self.secret.header_value())
            .json(body)
            .send()
            .await
            .map_err(GatewayError::from_send)?;

        let status = resp.status();
        tracing::info!(%status, %url, "Khalti responded");

        let body: Value = resp.json().await.map_err(GatewayError::from_body)?;
        Ok(GatewayReply { status, body })
    }
}

#[async_trait]
impl PaymentGateway for KhaltiClient {
    async fn initiate(&self, payload: &Value) -> Result<GatewayReply, GatewayError> {
        let url = self.endpoint("initiate");
        self.post(&url, payload).await
    }

    async fn lookup(&self, pidx: &str) -> Result<GatewayReply, GatewayError> {
        let url = self.endpoint("lookup");
        self.post(&url, &LookupRequest { pidx }).await
    }
}
