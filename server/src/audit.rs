use anyhow::Result;
use chrono::Utc;
use gateway::{GatewayError, GatewayReply};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub timestamp: String,
    pub event_type: String,
    pub request_id: String,
    pub pidx: Option<String>,
    pub upstream_status: Option<u16>,
    pub error: Option<String>,
}

impl AuditEvent {
    pub fn new(event_type: &str, request_id: &str) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            event_type: event_type.to_string(),
            request_id: request_id.to_string(),
            pidx: None,
            upstream_status: None,
            error: None,
        }
    }

    pub fn with_pidx(mut self, pidx: Option<&str>) -> Self {
        self.pidx = pidx.map(str::to_string);
        self
    }

    /// Fills in the status or the error, and the pidx from the reply when
    /// none was set before.
    pub fn with_outcome(mut self, outcome: &Result<GatewayReply, GatewayError>) -> Self {
        match outcome {
            Ok(reply) => {
                self.upstream_status = Some(reply.status.as_u16());
                if self.pidx.is_none() {
                    self.pidx = reply.pidx().map(str::to_string);
                }
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self
    }
}

/// Append-only JSON lines file.
pub struct AuditLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one line. Concurrent writers are serialized so lines never interleave.
    pub async fn write(&self, event: &AuditEvent) -> Result<()> {
        let mut line = serde_json::to_string(event)?;
        line.push('\n');

        let _guard = self.lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(event_type = %event.event_type, request_id = %event.request_id, "Audit event written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn outcome_fills_status_and_pidx_from_reply() {
        let reply = GatewayReply {
            status: StatusCode::OK,
            body: json!({ "pidx": "abc", "payment_url": "https://pay.example/abc" }),
        };
        let event = AuditEvent::new("payment_initiate", "req-1").with_outcome(&Ok(reply));
        assert_eq!(event.upstream_status, Some(200));
        assert_eq!(event.pidx.as_deref(), Some("abc"));
        assert!(event.error.is_none());
    }

    #[test]
    fn request_pidx_wins_over_reply_pidx() {
        let reply = GatewayReply {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "pidx": "other" }),
        };
        let event = AuditEvent::new("payment_lookup", "req-2")
            .with_pidx(Some("xyz"))
            .with_outcome(&Ok(reply));
        assert_eq!(event.pidx.as_deref(), Some("xyz"));
        assert_eq!(event.upstream_status, Some(400));
    }

    #[test]
    fn timeout_is_recorded_as_error() {
        let event =
            AuditEvent::new("payment_lookup", "req-3").with_outcome(&Err(GatewayError::Timeout));
        assert_eq!(event.upstream_status, None);
        assert_eq!(
            event.error.as_deref(),
            Some("Payment gateway did not answer in time")
        );
    }

    #[tokio::test]
    async fn events_are_appended_one_per_line() {
        let dir = TempDir::new().unwrap();
        let log = AuditLog::new(dir.path().join("payments.jsonl"));

        log.write(&AuditEvent::new("payment_initiate", "req-a").with_pidx(Some("abc")))
            .await
            .unwrap();
        log.write(&AuditEvent::new("payment_lookup", "req-b").with_outcome(&Err(GatewayError::Timeout)))
            .await
            .unwrap();

        let text = std::fs::read_to_string(log.path()).unwrap();
        let events: Vec<AuditEvent> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].pidx.as_deref(), Some("abc"));
        assert_eq!(events[1].request_id, "req-b");
        assert!(events[1].error.is_some());
    }

    #[tokio::test]
    async fn unwritable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let log = AuditLog::new(dir.path().join("missing").join("payments.jsonl"));
        assert!(log.write(&AuditEvent::new("payment_lookup", "req-c")).await.is_err());
    }
}
