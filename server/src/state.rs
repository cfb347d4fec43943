use std::sync::Arc;

use gateway::PaymentGateway;

use crate::audit::{AuditEvent, AuditLog};

/// Shared, read-only after start-up.
pub struct AppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub audit: Option<AuditLog>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn PaymentGateway>, audit: Option<AuditLog>) -> Arc<Self> {
        Arc::new(Self { gateway, audit })
    }

    /// Appends to the audit trail if one is configured. Failures are logged only.
    pub async fn record(&self, event: &AuditEvent) {
        if let Some(log) = &self.audit {
            if let Err(e) = log.write(event).await {
                tracing::warn!(error = %e, event_type = %event.event_type, "Failed to write audit event");
            }
        }
    }
}
