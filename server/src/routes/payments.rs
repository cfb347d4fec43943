use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use gateway::GatewayReply;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    audit::AuditEvent,
    error::{AppError, INITIATE_FAILED, LOOKUP_FAILED},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    pub pidx: String,
}

fn relay(reply: GatewayReply) -> Response {
    (reply.status, Json(reply.body)).into_response()
}

fn reject<T>(rejection: JsonRejection, route: &str) -> Result<T, AppError> {
    warn!(route, error = %rejection.body_text(), "Rejected payment request");
    Err(AppError::MalformedPayload)
}

pub async fn initiate_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return reject(rejection, "initiate"),
    };
    let request_id = Uuid::new_v4().to_string();

    let outcome = state.gateway.initiate(&payload).await;
    state
        .record(&AuditEvent::new("payment_initiate", &request_id).with_outcome(&outcome))
        .await;

    let reply = outcome.map_err(|e| AppError::from_gateway(e, INITIATE_FAILED))?;
    info!(%request_id, status = %reply.status, "Khalti initiate relayed");
    Ok(relay(reply))
}

pub async fn lookup_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LookupRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let LookupRequest { pidx } = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return reject(rejection, "lookup"),
    };
    let request_id = Uuid::new_v4().to_string();

    let outcome = state.gateway.lookup(&pidx).await;
    state
        .record(
            &AuditEvent::new("payment_lookup", &request_id)
                .with_pidx(Some(&pidx))
                .with_outcome(&outcome),
        )
        .await;

    let reply = outcome.map_err(|e| AppError::from_gateway(e, LOOKUP_FAILED))?;
    info!(%request_id, %pidx, status = %reply.status, "Khalti lookup relayed");
    Ok(relay(reply))
}
