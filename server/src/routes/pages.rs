use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storefront_core::{
    faq::{Accordion, FAQ_ENTRIES},
    order::{Confirmation, ConfirmationError, OrderSummary},
    terms::TERMS_SECTIONS,
};
use tracing::warn;

use crate::templates::{ConfirmationTemplate, FaqTemplate, NoOrderTemplate, TermsTemplate};

#[derive(Debug, Default, Deserialize)]
pub struct FaqQuery {
    pub open: Option<usize>,
}

pub async fn faq_handler(query: Result<Query<FaqQuery>, QueryRejection>) -> impl IntoResponse {
    // an unreadable index renders the collapsed page
    let query = query.map(|Query(q)| q).unwrap_or_default();
    FaqTemplate::new(Accordion::with_open(FAQ_ENTRIES.len(), query.open))
}

pub async fn terms_handler() -> impl IntoResponse {
    TermsTemplate {
        title: "Terms and Conditions",
        sections: TERMS_SECTIONS,
    }
}

/// Renders the confirmation for the order summary posted by checkout.
pub async fn confirmation_handler(body: Bytes) -> Response {
    let state = match parse_order(&body) {
        Ok(state) => state,
        Err(err) => return no_order(err),
    };

    match Confirmation::from_state(state) {
        Ok(order) => ConfirmationTemplate {
            title: "Order Confirmed",
            order,
        }
        .into_response(),
        Err(err) => no_order(err),
    }
}

pub async fn health_handler() -> &'static str {
    "ok"
}

fn parse_order(body: &[u8]) -> Result<Option<OrderSummary>, ConfirmationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(body).map(Some).map_err(|e| {
        warn!(error = %e, "Unreadable order summary");
        ConfirmationError::InvalidOrder("order details could not be read".to_string())
    })
}

fn no_order(err: ConfirmationError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        NoOrderTemplate {
            title: "Order Not Found",
            message: err.to_string(),
        },
    )
        .into_response()
}
