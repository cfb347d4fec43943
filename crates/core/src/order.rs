use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::format_rupees;

/// Product record handed over by checkout. Only the name is displayed; the
/// remaining fields are carried along untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Order summary passed from checkout to the confirmation page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub product: Product,
    pub quantity: u32,
    pub total: f64,
    pub transaction_id: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfirmationError {
    #[error("No order information was provided")]
    MissingOrder,

    #[error("Invalid order: {0}")]
    InvalidOrder(String),
}

/// What the confirmation page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub product_name: String,
    pub quantity: u32,
    pub total: String,
    pub transaction_id: String,
}

impl Confirmation {
    pub fn from_state(state: Option<OrderSummary>) -> Result<Self, ConfirmationError> {
        let order = state.ok_or(ConfirmationError::MissingOrder)?;
        validate(&order)?;

        Ok(Self {
            product_name: order.product.name,
            quantity: order.quantity,
            total: format_rupees(order.total),
            transaction_id: order.transaction_id,
        })
    }
}

fn validate(order: &OrderSummary) -> Result<(), ConfirmationError> {
    let mut errs = Vec::new();

    if order.quantity == 0 {
        errs.push("quantity must be positive");
    }
    if !order.total.is_finite() || order.total < 0.0 {
        errs.push("total must be a non-negative amount");
    }

    if errs.is_empty() {
        Ok(())
    } else {
        Err(ConfirmationError::InvalidOrder(errs.join(", ")))
    }
}
