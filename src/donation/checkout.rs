//! Checkout provider seam.
//!
//! The hosted payment provider owns the order lifecycle; this module only
//! describes the two calls the widget makes and the payloads involved.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Order creation payload: a single purchase unit carrying the amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub purchase_units: Vec<PurchaseUnit>,
}

impl OrderRequest {
    /// Builds a request for one purchase unit of `value` (already formatted)
    pub fn single(value: impl Into<String>) -> Self {
        Self {
            purchase_units: vec![PurchaseUnit {
                amount: Amount {
                    value: value.into(),
                },
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseUnit {
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Decimal string with two fraction digits, e.g. `"25.00"`
    pub value: String,
}

/// Details returned by a successful capture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureDetails {
    pub payer: Payer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    pub name: PayerName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerName {
    pub given_name: String,
}

/// Failures reported by the checkout provider
#[derive(Debug, Clone, Error)]
pub enum CheckoutError {
    #[error("payment was declined: {reason}")]
    Declined { reason: String },
    #[error("checkout provider unreachable: {details}")]
    Network { details: String },
}

/// Hosted checkout operations used by the donation widget
#[async_trait]
pub trait CheckoutClient: Send + Sync {
    /// Creates an order and returns the provider's order id.
    async fn create_order(&self, request: &OrderRequest) -> Result<String, CheckoutError>;

    /// Captures a previously approved order.
    async fn capture_order(&self, order_id: &str) -> Result<CaptureDetails, CheckoutError>;
}
