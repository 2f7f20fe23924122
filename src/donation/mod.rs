//! # Donation Widget
//!
//! Client-side donation flow: the donor edits an amount, the hosted checkout
//! creates and captures an order, and the donor is told the outcome.
//!
//! The amount lives in the widget itself. Creating an order snapshots the
//! formatted amount into a [`PendingOrder`], so the confirmation always
//! reports the value that was actually ordered.

pub mod amount;
pub mod checkout;

use serde::Serialize;

pub use amount::{format_amount, parse_amount};
pub use checkout::{CaptureDetails, CheckoutClient, CheckoutError, OrderRequest};

/// Amount shown before the donor edits the field
pub const DEFAULT_DONATION_AMOUNT: f64 = 10.0;

/// Message shown after any checkout failure
pub const CHECKOUT_FAILED_MESSAGE: &str = "Something went wrong during checkout. Please try again.";

/// Receives user-facing messages (an alert, a toast, a log line)
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Presentation options handed to the hosted button renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonStyle {
    pub color: String,
    pub shape: String,
    pub label: String,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            color: "gold".to_string(),
            shape: "pill".to_string(),
            label: "donate".to_string(),
        }
    }
}

/// An order created at the provider, awaiting donor approval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOrder {
    pub order_id: String,
    /// Formatted amount sent with the order
    pub amount: String,
}

/// Donation widget bound to a checkout provider and a notifier
pub struct DonationWidget<C, N> {
    checkout: C,
    notifier: N,
    amount: f64,
    style: ButtonStyle,
}

impl<C: CheckoutClient, N: Notifier> DonationWidget<C, N> {
    pub fn new(checkout: C, notifier: N) -> Self {
        Self {
            checkout,
            notifier,
            amount: DEFAULT_DONATION_AMOUNT,
            style: ButtonStyle::default(),
        }
    }

    /// Current tracked amount
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Current amount as it would be sent with an order
    pub fn formatted_amount(&self) -> String {
        format_amount(self.amount)
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Handles an edit of the amount field. Unparseable input resets to zero.
    pub fn on_amount_input(&mut self, raw: &str) {
        self.amount = parse_amount(raw);
        tracing::debug!(amount = self.amount, "Donation amount updated");
    }

    /// Creates an order for the current amount.
    ///
    /// No bounds are enforced here; zero or negative amounts are left for the
    /// provider to accept or reject.
    pub async fn create_order(&self) -> Result<PendingOrder, CheckoutError> {
        let amount = self.formatted_amount();
        let request = OrderRequest::single(amount.clone());

        match self.checkout.create_order(&request).await {
            Ok(order_id) => {
                tracing::info!(%order_id, %amount, "Donation order created");
                Ok(PendingOrder { order_id, amount })
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Captures an approved order and thanks the donor.
    pub async fn approve(&self, order: &PendingOrder) -> Result<CaptureDetails, CheckoutError> {
        match self.checkout.capture_order(&order.order_id).await {
            Ok(details) => {
                tracing::info!(
                    order_id = %order.order_id,
                    amount = %order.amount,
                    "Donation captured"
                );
                self.notifier.notify(&format!(
                    "Thank you, {}! Your donation of ${} has been received.",
                    details.payer.name.given_name, order.amount
                ));
                Ok(details)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Reports a checkout failure raised anywhere in the flow.
    pub fn fail(&self, err: CheckoutError) -> CheckoutError {
        tracing::error!(error = %err, "Checkout error");
        self.notifier.notify(CHECKOUT_FAILED_MESSAGE);
        err
    }
}
