//! Simulated checkout.
//!
//! Checkout reads the cart, waits out a fixed artificial payment delay
//! (the payment always succeeds), clears the cart, and returns the
//! submitted lines and total. The form fields are carried verbatim and
//! never validated here; if a form component wants validation, that is
//! its business.

use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::model::CartLineItem;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument};

/// Contact, shipping, and payment fields as the checkout form collects
/// them. All free-form.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

/// What the customer ordered, as it stood at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub items: Vec<CartLineItem>,
    pub total: f64,
}

/// Failures during checkout submission.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// Submitting with nothing in the cart; the cart view is the place
    /// to send the customer back to.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// The cart could not be reached.
    #[error("cart unavailable: {0}")]
    Cart(#[from] CartError),
}

/// The checkout collaborator: holds a cart client and the artificial
/// processing delay.
pub struct Checkout {
    cart: CartClient,
    processing_delay: Duration,
}

impl Checkout {
    const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(2);

    pub fn new(cart: CartClient) -> Self {
        Self::with_delay(cart, Self::DEFAULT_PROCESSING_DELAY)
    }

    /// Override the processing delay; tests use `Duration::ZERO`.
    pub fn with_delay(cart: CartClient, processing_delay: Duration) -> Self {
        Self {
            cart,
            processing_delay,
        }
    }

    /// Submit the order: capture the cart, simulate the payment, clear
    /// the cart, confirm.
    #[instrument(skip(self, form))]
    pub async fn submit(&self, form: CheckoutForm) -> Result<OrderConfirmation, CheckoutError> {
        let items = self.cart.items().await?;
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let total = self.cart.total().await?;

        info!(customer = %form.name, lines = items.len(), total, "Processing payment");
        tokio::time::sleep(self.processing_delay).await;

        self.cart.clear().await?;
        info!(total, "Order confirmed");

        Ok(OrderConfirmation { items, total })
    }
}
