//! Checkout: turning a cart into an order draft for the backend.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::cart::Cart;
use super::value_objects::Money;

/// Order subtotals at or above this amount (in the store currency) ship free.
pub const FREE_SHIPPING_THRESHOLD: i64 = 2000;

/// Flat fee charged below the free-shipping threshold.
pub const FLAT_SHIPPING_FEE: i64 = 100;

/// Shipping cost as a pure function of the cart subtotal.
pub fn shipping_cost(subtotal: &Money) -> Money {
    if subtotal.amount() >= Decimal::from(FREE_SHIPPING_THRESHOLD) {
        Money::zero(subtotal.currency())
    } else {
        Money::new(Decimal::from(FLAT_SHIPPING_FEE), subtotal.currency())
    }
}

/// Contact and delivery fields collected on the checkout form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    "India".to_string()
}

/// One line of a submitted order, flattened from a cart line.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub variant_id: String,
    pub product_name: String,
    pub size: String,
    pub color: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

/// The finalized order the host submits to the external order API.
///
/// Building a draft does not touch the cart; the host clears the cart store
/// only after the backend accepts the order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Client-generated reference, for correlating retries and logs.
    pub reference: Uuid,
    pub details: ShippingDetails,
    pub lines: Vec<OrderLine>,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
    pub created_at: DateTime<Utc>,
}

impl OrderDraft {
    pub fn from_cart(cart: &Cart, details: ShippingDetails) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let lines = cart
            .lines()
            .iter()
            .map(|l| OrderLine {
                product_id: l.product.id.clone(),
                variant_id: l.variant.id.clone(),
                product_name: l.product.name.clone(),
                size: l.variant.size.clone(),
                color: l.variant.color.clone(),
                quantity: l.quantity,
                unit_price: l.unit_price(),
                line_total: l.line_total(),
            })
            .collect();
        let subtotal = cart.total();
        let shipping = shipping_cost(&subtotal);
        let total = subtotal.add(&shipping).unwrap_or_else(|_| subtotal.clone());
        Ok(Self {
            reference: Uuid::new_v4(),
            details,
            lines,
            subtotal,
            shipping,
            total,
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Error)]
pub enum CheckoutError {
    #[error("cannot place an order from an empty cart")]
    EmptyCart,
}

/// Order lifecycle as tracked by the backend's status field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}
