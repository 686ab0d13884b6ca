//! Order domain: orders, the order book collection, the order form.

pub mod client;
mod convert;
pub mod form;
pub mod state;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

pub use convert::OrderConversionError;
pub use form::{OrderField, OrderForm};
pub use state::OrderBook;

// ─── OrderId ─────────────────────────────────────────────────────────────────

/// Newtype for backend order identifiers (e.g. `"65f1c0d2a9e4b3"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for OrderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(OrderId(s))
    }
}

// ─── OrderType ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Buy,
    Sell,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Buy => "BUY",
            OrderType::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(OrderType::Buy),
            "SELL" => Ok(OrderType::Sell),
            other => Err(format!("unknown order type: {other}")),
        }
    }
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// A validated, domain-level order awaiting execution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub order_type: OrderType,
    pub price: Decimal,
    pub quantity: Decimal,
}

/// A validated order ready to be posted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewOrder {
    pub order_type: OrderType,
    pub quantity: f64,
    pub price: f64,
}

impl From<NewOrder> for wire::NewOrderRequest {
    fn from(order: NewOrder) -> Self {
        wire::NewOrderRequest {
            order_type: order.order_type.as_str().to_string(),
            quantity: order.quantity,
            price: order.price,
        }
    }
}
