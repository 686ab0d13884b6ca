//! Conversions: REST wire types → Order domain types.

use super::wire;
use super::{Order, OrderId, OrderType};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderConversionError {
    #[error("order {id}: {reason}")]
    InvalidType { id: String, reason: String },

    #[error("order {id}: {field} is not a finite number")]
    NotFinite { id: String, field: &'static str },
}

impl TryFrom<wire::OrderResponse> for Order {
    type Error = OrderConversionError;

    fn try_from(resp: wire::OrderResponse) -> Result<Self, Self::Error> {
        let order_type = resp
            .order_type
            .parse::<OrderType>()
            .map_err(|reason| OrderConversionError::InvalidType {
                id: resp.id.clone(),
                reason,
            })?;
        let price = to_decimal(&resp.id, "price", resp.price)?;
        let quantity = to_decimal(&resp.id, "quantity", resp.quantity)?;

        Ok(Order {
            id: OrderId::from(resp.id),
            order_type,
            price,
            quantity,
        })
    }
}

fn to_decimal(id: &str, field: &'static str, value: f64) -> Result<Decimal, OrderConversionError> {
    Decimal::try_from(value)
        .map(|d| d.normalize())
        .map_err(|_| OrderConversionError::NotFinite {
            id: id.to_string(),
            field,
        })
}
