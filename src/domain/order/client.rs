//! Orders sub-client: list, place, execute.
//!
//! Every call needs a stored token; without one the call fails with
//! [`HttpError::Unauthorized`] before reaching the backend.

use super::wire::{NewOrderRequest, OrderResponse};
use super::{NewOrder, OrderId};
use crate::client::AppContext;
use crate::error::{HttpError, SdkError};

pub struct Orders<'a> {
    pub(crate) ctx: &'a AppContext,
}

impl<'a> Orders<'a> {
    async fn token(&self) -> Result<String, SdkError> {
        self.ctx
            .session
            .get()
            .await
            .ok_or(SdkError::Http(HttpError::Unauthorized))
    }

    pub async fn list(&self) -> Result<Vec<OrderResponse>, SdkError> {
        let token = self.token().await?;
        let orders = self.ctx.backend.list_orders(&token).await?;
        tracing::debug!(count = orders.len(), "Fetched orders");
        Ok(orders)
    }

    pub async fn place(&self, order: NewOrder) -> Result<serde_json::Value, SdkError> {
        let token = self.token().await?;
        let request = NewOrderRequest::from(order);
        let created = self.ctx.backend.create_order(&token, &request).await?;
        tracing::info!(
            order_type = %order.order_type,
            quantity = order.quantity,
            price = order.price,
            "Order placed"
        );
        Ok(created)
    }

    pub async fn execute(&self, id: &OrderId) -> Result<serde_json::Value, SdkError> {
        let token = self.token().await?;
        let resp = self.ctx.backend.execute_order(&token, id.as_str()).await?;
        tracing::info!(order_id = %id, "Order executed");
        Ok(resp)
    }
}
