//! Backend port: the six REST calls the views depend on.
//!
//! [`ApiHttp`](crate::http::ApiHttp) is the production implementation. Views
//! only see this trait, so tests drive them with a scripted backend.

use async_trait::async_trait;

use crate::auth::{LoginRequest, LoginResponse, SignupRequest};
use crate::domain::order::wire::{NewOrderRequest, OrderResponse};
use crate::error::HttpError;

#[async_trait]
pub trait Backend: Send + Sync {
    /// `POST /auth/signup`. Any 2xx counts as success; the body is ignored.
    async fn signup(&self, request: &SignupRequest) -> Result<(), HttpError>;

    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, HttpError>;

    /// `GET /auth/isValid`. `Ok` means the token is accepted.
    async fn validate_token(&self, token: &str) -> Result<(), HttpError>;

    /// `GET /order`.
    async fn list_orders(&self, token: &str) -> Result<Vec<OrderResponse>, HttpError>;

    /// `POST /order`. Returns the created order as sent by the backend.
    async fn create_order(
        &self,
        token: &str,
        order: &NewOrderRequest,
    ) -> Result<serde_json::Value, HttpError>;

    /// `POST /order/:id`.
    async fn execute_order(
        &self,
        token: &str,
        order_id: &str,
    ) -> Result<serde_json::Value, HttpError>;
}
