//! In-memory backend that behaves like the REST API and records every call.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::auth::{LoginRequest, LoginResponse, SignupRequest};
use crate::backend::Backend;
use crate::domain::order::wire::{NewOrderRequest, OrderResponse};
use crate::error::HttpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Signup,
    Login,
    ValidateToken,
    ListOrders,
    CreateOrder,
    ExecuteOrder,
}

/// One recorded call with the arguments it carried.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Signup(SignupRequest),
    Login(LoginRequest),
    ValidateToken(String),
    ListOrders(String),
    CreateOrder { token: String, order: NewOrderRequest },
    ExecuteOrder { token: String, order_id: String },
}

impl Call {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Call::Signup(_) => Endpoint::Signup,
            Call::Login(_) => Endpoint::Login,
            Call::ValidateToken(_) => Endpoint::ValidateToken,
            Call::ListOrders(_) => Endpoint::ListOrders,
            Call::CreateOrder { .. } => Endpoint::CreateOrder,
            Call::ExecuteOrder { .. } => Endpoint::ExecuteOrder,
        }
    }
}

/// How a scripted failure surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Status(u16),
    /// No answer at all.
    Timeout,
}

impl Failure {
    fn to_error(self) -> HttpError {
        match self {
            Failure::Status(status) => HttpError::from_status(status, format!("scripted {status}")),
            Failure::Timeout => HttpError::Timeout,
        }
    }
}

#[derive(Debug, Default)]
struct State {
    calls: Vec<Call>,
    /// email → password
    accounts: HashMap<String, String>,
    valid_tokens: HashSet<String>,
    /// Token handed out by the next successful logins.
    login_token: Option<String>,
    orders: Vec<OrderResponse>,
    failures: HashMap<Endpoint, Failure>,
    next_id: u64,
}

/// Scripted stand-in for the REST API.
///
/// - Signup registers an account (duplicate email → 400).
/// - Login with a known email/password returns the configured token and
///   marks it valid; a wrong password answers 2xx without a token.
/// - Order endpoints require a valid token (otherwise 401). Executing an
///   order removes it from the collection.
#[derive(Debug, Default)]
pub struct FakeBackend {
    state: Mutex<State>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, email: &str, password: &str) -> Self {
        self.state
            .lock()
            .accounts
            .insert(email.to_string(), password.to_string());
        self
    }

    pub fn with_login_token(self, token: &str) -> Self {
        self.state.lock().login_token = Some(token.to_string());
        self
    }

    pub fn with_valid_token(self, token: &str) -> Self {
        self.state.lock().valid_tokens.insert(token.to_string());
        self
    }

    pub fn with_order(self, id: &str, order_type: &str, price: f64, quantity: f64) -> Self {
        self.state.lock().orders.push(OrderResponse {
            id: id.to_string(),
            order_type: order_type.to_string(),
            price,
            quantity,
        });
        self
    }

    /// Make every call to `endpoint` fail until [`recover`](Self::recover).
    pub fn fail(&self, endpoint: Endpoint, failure: Failure) {
        self.state.lock().failures.insert(endpoint, failure);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.state.lock().failures.remove(&endpoint);
    }

    pub fn revoke(&self, token: &str) {
        self.state.lock().valid_tokens.remove(token);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn calls_to(&self, endpoint: Endpoint) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|c| c.endpoint() == endpoint)
            .count()
    }

    pub fn orders(&self) -> Vec<OrderResponse> {
        self.state.lock().orders.clone()
    }

    fn record(&self, call: Call) -> Result<(), HttpError> {
        let mut state = self.state.lock();
        let endpoint = call.endpoint();
        state.calls.push(call);
        match state.failures.get(&endpoint) {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }

    fn authorize(&self, token: &str) -> Result<(), HttpError> {
        if self.state.lock().valid_tokens.contains(token) {
            Ok(())
        } else {
            Err(HttpError::Unauthorized)
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn signup(&self, request: &SignupRequest) -> Result<(), HttpError> {
        self.record(Call::Signup(request.clone()))?;
        let mut state = self.state.lock();
        if state.accounts.contains_key(&request.email) {
            return Err(HttpError::BadRequest("email already registered".into()));
        }
        state
            .accounts
            .insert(request.email.clone(), request.password.clone());
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, HttpError> {
        self.record(Call::Login(request.clone()))?;
        let mut state = self.state.lock();
        let known = state.accounts.get(&request.email) == Some(&request.password);
        if !known {
            return Ok(LoginResponse::default());
        }
        let token = match state.login_token.clone() {
            Some(token) => token,
            None => {
                state.next_id += 1;
                format!("token-{}", state.next_id)
            }
        };
        state.valid_tokens.insert(token.clone());
        Ok(LoginResponse {
            access_token: Some(token),
        })
    }

    async fn validate_token(&self, token: &str) -> Result<(), HttpError> {
        self.record(Call::ValidateToken(token.to_string()))?;
        self.authorize(token)
    }

    async fn list_orders(&self, token: &str) -> Result<Vec<OrderResponse>, HttpError> {
        self.record(Call::ListOrders(token.to_string()))?;
        self.authorize(token)?;
        Ok(self.state.lock().orders.clone())
    }

    async fn create_order(
        &self,
        token: &str,
        order: &NewOrderRequest,
    ) -> Result<serde_json::Value, HttpError> {
        self.record(Call::CreateOrder {
            token: token.to_string(),
            order: order.clone(),
        })?;
        self.authorize(token)?;
        let mut state = self.state.lock();
        state.next_id += 1;
        let created = OrderResponse {
            id: format!("order-{}", state.next_id),
            order_type: order.order_type.clone(),
            price: order.price,
            quantity: order.quantity,
        };
        state.orders.push(created.clone());
        serde_json::to_value(created).map_err(|e| HttpError::Decode(e.to_string()))
    }

    async fn execute_order(
        &self,
        token: &str,
        order_id: &str,
    ) -> Result<serde_json::Value, HttpError> {
        self.record(Call::ExecuteOrder {
            token: token.to_string(),
            order_id: order_id.to_string(),
        })?;
        self.authorize(token)?;
        let mut state = self.state.lock();
        let Some(pos) = state.orders.iter().position(|o| o.id == order_id) else {
            return Err(HttpError::NotFound(format!("order {order_id}")));
        };
        let executed = state.orders.remove(pos);
        Ok(serde_json::json!({ "executed": executed.id }))
    }
}
