//! Low-level HTTP client: `ApiHttp`.
//!
//! One method per API endpoint, returning wire types. Implements
//! [`Backend`] so the views can run against it directly.

use crate::auth::{LoginRequest, LoginResponse, SignupRequest};
use crate::backend::Backend;
use crate::domain::order::wire::{NewOrderRequest, OrderResponse};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Low-level HTTP client for the tradeboard REST API.
#[derive(Clone)]
pub struct ApiHttp {
    base_url: String,
    /// Signup has its own location; see [`crate::network::DEFAULT_SIGNUP_URL`].
    signup_url: String,
    client: Client,
    /// Policy for the order list. Token checks and writes never retry.
    read_retry: RetryPolicy,
}

impl ApiHttp {
    pub fn new(base_url: &str, signup_url: &str) -> Result<Self, HttpError> {
        Self::with_timeout(
            base_url,
            signup_url,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn with_timeout(
        base_url: &str,
        signup_url: &str,
        timeout: Duration,
    ) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            signup_url: signup_url.trim_end_matches('/').to_string(),
            client,
            read_retry: RetryPolicy::None,
        })
    }

    /// Retry the order list. `max_retries == 0` keeps single attempts.
    pub fn with_read_retries(mut self, max_retries: u32) -> Self {
        self.read_retry = if max_retries == 0 {
            RetryPolicy::None
        } else {
            RetryPolicy::Custom(RetryConfig::idempotent().with_max_retries(max_retries))
        };
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn signup_url(&self) -> &str {
        &self.signup_url
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    pub async fn post_signup(&self, request: &SignupRequest) -> Result<(), HttpError> {
        let url = format!("{}/auth/signup", self.signup_url);
        self.request_with_retry(
            reqwest::Method::POST,
            &url,
            None,
            Some(request),
            RetryPolicy::None,
        )
        .await
        .map(|_| ())
    }

    pub async fn post_login(&self, request: &LoginRequest) -> Result<LoginResponse, HttpError> {
        let url = format!("{}/auth/login", self.base_url);
        self.post(&url, None, request, RetryPolicy::None).await
    }

    pub async fn get_is_valid(&self, token: &str) -> Result<(), HttpError> {
        let url = format!("{}/auth/isValid", self.base_url);
        self.request_with_retry(
            reqwest::Method::GET,
            &url,
            Some(token),
            None::<&()>,
            RetryPolicy::None,
        )
        .await
        .map(|_| ())
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn get_orders(&self, token: &str) -> Result<Vec<OrderResponse>, HttpError> {
        let url = format!("{}/order", self.base_url);
        let rows: Vec<serde_json::Value> =
            self.get(&url, Some(token), self.read_retry.clone()).await?;
        Ok(OrderResponse::from_rows(rows))
    }

    pub async fn post_order(
        &self,
        token: &str,
        order: &NewOrderRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let url = format!("{}/order", self.base_url);
        self.post(&url, Some(token), order, RetryPolicy::None).await
    }

    pub async fn post_execute_order(
        &self,
        token: &str,
        order_id: &str,
    ) -> Result<serde_json::Value, HttpError> {
        let url = format!("{}/order/{}", self.base_url, urlencoding::encode(order_id));
        self.post(&url, Some(token), &serde_json::json!({}), RetryPolicy::None)
            .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        token: Option<&str>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let body = self
            .request_with_retry(reqwest::Method::GET, url, token, None::<&()>, retry)
            .await?;
        decode(&body)
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        token: Option<&str>,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let body = self
            .request_with_retry(reqwest::Method::POST, url, token, Some(body), retry)
            .await?;
        decode(&body)
    }

    async fn request_with_retry<B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        token: Option<&str>,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<String, HttpError> {
        let config = match retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, token, body).await;
            }
            RetryPolicy::Custom(c) => c,
        };

        let mut attempt = 0;
        loop {
            let e = match self.do_request(&method, url, token, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };

            let should_retry = match &e {
                HttpError::ServerError { status, .. } => config.retryable_statuses.contains(status),
                HttpError::RateLimited { retry_after_ms } => {
                    if let Some(ms) = retry_after_ms {
                        futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                    }
                    true
                }
                HttpError::Timeout => true,
                HttpError::Reqwest(re) => re.is_connect() || re.is_timeout() || re.is_request(),
                _ => false,
            };

            if !should_retry {
                return Err(e);
            }
            if attempt >= config.max_retries {
                return Err(HttpError::MaxRetriesExceeded {
                    attempts: attempt + 1,
                    last_error: e.to_string(),
                });
            }

            let delay = config.delay_for_attempt(attempt);
            tracing::debug!(
                attempt = attempt + 1,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                error = %e,
                "Retrying request to {}",
                url
            );
            futures_timer::Delay::new(delay).await;
            attempt += 1;
        }
    }

    async fn do_request<B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<String, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::debug!(%method, url, authenticated = token.is_some(), "Sending request");

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.text().await?);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        Err(HttpError::from_status(status_code, body_text))
    }
}

/// Empty success bodies decode as JSON `null`.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, HttpError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| HttpError::Decode(e.to_string()))
}

#[async_trait]
impl Backend for ApiHttp {
    async fn signup(&self, request: &SignupRequest) -> Result<(), HttpError> {
        self.post_signup(request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, HttpError> {
        self.post_login(request).await
    }

    async fn validate_token(&self, token: &str) -> Result<(), HttpError> {
        self.get_is_valid(token).await
    }

    async fn list_orders(&self, token: &str) -> Result<Vec<OrderResponse>, HttpError> {
        self.get_orders(token).await
    }

    async fn create_order(
        &self,
        token: &str,
        order: &NewOrderRequest,
    ) -> Result<serde_json::Value, HttpError> {
        self.post_order(token, order).await
    }

    async fn execute_order(
        &self,
        token: &str,
        order_id: &str,
    ) -> Result<serde_json::Value, HttpError> {
        self.post_execute_order(token, order_id).await
    }
}
