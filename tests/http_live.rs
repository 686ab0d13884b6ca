//! Integration tests for the HTTP backend against a running server.
//!
//! All tests are `#[ignore]` because they need the backend listening at
//! `TRADEBOARD_SERVER_URL` (default `http://localhost:3000`).
//!
//! Run with:
//! ```bash
//! cargo test --test http_live -- --ignored
//! ```

use tradeboard::backend::Backend;
use tradeboard::error::HttpError;
use tradeboard::http::ApiHttp;
use tradeboard::network::DEFAULT_SERVER_URL;

fn client() -> ApiHttp {
    let url = std::env::var("TRADEBOARD_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.into());
    ApiHttp::new(&url, &url).expect("client should build")
}

#[tokio::test]
#[ignore]
async fn garbage_token_is_refused() {
    let err = client().validate_token("not-a-token").await.unwrap_err();
    assert!(err.status().is_some(), "expected a status error, got {err}");
}

#[tokio::test]
#[ignore]
async fn orders_require_a_token() {
    let err = client().list_orders("not-a-token").await.unwrap_err();
    assert!(
        matches!(err, HttpError::Unauthorized | HttpError::BadRequest(_)),
        "unexpected {err}"
    );
}
