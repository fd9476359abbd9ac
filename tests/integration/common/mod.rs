//! Common test utilities and fixtures for integration tests
//!
//! Every `TestApp` owns a fresh SQLite file in its own temporary directory,
//! so tests run in parallel without sharing state or needing cleanup.

use anyhow::Result;
use axum::{
    body::Body,
    http::{Method, Request, Response, StatusCode},
    Router,
};
use chatlog_common::{db, DatabaseConfig};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

/// Passphrase that satisfies the 16 character minimum
pub const PASSPHRASE: &str = "123456789abcdefg";

/// Test application: router plus direct pool access for assertions
pub struct TestApp {
    pub pool: SqlitePool,
    router: Router,
    _dir: TempDir,
}

impl TestApp {
    /// Create a new test application over a fresh, migrated database
    pub async fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let url = format!("sqlite://{}", dir.path().join("chatlog.db").display());
        let pool = db::connect(&DatabaseConfig::with_url(url)).await?;

        Ok(Self {
            router: chatlog_app::create_app(pool.clone()),
            pool,
            _dir: dir,
        })
    }

    /// Send one request through the router
    pub async fn request(&self, req: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("router is infallible")
    }

    /// Register a user, asserting success
    pub async fn register(&self, username: &str) {
        let resp = self
            .request(json_request(
                Method::POST,
                "/v1/users",
                json!({"username": username, "passphrase": PASSPHRASE}),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED, "register {}", username);
    }

    /// Send a message, returning the response status and body
    pub async fn send(&self, sender: &str, recipient: &str, content: &str) -> (StatusCode, Value) {
        let resp = self
            .request(json_request(
                Method::POST,
                "/v1/messages",
                json!({"sender": sender, "recipient": recipient, "content": content}),
            ))
            .await;
        let status = resp.status();
        (status, parse_body(resp).await)
    }

    /// Send a message, asserting success, returning its sequence number
    pub async fn send_ok(&self, sender: &str, recipient: &str, content: &str) -> i64 {
        let (status, body) = self.send(sender, recipient, content).await;
        assert_eq!(status, StatusCode::CREATED, "send failed: {}", body);
        body["sequence"].as_i64().expect("sequence in response")
    }

    /// Fetch a conversation page; `None` leaves the query parameter out
    pub async fn fetch(
        &self,
        user_a: &str,
        user_b: &str,
        limit: Option<u32>,
        cursor: Option<i64>,
    ) -> (StatusCode, Value) {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(format!("limit={}", limit));
        }
        if let Some(cursor) = cursor {
            query.push(format!("cursor={}", cursor));
        }
        let mut uri = format!("/v1/conversations/{}/{}/messages", user_a, user_b);
        if !query.is_empty() {
            uri = format!("{}?{}", uri, query.join("&"));
        }

        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let resp = self.request(req).await;
        let status = resp.status();
        (status, parse_body(resp).await)
    }

    /// Number of rows in the message log
    pub async fn message_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

/// Build a JSON request
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Parse response body as JSON, `Value::Null` for empty bodies
pub async fn parse_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&body).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into()))
}

/// Message contents of a fetch response, in page order
pub fn contents(body: &Value) -> Vec<String> {
    body["messages"]
        .as_array()
        .expect("messages array")
        .iter()
        .map(|m| m["content"].as_str().unwrap().to_string())
        .collect()
}

/// Sequence numbers of a fetch response, in page order
pub fn sequences(body: &Value) -> Vec<i64> {
    body["messages"]
        .as_array()
        .expect("messages array")
        .iter()
        .map(|m| m["sequence"].as_i64().unwrap())
        .collect()
}

/// Common test assertions
pub mod assertions {
    /// Assert that a timestamp is recent (within last minute)
    pub fn assert_timestamp_recent(timestamp: &chrono::DateTime<chrono::Utc>) {
        let now = chrono::Utc::now();
        let diff = now.signed_duration_since(*timestamp);
        assert!(
            diff.num_seconds() < 60,
            "Timestamp should be recent, but was {} seconds ago",
            diff.num_seconds()
        );
    }

    /// Assert that sequence numbers are strictly decreasing
    pub fn assert_strictly_decreasing(sequences: &[i64]) {
        assert!(
            sequences.windows(2).all(|w| w[0] > w[1]),
            "Sequences not strictly decreasing: {:?}",
            sequences
        );
    }
}
