//! User registration and authentication integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{json_request, parse_body, TestApp, PASSPHRASE};

mod test_create_user {
    use super::*;

    #[tokio::test]
    async fn test_create_user_returns_username_only() {
        let app = TestApp::new().await.unwrap();

        let resp = app
            .request(json_request(
                Method::POST,
                "/v1/users",
                json!({"username": "alice", "passphrase": PASSPHRASE}),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = parse_body(resp).await;
        assert_eq!(body["username"], "alice");
        assert!(body.get("credential_hash").is_none());
        assert!(body.get("passphrase").is_none());

        let created: chrono::DateTime<chrono::Utc> =
            serde_json::from_value(body["created_at"].clone()).unwrap();
        crate::common::assertions::assert_timestamp_recent(&created);
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let app = TestApp::new().await.unwrap();
        app.register("alice").await;

        let resp = app
            .request(json_request(
                Method::POST,
                "/v1/users",
                json!({"username": "alice", "passphrase": PASSPHRASE}),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(parse_body(resp).await["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_short_passphrase_rejected() {
        let app = TestApp::new().await.unwrap();

        let resp = app
            .request(json_request(
                Method::POST,
                "/v1/users",
                json!({"username": "alice", "passphrase": "too-short"}),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_username_with_whitespace_rejected() {
        let app = TestApp::new().await.unwrap();

        let resp = app
            .request(json_request(
                Method::POST,
                "/v1/users",
                json!({"username": "al ice", "passphrase": PASSPHRASE}),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_body(resp).await["error"]["code"], "VALIDATION_ERROR");
    }
}

mod test_authenticate {
    use super::*;

    #[tokio::test]
    async fn test_correct_passphrase_authenticates() {
        let app = TestApp::new().await.unwrap();
        app.register("alice").await;

        let resp = app
            .request(json_request(
                Method::POST,
                "/v1/users/authenticate",
                json!({"username": "alice", "passphrase": PASSPHRASE}),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_wrong_passphrase_and_unknown_user_look_alike() {
        let app = TestApp::new().await.unwrap();
        app.register("alice").await;

        let wrong = app
            .request(json_request(
                Method::POST,
                "/v1/users/authenticate",
                json!({"username": "alice", "passphrase": "0000000000000000"}),
            ))
            .await;
        let unknown = app
            .request(json_request(
                Method::POST,
                "/v1/users/authenticate",
                json!({"username": "mallory", "passphrase": PASSPHRASE}),
            ))
            .await;

        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(parse_body(wrong).await, parse_body(unknown).await);
    }
}
