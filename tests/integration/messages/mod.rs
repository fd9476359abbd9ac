//! Message send integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{json_request, parse_body, TestApp};

mod test_send_message {
    use super::*;

    #[tokio::test]
    async fn test_send_returns_stored_message() {
        let app = TestApp::new().await.unwrap();
        app.register("alice").await;
        app.register("bob").await;

        let (status, body) = app.send("alice", "bob", "Hi").await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(body["sequence"].as_i64().unwrap() > 0);
        assert_eq!(body["sender"], "alice");
        assert_eq!(body["recipient"], "bob");
        assert_eq!(body["content"], "Hi");
        assert!(body["metadata"].is_null());
    }

    #[tokio::test]
    async fn test_sequences_increase_across_conversations() {
        let app = TestApp::new().await.unwrap();
        for user in ["alice", "bob", "carol"] {
            app.register(user).await;
        }

        let first = app.send_ok("alice", "bob", "one").await;
        let second = app.send_ok("carol", "alice", "two").await;
        let third = app.send_ok("bob", "alice", "three").await;

        assert!(first < second && second < third);
    }

    #[tokio::test]
    async fn test_video_link_classified() {
        let app = TestApp::new().await.unwrap();
        app.register("alice").await;
        app.register("bob").await;

        let (_, body) = app
            .send("alice", "bob", "https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await;
        assert_eq!(body["metadata"]["media_type"], "video");

        let (_, body) = app
            .send("alice", "bob", "https://example.com/cat.png")
            .await;
        assert_eq!(body["metadata"]["media_type"], "image");
    }

    #[tokio::test]
    async fn test_unknown_recipient_writes_nothing() {
        let app = TestApp::new().await.unwrap();
        app.register("alice").await;

        let (status, body) = app.send("alice", "ghost", "Hi").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "UNKNOWN_ACCOUNT");
        assert_eq!(app.message_count().await, 0);
    }

    #[tokio::test]
    async fn test_unknown_sender_writes_nothing() {
        let app = TestApp::new().await.unwrap();
        app.register("bob").await;

        let (status, body) = app.send("ghost", "bob", "Hi").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "UNKNOWN_ACCOUNT");
        assert_eq!(app.message_count().await, 0);
    }

    #[tokio::test]
    async fn test_empty_sender_rejected() {
        let app = TestApp::new().await.unwrap();

        let resp = app
            .request(json_request(
                Method::POST,
                "/v1/messages",
                json!({"sender": "", "recipient": "bob", "content": "Hi"}),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_body(resp).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_content_field_rejected() {
        let app = TestApp::new().await.unwrap();

        let resp = app
            .request(json_request(
                Method::POST,
                "/v1/messages",
                json!({"sender": "alice", "recipient": "bob"}),
            ))
            .await;
        assert!(resp.status().is_client_error());
    }
}
