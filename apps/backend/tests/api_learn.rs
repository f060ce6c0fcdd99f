//! Learn endpoint tests.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL before running.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use uuid::Uuid;

use common::fixtures;
use common::TestContext;

async fn seed_word(server: &TestServer, prompt: &str, target: &str, rank: i32) -> Uuid {
    let response = server
        .post("/words")
        .json(&fixtures::create_word_request(prompt, target, rank))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
}

/// Test learn reports done when no words exist.
#[tokio::test]
#[ignore = "requires database"]
async fn test_learn_done_when_empty() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    ctx.reset().await;

    let response = server.get("/learn").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["kind"], "done");
    assert!(body.get("card").is_none());
}

/// Test new words are served lowest frequency rank first.
#[tokio::test]
#[ignore = "requires database"]
async fn test_learn_serves_new_words_by_frequency_rank() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    ctx.reset().await;

    seed_word(&server, "Photosynthesis", "Quang hợp", 5000).await;
    let common_id = seed_word(&server, "Hello", "Xin chào", 1).await;

    let response = server.get("/learn").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["kind"], "new");
    assert_eq!(body["card"]["id"], common_id.to_string());
    assert_eq!(body["card"]["frequency_rank"], 1);
}

/// Test an overdue review takes priority over new words.
#[tokio::test]
#[ignore = "requires database"]
async fn test_learn_prefers_overdue_reviews() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    ctx.reset().await;

    seed_word(&server, "Hello", "Xin chào", 1).await;
    let overdue_id = seed_word(&server, "Cat", "Con mèo", 500).await;
    ctx.make_overdue(overdue_id, 2).await;

    let response = server.get("/learn").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["kind"], "review");
    assert_eq!(body["card"]["id"], overdue_id.to_string());
    assert!(body.get("hint").is_none());
}

/// Test a full learning queue forces an early review with a hint.
#[tokio::test]
#[ignore = "requires database"]
async fn test_learn_forces_early_review_when_ladder_full() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    ctx.reset().await;

    let due = Utc::now() + Duration::minutes(8);
    for i in 0..5 {
        let id = seed_word(&server, &format!("word {i}"), &format!("từ {i}"), 100 + i).await;
        ctx.make_learning(id, 0, due).await;
    }
    seed_word(&server, "Hello", "Xin chào", 1).await;

    let response = server.get("/learn").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["kind"], "review");
    assert_eq!(
        body["hint"],
        "Let's finish these before starting new ones."
    );
}

/// Test the served card carries a context sentence when one exists.
#[tokio::test]
#[ignore = "requires database"]
async fn test_learn_includes_context_sentence() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    ctx.reset().await;

    let word_id = seed_word(&server, "Thank you", "Cảm ơn", 10).await;

    let response = server
        .post("/sentences")
        .json(&fixtures::create_sentence_request(
            word_id,
            "Thank you very much.",
            "Cảm ơn bạn rất nhiều.",
        ))
        .await;
    response.assert_status(StatusCode::CREATED);

    let response = server.get("/learn").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["kind"], "new");
    assert_eq!(body["card"]["context"]["target_text"], "Cảm ơn bạn rất nhiều.");
    assert_eq!(body["card"]["context"]["prompt_text"], "Thank you very much.");
}

/// Test attaching a sentence to a missing word returns not found.
#[tokio::test]
#[ignore = "requires database"]
async fn test_sentence_for_unknown_word_not_found() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/sentences")
        .json(&fixtures::create_sentence_request(
            Uuid::new_v4(),
            "Thank you.",
            "Cảm ơn.",
        ))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

/// Test seeding rejects a non-positive frequency rank.
#[tokio::test]
#[ignore = "requires database"]
async fn test_create_word_rejects_bad_rank() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/words")
        .json(&fixtures::create_word_request("Hello", "Xin chào", 0))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
