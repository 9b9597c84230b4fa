// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /embed and POST /embed/batch endpoint tests
//!
//! Covers the validation matrix (missing fields, empty inputs, wrong
//! types, malformed bodies) and the success shapes, including batch
//! ordering after whitespace filtering.

mod common;

use axum::http::StatusCode;
use common::{post_json, post_raw, test_app};
use serde_json::json;

//
// POST /embed
//

#[tokio::test]
async fn test_embed_returns_384_dimensional_vector() {
    let (status, body) = post_json(test_app(), "/embed", json!({"text": "hello world"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dimensions"], 384);
    assert_eq!(body["model"], "all-MiniLM-L6-v2");
    assert_eq!(body["embedding"].as_array().unwrap().len(), 384);
}

#[tokio::test]
async fn test_embed_is_deterministic() {
    let (_, first) = post_json(test_app(), "/embed", json!({"text": "same input"})).await;
    let (_, second) = post_json(test_app(), "/embed", json!({"text": "same input"})).await;

    assert_eq!(first["embedding"], second["embedding"]);
}

#[tokio::test]
async fn test_embed_missing_text_field() {
    let (status, body) = post_json(test_app(), "/embed", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing \"text\" field");
}

#[tokio::test]
async fn test_embed_empty_text() {
    let (status, body) = post_json(test_app(), "/embed", json!({"text": ""})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Text cannot be empty");
}

#[tokio::test]
async fn test_embed_whitespace_only_text() {
    let (status, body) = post_json(test_app(), "/embed", json!({"text": "   \t\n"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Text cannot be empty");
}

#[tokio::test]
async fn test_embed_malformed_json_body() {
    let (status, body) = post_raw(test_app(), "/embed", "{not valid json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

//
// POST /embed/batch
//

#[tokio::test]
async fn test_batch_returns_one_embedding_per_text() {
    let (status, body) = post_json(
        test_app(),
        "/embed/batch",
        json!({"texts": ["first", "second", "third"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(body["dimensions"], 384);
    assert_eq!(body["model"], "all-MiniLM-L6-v2");

    let embeddings = body["embeddings"].as_array().unwrap();
    assert_eq!(embeddings.len(), 3);
    for embedding in embeddings {
        assert_eq!(embedding.as_array().unwrap().len(), 384);
    }
}

#[tokio::test]
async fn test_batch_filters_empty_texts_preserving_order() {
    let (status, body) = post_json(
        test_app(),
        "/embed/batch",
        json!({"texts": ["a", "", "b"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    // Surviving entries match single-embed output for "a" and "b",
    // in that order
    let (_, embed_a) = post_json(test_app(), "/embed", json!({"text": "a"})).await;
    let (_, embed_b) = post_json(test_app(), "/embed", json!({"text": "b"})).await;

    let embeddings = body["embeddings"].as_array().unwrap();
    assert_eq!(embeddings[0], embed_a["embedding"]);
    assert_eq!(embeddings[1], embed_b["embedding"]);
}

#[tokio::test]
async fn test_batch_missing_texts_field() {
    let (status, body) = post_json(test_app(), "/embed/batch", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing \"texts\" field");
}

#[tokio::test]
async fn test_batch_texts_not_an_array() {
    let (status, body) = post_json(
        test_app(),
        "/embed/batch",
        json!({"texts": "just a string"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "\"texts\" must be an array");
}

#[tokio::test]
async fn test_batch_empty_array() {
    let (status, body) = post_json(test_app(), "/embed/batch", json!({"texts": []})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Texts array cannot be empty");
}

#[tokio::test]
async fn test_batch_all_texts_empty() {
    let (status, body) = post_json(
        test_app(),
        "/embed/batch",
        json!({"texts": ["", "  "]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All texts are empty");
}

#[tokio::test]
async fn test_batch_malformed_json_body() {
    let (status, body) = post_raw(test_app(), "/embed/batch", "[1, 2".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
