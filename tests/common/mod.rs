// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Shared helpers for HTTP integration tests
//!
//! Tests run against the real router with the deterministic embedding
//! provider, so no model files are needed on disk.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use embed_node::api::{create_app, AppState, EmbedService};
use embed_node::embeddings::{DeterministicEmbedder, ModelInfo};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

/// Builds the service router backed by the deterministic embedder
pub fn test_app() -> Router {
    let provider = DeterministicEmbedder::new(384).expect("Failed to create embedder");
    let service = Arc::new(EmbedService::new(
        Arc::new(provider),
        ModelInfo::all_minilm_l6_v2(),
    ));
    create_app(AppState::new(service))
}

/// Sends a GET request and returns (status, parsed JSON body)
pub async fn get(app: Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("Failed to build request");
    send(app, request).await
}

/// Sends a POST with a JSON body and returns (status, parsed JSON body)
pub async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, path, body.to_string()).await
}

/// Sends a POST with a raw body string (for malformed JSON cases)
pub async fn post_raw(app: Router, path: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("Failed to build request");
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
