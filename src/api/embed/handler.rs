// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! HTTP handlers for POST /embed and POST /embed/batch
//!
//! Each handler follows the same shape: decode JSON body, validate,
//! delegate to the embedding service, encode JSON response. Failures
//! become `{"error": ...}` bodies with 400 or 500.

use crate::api::embed::{EmbedBatchRequest, EmbedBatchResponse, EmbedRequest, EmbedResponse};
use crate::api::errors::{ApiError, ApiErrorResponse};
use crate::api::http_server::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

/// POST /embed handler
pub async fn embed_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmbedRequest>, JsonRejection>,
) -> Result<Json<EmbedResponse>, ApiErrorResponse> {
    let Json(request) = payload.map_err(ApiError::from)?;
    let text = request.validate()?;

    let embedding = state.service.embed_single(text).await?;

    Ok(Json(EmbedResponse::new(
        embedding,
        state.service.model_name(),
    )))
}

/// POST /embed/batch handler
pub async fn embed_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmbedBatchRequest>, JsonRejection>,
) -> Result<Json<EmbedBatchResponse>, ApiErrorResponse> {
    let Json(request) = payload.map_err(ApiError::from)?;
    let texts = request.validate()?;

    let embeddings = state.service.embed_batch(&texts).await?;

    Ok(Json(EmbedBatchResponse::new(
        embeddings,
        state.service.model_name(),
    )))
}
