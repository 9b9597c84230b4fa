// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! HTTP handler for POST /similarity

use crate::api::errors::{ApiError, ApiErrorResponse};
use crate::api::http_server::AppState;
use crate::api::similarity::{SimilarityRequest, SimilarityResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

/// POST /similarity handler
///
/// Embeds both texts in one batch call and returns their cosine
/// similarity.
pub async fn similarity_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimilarityRequest>, JsonRejection>,
) -> Result<Json<SimilarityResponse>, ApiErrorResponse> {
    let Json(request) = payload.map_err(ApiError::from)?;
    let (text1, text2) = request.validate()?;

    let similarity = state.service.similarity(text1, text2).await?;

    Ok(Json(SimilarityResponse::new(
        similarity,
        state.service.model_name(),
    )))
}
