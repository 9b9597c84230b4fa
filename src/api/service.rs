// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Embedding service layer
//!
//! Orchestrates calls to the embedding provider for the three
//! operations (single embed, batch embed, similarity) and owns the
//! static model metadata. One instance is created at startup and
//! shared read-only across requests.

use crate::api::errors::ApiError;
use crate::embeddings::{cosine_similarity, EmbeddingProvider, ModelInfo};
use std::sync::Arc;
use tracing::error;

pub struct EmbedService {
    provider: Arc<dyn EmbeddingProvider>,
    info: ModelInfo,
}

impl EmbedService {
    pub fn new(provider: Arc<dyn EmbeddingProvider>, info: ModelInfo) -> Self {
        Self { provider, info }
    }

    /// Static metadata for the loaded model
    pub fn model_info(&self) -> &ModelInfo {
        &self.info
    }

    pub fn model_name(&self) -> &str {
        &self.info.name
    }

    /// Generates an embedding for one text
    pub async fn embed_single(&self, text: &str) -> Result<Vec<f32>, ApiError> {
        self.provider.embed(text).await.map_err(|e| {
            error!("Error generating embedding: {}", e);
            ApiError::InternalError(e.to_string())
        })
    }

    /// Generates embeddings for a filtered batch, in input order
    ///
    /// Issues a single provider call for the whole list. All returned
    /// vectors must share one dimensionality; a mismatch is treated as
    /// a provider fault.
    pub async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ApiError> {
        let embeddings = self.provider.embed_batch(texts).await.map_err(|e| {
            error!("Error generating batch embeddings: {}", e);
            ApiError::InternalError(e.to_string())
        })?;

        if let Some(first) = embeddings.first() {
            let dimensions = first.len();
            if embeddings.iter().any(|emb| emb.len() != dimensions) {
                error!("Provider returned embeddings of inconsistent dimensions");
                return Err(ApiError::InternalError(
                    "Model returned embeddings of inconsistent dimensions".to_string(),
                ));
            }
        }

        Ok(embeddings)
    }

    /// Computes cosine similarity between two texts
    ///
    /// Both texts are embedded in one batch call, then scored as
    /// `dot(v1, v2) / (norm(v1) * norm(v2))`.
    pub async fn similarity(&self, text1: &str, text2: &str) -> Result<f32, ApiError> {
        let texts = vec![text1.to_string(), text2.to_string()];
        let embeddings = self.embed_batch(&texts).await?;

        if embeddings.len() != 2 {
            error!("Provider returned {} embeddings for 2 inputs", embeddings.len());
            return Err(ApiError::InternalError(
                "Model returned the wrong number of embeddings".to_string(),
            ));
        }

        cosine_similarity(&embeddings[0], &embeddings[1]).map_err(|e| {
            error!("Error calculating similarity: {}", e);
            ApiError::InternalError(e.to_string())
        })
    }
}
