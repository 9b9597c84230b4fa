// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Embedding provider trait
//!
//! The seam between the HTTP service layer and the model backend.
//! One provider is constructed at startup and shared read-only across
//! all requests; implementations must be safe to call concurrently.

use anyhow::Result;
use async_trait::async_trait;

/// Produces fixed-length embedding vectors for text inputs.
///
/// Implementations are expected to be deterministic for a fixed model
/// version: the same text always yields the same vector.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generates an embedding for a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generates embeddings for multiple texts in one call
    ///
    /// Returns one vector per input, in matching order. A single
    /// batched call is preferred over per-item calls for throughput.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Output dimension of this provider's vectors
    fn dimension(&self) -> usize;
}
