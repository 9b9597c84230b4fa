// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Response types for POST /embed and POST /embed/batch

use serde::{Deserialize, Serialize};

/// Response body for POST /embed
///
/// ```json
/// {
///   "embedding": [0.123, -0.456, ...],
///   "dimensions": 384,
///   "model": "all-MiniLM-L6-v2"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedResponse {
    pub embedding: Vec<f32>,
    pub dimensions: usize,
    pub model: String,
}

impl EmbedResponse {
    pub fn new(embedding: Vec<f32>, model: impl Into<String>) -> Self {
        Self {
            dimensions: embedding.len(),
            embedding,
            model: model.into(),
        }
    }
}

/// Response body for POST /embed/batch
///
/// ```json
/// {
///   "embeddings": [[0.123, ...], [-0.456, ...]],
///   "count": 2,
///   "dimensions": 384,
///   "model": "all-MiniLM-L6-v2"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedBatchResponse {
    pub embeddings: Vec<Vec<f32>>,
    pub count: usize,
    pub dimensions: usize,
    pub model: String,
}

impl EmbedBatchResponse {
    /// Dimensionality is taken from the first vector; the service
    /// layer guarantees all vectors in a batch share it.
    pub fn new(embeddings: Vec<Vec<f32>>, model: impl Into<String>) -> Self {
        Self {
            count: embeddings.len(),
            dimensions: embeddings.first().map(Vec::len).unwrap_or(0),
            embeddings,
            model: model.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_response_dimensions() {
        let response = EmbedResponse::new(vec![0.1, 0.2, 0.3], "all-MiniLM-L6-v2");
        assert_eq!(response.dimensions, 3);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""dimensions":3"#));
        assert!(json.contains(r#""model":"all-MiniLM-L6-v2""#));
    }

    #[test]
    fn test_batch_response_count_and_dimensions() {
        let response = EmbedBatchResponse::new(
            vec![vec![0.1, 0.2], vec![0.3, 0.4], vec![0.5, 0.6]],
            "all-MiniLM-L6-v2",
        );
        assert_eq!(response.count, 3);
        assert_eq!(response.dimensions, 2);
    }
}
