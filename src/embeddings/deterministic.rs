// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Deterministic hash-based embedding provider
//!
//! Produces stable pseudo-random unit vectors from a text hash. Not a
//! real sentence encoder: it exists so the HTTP layer can be exercised
//! without model files on disk (integration tests, offline dev).

use crate::embeddings::provider::EmbeddingProvider;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hash-seeded stand-in for a real embedding model.
///
/// Identical input always yields an identical vector, and different
/// texts yield different vectors, which is enough to test ordering,
/// dimensionality, and similarity properties end to end.
#[derive(Debug, Clone)]
pub struct DeterministicEmbedder {
    dimension: usize,
}

impl DeterministicEmbedder {
    pub fn new(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(anyhow!("Embedding dimension must be greater than 0"));
        }
        Ok(Self { dimension })
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let seed = hasher.finish();

        // Linear congruential generator seeded by the text hash
        let mut state = seed;
        let mut vector = Vec::with_capacity(self.dimension);
        for i in 0..self.dimension {
            state = (state.wrapping_mul(1664525).wrapping_add(1013904223)) ^ (i as u64);
            let value = (state as f64 / u64::MAX as f64) * 2.0 - 1.0;
            vector.push(value as f32);
        }

        // L2 normalize, matching sentence-transformer style output
        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }
}

#[async_trait]
impl EmbeddingProvider for DeterministicEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.vector_for(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|text| self.vector_for(text)).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
