// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Cosine similarity over embedding vectors

use anyhow::Result;

/// Computes cosine similarity between two embedding vectors.
///
/// Defined as `dot(a, b) / (norm(a) * norm(b))`, ranging from -1 to 1.
///
/// # Errors
/// - Vectors of different lengths
/// - Either vector has zero magnitude (the quotient would be NaN,
///   which cannot be serialized to JSON)
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        anyhow::bail!(
            "Embedding dimension mismatch: {} vs {}",
            a.len(),
            b.len()
        );
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    let denominator = norm_a * norm_b;
    if denominator == 0.0 {
        anyhow::bail!("Cannot compute similarity with a zero-magnitude embedding");
    }

    Ok(dot / denominator)
}
