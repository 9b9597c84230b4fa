// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Response type for POST /similarity

use serde::{Deserialize, Serialize};

/// Response body for POST /similarity
///
/// ```json
/// { "similarity": 0.856, "model": "all-MiniLM-L6-v2" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub similarity: f32,
    pub model: String,
}

impl SimilarityResponse {
    pub fn new(similarity: f32, model: impl Into<String>) -> Self {
        Self {
            similarity,
            model: model.into(),
        }
    }
}
