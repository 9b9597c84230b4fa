// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Static model metadata record
//!
//! Created once at startup and attached to every response for
//! traceability. Never mutated after load.

use serde::{Deserialize, Serialize};

/// Metadata describing the loaded embedding model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model name (e.g., "all-MiniLM-L6-v2")
    pub name: String,

    /// Output embedding dimensions
    pub dimensions: usize,

    /// Maximum input sequence length in tokens
    pub max_tokens: usize,

    /// Speed label
    pub speed: String,

    /// Quality label
    pub quality: String,

    /// Cost label
    pub cost: String,
}

impl ModelInfo {
    /// Metadata for all-MiniLM-L6-v2, the model this service ships with
    pub fn all_minilm_l6_v2() -> Self {
        Self {
            name: "all-MiniLM-L6-v2".to_string(),
            dimensions: 384,
            max_tokens: 256,
            speed: "Fast".to_string(),
            quality: "Good".to_string(),
            cost: "FREE".to_string(),
        }
    }
}
