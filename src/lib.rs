// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod embeddings;

pub use api::{create_app, ApiError, AppState, EmbedService, ErrorResponse};
pub use config::ServiceConfig;
pub use embeddings::{
    cosine_similarity, DeterministicEmbedder, EmbeddingProvider, ModelInfo, OnnxEmbeddingModel,
};
