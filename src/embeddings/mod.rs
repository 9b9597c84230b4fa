// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod deterministic;
pub mod model_info;
pub mod onnx_model;
pub mod provider;
pub mod similarity;

pub use deterministic::DeterministicEmbedder;
pub use model_info::ModelInfo;
pub use onnx_model::OnnxEmbeddingModel;
pub use provider::EmbeddingProvider;
pub use similarity::cosine_similarity;
