// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod embed;
pub mod errors;
pub mod http_server;
pub mod service;
pub mod similarity;

pub use embed::{
    embed_batch_handler, embed_handler, EmbedBatchRequest, EmbedBatchResponse, EmbedRequest,
    EmbedResponse,
};
pub use errors::{ApiError, ApiErrorResponse, ErrorResponse};
pub use http_server::{create_app, start_server, AppState, HealthResponse};
pub use service::EmbedService;
pub use similarity::{similarity_handler, SimilarityRequest, SimilarityResponse};
