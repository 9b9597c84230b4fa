// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use embed_node::{
    api::{start_server, AppState, EmbedService},
    config::ServiceConfig,
    embeddings::{ModelInfo, OnnxEmbeddingModel},
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = ServiceConfig::from_env();
    let info = ModelInfo::all_minilm_l6_v2();

    // Load the model before binding the listener; a failed load is
    // fatal since no endpoint can be served without it
    tracing::info!("Loading embedding model {}...", info.name);
    let model =
        OnnxEmbeddingModel::new(info.name.clone(), &config.model_path, &config.tokenizer_path)
            .await?;
    tracing::info!("Model loaded successfully");

    let service = Arc::new(EmbedService::new(Arc::new(model), info));
    start_server(AppState::new(service), config.port).await
}
