// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ONNX Embedding Model Wrapper
//!
//! Wraps ONNX Runtime for running the all-MiniLM-L6-v2 sentence
//! transformer model:
//! - ONNX model loading from disk (one-time, blocking startup cost)
//! - BERT tokenization with per-batch padding
//! - Single and batch embedding generation
//! - Mean pooling over token embeddings
//! - 384-dimensional output vectors

use crate::embeddings::provider::EmbeddingProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use ndarray::{Array2, Axis};
use ort::execution_providers::CPU as CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokenizers::{Encoding, Tokenizer};
use tracing::info;

/// ONNX-based embedding model (all-MiniLM-L6-v2)
///
/// The model outputs token-level embeddings; sentence vectors are
/// produced by mean pooling weighted by the attention mask.
///
/// # Thread Safety
/// The session is behind `Arc<Mutex>` so one instance can be shared
/// across concurrently dispatched requests.
#[derive(Clone)]
pub struct OnnxEmbeddingModel {
    /// ONNX Runtime session
    session: Arc<Mutex<Session>>,

    /// BERT tokenizer
    tokenizer: Arc<Tokenizer>,

    /// Model name (e.g., "all-MiniLM-L6-v2")
    model_name: String,

    /// Output dimension (384 for all-MiniLM-L6-v2)
    dimension: usize,

    /// Maximum sequence length (256 for all-MiniLM-L6-v2)
    max_length: usize,
}

impl std::fmt::Debug for OnnxEmbeddingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxEmbeddingModel")
            .field("model_name", &self.model_name)
            .field("dimension", &self.dimension)
            .field("max_length", &self.max_length)
            .finish_non_exhaustive()
    }
}

impl OnnxEmbeddingModel {
    /// Creates a new ONNX embedding model from disk paths
    ///
    /// Loads the session and tokenizer, then runs a probe inference to
    /// verify the model outputs `[batch, seq_len, 384]`. Callers should
    /// treat a failure here as fatal: the service cannot serve any
    /// endpoint without a loaded model.
    pub async fn new<P: AsRef<Path>>(
        model_name: impl Into<String>,
        model_path: P,
        tokenizer_path: P,
    ) -> Result<Self> {
        let model_name = model_name.into();
        let model_path = model_path.as_ref();
        let tokenizer_path = tokenizer_path.as_ref();

        if !model_path.exists() {
            anyhow::bail!("ONNX model file not found: {}", model_path.display());
        }
        if !tokenizer_path.exists() {
            anyhow::bail!("Tokenizer file not found: {}", tokenizer_path.display());
        }

        info!("Initializing ONNX embedding model: {}", model_name);

        let mut session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .map_err(ort::Error::<()>::from)
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(ort::Error::<()>::from)
            .context("Failed to set optimization level")?
            .with_intra_threads(4)
            .map_err(ort::Error::<()>::from)
            .context("Failed to set intra threads")?
            .commit_from_file(model_path)
            .context(format!(
                "Failed to load ONNX model from {}",
                model_path.display()
            ))?;

        let tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;

        // Probe inference: verify the model outputs [batch, seq_len, 384]
        // before accepting any traffic
        {
            let encoding = tokenizer
                .encode("validation probe", true)
                .map_err(|e| anyhow::anyhow!("Tokenizer validation failed: {}", e))?;

            let (input_ids, attention_mask, token_type_ids) =
                build_input_tensors(&[encoding])?;

            let outputs = session.run(ort::inputs![
                "input_ids" => Value::from_array(input_ids)?,
                "attention_mask" => Value::from_array(attention_mask)?,
                "token_type_ids" => Value::from_array(token_type_ids)?
            ])?;

            let output_tensor = outputs[0]
                .try_extract_array::<f32>()
                .context("Failed to extract output tensor")?;
            let shape = output_tensor.shape();

            if shape.len() != 3 || shape[2] != 384 {
                anyhow::bail!(
                    "Model outputs unexpected dimensions: {:?} (expected [batch, seq_len, 384])",
                    shape
                );
            }
        } // outputs dropped before moving session

        info!("ONNX embedding model loaded successfully");

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
            model_name,
            dimension: 384,
            max_length: 256,
        })
    }

    /// Tokenizes all texts and runs one padded batch inference,
    /// returning one mean-pooled sentence vector per input.
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let encodings: Vec<Encoding> = texts
            .iter()
            .map(|text| {
                self.tokenizer
                    .encode(*text, true)
                    .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))
            })
            .collect::<Result<Vec<_>>>()?;

        let (input_ids, attention_mask, token_type_ids) = build_input_tensors(&encodings)?;
        let mask = attention_mask.clone();

        let mut session = self.session.lock().unwrap();
        let outputs = session.run(ort::inputs![
            "input_ids" => Value::from_array(input_ids)?,
            "attention_mask" => Value::from_array(attention_mask)?,
            "token_type_ids" => Value::from_array(token_type_ids)?
        ])?;

        // Token-level output: [batch, seq_len, hidden_dim]
        let output_array = outputs[0]
            .try_extract_array::<f32>()
            .context("Failed to extract output tensor")?;

        let mut embeddings = Vec::with_capacity(texts.len());
        for batch_idx in 0..texts.len() {
            let token_embeddings = output_array.index_axis(Axis(0), batch_idx);
            let item_mask = mask.index_axis(Axis(0), batch_idx);

            // Mean pooling over the sequence dimension, weighted by the
            // attention mask so padding tokens are ignored
            let seq_len = token_embeddings.shape()[0];
            let hidden_dim = token_embeddings.shape()[1];

            let mut pooled = vec![0.0f32; hidden_dim];
            let mut mask_sum = 0.0f32;

            for i in 0..seq_len {
                let mask_value = item_mask[i] as f32;
                mask_sum += mask_value;
                for j in 0..hidden_dim {
                    pooled[j] += token_embeddings[[i, j]] * mask_value;
                }
            }

            for value in &mut pooled {
                *value /= mask_sum.max(1e-9);
            }

            if pooled.len() != self.dimension {
                anyhow::bail!(
                    "Unexpected embedding dimension at index {}: {} (expected {})",
                    batch_idx,
                    pooled.len(),
                    self.dimension
                );
            }

            embeddings.push(pooled);
        }

        Ok(embeddings)
    }

    /// Returns the model name
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Returns the maximum input sequence length
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

#[async_trait]
impl EmbeddingProvider for OnnxEmbeddingModel {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut embeddings = self.encode_batch(&[text])?;
        embeddings
            .pop()
            .context("Model returned no embedding for input text")
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        self.encode_batch(&refs)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Builds padded `[batch, max_len]` i64 tensors for input ids,
/// attention mask, and token type ids from a set of encodings.
fn build_input_tensors(
    encodings: &[Encoding],
) -> Result<(Array2<i64>, Array2<i64>, Array2<i64>)> {
    let batch = encodings.len();
    let max_len = encodings
        .iter()
        .map(|enc| enc.get_ids().len())
        .max()
        .unwrap_or(0);

    let mut input_ids = Vec::with_capacity(batch * max_len);
    let mut attention_mask = Vec::with_capacity(batch * max_len);

    for encoding in encodings {
        let ids = encoding.get_ids();
        let mask = encoding.get_attention_mask();

        input_ids.extend(ids.iter().map(|&id| id as i64));
        attention_mask.extend(mask.iter().map(|&m| m as i64));

        // Pad to the longest sequence in the batch
        let padding = max_len - ids.len();
        input_ids.extend(std::iter::repeat(0i64).take(padding));
        attention_mask.extend(std::iter::repeat(0i64).take(padding));
    }

    // All zeros for single-segment sentence embedding
    let token_type_ids = vec![0i64; batch * max_len];

    Ok((
        Array2::from_shape_vec((batch, max_len), input_ids)
            .context("Failed to create input_ids array")?,
        Array2::from_shape_vec((batch, max_len), attention_mask)
            .context("Failed to create attention_mask array")?,
        Array2::from_shape_vec((batch, max_len), token_type_ids)
            .context("Failed to create token_type_ids array")?,
    ))
}
