// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Service configuration
//!
//! Read once from environment variables at startup. Defaults: port
//! 5001, model files under ./models.

use std::env;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Port to listen on (bound on all interfaces)
    pub port: u16,

    /// Path to the ONNX model file
    pub model_path: String,

    /// Path to the tokenizer JSON file
    pub tokenizer_path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 5001,
            model_path: "./models/all-MiniLM-L6-v2-onnx/model.onnx".to_string(),
            tokenizer_path: "./models/all-MiniLM-L6-v2-onnx/tokenizer.json".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Builds a config from `API_PORT`, `MODEL_PATH`, and
    /// `TOKENIZER_PATH`, falling back to defaults for anything unset
    /// or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let model_path = env::var("MODEL_PATH").unwrap_or(defaults.model_path);
        let tokenizer_path = env::var("TOKENIZER_PATH").unwrap_or(defaults.tokenizer_path);

        Self {
            port,
            model_path,
            tokenizer_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 5001);
        assert!(config.model_path.ends_with("model.onnx"));
        assert!(config.tokenizer_path.ends_with("tokenizer.json"));
    }
}
