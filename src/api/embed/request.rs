// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Request types for POST /embed and POST /embed/batch
//!
//! Required fields are modeled as optional so an absent field produces
//! the service's own 400 error body instead of a deserialization
//! rejection.

use crate::api::errors::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for POST /embed
///
/// ```json
/// { "text": "Your text here" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl EmbedRequest {
    /// Validates the request and returns the text to embed
    ///
    /// Fails if the `text` field is missing or the trimmed text is
    /// empty.
    pub fn validate(&self) -> Result<&str, ApiError> {
        let text = self
            .text
            .as_deref()
            .ok_or_else(|| ApiError::InvalidRequest("Missing \"text\" field".to_string()))?;

        if text.trim().is_empty() {
            return Err(ApiError::InvalidRequest("Text cannot be empty".to_string()));
        }

        Ok(text)
    }
}

/// Request body for POST /embed/batch
///
/// ```json
/// { "texts": ["First text", "Second text"] }
/// ```
///
/// `texts` is kept as a raw JSON value so a wrong type gets a
/// specific error message rather than a generic rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedBatchRequest {
    #[serde(default)]
    pub texts: Option<Value>,
}

impl EmbedBatchRequest {
    /// Validates the request and returns the non-empty texts to embed
    ///
    /// Whitespace-only and null entries are silently dropped; the
    /// remaining texts keep their original relative order. Fails if
    /// `texts` is missing, not an array, empty, contains a non-string
    /// entry, or filters down to nothing.
    pub fn validate(&self) -> Result<Vec<String>, ApiError> {
        let texts = self
            .texts
            .as_ref()
            .ok_or_else(|| ApiError::InvalidRequest("Missing \"texts\" field".to_string()))?;

        let items = texts.as_array().ok_or_else(|| {
            ApiError::InvalidRequest("\"texts\" must be an array".to_string())
        })?;

        if items.is_empty() {
            return Err(ApiError::InvalidRequest(
                "Texts array cannot be empty".to_string(),
            ));
        }

        let mut valid_texts = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(text) if !text.trim().is_empty() => {
                    valid_texts.push(text.clone());
                }
                Value::String(_) | Value::Null => {}
                _ => {
                    return Err(ApiError::InvalidRequest(
                        "\"texts\" must be an array of strings".to_string(),
                    ));
                }
            }
        }

        if valid_texts.is_empty() {
            return Err(ApiError::InvalidRequest("All texts are empty".to_string()));
        }

        Ok(valid_texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_embed_missing_text() {
        let request: EmbedRequest = serde_json::from_str("{}").unwrap();
        let error = request.validate().unwrap_err();
        assert_eq!(error.to_response().error, "Missing \"text\" field");
    }

    #[test]
    fn test_embed_whitespace_text() {
        let request = EmbedRequest {
            text: Some("   ".to_string()),
        };
        let error = request.validate().unwrap_err();
        assert_eq!(error.to_response().error, "Text cannot be empty");
    }

    #[test]
    fn test_embed_valid_text() {
        let request = EmbedRequest {
            text: Some("hello".to_string()),
        };
        assert_eq!(request.validate().unwrap(), "hello");
    }

    #[test]
    fn test_batch_missing_texts() {
        let request: EmbedBatchRequest = serde_json::from_str("{}").unwrap();
        let error = request.validate().unwrap_err();
        assert_eq!(error.to_response().error, "Missing \"texts\" field");
    }

    #[test]
    fn test_batch_texts_not_an_array() {
        let request = EmbedBatchRequest {
            texts: Some(json!("not an array")),
        };
        let error = request.validate().unwrap_err();
        assert_eq!(error.to_response().error, "\"texts\" must be an array");
    }

    #[test]
    fn test_batch_empty_array() {
        let request = EmbedBatchRequest {
            texts: Some(json!([])),
        };
        let error = request.validate().unwrap_err();
        assert_eq!(error.to_response().error, "Texts array cannot be empty");
    }

    #[test]
    fn test_batch_all_texts_empty() {
        let request = EmbedBatchRequest {
            texts: Some(json!(["", "   "])),
        };
        let error = request.validate().unwrap_err();
        assert_eq!(error.to_response().error, "All texts are empty");
    }

    #[test]
    fn test_batch_filters_empty_preserving_order() {
        let request = EmbedBatchRequest {
            texts: Some(json!(["a", "", "b", "  ", "c"])),
        };
        assert_eq!(request.validate().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_batch_non_string_entry_rejected() {
        let request = EmbedBatchRequest {
            texts: Some(json!(["a", 42])),
        };
        let error = request.validate().unwrap_err();
        assert_eq!(
            error.to_response().error,
            "\"texts\" must be an array of strings"
        );
    }
}
