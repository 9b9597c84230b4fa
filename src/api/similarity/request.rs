// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Request type for POST /similarity

use crate::api::errors::ApiError;
use serde::{Deserialize, Serialize};

/// Request body for POST /similarity
///
/// ```json
/// { "text1": "First text", "text2": "Second text" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityRequest {
    #[serde(default)]
    pub text1: Option<String>,

    #[serde(default)]
    pub text2: Option<String>,
}

impl SimilarityRequest {
    /// Validates the request and returns both texts
    ///
    /// Only presence is checked. Unlike the embed endpoints, empty or
    /// whitespace-only texts are accepted here.
    pub fn validate(&self) -> Result<(&str, &str), ApiError> {
        match (self.text1.as_deref(), self.text2.as_deref()) {
            (Some(text1), Some(text2)) => Ok((text1, text2)),
            _ => Err(ApiError::InvalidRequest(
                "Missing \"text1\" or \"text2\" field".to_string(),
            )),
        }
    }
}
