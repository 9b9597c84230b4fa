// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /embed and POST /embed/batch endpoint types and handlers

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{embed_batch_handler, embed_handler};
pub use request::{EmbedBatchRequest, EmbedRequest};
pub use response::{EmbedBatchResponse, EmbedResponse};
