// ABOUTME: Request and response bodies of the recipe REST API
// ABOUTME: Search payloads and the health check document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use kitchen_core::models::Recipe;
use serde::{Deserialize, Serialize};

/// `POST /recipes/search` body
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    /// Selected ingredient ids
    pub items: &'a [String],
}

/// `POST /recipes/search` response; other fields are ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Matching recipes in server order
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

/// `GET /health` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `"ok"` when healthy
    #[serde(default)]
    pub status: String,
    /// Human-readable detail
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    /// Whether the backend reported itself healthy
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
