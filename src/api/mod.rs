// ABOUTME: REST client module for the recipe backend
// ABOUTME: Trait seam, reqwest implementation, wire types, and error classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

//! Recipe REST API client
//!
//! Front ends talk to the backend through [`RecipeApi`] so tests can swap in
//! a mock server or an in-memory double.

/// `RecipeApi` trait and the HTTP implementation
pub mod client;

/// Call failures
pub mod errors;

/// Shared reqwest client construction
pub mod http_client;

/// Request and response bodies
pub mod types;

pub use client::{HttpRecipeApi, RecipeApi};
pub use errors::{ApiError, UNKNOWN_ERROR};
pub use types::{HealthStatus, SearchRequest, SearchResponse};
