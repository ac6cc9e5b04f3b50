// ABOUTME: Configuration module for the recipe kitchen client
// ABOUTME: Environment-only settings for the REST endpoint, HTTP timeouts, and fridge paging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

//! Configuration for the recipe kitchen client
//!
//! Configuration comes from environment variables only; the CLI may
//! override the API base URL.

/// Environment-driven client configuration
pub mod environment;

pub use environment::{ClientConfig, DEFAULT_API_BASE};
