// ABOUTME: HTTP client construction with configured timeouts
// ABOUTME: One pooled reqwest client per API handle, built from ClientConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use crate::config::ClientConfig;
use reqwest::{Client, ClientBuilder};

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("recipe-kitchen/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for recipe API calls
///
/// A timed-out request surfaces as a transport error.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized
pub fn build_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .user_agent(USER_AGENT)
        .build()
}
