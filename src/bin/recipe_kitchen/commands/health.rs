// ABOUTME: Health command for recipe-kitchen
// ABOUTME: Calls the backend health endpoint and prints its status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use anyhow::{bail, Context, Result};
use recipe_kitchen::api::{HttpRecipeApi, RecipeApi};
use recipe_kitchen::config::ClientConfig;
use tracing::info;

/// Query `GET /health`
pub async fn check(config: &ClientConfig) -> Result<()> {
    let api = HttpRecipeApi::new(config).context("Failed to build HTTP client")?;
    let health = api
        .health()
        .await
        .with_context(|| format!("Recipe API at {} is unreachable", api.base_url()))?;

    info!(status = %health.status, "Health check answered");
    println!("{}: {}", health.status, health.message);

    if !health.is_ok() {
        bail!("Recipe API reported status '{}'", health.status);
    }
    Ok(())
}
