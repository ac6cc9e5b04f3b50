// ABOUTME: Recipe search with remote-first matching and a local fallback over a startup cache
// ABOUTME: Both paths apply the same ingredient coverage rule so results do not depend on the path taken
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use crate::api::RecipeApi;
use kitchen_core::matcher::match_recipes;
use kitchen_core::models::Recipe;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Which path produced a match result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    /// Empty selection; nothing was searched
    NoSelection,
    /// The backend search endpoint answered
    Remote,
    /// The search failed and the cached list was filtered locally
    LocalFallback,
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoSelection => "no-selection",
            Self::Remote => "remote",
            Self::LocalFallback => "local-fallback",
        };
        f.write_str(name)
    }
}

/// Matches for one selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Matching recipes in list order
    pub recipes: Vec<Recipe>,
    /// Path that produced them
    pub source: MatchSource,
}

/// Finds recipes covering a basket selection
pub struct RecipeFinder {
    api: Arc<dyn RecipeApi>,
    cache: Vec<Recipe>,
}

impl RecipeFinder {
    /// Finder with an empty cache; call [`Self::warm_cache`] at startup
    #[must_use]
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self {
            api,
            cache: Vec::new(),
        }
    }

    /// Finder with a pre-filled cache
    #[must_use]
    pub fn with_cache(api: Arc<dyn RecipeApi>, cache: Vec<Recipe>) -> Self {
        Self { api, cache }
    }

    /// Fetch the full recipe list once for fallback matching
    ///
    /// On failure the cache stays empty and the fallback will find nothing.
    /// Returns the number of cached recipes.
    pub async fn warm_cache(&mut self) -> usize {
        match self.api.list_recipes().await {
            Ok(recipes) => {
                debug!(count = recipes.len(), "Cached recipe list for local matching");
                self.cache = recipes;
            }
            Err(e) => {
                warn!(error = %e, "Could not fetch recipes from API, local matching has no data");
                self.cache.clear();
            }
        }
        self.cache.len()
    }

    /// Recipes available to the fallback
    #[must_use]
    pub fn cached(&self) -> &[Recipe] {
        &self.cache
    }

    /// Recipes whose ingredients cover every selected id
    ///
    /// Tries the backend first; any failure falls back to the cached list.
    pub async fn find(&self, selection: &[String]) -> MatchOutcome {
        if selection.is_empty() {
            return MatchOutcome {
                recipes: Vec::new(),
                source: MatchSource::NoSelection,
            };
        }

        match self.api.search_recipes(selection).await {
            Ok(recipes) => MatchOutcome {
                recipes,
                source: MatchSource::Remote,
            },
            Err(e) => {
                warn!(error = %e, "Recipe search failed");
                let recipes = match_recipes(selection, &self.cache);
                info!(
                    matches = recipes.len(),
                    cached = self.cache.len(),
                    "Using local recipe matching"
                );
                MatchOutcome {
                    recipes,
                    source: MatchSource::LocalFallback,
                }
            }
        }
    }
}
