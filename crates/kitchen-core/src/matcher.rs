// ABOUTME: Recipe matching by ingredient-set coverage of the basket
// ABOUTME: Pure predicate shared by the local fallback search and the kitchen views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

//! A recipe matches a selection when every selected id appears among the
//! recipe's ingredient names, compared case-insensitively. An empty selection
//! matches nothing, so the kitchen can show its "drag ingredients" prompt
//! instead of the whole recipe book.

use crate::models::Recipe;

/// Whether every selected id is one of the recipe's ingredient keys
///
/// Vacuously true for an empty selection; use [`match_recipes`] for the
/// empty-selection policy.
#[must_use]
pub fn covers_selection<S: AsRef<str>>(recipe: &Recipe, selection: &[S]) -> bool {
    let keys: Vec<String> = recipe
        .ingredients
        .names()
        .map(str::to_lowercase)
        .collect();
    selection
        .iter()
        .all(|id| keys.contains(&id.as_ref().to_lowercase()))
}

/// Recipes covering the selection, in list order; empty selection yields none
#[must_use]
pub fn match_recipes<S: AsRef<str>>(selection: &[S], recipes: &[Recipe]) -> Vec<Recipe> {
    if selection.is_empty() {
        return Vec::new();
    }
    recipes
        .iter()
        .filter(|recipe| covers_selection(recipe, selection))
        .cloned()
        .collect()
}
