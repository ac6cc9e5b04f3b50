// ABOUTME: Kitchen ingredient definition used by the fridge catalog, counter, and basket
// ABOUTME: Ingredients are static catalog entries identified by their id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use serde::Serialize;

/// An ingredient the user can pick from the fridge
///
/// Identity is `id`, which doubles as the ingredient key searched for in
/// recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ingredient {
    /// Lowercase identifier (`"tomato"`, `"ice_cream"`)
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Emoji icon
    pub icon: &'static str,
}

impl Ingredient {
    /// Define a catalog entry
    #[must_use]
    pub const fn new(id: &'static str, name: &'static str, icon: &'static str) -> Self {
        Self { id, name, icon }
    }
}
