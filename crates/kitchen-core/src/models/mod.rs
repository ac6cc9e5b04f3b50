// ABOUTME: Data models shared by the admin editor and the kitchen matcher
// ABOUTME: Re-exports recipe and ingredient types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

/// Static ingredient definition
pub mod ingredient;
/// Recipe record and its loosely typed wire format
pub mod recipe;

pub use ingredient::Ingredient;
pub use recipe::{Recipe, RecipeIngredient, RecipeIngredients, RecipeTime, DEFAULT_RECIPE_TYPE};
