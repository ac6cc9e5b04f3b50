// ABOUTME: Core types and pure logic for the recipe kitchen client
// ABOUTME: Foundation crate with errors, recipe models, ingredient catalog, kitchen state, and matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

#![deny(unsafe_code)]

//! # Kitchen Core
//!
//! Foundation crate for the recipe kitchen client. Nothing here performs I/O:
//! the REST client, controllers, and renderers live in the root crate and
//! drive these types.
//!
//! ## Modules
//!
//! - **errors**: `AppError` and `ErrorCode`
//! - **models**: recipes as exchanged with the backend, and fridge ingredients
//! - **catalog**: the static ingredient list and fridge page arithmetic
//! - **basket**: selected ingredient set and the counter staging area
//! - **drag**: per-pointer drag sessions
//! - **matcher**: recipe coverage of a selection
//! - **state**: the kitchen session and its transitions
//! - **form**: admin form normalization

/// Unified error handling with standard error codes
pub mod errors;

/// Recipe and ingredient data models
pub mod models;

/// Static ingredient catalog and fridge paging
pub mod catalog;

/// Basket and counter collections
pub mod basket;

/// Drag sessions resolved to drop targets
pub mod drag;

/// Recipe matching by ingredient coverage
pub mod matcher;

/// Kitchen session state
pub mod state;

/// Admin recipe form normalization
pub mod form;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{Ingredient, Recipe, RecipeIngredient, RecipeIngredients, RecipeTime};
