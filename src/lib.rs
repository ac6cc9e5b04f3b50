// ABOUTME: Main library entry point for the recipe kitchen client
// ABOUTME: REST client, recipe finder, admin and kitchen controllers, and text renderers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

#![deny(unsafe_code)]

//! # Recipe Kitchen
//!
//! Client-side front ends for a recipe store reachable over REST.
//!
//! - **Admin editor**: list, create, edit, and delete recipes
//! - **Kitchen matcher**: move ingredients from a paged fridge onto a counter
//!   or into a basket, and browse the recipes the basket covers
//!
//! Pure logic (models, basket, matcher, form normalization) lives in
//! `kitchen-core`; this crate adds I/O and presentation on top.
//!
//! ## Architecture
//!
//! - **api**: async REST client behind the `RecipeApi` trait
//! - **services**: recipe finder with local fallback, admin editor flow
//! - **kitchen**: event-driven kitchen controller
//! - **formatters**: text projections of kitchen and admin views
//! - **config**: environment-only configuration
//! - **logging**: tracing subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_kitchen::api::HttpRecipeApi;
//! use recipe_kitchen::config::ClientConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let api = HttpRecipeApi::new(&config)?;
//! println!("talking to {}", api.base_url());
//! # Ok(())
//! # }
//! ```

/// REST client for the recipe backend
pub mod api;

/// Environment-only client configuration
pub mod config;

/// Text renderers for kitchen and admin views
pub mod formatters;

/// Event-driven kitchen session
pub mod kitchen;

/// Structured logging setup
pub mod logging;

/// Recipe finder and admin editor services
pub mod services;

pub use kitchen_core::{errors, models};
