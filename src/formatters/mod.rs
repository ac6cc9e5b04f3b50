// ABOUTME: Text renderers for the kitchen session, the admin editor, and named recipe formats
// ABOUTME: Pure projections from state to strings; callers decide where the text goes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

//! Output rendering
//!
//! Every renderer takes borrowed state and returns a `String`. Re-rendering
//! after a mutation is the caller's job; nothing in this module holds state.
//!
//! ## Renderers
//!
//! - **kitchen**: fridge page, counter, basket tags, match cards, recipe detail
//! - **admin**: recipe grid and the editor detail view
//! - **display**: named formats for `recipes show --format`

/// Admin grid and detail
pub mod admin;
/// Named display formats
pub mod display;
/// Kitchen screen
pub mod kitchen;
/// Casing helpers
pub mod text;

pub use admin::{render_admin_card, render_admin_detail, render_admin_grid, NO_RECIPES_FOUND};
pub use display::{render_recipe, DisplayFormat};
pub use kitchen::{
    basket_status, render_counter, render_drags, render_fridge, render_kitchen,
    render_kitchen_detail, render_match_card, render_matches, selected_line, EMPTY_BASKET_HINT,
    NO_MATCHES, NONE_SELECTED,
};
