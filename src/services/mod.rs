// ABOUTME: Service layer between the REST client and the front ends
// ABOUTME: Recipe finder with local fallback and the admin editor flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

//! Domain service layer
//!
//! Services own the REST handle and hold the client-side copies of backend
//! data. They never render; formatters take their results as input.

/// Admin load, filter, save, and delete
pub mod admin;

/// Remote-first recipe matching with local fallback
pub mod finder;

pub use admin::{AdminEditor, Confirm, DeleteOutcome, Notifier, DELETE_PROMPT};
pub use finder::{MatchOutcome, MatchSource, RecipeFinder};
