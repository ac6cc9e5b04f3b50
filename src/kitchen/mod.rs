// ABOUTME: Kitchen matcher front end: events in, state transitions, match refresh, view out
// ABOUTME: The controller is the single owner of basket, counter, drags, and matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

/// Kitchen controller and render snapshot
pub mod controller;

/// Kitchen gestures
pub mod events;

/// Typed session commands
pub mod input;

pub use controller::{KitchenController, KitchenView};
pub use events::KitchenEvent;
pub use input::{parse_input, InputError, SessionInput, HELP};
