// ABOUTME: Re-exports helper modules for recipe-kitchen
// ABOUTME: Provides terminal prompts, alerts, and output helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

pub mod display;
pub mod prompt;
