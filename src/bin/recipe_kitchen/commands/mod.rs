// ABOUTME: Re-exports command modules for recipe-kitchen
// ABOUTME: Provides access to health, recipe management, and kitchen session commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

pub mod health;
pub mod kitchen;
pub mod recipes;
