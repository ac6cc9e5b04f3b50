// ABOUTME: Small text helpers shared by the kitchen, admin, and display renderers
// ABOUTME: Casing rules for names and the numbered step list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use kitchen_core::form::strip_ordinal;

/// Text shown for unknown times and prep values
pub const NOT_AVAILABLE: &str = "N/A";

/// Uppercase the first letter of every word, lowercase the rest
///
/// A word starts after any non-alphabetic character, so `"ice_cream"` becomes
/// `"Ice_Cream"` and `"o'brien"` becomes `"O'Brien"`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}

/// Ingredient key as a display name: underscores become spaces, words capitalized
#[must_use]
pub fn display_name(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut word_start = true;
    for c in spaced.chars() {
        if word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = !c.is_alphanumeric();
    }
    out
}

/// Uppercase only the first character
#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Steps renumbered from 1 after dropping any stored ordinal label
pub fn numbered_steps(steps: &[String]) -> impl Iterator<Item = String> + '_ {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, strip_ordinal(step)))
}
