// ABOUTME: Output helpers for recipe-kitchen
// ABOUTME: Separates rendered views on stdout and prints the kitchen prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use std::io::{self, Write};

/// Print a rendered view followed by a blank line
pub fn print_view(text: &str) {
    println!("{}\n", text.trim_end());
}

/// Print the kitchen prompt without a newline
pub fn print_prompt() {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "kitchen> ");
    let _ = stdout.flush();
}

/// Short confirmation line after a write
pub fn print_saved(action: &str, id: &str) {
    println!("Recipe '{id}' {action}.");
}
