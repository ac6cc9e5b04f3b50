// ABOUTME: Named recipe display formats for the command line: simple, sections, full, card, json, detail
// ABOUTME: Format names parse case-insensitively; json output is pretty-printed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

//! Recipe display formats
//!
//! ```rust,no_run
//! use recipe_kitchen::formatters::{render_recipe, DisplayFormat};
//! use recipe_kitchen::models::Recipe;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let recipe = Recipe::new("pizza", "pizza").with_ingredient("tomato", "2", "");
//! let format: DisplayFormat = "card".parse()?;
//! println!("{}", render_recipe(&recipe, format)?);
//! # Ok(())
//! # }
//! ```

use super::admin::render_admin_detail;
use super::text::{numbered_steps, title_case};
use kitchen_core::errors::AppResult;
use kitchen_core::models::{Recipe, RecipeIngredient};
use std::fmt::{self, Write};
use std::str::FromStr;

const WIDTH: usize = 60;
const CARD_ITEMS: usize = 5;

/// Recipe display format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFormat {
    /// Title banner with type, servings, and times
    Simple,
    /// Ingredient list only
    Ingredients,
    /// Numbered steps only
    Steps,
    /// Equipment only
    Materials,
    /// Every section, plus pairings when present
    Full,
    /// Compact boxed card
    Card,
    /// Pretty-printed JSON record
    Json,
    /// Editor detail view
    #[default]
    Detail,
}

impl DisplayFormat {
    /// Every format, in menu order
    pub const ALL: [Self; 8] = [
        Self::Simple,
        Self::Ingredients,
        Self::Steps,
        Self::Materials,
        Self::Full,
        Self::Card,
        Self::Json,
        Self::Detail,
    ];

    /// Format name as accepted on the command line
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Ingredients => "ingredients",
            Self::Steps => "steps",
            Self::Materials => "materials",
            Self::Full => "full",
            Self::Card => "card",
            Self::Json => "json",
            Self::Detail => "detail",
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(Self::as_str).collect();
                format!("unknown format '{s}', expected one of: {}", names.join(", "))
            })
    }
}

/// Render a recipe in the given format
///
/// # Errors
///
/// Returns a serialization error if the json format cannot encode the recipe
pub fn render_recipe(recipe: &Recipe, format: DisplayFormat) -> AppResult<String> {
    let text = match format {
        DisplayFormat::Simple => simple(recipe),
        DisplayFormat::Ingredients => ingredients(recipe),
        DisplayFormat::Steps => steps(recipe),
        DisplayFormat::Materials => materials(recipe),
        DisplayFormat::Full => full(recipe),
        DisplayFormat::Card => card(recipe),
        DisplayFormat::Json => serde_json::to_string_pretty(recipe)?,
        DisplayFormat::Detail => render_admin_detail(recipe),
    };
    Ok(text)
}

fn banner(out: &mut String, title: &str) {
    let rule = "=".repeat(WIDTH);
    let _ = write!(out, "{rule}\n{title}\n{rule}");
}

fn section(out: &mut String, heading: &str) {
    let rule = "─".repeat(WIDTH);
    let _ = write!(out, "\n\n{rule}\n{heading}\n{rule}");
}

fn ingredient_line(ingredient: &RecipeIngredient) -> String {
    let name = title_case(&ingredient.name);
    match ingredient.quantity() {
        Some(quantity) => format!("{name}: {quantity}"),
        None => name,
    }
}

fn push_info(out: &mut String, recipe: &Recipe) {
    let _ = write!(out, "\nType: {}", title_case(&recipe.recipe_type));
    if let Some(servings) = recipe.servings {
        let _ = write!(out, "\nServes: {servings}");
    }
    if let Some(prep) = &recipe.time.prep {
        let _ = write!(out, "\nPrep Time: {prep}");
    }
    if let Some(total) = &recipe.time.total {
        let _ = write!(out, "\nTotal Time: {total}");
    }
}

fn push_ingredients(out: &mut String, recipe: &Recipe) {
    for ingredient in recipe.ingredients.iter() {
        let _ = write!(out, "\n  • {}", ingredient_line(ingredient));
    }
}

fn push_steps(out: &mut String, recipe: &Recipe) {
    for step in numbered_steps(&recipe.steps) {
        let _ = write!(out, "\n{step}");
    }
}

fn push_materials(out: &mut String, recipe: &Recipe) {
    for material in &recipe.materials {
        let _ = write!(out, "\n  • {}", title_case(material));
    }
}

fn simple(recipe: &Recipe) -> String {
    let mut out = String::new();
    banner(&mut out, &format!("Recipe: {}", title_case(&recipe.name)));
    push_info(&mut out, recipe);
    out
}

fn ingredients(recipe: &Recipe) -> String {
    let mut out = String::new();
    banner(&mut out, &format!("Ingredients for {}", title_case(&recipe.name)));
    push_ingredients(&mut out, recipe);
    out
}

fn steps(recipe: &Recipe) -> String {
    let mut out = String::new();
    banner(&mut out, &format!("Steps for {}", title_case(&recipe.name)));
    push_steps(&mut out, recipe);
    out
}

fn materials(recipe: &Recipe) -> String {
    let mut out = String::new();
    banner(
        &mut out,
        &format!("Materials Needed for {}", title_case(&recipe.name)),
    );
    push_materials(&mut out, recipe);
    out
}

fn full(recipe: &Recipe) -> String {
    let mut out = String::new();
    banner(&mut out, &format!("{:^WIDTH$}", title_case(&recipe.name)));
    push_info(&mut out, recipe);

    section(&mut out, "INGREDIENTS:");
    push_ingredients(&mut out, recipe);
    section(&mut out, "STEPS:");
    push_steps(&mut out, recipe);
    section(&mut out, "MATERIALS NEEDED:");
    push_materials(&mut out, recipe);

    if !recipe.combos.is_empty() {
        section(&mut out, "GOES WELL WITH:");
        for combo in &recipe.combos {
            let _ = write!(out, "\n  • {combo}");
        }
    }
    out
}

fn card(recipe: &Recipe) -> String {
    let edge = "─".repeat(WIDTH - 2);
    let mut lines = vec![
        format!("┌{edge}┐"),
        format!("│ {:<56} │", title_case(&recipe.name)),
        format!("├{edge}┤"),
        format!("│ Type: {:<50} │", title_case(&recipe.recipe_type)),
    ];
    if let Some(servings) = recipe.servings {
        lines.push(format!("│ Serves: {servings:<48} │"));
    }
    if let Some(time) = recipe.time.total_or_prep() {
        lines.push(format!("│ Time: {time:<50} │"));
    }
    lines.push(format!("├{edge}┤"));
    lines.push(format!("│ {:<56} │", "Ingredients:"));
    for ingredient in recipe.ingredients.iter().take(CARD_ITEMS) {
        lines.push(format!("│   • {:<52} │", ingredient_line(ingredient)));
    }
    let hidden = recipe.ingredients.len().saturating_sub(CARD_ITEMS);
    if hidden > 0 {
        lines.push(format!("│   {:<54} │", format!("... and {hidden} more")));
    }
    lines.push(format!("└{edge}┘"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cake() -> Recipe {
        Recipe::new("sweet_potato_cake", "sweet potato cake")
            .with_type("dessert")
            .with_ingredient("sweet_potato", "2", "cups")
            .with_ingredient("flour", "1", "cup")
            .with_step("1. Mash the potatoes")
            .with_step("2. Fold in flour")
            .with_time("20 min", "1 hour")
            .with_servings(8)
            .with_material("oven")
    }

    #[test]
    fn test_format_names_parse() {
        assert_eq!("CARD".parse::<DisplayFormat>().unwrap(), DisplayFormat::Card);
        for format in DisplayFormat::ALL {
            assert_eq!(format.as_str().parse::<DisplayFormat>().unwrap(), format);
        }
        assert!("xml".parse::<DisplayFormat>().is_err());
    }

    #[test]
    fn test_simple_banner() {
        let text = render_recipe(&cake(), DisplayFormat::Simple).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "=".repeat(60));
        assert_eq!(lines[1], "Recipe: Sweet Potato Cake");
        assert_eq!(
            &lines[3..],
            ["Type: Dessert", "Serves: 8", "Prep Time: 20 min", "Total Time: 1 hour"]
        );
    }

    #[test]
    fn test_full_includes_pairings_only_when_present() {
        let text = render_recipe(&cake(), DisplayFormat::Full).unwrap();
        assert!(text.contains("INGREDIENTS:\n"));
        assert!(text.contains("  • Sweet_Potato: 2 cups"));
        assert!(text.contains("2. Fold in flour"));
        assert!(text.contains("  • Oven"));
        assert!(!text.contains("GOES WELL WITH:"));

        let mut paired = cake();
        paired.combos.push("vanilla ice cream".into());
        let text = render_recipe(&paired, DisplayFormat::Full).unwrap();
        assert!(text.contains("GOES WELL WITH:"));
        assert!(text.contains("  • vanilla ice cream"));
    }

    #[test]
    fn test_card_lines_share_width() {
        let text = render_recipe(&cake(), DisplayFormat::Card).unwrap();
        for line in text.lines() {
            assert_eq!(line.chars().count(), 60, "{line}");
        }
        assert!(text.contains("│ Time: 1 hour"));
    }

    #[test]
    fn test_card_truncates_ingredients() {
        let recipe = (1..=7).fold(Recipe::new("mix", "mix"), |r, n| {
            r.with_ingredient(format!("item{n}"), "", "")
        });
        let text = render_recipe(&recipe, DisplayFormat::Card).unwrap();
        assert!(text.contains("• Item5"));
        assert!(!text.contains("• Item6"));
        assert!(text.contains("... and 2 more"));
    }

    #[test]
    fn test_json_is_pretty() {
        let text = render_recipe(&cake(), DisplayFormat::Json).unwrap();
        assert!(text.starts_with("{\n  \"id\": \"sweet_potato_cake\""));
    }
}
