// ABOUTME: Admin views of the recipe collection: grid of cards and a recipe detail
// ABOUTME: Missing servings show as 1 and missing times as N/A
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use super::text::{capitalize_first, numbered_steps, NOT_AVAILABLE};
use kitchen_core::models::{Recipe, RecipeIngredient};
use std::fmt::Write;

/// Grid text for an empty list
pub const NO_RECIPES_FOUND: &str = "No recipes found";

/// Ingredient tags shown on a card before the `+k more` tag
pub const CARD_INGREDIENT_LIMIT: usize = 5;

fn servings_or_one(recipe: &Recipe) -> u32 {
    recipe.servings.unwrap_or(1)
}

fn ingredient_tag(ingredient: &RecipeIngredient) -> String {
    let name = capitalize_first(&ingredient.name);
    match ingredient.quantity() {
        Some(quantity) => format!("{name}: {quantity}"),
        None => name,
    }
}

/// One grid card
#[must_use]
pub fn render_admin_card(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) [{}]",
        capitalize_first(&recipe.name),
        recipe.recipe_type,
        recipe.id
    );
    let _ = writeln!(
        out,
        "  👥 {} servings  ⏱️ {}",
        servings_or_one(recipe),
        recipe.time.total_or_prep().unwrap_or(NOT_AVAILABLE)
    );

    let mut tags: Vec<String> = recipe
        .ingredients
        .iter()
        .take(CARD_INGREDIENT_LIMIT)
        .map(ingredient_tag)
        .collect();
    let hidden = recipe.ingredients.len().saturating_sub(CARD_INGREDIENT_LIMIT);
    if hidden > 0 {
        tags.push(format!("+{hidden} more"));
    }
    let _ = write!(out, "  Ingredients: {}", tags.join(", "));
    out
}

/// Every recipe as a card, or [`NO_RECIPES_FOUND`]
#[must_use]
pub fn render_admin_grid<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> String {
    let cards: Vec<String> = recipes.into_iter().map(render_admin_card).collect();
    if cards.is_empty() {
        NO_RECIPES_FOUND.to_owned()
    } else {
        cards.join("\n\n")
    }
}

/// Full recipe as shown by the editor
#[must_use]
pub fn render_admin_detail(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", capitalize_first(&recipe.name));
    let _ = writeln!(
        out,
        "Type: {}  Servings: {}  Prep: {}  Total: {}",
        capitalize_first(&recipe.recipe_type),
        servings_or_one(recipe),
        recipe.time.prep.as_deref().unwrap_or(NOT_AVAILABLE),
        recipe.time.total_or_prep().unwrap_or(NOT_AVAILABLE),
    );

    out.push_str("\nIngredients\n");
    for ingredient in recipe.ingredients.iter() {
        let line = format!(
            "  {}  {} {}",
            capitalize_first(&ingredient.name),
            ingredient.amount,
            ingredient.unit
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }

    out.push_str("\nSteps\n");
    for step in numbered_steps(&recipe.steps) {
        let _ = writeln!(out, "  {step}");
    }

    if !recipe.materials.is_empty() {
        out.push_str("\nMaterials Needed\n");
        for material in &recipe.materials {
            let _ = writeln!(out, "  {}", capitalize_first(material));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_limits_ingredient_tags() {
        let recipe = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .fold(Recipe::new("stew", "beef stew"), |r, name| {
                r.with_ingredient(*name, "1", "cup")
            });
        let card = render_admin_card(&recipe);

        assert!(card.starts_with("Beef stew (main) [stew]"));
        assert!(card.contains("👥 1 servings  ⏱️ N/A"));
        assert!(card.contains("A: 1 cup, B: 1 cup"));
        assert!(card.contains("E: 1 cup, +2 more"));
        assert!(!card.contains("F: 1 cup"));
    }

    #[test]
    fn test_card_time_falls_back_to_prep() {
        let recipe = Recipe::new("toast", "toast").with_time("5 min", "");
        assert!(render_admin_card(&recipe).contains("⏱️ 5 min"));
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(render_admin_grid(&Vec::<Recipe>::new()), NO_RECIPES_FOUND);
    }

    #[test]
    fn test_detail_omits_empty_materials() {
        let recipe = Recipe::new("toast", "toast")
            .with_type("breakfast")
            .with_ingredient("bread", "2", "slices")
            .with_step("1. Toast the bread");
        let detail = render_admin_detail(&recipe);

        assert!(detail.contains("Type: Breakfast  Servings: 1  Prep: N/A  Total: N/A"));
        assert!(detail.contains("  Bread  2 slices"));
        assert!(detail.contains("  1. Toast the bread"));
        assert!(!detail.contains("Materials Needed"));

        let with_pan = render_admin_detail(&recipe.with_material("pan"));
        assert!(with_pan.contains("Materials Needed\n  Pan"));
    }
}
