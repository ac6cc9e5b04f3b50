// ABOUTME: Text projection of the kitchen session: fridge, counter, basket, matches, and recipe detail
// ABOUTME: Pure functions over borrowed state; nothing here mutates the session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use super::text::{display_name, numbered_steps, NOT_AVAILABLE};
use crate::kitchen::KitchenView;
use kitchen_core::basket::Basket;
use kitchen_core::catalog::{recipe_icon, FALLBACK_INGREDIENT_ICON};
use kitchen_core::models::{Ingredient, Recipe};
use kitchen_core::state::KitchenState;
use std::fmt::Write;

/// Shown instead of matches while the basket is empty
pub const EMPTY_BASKET_HINT: &str = "Drag ingredients to the basket to find recipes";

/// Shown when the basket matches nothing
pub const NO_MATCHES: &str = "No recipes match these ingredients";

/// Shown instead of selected tags while the basket is empty
pub const NONE_SELECTED: &str = "None selected";

/// `"1 ingredient selected"` / `"{n} ingredients selected"`
#[must_use]
pub fn basket_status(count: usize) -> String {
    if count == 1 {
        "1 ingredient selected".to_owned()
    } else {
        format!("{count} ingredients selected")
    }
}

fn tag(ingredient: &Ingredient) -> String {
    format!("{} {}", ingredient.icon, ingredient.name)
}

/// One tag per basket member, or [`NONE_SELECTED`]
#[must_use]
pub fn selected_line(state: &KitchenState) -> String {
    let selected = state.selected_ingredients();
    if selected.is_empty() {
        return NONE_SELECTED.to_owned();
    }
    selected
        .into_iter()
        .map(tag)
        .collect::<Vec<_>>()
        .join("  ")
}

fn marked(ingredient: &Ingredient, basket: &Basket) -> String {
    let mark = if basket.contains(ingredient.id) { "✓" } else { " " };
    format!("[{mark}] {} ({})", tag(ingredient), ingredient.id)
}

/// Current fridge page, one line per shelf
#[must_use]
pub fn render_fridge(state: &KitchenState) -> String {
    let fridge = state.fridge();
    let mut out = format!("Fridge (page {} of {})\n", fridge.page(), fridge.total_pages());
    for shelf in state.fridge_shelves() {
        let line = shelf
            .iter()
            .map(|ingredient| marked(ingredient, state.basket()))
            .collect::<Vec<_>>()
            .join("   ");
        let _ = writeln!(out, "  {line}");
    }
    out
}

/// Staged ingredients with their basket mark
#[must_use]
pub fn render_counter(state: &KitchenState) -> String {
    let counter = state.counter();
    if counter.is_empty() {
        return "Counter: empty".to_owned();
    }
    let items = counter
        .items()
        .iter()
        .map(|ingredient| marked(ingredient, state.basket()))
        .collect::<Vec<_>>()
        .join("   ");
    format!("Counter: {items}")
}

/// `In hand:` line for active drags, `None` when every pointer is idle
#[must_use]
pub fn render_drags(state: &KitchenState) -> Option<String> {
    let drags = state.drags();
    if !drags.is_active() {
        return None;
    }
    let carried = drags
        .carried()
        .map(|(pointer, ingredient)| format!("{} ({pointer})", tag(ingredient)))
        .collect::<Vec<_>>()
        .join("   ");
    Some(format!("In hand: {carried}"))
}

/// Match list card
#[must_use]
pub fn render_match_card(recipe: &Recipe, basket_size: usize) -> String {
    format!(
        "{icon} {name} [{id}]\n   {time} · {servings} servings\n   ✓ {basket_size} of {count} ingredients",
        icon = recipe_icon(&recipe.id),
        name = recipe.name,
        id = recipe.id,
        time = recipe.time.total.as_deref().unwrap_or(NOT_AVAILABLE),
        servings = recipe
            .servings
            .map_or_else(|| "?".to_owned(), |s| s.to_string()),
        count = recipe.ingredients.len(),
    )
}

/// Matches as cards, or the placeholder for the current basket
#[must_use]
pub fn render_matches(matches: &[Recipe], basket: &Basket) -> String {
    if matches.is_empty() {
        let hint = if basket.is_empty() {
            EMPTY_BASKET_HINT
        } else {
            NO_MATCHES
        };
        return hint.to_owned();
    }
    matches
        .iter()
        .map(|recipe| render_match_card(recipe, basket.len()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Recipe detail with matched ingredients marked
#[must_use]
pub fn render_kitchen_detail(recipe: &Recipe, state: &KitchenState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", recipe_icon(&recipe.id), recipe.name);
    let _ = writeln!(
        out,
        "Prep: {}  Cook: {}  Serves: {}",
        recipe.time.prep.as_deref().unwrap_or(NOT_AVAILABLE),
        recipe.time.total.as_deref().unwrap_or(NOT_AVAILABLE),
        recipe
            .servings
            .map_or_else(|| NOT_AVAILABLE.to_owned(), |s| s.to_string()),
    );

    out.push_str("\nIngredients\n");
    for ingredient in recipe.ingredients.iter() {
        let key = ingredient.name.to_lowercase();
        let icon = state
            .catalog()
            .get(&key)
            .map_or(FALLBACK_INGREDIENT_ICON, |i| i.icon);
        let mark = if state.basket().contains(&key) { " ✓" } else { "" };
        let amount = ingredient.quantity().unwrap_or_default();
        let line = format!("  {icon} {} {amount}", display_name(&ingredient.name));
        let _ = writeln!(out, "{}{mark}", line.trim_end());
    }

    out.push_str("\nInstructions\n");
    for step in numbered_steps(&recipe.steps) {
        let _ = writeln!(out, "  {step}");
    }

    if !recipe.materials.is_empty() {
        let materials = recipe
            .materials
            .iter()
            .map(|m| display_name(m))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "\nEquipment\n  {materials}");
    }
    out
}

/// Whole kitchen screen
#[must_use]
pub fn render_kitchen(view: &KitchenView<'_>) -> String {
    let state = view.state;
    if let Some(recipe) = state.opened() {
        return render_kitchen_detail(recipe, state);
    }

    let mut out = render_fridge(state);
    let _ = writeln!(out, "\n{}", render_counter(state));
    if let Some(drags) = render_drags(state) {
        let _ = writeln!(out, "{drags}");
    }
    let _ = writeln!(
        out,
        "Basket: {} ({})",
        selected_line(state),
        basket_status(state.basket().len())
    );
    let _ = writeln!(out, "\nRecipes\n{}", render_matches(view.matches, state.basket()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitchen_core::drag::{DropTarget, PointerId};

    fn pizza() -> Recipe {
        Recipe::new("pizza", "pizza")
            .with_ingredient("tomato", "2", "")
            .with_ingredient("cheese", "200", "g")
            .with_ingredient("dough", "1", "ball")
            .with_ingredient("olive_oil", "", "")
            .with_step("1. Stretch the dough")
            .with_step("2. Bake")
            .with_time("15 min", "30 min")
            .with_servings(4)
    }

    #[test]
    fn test_basket_status_pluralizes() {
        assert_eq!(basket_status(0), "0 ingredients selected");
        assert_eq!(basket_status(1), "1 ingredient selected");
        assert_eq!(basket_status(3), "3 ingredients selected");
    }

    #[test]
    fn test_placeholder_depends_on_basket() {
        let mut basket = Basket::new();
        assert_eq!(render_matches(&[], &basket), EMPTY_BASKET_HINT);
        basket.add("tomato");
        assert_eq!(render_matches(&[], &basket), NO_MATCHES);
    }

    #[test]
    fn test_match_card_shows_counts() {
        let card = render_match_card(&pizza(), 2);
        assert!(card.starts_with("🍕 pizza"));
        assert!(card.contains("30 min · 4 servings"));
        assert!(card.contains("✓ 2 of 4 ingredients"));

        let bare = render_match_card(&Recipe::new("stew", "stew"), 1);
        assert!(bare.starts_with("🍽️ stew"));
        assert!(bare.contains("N/A · ? servings"));
    }

    #[test]
    fn test_detail_marks_basket_ingredients() {
        let mut state = KitchenState::default();
        state.add("cheese").unwrap();
        let detail = render_kitchen_detail(&pizza(), &state);

        assert!(detail.contains("Prep: 15 min  Cook: 30 min  Serves: 4"));
        assert!(detail.contains("🧀 Cheese 200 g ✓"));
        assert!(detail.contains("🍅 Tomato 2\n"));
        assert!(detail.contains("🥄 Olive Oil\n"));
        assert!(detail.contains("  2. Bake"));
        assert!(!detail.contains("Equipment"));
    }

    #[test]
    fn test_drags_shown_while_carried() {
        let mut state = KitchenState::default();
        assert_eq!(render_drags(&state), None);

        state.drag_start(PointerId(2), "egg").unwrap();
        assert_eq!(render_drags(&state).as_deref(), Some("In hand: 🥚 Egg (pointer 2)"));

        state.drag_end(PointerId(2), DropTarget::Nowhere);
        assert_eq!(render_drags(&state), None);
    }

    #[test]
    fn test_selected_line_lists_tags() {
        let mut state = KitchenState::default();
        assert_eq!(selected_line(&state), NONE_SELECTED);
        state.add("tomato").unwrap();
        state.add("egg").unwrap();
        assert_eq!(selected_line(&state), "🍅 Tomato  🥚 Egg");
    }

    #[test]
    fn test_fridge_marks_selected_items() {
        let mut state = KitchenState::default();
        state.add("onion").unwrap();
        let fridge = render_fridge(&state);
        assert!(fridge.starts_with("Fridge (page 1 of 5)"));
        assert!(fridge.contains("[✓] 🧅 Onion (onion)"));
        assert!(fridge.contains("[ ] 🍅 Tomato (tomato)"));
    }
}
