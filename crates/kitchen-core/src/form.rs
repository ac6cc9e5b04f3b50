// ABOUTME: Admin recipe form and its normalization into a Recipe record
// ABOUTME: Lowercasing, slug ids, ordinal step labels, and default image filenames
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeIngredient, RecipeIngredients, RecipeTime, DEFAULT_RECIPE_TYPE};

/// One ingredient row of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientRow {
    /// Ingredient name
    pub name: String,
    /// Amount text
    pub amount: String,
    /// Unit text
    pub unit: String,
}

impl IngredientRow {
    /// Build a row
    pub fn new(name: impl Into<String>, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
        }
    }

    /// Parse `"name:amount:unit"`; amount and unit may be omitted
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let mut parts = spec.splitn(3, ':');
        Self::new(
            parts.next().unwrap_or_default(),
            parts.next().unwrap_or_default(),
            parts.next().unwrap_or_default(),
        )
    }
}

/// Raw contents of the add/edit recipe form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    /// Display name as typed
    pub name: String,
    /// Course type
    pub recipe_type: String,
    /// Servings as typed
    pub servings: String,
    /// Preparation time
    pub prep_time: String,
    /// Total time
    pub total_time: String,
    /// Image filename, blank for the default
    pub image: String,
    /// Ingredient rows, blank names are dropped
    pub ingredients: Vec<IngredientRow>,
    /// Step rows without ordinal labels
    pub steps: Vec<String>,
    /// Equipment rows
    pub materials: Vec<String>,
}

impl RecipeForm {
    /// Fresh form for a new recipe: one empty ingredient row and one empty step row
    #[must_use]
    pub fn blank() -> Self {
        Self {
            recipe_type: DEFAULT_RECIPE_TYPE.to_owned(),
            servings: "1".to_owned(),
            ingredients: vec![IngredientRow::default()],
            steps: vec![String::new()],
            ..Self::default()
        }
    }

    /// Form pre-filled from a stored recipe, step labels stripped
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            recipe_type: recipe.recipe_type.clone(),
            servings: recipe.servings.unwrap_or(1).to_string(),
            prep_time: recipe.time.prep.clone().unwrap_or_default(),
            total_time: recipe.time.total.clone().unwrap_or_default(),
            image: recipe.image.clone().unwrap_or_default(),
            ingredients: recipe
                .ingredients
                .iter()
                .map(|i| IngredientRow::new(&i.name, &i.amount, &i.unit))
                .collect(),
            steps: recipe
                .steps
                .iter()
                .map(|s| strip_ordinal(s).to_owned())
                .collect(),
            materials: recipe.materials.clone(),
        }
    }

    /// Normalize into the record sent to the backend
    ///
    /// `editing_id` is the id of the recipe being edited; `None` creates a new
    /// recipe whose id is the slug of its name.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when the name is blank.
    pub fn normalize(&self, editing_id: Option<&str>) -> AppResult<Recipe> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Recipe name is required"));
        }
        let slug = slugify(name);

        let ingredients: RecipeIngredients = self
            .ingredients
            .iter()
            .filter(|row| !row.name.trim().is_empty())
            .map(|row| {
                RecipeIngredient::new(
                    row.name.trim().to_lowercase(),
                    row.amount.trim(),
                    row.unit.trim(),
                )
            })
            .collect();

        let steps = self
            .steps
            .iter()
            .enumerate()
            .filter(|(_, step)| !step.trim().is_empty())
            .map(|(idx, step)| label_step(idx + 1, step.trim()))
            .collect();

        let materials = self
            .materials
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_lowercase)
            .collect();

        let recipe_type = match self.recipe_type.trim() {
            "" => DEFAULT_RECIPE_TYPE.to_owned(),
            other => other.to_owned(),
        };

        let image = match self.image.trim() {
            "" => format!("{slug}.jpg"),
            other => other.to_owned(),
        };

        Ok(Recipe {
            id: editing_id.map_or(slug, str::to_owned),
            name: name.to_lowercase(),
            recipe_type,
            ingredients,
            steps,
            time: RecipeTime::new(self.prep_time.trim(), self.total_time.trim()),
            servings: Some(parse_servings(&self.servings)),
            materials,
            image: Some(image),
            combos: Vec::new(),
        })
    }
}

/// Lowercase the name and collapse whitespace runs into underscores
#[must_use]
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Prefix a step with its 1-based ordinal
#[must_use]
pub fn label_step(ordinal: usize, text: &str) -> String {
    format!("{ordinal}. {text}")
}

/// Remove a leading `"<digits>."` label and the whitespace after it
#[must_use]
pub fn strip_ordinal(step: &str) -> &str {
    let digits = step.len() - step.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return step;
    }
    step[digits..]
        .strip_prefix('.')
        .map_or(step, str::trim_start)
}

fn parse_servings(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_new_recipe_gets_slug_id_and_lowercase_name() {
        let form = RecipeForm {
            name: "Tomato Soup".into(),
            ..RecipeForm::blank()
        };
        let recipe = form.normalize(None).unwrap();

        assert_eq!(recipe.id, "tomato_soup");
        assert_eq!(recipe.name, "tomato soup");
        assert_eq!(recipe.image.as_deref(), Some("tomato_soup.jpg"));
        assert_eq!(recipe.servings, Some(1));
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn test_editing_preserves_id() {
        let form = RecipeForm {
            name: "Grandma's Soup".into(),
            ..RecipeForm::blank()
        };
        let recipe = form.normalize(Some("soup")).unwrap();
        assert_eq!(recipe.id, "soup");
        assert_eq!(recipe.name, "grandma's soup");
    }

    #[test]
    fn test_rows_are_trimmed_lowercased_and_labelled() {
        let form = RecipeForm {
            name: "  Pizza ".into(),
            recipe_type: "main".into(),
            servings: "4".into(),
            prep_time: "20 min".into(),
            total_time: "45 min".into(),
            image: "custom.png".into(),
            ingredients: vec![
                IngredientRow::new(" Tomato ", " 2 ", ""),
                IngredientRow::new("   ", "1", "cup"),
                IngredientRow::new("CHEESE", "200", "g"),
            ],
            steps: vec!["Make dough".into(), "  ".into(), " Bake ".into()],
            materials: vec!["Oven".into(), String::new()],
        };
        let recipe = form.normalize(None).unwrap();

        let names: Vec<&str> = recipe.ingredients.names().collect();
        assert_eq!(names, vec!["tomato", "cheese"]);
        assert_eq!(recipe.ingredients.iter().next().unwrap().amount, "2");
        assert_eq!(recipe.steps, vec!["1. Make dough", "3. Bake"]);
        assert_eq!(recipe.materials, vec!["oven"]);
        assert_eq!(recipe.image.as_deref(), Some("custom.png"));
        assert_eq!(recipe.servings, Some(4));
        assert_eq!(recipe.time.prep.as_deref(), Some("20 min"));
        assert_eq!(recipe.time.total.as_deref(), Some("45 min"));
        assert!(recipe.combos.is_empty());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = RecipeForm::blank().normalize(None).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_unparsable_servings_default_to_one() {
        let form = RecipeForm {
            name: "Toast".into(),
            servings: "a few".into(),
            ..RecipeForm::blank()
        };
        assert_eq!(form.normalize(None).unwrap().servings, Some(1));
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("Sweet  Potato\tCake"), "sweet_potato_cake");
    }

    #[test]
    fn test_strip_ordinal() {
        assert_eq!(strip_ordinal("1. Boil water"), "Boil water");
        assert_eq!(strip_ordinal("12.Stir"), "Stir");
        assert_eq!(strip_ordinal("Boil water"), "Boil water");
        assert_eq!(strip_ordinal("2 eggs"), "2 eggs");
    }

    #[test]
    fn test_edit_round_trip_keeps_steps_stable() {
        let stored = Recipe::new("omelette", "omelette")
            .with_ingredient("egg", "3", "")
            .with_step("1. Whisk eggs")
            .with_step("2. Fry")
            .with_time("5 min", "10 min")
            .with_servings(1);

        let form = RecipeForm::from_recipe(&stored);
        assert_eq!(form.steps, vec!["Whisk eggs", "Fry"]);

        let saved = form.normalize(Some("omelette")).unwrap();
        assert_eq!(saved.steps, stored.steps);
        assert_eq!(saved.ingredients, stored.ingredients);
        assert_eq!(saved.time, stored.time);
    }
}
