// ABOUTME: Recipe management commands for recipe-kitchen
// ABOUTME: Handles list, show, add, edit, and delete through the admin editor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use anyhow::{anyhow, Context, Result};
use kitchen_core::form::{IngredientRow, RecipeForm};
use recipe_kitchen::api::{HttpRecipeApi, RecipeApi};
use recipe_kitchen::config::ClientConfig;
use recipe_kitchen::formatters::{render_admin_grid, render_recipe, DisplayFormat};
use recipe_kitchen::services::{AdminEditor, Confirm, DeleteOutcome};
use std::sync::Arc;
use tracing::info;

use crate::helpers::display::{print_saved, print_view};
use crate::helpers::prompt::{AssumeYes, StderrNotifier, StdinConfirm};
use crate::RecipeFields;

fn connect(config: &ClientConfig) -> Result<Arc<dyn RecipeApi>> {
    let api = HttpRecipeApi::new(config).context("Failed to build HTTP client")?;
    Ok(Arc::new(api))
}

fn editor(config: &ClientConfig) -> Result<AdminEditor> {
    Ok(AdminEditor::new(connect(config)?, Arc::new(StderrNotifier)))
}

/// List recipes, optionally filtered
pub async fn list(
    config: &ClientConfig,
    search: Option<&str>,
    recipe_type: Option<&str>,
) -> Result<()> {
    let mut editor = editor(config)?;
    editor.load().await.context("Error loading recipes")?;

    let shown = editor.filter(search.unwrap_or_default(), recipe_type);
    info!(
        total = editor.recipes().len(),
        shown = shown.len(),
        "Recipes listed"
    );
    print_view(&render_admin_grid(shown));
    Ok(())
}

/// Show one recipe in the chosen format
pub async fn show(config: &ClientConfig, id: &str, format: DisplayFormat) -> Result<()> {
    let api = connect(config)?;
    let recipe = api
        .get_recipe(id)
        .await
        .with_context(|| format!("Error loading recipe '{id}'"))?;
    print_view(&render_recipe(&recipe, format)?);
    Ok(())
}

fn apply_fields(form: &mut RecipeForm, fields: RecipeFields) {
    if let Some(recipe_type) = fields.recipe_type {
        form.recipe_type = recipe_type;
    }
    if let Some(servings) = fields.servings {
        form.servings = servings;
    }
    if let Some(prep) = fields.prep {
        form.prep_time = prep;
    }
    if let Some(total) = fields.total {
        form.total_time = total;
    }
    if let Some(image) = fields.image {
        form.image = image;
    }
    if !fields.ingredients.is_empty() {
        form.ingredients = fields
            .ingredients
            .iter()
            .map(String::as_str)
            .map(IngredientRow::parse)
            .collect();
    }
    if !fields.steps.is_empty() {
        form.steps = fields.steps;
    }
    if !fields.materials.is_empty() {
        form.materials = fields.materials;
    }
}

/// Create a recipe
pub async fn add(config: &ClientConfig, name: String, fields: RecipeFields) -> Result<()> {
    let mut editor = editor(config)?;
    let form = editor.open_add();
    form.name = name;
    apply_fields(form, fields);

    let saved = editor.save().await.context("Recipe was not saved")?;
    print_saved("created", &saved.id);
    Ok(())
}

/// Edit a recipe; options left out keep the stored values
pub async fn edit(
    config: &ClientConfig,
    id: &str,
    name: Option<String>,
    fields: RecipeFields,
) -> Result<()> {
    let mut editor = editor(config)?;
    editor.load().await.context("Error loading recipes")?;

    let form = editor
        .open_edit(id)
        .ok_or_else(|| anyhow!("Recipe '{id}' not found"))?;
    if let Some(name) = name {
        form.name = name;
    }
    apply_fields(form, fields);

    let saved = editor.save().await.context("Recipe was not saved")?;
    print_saved("updated", &saved.id);
    Ok(())
}

/// Delete a recipe after confirmation
pub async fn delete(config: &ClientConfig, id: &str, yes: bool) -> Result<()> {
    let mut editor = editor(config)?;
    let confirm: &dyn Confirm = if yes { &AssumeYes } else { &StdinConfirm };

    match editor
        .delete(id, confirm)
        .await
        .context("Recipe was not deleted")?
    {
        DeleteOutcome::Cancelled => println!("Cancelled."),
        DeleteOutcome::Deleted => print_saved("deleted", id),
    }
    Ok(())
}
