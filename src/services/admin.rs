// ABOUTME: Admin editor flow: load, filter, add, edit, save, and delete recipes
// ABOUTME: Server is authoritative; successful writes refetch and failures leave local state untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

//! Admin editor
//!
//! The editor keeps the last list fetched from the backend and at most one
//! open form. Writes never patch the local list: after a successful save or
//! delete the list is fetched again. User interaction that the browser did
//! with `confirm()` and `alert()` goes through the [`Confirm`] and
//! [`Notifier`] seams.

use crate::api::{ApiError, RecipeApi};
use kitchen_core::errors::{AppError, AppResult};
use kitchen_core::form::RecipeForm;
use kitchen_core::models::Recipe;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Question asked before a delete is sent
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this recipe?";

/// Asks the user a yes/no question
pub trait Confirm {
    /// True when the user accepts
    fn confirm(&self, prompt: &str) -> bool;
}

/// Shows a blocking message to the user
pub trait Notifier: Send + Sync {
    /// Display an error alert
    fn alert(&self, message: &str);
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// User declined; nothing was sent
    Cancelled,
    /// Backend removed the recipe and the list was refetched
    Deleted,
}

/// Filter over the loaded list: search term in the name or any ingredient key
/// (case-insensitive), and an exact type match when a type is given
#[must_use]
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    search: &str,
    recipe_type: Option<&str>,
) -> Vec<&'a Recipe> {
    let term = search.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| {
            recipe.name.to_lowercase().contains(&term)
                || recipe
                    .ingredients
                    .names()
                    .any(|name| name.to_lowercase().contains(&term))
        })
        .filter(|recipe| match recipe_type {
            Some(t) if !t.is_empty() => recipe.recipe_type == t,
            _ => true,
        })
        .collect()
}

/// Admin editor state and actions
pub struct AdminEditor {
    api: Arc<dyn RecipeApi>,
    notifier: Arc<dyn Notifier>,
    recipes: Vec<Recipe>,
    form: Option<RecipeForm>,
    editing_id: Option<String>,
}

impl AdminEditor {
    /// Editor with an empty list
    #[must_use]
    pub fn new(api: Arc<dyn RecipeApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            recipes: Vec::new(),
            form: None,
            editing_id: None,
        }
    }

    /// Fetch all recipes and replace the local list
    ///
    /// # Errors
    ///
    /// Returns the API error; the previous list is kept
    pub async fn load(&mut self) -> Result<&[Recipe], ApiError> {
        match self.api.list_recipes().await {
            Ok(recipes) => {
                self.recipes = recipes;
                Ok(&self.recipes)
            }
            Err(e) => {
                error!(error = %e, "Error loading recipes");
                Err(e)
            }
        }
    }

    /// Last fetched list
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Filter the loaded list
    #[must_use]
    pub fn filter(&self, search: &str, recipe_type: Option<&str>) -> Vec<&Recipe> {
        filter_recipes(&self.recipes, search, recipe_type)
    }

    /// Loaded recipe by id
    #[must_use]
    pub fn show(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Open a blank form for a new recipe
    pub fn open_add(&mut self) -> &mut RecipeForm {
        self.editing_id = None;
        self.form.insert(RecipeForm::blank())
    }

    /// Open a form filled from a loaded recipe; unknown ids leave the editor unchanged
    pub fn open_edit(&mut self, id: &str) -> Option<&mut RecipeForm> {
        let form = RecipeForm::from_recipe(self.show(id)?);
        self.editing_id = Some(id.to_owned());
        Some(self.form.insert(form))
    }

    /// The open form, if any
    pub fn form_mut(&mut self) -> Option<&mut RecipeForm> {
        self.form.as_mut()
    }

    /// Id of the recipe being edited; `None` while adding
    #[must_use]
    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    /// Discard the open form
    pub fn close_form(&mut self) {
        self.form = None;
        self.editing_id = None;
    }

    /// Normalize and persist the open form
    ///
    /// Creates when adding and replaces when editing. On success the form is
    /// closed and the list refetched; on failure the user is alerted and the
    /// form stays open.
    ///
    /// # Errors
    ///
    /// Returns an error if no form is open, the form is invalid, or the
    /// backend rejects the write
    pub async fn save(&mut self) -> AppResult<Recipe> {
        let form = self
            .form
            .as_ref()
            .ok_or_else(|| AppError::invalid_input("No recipe form is open"))?;

        let recipe = match form.normalize(self.editing_id.as_deref()) {
            Ok(recipe) => recipe,
            Err(e) => {
                self.notifier
                    .alert(&format!("Error saving recipe: {}", e.message));
                return Err(e);
            }
        };

        let result = match self.editing_id.as_deref() {
            Some(id) => self.api.update_recipe(id, &recipe).await,
            None => self.api.create_recipe(&recipe).await,
        };

        if let Err(e) = result {
            error!(recipe_id = %recipe.id, error = %e, "Error saving recipe");
            self.notifier.alert(&e.alert("saving recipe"));
            return Err(e.into());
        }

        info!(recipe_id = %recipe.id, "Recipe saved");
        self.close_form();
        self.refetch().await;
        Ok(recipe)
    }

    /// Delete a recipe after the user confirms
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the delete; the list is unchanged
    pub async fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> AppResult<DeleteOutcome> {
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(e) = self.api.delete_recipe(id).await {
            error!(recipe_id = %id, error = %e, "Error deleting recipe");
            self.notifier.alert(&e.alert("deleting recipe"));
            return Err(e.into());
        }

        info!(recipe_id = %id, "Recipe deleted");
        self.refetch().await;
        Ok(DeleteOutcome::Deleted)
    }

    async fn refetch(&mut self) {
        if let Err(e) = self.load().await {
            warn!(error = %e, "Recipe list may be stale");
        }
    }
}
