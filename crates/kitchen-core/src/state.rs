// ABOUTME: Kitchen application state and its synchronous transitions
// ABOUTME: Basket, counter, fridge page, drag sessions, and the open recipe owned in one struct
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

//! Every transition returns a [`StateChange`] telling the caller what to do
//! next: nothing, re-render, or recompute matches and re-render. Removal and
//! clear always ask for a recompute, even when nothing was removed; an add of
//! an existing member asks for nothing.

use crate::basket::{Basket, Counter};
use crate::catalog::{FridgePager, IngredientCatalog, DEFAULT_ITEMS_PER_PAGE};
use crate::drag::{DragError, DragSessions, DropTarget, PointerId};
use crate::models::{Ingredient, Recipe};
use thiserror::Error;

/// What a transition changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// Nothing visible changed
    Unchanged,
    /// Re-render without touching the match list
    View,
    /// Basket changed: recompute matches, then re-render
    Selection,
}

impl StateChange {
    /// Whether the match list must be recomputed
    #[must_use]
    pub const fn needs_match(self) -> bool {
        matches!(self, Self::Selection)
    }

    /// Whether the view must be re-rendered
    #[must_use]
    pub const fn needs_render(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Rejected kitchen transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KitchenError {
    /// Id is not in the ingredient catalog
    #[error("unknown ingredient '{0}'")]
    UnknownIngredient(String),
    /// Promotion of an ingredient that is not staged
    #[error("'{0}' is not on the counter")]
    NotOnCounter(String),
    /// Only recipes in the current match list can be opened
    #[error("recipe '{0}' is not among the current matches")]
    RecipeNotListed(String),
    /// Drag session rejected the gesture
    #[error(transparent)]
    Drag(#[from] DragError),
}

/// The whole kitchen session
#[derive(Debug, Clone)]
pub struct KitchenState {
    catalog: IngredientCatalog,
    basket: Basket,
    counter: Counter,
    fridge: FridgePager,
    drags: DragSessions,
    open_recipe: Option<Recipe>,
}

impl KitchenState {
    /// Fresh session: empty basket and counter, fridge on page 1
    #[must_use]
    pub fn new(catalog: IngredientCatalog, items_per_page: usize) -> Self {
        Self {
            fridge: FridgePager::new(&catalog, items_per_page),
            catalog,
            basket: Basket::new(),
            counter: Counter::new(),
            drags: DragSessions::new(),
            open_recipe: None,
        }
    }

    fn lookup(&self, id: &str) -> Result<&'static Ingredient, KitchenError> {
        self.catalog
            .get(id)
            .ok_or_else(|| KitchenError::UnknownIngredient(id.to_owned()))
    }

    /// Put an ingredient in the basket
    ///
    /// # Errors
    ///
    /// Returns [`KitchenError::UnknownIngredient`] for ids outside the catalog.
    pub fn add(&mut self, id: &str) -> Result<StateChange, KitchenError> {
        let ingredient = self.lookup(id)?;
        Ok(self.add_ingredient(ingredient))
    }

    fn add_ingredient(&mut self, ingredient: &Ingredient) -> StateChange {
        if self.basket.add(ingredient.id) {
            StateChange::Selection
        } else {
            StateChange::Unchanged
        }
    }

    /// Take an ingredient out of the basket
    ///
    /// # Errors
    ///
    /// Returns [`KitchenError::UnknownIngredient`] for ids outside the catalog.
    pub fn remove(&mut self, id: &str) -> Result<StateChange, KitchenError> {
        let ingredient = self.lookup(id)?;
        self.basket.remove(ingredient.id);
        Ok(StateChange::Selection)
    }

    /// Empty basket and counter together
    pub fn clear(&mut self) -> StateChange {
        self.basket.clear();
        self.counter.clear();
        StateChange::Selection
    }

    /// Stage an ingredient on the counter
    ///
    /// # Errors
    ///
    /// Returns [`KitchenError::UnknownIngredient`] for ids outside the catalog.
    pub fn place_on_counter(&mut self, id: &str) -> Result<StateChange, KitchenError> {
        let ingredient = self.lookup(id)?;
        Ok(self.stage(*ingredient))
    }

    fn stage(&mut self, ingredient: Ingredient) -> StateChange {
        if self.counter.place(ingredient) {
            StateChange::View
        } else {
            StateChange::Unchanged
        }
    }

    /// Take an ingredient off the counter
    pub fn remove_from_counter(&mut self, id: &str) -> StateChange {
        if self.counter.remove(id) {
            StateChange::View
        } else {
            StateChange::Unchanged
        }
    }

    /// Move a staged ingredient into the basket; it stays on the counter
    ///
    /// # Errors
    ///
    /// Returns [`KitchenError::NotOnCounter`] when the id is not staged.
    pub fn promote(&mut self, id: &str) -> Result<StateChange, KitchenError> {
        if !self.counter.contains(id) {
            return Err(KitchenError::NotOnCounter(id.to_owned()));
        }
        let ingredient = self.lookup(id)?;
        Ok(self.add_ingredient(ingredient))
    }

    /// Pick an ingredient up with a pointer
    ///
    /// # Errors
    ///
    /// Fails for unknown ids and for pointers already carrying something.
    pub fn drag_start(&mut self, pointer: PointerId, id: &str) -> Result<StateChange, KitchenError> {
        let ingredient = *self.lookup(id)?;
        self.drags.start(pointer, ingredient)?;
        Ok(StateChange::View)
    }

    /// Release a pointer over a resolved target
    pub fn drag_end(&mut self, pointer: PointerId, target: DropTarget) -> StateChange {
        let Some(dropped) = self.drags.end(pointer, target) else {
            return StateChange::Unchanged;
        };
        match dropped.target {
            DropTarget::Basket => match self.add_ingredient(&dropped.ingredient) {
                StateChange::Unchanged => StateChange::View,
                change => change,
            },
            DropTarget::Counter => {
                self.stage(dropped.ingredient);
                StateChange::View
            }
            DropTarget::Nowhere => StateChange::View,
        }
    }

    /// Abort a drag
    pub fn drag_cancel(&mut self, pointer: PointerId) -> StateChange {
        if self.drags.cancel(pointer).is_some() {
            StateChange::View
        } else {
            StateChange::Unchanged
        }
    }

    /// Next fridge page
    pub fn next_page(&mut self) -> StateChange {
        if self.fridge.next() {
            StateChange::View
        } else {
            StateChange::Unchanged
        }
    }

    /// Previous fridge page
    pub fn prev_page(&mut self) -> StateChange {
        if self.fridge.prev() {
            StateChange::View
        } else {
            StateChange::Unchanged
        }
    }

    /// Show a recipe in the detail view
    pub fn open_recipe(&mut self, recipe: Recipe) -> StateChange {
        self.open_recipe = Some(recipe);
        StateChange::View
    }

    /// Close the detail view
    pub fn close_recipe(&mut self) -> StateChange {
        if self.open_recipe.take().is_some() {
            StateChange::View
        } else {
            StateChange::Unchanged
        }
    }

    /// Ingredient catalog
    #[must_use]
    pub const fn catalog(&self) -> &IngredientCatalog {
        &self.catalog
    }

    /// Selected ingredients
    #[must_use]
    pub const fn basket(&self) -> &Basket {
        &self.basket
    }

    /// Staged ingredients
    #[must_use]
    pub const fn counter(&self) -> &Counter {
        &self.counter
    }

    /// Fridge pagination
    #[must_use]
    pub const fn fridge(&self) -> &FridgePager {
        &self.fridge
    }

    /// Active drags
    #[must_use]
    pub const fn drags(&self) -> &DragSessions {
        &self.drags
    }

    /// Recipe shown in the detail view
    #[must_use]
    pub const fn opened(&self) -> Option<&Recipe> {
        self.open_recipe.as_ref()
    }

    /// Shelves of the current fridge page
    #[must_use]
    pub fn fridge_shelves(&self) -> Vec<&'static [Ingredient]> {
        self.catalog
            .shelves(self.fridge.page(), self.fridge.per_page())
    }

    /// Basket members resolved against the catalog, in selection order
    #[must_use]
    pub fn selected_ingredients(&self) -> Vec<&'static Ingredient> {
        self.basket
            .ids()
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }
}

impl Default for KitchenState {
    fn default() -> Self {
        Self::new(
            IngredientCatalog::builtin(),
            DEFAULT_ITEMS_PER_PAGE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_existing_member_requests_nothing() {
        let mut state = KitchenState::default();
        assert_eq!(state.add("tomato").unwrap(), StateChange::Selection);
        assert_eq!(state.add("tomato").unwrap(), StateChange::Unchanged);
        assert_eq!(state.basket().len(), 1);
    }

    #[test]
    fn test_remove_always_recomputes() {
        let mut state = KitchenState::default();
        assert_eq!(state.remove("tomato").unwrap(), StateChange::Selection);
        assert!(state.basket().is_empty());
    }

    #[test]
    fn test_unknown_ingredient_is_rejected() {
        let mut state = KitchenState::default();
        assert_eq!(
            state.add("unicorn").unwrap_err(),
            KitchenError::UnknownIngredient("unicorn".into())
        );
        assert!(state.basket().is_empty());
    }

    #[test]
    fn test_clear_empties_basket_and_counter() {
        let mut state = KitchenState::default();
        state.add("tomato").unwrap();
        state.place_on_counter("cheese").unwrap();

        assert!(state.clear().needs_match());
        assert!(state.basket().is_empty());
        assert!(state.counter().is_empty());
    }

    #[test]
    fn test_promote_requires_staged_ingredient() {
        let mut state = KitchenState::default();
        assert_eq!(
            state.promote("egg").unwrap_err(),
            KitchenError::NotOnCounter("egg".into())
        );

        state.place_on_counter("egg").unwrap();
        assert_eq!(state.promote("egg").unwrap(), StateChange::Selection);
        assert!(state.basket().contains("egg"));
        assert!(state.counter().contains("egg"));
    }

    #[test]
    fn test_drops_route_to_basket_or_counter() {
        let mut state = KitchenState::default();
        state.drag_start(PointerId(0), "milk").unwrap();
        assert_eq!(
            state.drag_end(PointerId(0), DropTarget::Basket),
            StateChange::Selection
        );
        assert!(state.basket().contains("milk"));

        state.drag_start(PointerId(0), "bread").unwrap();
        assert_eq!(
            state.drag_end(PointerId(0), DropTarget::Counter),
            StateChange::View
        );
        assert!(state.counter().contains("bread"));
        assert!(!state.basket().contains("bread"));

        state.drag_start(PointerId(0), "rice").unwrap();
        state.drag_end(PointerId(0), DropTarget::Nowhere);
        assert!(!state.counter().contains("rice"));
        assert!(!state.basket().contains("rice"));
    }

    #[test]
    fn test_drag_on_busy_pointer_fails() {
        let mut state = KitchenState::default();
        state.drag_start(PointerId(3), "milk").unwrap();
        let err = state.drag_start(PointerId(3), "egg").unwrap_err();
        assert!(matches!(err, KitchenError::Drag(_)));
        assert_eq!(state.drag_cancel(PointerId(3)), StateChange::View);
        assert_eq!(state.drag_end(PointerId(3), DropTarget::Basket), StateChange::Unchanged);
    }

    #[test]
    fn test_paging_bounds() {
        let mut state = KitchenState::default();
        assert_eq!(state.prev_page(), StateChange::Unchanged);
        assert_eq!(state.next_page(), StateChange::View);
        assert_eq!(state.fridge().page(), 2);
        assert_eq!(state.fridge_shelves()[0][0].id, "garlic");
    }

    #[test]
    fn test_open_and_close_recipe() {
        let mut state = KitchenState::default();
        assert_eq!(state.close_recipe(), StateChange::Unchanged);
        state.open_recipe(Recipe::new("pizza", "pizza"));
        assert_eq!(state.opened().map(|r| r.id.as_str()), Some("pizza"));
        assert_eq!(state.close_recipe(), StateChange::View);
    }
}
