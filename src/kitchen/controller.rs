// ABOUTME: Kitchen controller owning the session state and the current match list
// ABOUTME: Applies events synchronously, then recomputes matches through the finder when the basket changed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use super::events::KitchenEvent;
use crate::services::{MatchSource, RecipeFinder};
use kitchen_core::models::Recipe;
use kitchen_core::state::{KitchenError, KitchenState, StateChange};
use tracing::{debug, warn};

/// Borrowed snapshot handed to the renderers
#[derive(Debug, Clone, Copy)]
pub struct KitchenView<'a> {
    /// Session state
    pub state: &'a KitchenState,
    /// Recipes covering the basket
    pub matches: &'a [Recipe],
}

/// Single owner of the kitchen session
pub struct KitchenController {
    state: KitchenState,
    finder: RecipeFinder,
    matches: Vec<Recipe>,
    last_source: Option<MatchSource>,
}

impl KitchenController {
    /// Controller over a fresh state; the finder cache should already be warm
    #[must_use]
    pub fn new(state: KitchenState, finder: RecipeFinder) -> Self {
        Self {
            state,
            finder,
            matches: Vec::new(),
            last_source: None,
        }
    }

    /// Apply one event
    ///
    /// Rejected events leave the state unchanged and are logged.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason (unknown ingredient, busy pointer, ...)
    pub async fn handle(&mut self, event: KitchenEvent) -> Result<StateChange, KitchenError> {
        debug!(?event, "Kitchen event");
        let change = self.apply(event).inspect_err(|e| {
            warn!(error = %e, "Kitchen event ignored");
        })?;

        if change.needs_match() {
            self.refresh_matches().await;
        }
        Ok(change)
    }

    fn apply(&mut self, event: KitchenEvent) -> Result<StateChange, KitchenError> {
        match event {
            KitchenEvent::Add(id) => self.state.add(&id),
            KitchenEvent::Remove(id) => self.state.remove(&id),
            KitchenEvent::Clear => Ok(self.state.clear()),
            KitchenEvent::PlaceOnCounter(id) => self.state.place_on_counter(&id),
            KitchenEvent::RemoveFromCounter(id) => Ok(self.state.remove_from_counter(&id)),
            KitchenEvent::Promote(id) => self.state.promote(&id),
            KitchenEvent::DragStart {
                pointer,
                ingredient,
            } => self.state.drag_start(pointer, &ingredient),
            KitchenEvent::DragEnd { pointer, target } => Ok(self.state.drag_end(pointer, target)),
            KitchenEvent::DragCancel(pointer) => Ok(self.state.drag_cancel(pointer)),
            KitchenEvent::NextPage => Ok(self.state.next_page()),
            KitchenEvent::PrevPage => Ok(self.state.prev_page()),
            KitchenEvent::OpenRecipe(id) => {
                let recipe = self
                    .matches
                    .iter()
                    .find(|r| r.id == id)
                    .cloned()
                    .ok_or(KitchenError::RecipeNotListed(id))?;
                Ok(self.state.open_recipe(recipe))
            }
            KitchenEvent::CloseRecipe => Ok(self.state.close_recipe()),
        }
    }

    async fn refresh_matches(&mut self) {
        let outcome = self.finder.find(self.state.basket().ids()).await;
        debug!(
            source = %outcome.source,
            matches = outcome.recipes.len(),
            "Recipe matches updated"
        );
        self.matches = outcome.recipes;
        self.last_source = Some(outcome.source);
    }

    /// Snapshot for rendering
    #[must_use]
    pub fn view(&self) -> KitchenView<'_> {
        KitchenView {
            state: &self.state,
            matches: &self.matches,
        }
    }

    /// Session state
    #[must_use]
    pub const fn state(&self) -> &KitchenState {
        &self.state
    }

    /// Current matches
    #[must_use]
    pub fn matches(&self) -> &[Recipe] {
        &self.matches
    }

    /// Path that produced the current matches
    #[must_use]
    pub const fn last_source(&self) -> Option<MatchSource> {
        self.last_source
    }
}
