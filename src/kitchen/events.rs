// ABOUTME: User gestures of the kitchen session as explicit messages
// ABOUTME: Ingredient ids are plain strings; unknown ids are rejected by the state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use kitchen_core::drag::{DropTarget, PointerId};

/// One kitchen gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KitchenEvent {
    /// Put an ingredient in the basket
    Add(String),
    /// Take an ingredient out of the basket
    Remove(String),
    /// Empty basket and counter
    Clear,
    /// Stage an ingredient on the counter
    PlaceOnCounter(String),
    /// Take an ingredient off the counter
    RemoveFromCounter(String),
    /// Move a counter ingredient into the basket
    Promote(String),
    /// Pick an ingredient up
    DragStart {
        /// Pointer doing the drag
        pointer: PointerId,
        /// Ingredient id
        ingredient: String,
    },
    /// Release a pointer over a resolved target
    DragEnd {
        /// Pointer being released
        pointer: PointerId,
        /// Where it was released
        target: DropTarget,
    },
    /// Abort a drag
    DragCancel(PointerId),
    /// Next fridge page
    NextPage,
    /// Previous fridge page
    PrevPage,
    /// Open a recipe from the match list
    OpenRecipe(String),
    /// Close the recipe detail
    CloseRecipe,
}
