// ABOUTME: Per-pointer drag sessions for moving ingredients between fridge, counter, and basket
// ABOUTME: Pixel geometry is resolved elsewhere; a drag ends with a resolved drop target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use crate::models::Ingredient;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Identifies one pointer (mouse, a touch point)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PointerId(pub u32);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pointer {}", self.0)
    }
}

/// Where a dragged ingredient was released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// The basket bowl: commit the ingredient
    Basket,
    /// The counter top: stage the ingredient
    Counter,
    /// Anywhere else: nothing happens
    Nowhere,
}

/// A completed drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dropped {
    /// What was dragged
    pub ingredient: Ingredient,
    /// Where it landed
    pub target: DropTarget,
}

/// Drag errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    /// The pointer is already carrying an ingredient
    #[error("{pointer} is already dragging '{ingredient_id}'")]
    AlreadyDragging {
        /// Pointer that tried to start a second drag
        pointer: PointerId,
        /// Ingredient currently carried by that pointer
        ingredient_id: &'static str,
    },
}

/// Active drags, at most one per pointer
///
/// A pointer without an entry is idle.
#[derive(Debug, Clone, Default)]
pub struct DragSessions {
    active: BTreeMap<PointerId, Ingredient>,
}

impl DragSessions {
    /// No active drags
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: BTreeMap::new(),
        }
    }

    /// Pick up an ingredient with a pointer
    ///
    /// # Errors
    ///
    /// Returns [`DragError::AlreadyDragging`] if the pointer is not idle.
    pub fn start(&mut self, pointer: PointerId, ingredient: Ingredient) -> Result<(), DragError> {
        if let Some(current) = self.active.get(&pointer) {
            return Err(DragError::AlreadyDragging {
                pointer,
                ingredient_id: current.id,
            });
        }
        self.active.insert(pointer, ingredient);
        Ok(())
    }

    /// Release the pointer over a target; `None` if the pointer was idle
    pub fn end(&mut self, pointer: PointerId, target: DropTarget) -> Option<Dropped> {
        self.active
            .remove(&pointer)
            .map(|ingredient| Dropped { ingredient, target })
    }

    /// Abort a drag without effects
    pub fn cancel(&mut self, pointer: PointerId) -> Option<Ingredient> {
        self.active.remove(&pointer)
    }

    /// Ingredient carried by a pointer
    #[must_use]
    pub fn dragging(&self, pointer: PointerId) -> Option<&Ingredient> {
        self.active.get(&pointer)
    }

    /// Whether any pointer is dragging
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Carried ingredients in pointer order
    pub fn carried(&self) -> impl Iterator<Item = (PointerId, &Ingredient)> {
        self.active.iter().map(|(pointer, ingredient)| (*pointer, ingredient))
    }
}
