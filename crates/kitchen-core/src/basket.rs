// ABOUTME: Basket of selected ingredient ids and the counter staging area
// ABOUTME: Idempotent add, no-op removal of non-members, and insertion-ordered display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use crate::models::Ingredient;
use std::mem;

/// Set of ingredient ids the user committed to for recipe matching
///
/// Membership is what matters: two baskets with the same ids in a different
/// order are equal. Insertion order is kept only for display.
#[derive(Debug, Clone, Default)]
pub struct Basket {
    ids: Vec<String>,
}

impl Basket {
    /// Empty basket
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Insert an id; returns false when it was already present
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_owned());
        true
    }

    /// Delete an id; returns false when it was not a member
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|member| member != id);
        self.ids.len() != before
    }

    /// Empty the basket, returning the ids that were in it
    pub fn clear(&mut self) -> Vec<String> {
        mem::take(&mut self.ids)
    }

    /// Membership test
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|member| member == id)
    }

    /// Number of selected ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in the order they were added
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl PartialEq for Basket {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.ids.iter().all(|id| other.contains(id))
    }
}

impl Eq for Basket {}

impl<S: AsRef<str>> FromIterator<S> for Basket {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut basket = Self::new();
        for id in iter {
            basket.add(id.as_ref());
        }
        basket
    }
}

/// Ingredients dragged out of the fridge but not yet in the basket
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    items: Vec<Ingredient>,
}

impl Counter {
    /// Empty counter
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Stage an ingredient; returns false when one with the same id is already there
    pub fn place(&mut self, ingredient: Ingredient) -> bool {
        if self.contains(ingredient.id) {
            return false;
        }
        self.items.push(ingredient);
        true
    }

    /// Take an ingredient off the counter; returns false when it was not there
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Empty the counter
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether an ingredient with this id is staged
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Staged ingredients in placement order
    #[must_use]
    pub fn items(&self) -> &[Ingredient] {
        &self.items
    }

    /// Number of staged ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the counter is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
