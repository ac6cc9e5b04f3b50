// ABOUTME: Static ingredient catalog, recipe icons, and fridge page arithmetic
// ABOUTME: The catalog is immutable and loaded once for the whole session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use crate::models::Ingredient;

/// Ingredients shown per fridge page (3 shelves x 3 items)
pub const DEFAULT_ITEMS_PER_PAGE: usize = 9;

/// Items per fridge shelf
pub const SHELF_SIZE: usize = 3;

/// Icon for recipe ingredients that are not in the catalog
pub const FALLBACK_INGREDIENT_ICON: &str = "🥄";

/// Icon for recipes without a dedicated one
pub const DEFAULT_RECIPE_ICON: &str = "🍽️";

/// Every ingredient the fridge offers, grouped by aisle
pub static INGREDIENTS: &[Ingredient] = &[
    // Vegetables
    Ingredient::new("tomato", "Tomato", "🍅"),
    Ingredient::new("lettuce", "Lettuce", "🥬"),
    Ingredient::new("onion", "Onion", "🧅"),
    Ingredient::new("carrot", "Carrot", "🥕"),
    Ingredient::new("potato", "Potato", "🥔"),
    Ingredient::new("corn", "Corn", "🌽"),
    Ingredient::new("broccoli", "Broccoli", "🥦"),
    Ingredient::new("pepper", "Pepper", "🫑"),
    Ingredient::new("mushroom", "Mushroom", "🍄"),
    Ingredient::new("garlic", "Garlic", "🧄"),
    Ingredient::new("cucumber", "Cucumber", "🥒"),
    Ingredient::new("eggplant", "Eggplant", "🍆"),
    // Fruits
    Ingredient::new("apple", "Apple", "🍎"),
    Ingredient::new("banana", "Banana", "🍌"),
    Ingredient::new("lemon", "Lemon", "🍋"),
    Ingredient::new("avocado", "Avocado", "🥑"),
    Ingredient::new("strawberry", "Strawberry", "🍓"),
    Ingredient::new("orange", "Orange", "🍊"),
    Ingredient::new("grapes", "Grapes", "🍇"),
    Ingredient::new("watermelon", "Watermelon", "🍉"),
    Ingredient::new("pineapple", "Pineapple", "🍍"),
    // Proteins
    Ingredient::new("egg", "Egg", "🥚"),
    Ingredient::new("chicken", "Chicken", "🍗"),
    Ingredient::new("beef", "Beef", "🥩"),
    Ingredient::new("bacon", "Bacon", "🥓"),
    Ingredient::new("fish", "Fish", "🐟"),
    Ingredient::new("shrimp", "Shrimp", "🦐"),
    // Dairy
    Ingredient::new("cheese", "Cheese", "🧀"),
    Ingredient::new("milk", "Milk", "🥛"),
    Ingredient::new("butter", "Butter", "🧈"),
    Ingredient::new("yogurt", "Yogurt", "🫙"),
    // Grains
    Ingredient::new("bread", "Bread", "🍞"),
    Ingredient::new("rice", "Rice", "🍚"),
    Ingredient::new("pasta", "Pasta", "🍝"),
    Ingredient::new("dough", "Dough", "🥟"),
    Ingredient::new("tortilla", "Tortilla", "🫓"),
    Ingredient::new("croissant", "Croissant", "🥐"),
    // Others
    Ingredient::new("honey", "Honey", "🍯"),
    Ingredient::new("salt", "Salt", "🧂"),
    Ingredient::new("oil", "Oil", "🫒"),
    Ingredient::new("basil", "Basil", "🌿"),
    Ingredient::new("chocolate", "Chocolate", "🍫"),
    Ingredient::new("ice_cream", "Ice Cream", "🍨"),
    Ingredient::new("cookie", "Cookie", "🍪"),
    Ingredient::new("cake", "Cake", "🍰"),
];

static RECIPE_ICONS: &[(&str, &str)] = &[
    ("pizza", "🍕"),
    ("pasta", "🍝"),
    ("salad", "🥗"),
    ("burger", "🍔"),
    ("sandwich", "🥪"),
    ("soup", "🍲"),
    ("omelette", "🍳"),
    ("tacos", "🌮"),
    ("stir_fry", "🥘"),
    ("smoothie", "🥤"),
    ("cake", "🎂"),
    ("cookies", "🍪"),
    ("sweet_potato_cake", "🍰"),
];

/// Icon for a recipe id, falling back to a plate
#[must_use]
pub fn recipe_icon(recipe_id: &str) -> &'static str {
    RECIPE_ICONS
        .iter()
        .find(|(id, _)| *id == recipe_id)
        .map_or(DEFAULT_RECIPE_ICON, |(_, icon)| icon)
}

/// Read-only view over an ingredient list
#[derive(Debug, Clone, Copy)]
pub struct IngredientCatalog {
    items: &'static [Ingredient],
}

impl Default for IngredientCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IngredientCatalog {
    /// The built-in fridge contents
    #[must_use]
    pub const fn builtin() -> Self {
        Self { items: INGREDIENTS }
    }

    /// Catalog over a custom static list
    #[must_use]
    pub const fn from_static(items: &'static [Ingredient]) -> Self {
        Self { items }
    }

    /// Look an ingredient up by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static Ingredient> {
        self.items.iter().find(|i| i.id == id)
    }

    /// All ingredients in catalog order
    #[must_use]
    pub const fn all(&self) -> &'static [Ingredient] {
        self.items
    }

    /// Number of ingredients
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of fridge pages, at least 1
    #[must_use]
    pub fn total_pages(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 1;
        }
        self.items.len().div_ceil(per_page).max(1)
    }

    /// Ingredients on a 1-based fridge page; empty when out of range
    #[must_use]
    pub fn page(&self, page: usize, per_page: usize) -> &'static [Ingredient] {
        if page == 0 || per_page == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(per_page);
        if start >= self.items.len() {
            return &[];
        }
        let end = start.saturating_add(per_page).min(self.items.len());
        &self.items[start..end]
    }

    /// A fridge page split into shelves of [`SHELF_SIZE`]
    #[must_use]
    pub fn shelves(&self, page: usize, per_page: usize) -> Vec<&'static [Ingredient]> {
        self.page(page, per_page).chunks(SHELF_SIZE).collect()
    }
}

/// Current fridge page, bounded to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FridgePager {
    page: usize,
    per_page: usize,
    total_pages: usize,
}

impl FridgePager {
    /// Start on page 1
    #[must_use]
    pub fn new(catalog: &IngredientCatalog, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        Self {
            page: 1,
            per_page,
            total_pages: catalog.total_pages(per_page),
        }
    }

    /// Current 1-based page
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Items per page
    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Whether a previous page exists
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Move forward one page; returns false at the last page
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Move back one page; returns false at the first page
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_are_unique_and_lowercase() {
        let catalog = IngredientCatalog::builtin();
        for (idx, ingredient) in catalog.all().iter().enumerate() {
            assert_eq!(ingredient.id, ingredient.id.to_lowercase());
            assert!(
                catalog.all()[idx + 1..].iter().all(|o| o.id != ingredient.id),
                "duplicate id {}",
                ingredient.id
            );
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = IngredientCatalog::builtin();
        assert_eq!(catalog.get("cheese").map(|i| i.icon), Some("🧀"));
        assert!(catalog.get("unicorn").is_none());
    }

    #[test]
    fn test_pages_and_shelves() {
        let catalog = IngredientCatalog::builtin();
        assert_eq!(catalog.len(), 45);
        assert_eq!(catalog.total_pages(DEFAULT_ITEMS_PER_PAGE), 5);

        let first = catalog.page(1, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(first.len(), 9);
        assert_eq!(first[0].id, "tomato");

        let shelves = catalog.shelves(1, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(shelves.len(), 3);
        assert!(shelves.iter().all(|s| s.len() == SHELF_SIZE));

        assert!(catalog.page(0, 9).is_empty());
        assert!(catalog.page(6, 9).is_empty());
    }

    #[test]
    fn test_partial_last_page() {
        static SMALL: &[Ingredient] = &[
            Ingredient::new("a", "A", "a"),
            Ingredient::new("b", "B", "b"),
            Ingredient::new("c", "C", "c"),
            Ingredient::new("d", "D", "d"),
        ];
        let catalog = IngredientCatalog::from_static(SMALL);
        assert_eq!(catalog.total_pages(3), 2);
        assert_eq!(catalog.page(2, 3).len(), 1);
        assert_eq!(catalog.shelves(2, 3).len(), 1);
    }

    #[test]
    fn test_pager_is_bounded() {
        let catalog = IngredientCatalog::builtin();
        let mut pager = FridgePager::new(&catalog, DEFAULT_ITEMS_PER_PAGE);

        assert!(!pager.prev());
        assert_eq!(pager.page(), 1);

        while pager.next() {}
        assert_eq!(pager.page(), 5);
        assert!(!pager.has_next());
        assert!(pager.prev());
        assert_eq!(pager.page(), 4);
    }

    #[test]
    fn test_recipe_icons() {
        assert_eq!(recipe_icon("pizza"), "🍕");
        assert_eq!(recipe_icon("mystery_stew"), DEFAULT_RECIPE_ICON);
    }
}
