// ABOUTME: Recipe data model as exchanged with the recipe REST backend
// ABOUTME: Tolerant deserialization of legacy ingredient lists, loose time fields, and numeric ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::slice;

/// Recipe type used when the backend omits one
pub const DEFAULT_RECIPE_TYPE: &str = "main";

/// Single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeIngredient {
    /// Ingredient name, the key matched against basket ids
    pub name: String,
    /// Free-form amount ("2", "1/2", ...), empty when unknown
    pub amount: String,
    /// Free-form unit ("cups", "g", ...), empty when unknown
    pub unit: String,
}

impl RecipeIngredient {
    /// Create an ingredient line
    pub fn new(name: impl Into<String>, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
        }
    }

    /// Ingredient with no amount or unit (legacy list format)
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, String::new(), String::new())
    }

    /// `"{amount} {unit}"`, or `None` when no amount is recorded
    #[must_use]
    pub fn quantity(&self) -> Option<String> {
        if self.amount.is_empty() {
            None
        } else {
            Some(format!("{} {}", self.amount, self.unit).trim_end().to_owned())
        }
    }
}

/// Ordered ingredient mapping of a recipe
///
/// Serialized as a JSON object `{name: {amount, unit}}` in insertion order.
/// Deserializes from that object or from a legacy array of names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeIngredients(Vec<RecipeIngredient>);

impl RecipeIngredients {
    /// Empty ingredient list
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert an ingredient, replacing amount and unit of an existing entry with the same name
    pub fn insert(&mut self, ingredient: RecipeIngredient) {
        if let Some(existing) = self.0.iter_mut().find(|i| i.name == ingredient.name) {
            existing.amount = ingredient.amount;
            existing.unit = ingredient.unit;
        } else {
            self.0.push(ingredient);
        }
    }

    /// Iterate in display order
    pub fn iter(&self) -> slice::Iter<'_, RecipeIngredient> {
        self.0.iter()
    }

    /// Ingredient names in display order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|i| i.name.as_str())
    }

    /// Case-insensitive membership test on ingredient names
    #[must_use]
    pub fn contains_ignore_case(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.0.iter().any(|i| i.name.to_lowercase() == needle)
    }

    /// Number of ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the recipe lists no ingredients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<RecipeIngredient> for RecipeIngredients {
    fn from_iter<T: IntoIterator<Item = RecipeIngredient>>(iter: T) -> Self {
        let mut ingredients = Self::new();
        for ingredient in iter {
            ingredients.insert(ingredient);
        }
        ingredients
    }
}

impl<'a> IntoIterator for &'a RecipeIngredients {
    type Item = &'a RecipeIngredient;
    type IntoIter = slice::Iter<'a, RecipeIngredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Serialize)]
struct AmountRef<'a> {
    amount: &'a str,
    unit: &'a str,
}

impl Serialize for RecipeIngredients {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for ingredient in &self.0 {
            map.serialize_entry(
                &ingredient.name,
                &AmountRef {
                    amount: &ingredient.amount,
                    unit: &ingredient.unit,
                },
            )?;
        }
        map.end()
    }
}

struct IngredientsVisitor;

impl<'de> Visitor<'de> for IngredientsVisitor {
    type Value = RecipeIngredients;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ingredient object or a list of ingredient names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut ingredients = RecipeIngredients::new();
        while let Some((name, details)) = access.next_entry::<String, Value>()? {
            let (amount, unit) = match details {
                Value::Object(fields) => (
                    fields.get("amount").map(scalar_text).unwrap_or_default(),
                    fields.get("unit").map(scalar_text).unwrap_or_default(),
                ),
                other => (scalar_text(&other), String::new()),
            };
            ingredients.insert(RecipeIngredient { name, amount, unit });
        }
        Ok(ingredients)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut ingredients = RecipeIngredients::new();
        while let Some(item) = access.next_element::<Value>()? {
            if let Value::String(name) = item {
                ingredients.insert(RecipeIngredient::named(name));
            }
        }
        Ok(ingredients)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RecipeIngredients::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RecipeIngredients::new())
    }
}

impl<'de> Deserialize<'de> for RecipeIngredients {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IngredientsVisitor)
    }
}

/// Preparation and total time, free-form text
///
/// Serialized as `[prep, total]`. Deserializes from that pair, a one-element
/// array, or a single string (used as both prep and total).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeTime {
    /// Preparation time
    pub prep: Option<String>,
    /// Total time
    pub total: Option<String>,
}

impl RecipeTime {
    /// Build from the two form fields, treating blank as unknown
    pub fn new(prep: impl Into<String>, total: impl Into<String>) -> Self {
        Self {
            prep: non_blank(prep.into()),
            total: non_blank(total.into()),
        }
    }

    /// Total time if known, otherwise the preparation time
    #[must_use]
    pub fn total_or_prep(&self) -> Option<&str> {
        self.total.as_deref().or(self.prep.as_deref())
    }
}

impl Serialize for RecipeTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [
            self.prep.as_deref().unwrap_or_default(),
            self.total.as_deref().unwrap_or_default(),
        ]
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RecipeTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let time = match Value::deserialize(deserializer)? {
            Value::Array(parts) => Self {
                prep: parts.first().map(scalar_text).and_then(non_blank),
                total: parts.get(1).map(scalar_text).and_then(non_blank),
            },
            Value::Null => Self::default(),
            single => {
                let text = non_blank(scalar_text(&single));
                Self {
                    prep: text.clone(),
                    total: text,
                }
            }
        };
        Ok(time)
    }
}

/// A recipe as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Backend key, derived from the name on creation
    #[serde(default, deserialize_with = "id_text")]
    pub id: String,
    /// Lowercased display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Course type (main, dessert, ...)
    #[serde(
        rename = "type",
        default = "default_recipe_type",
        deserialize_with = "recipe_type_or_default"
    )]
    pub recipe_type: String,
    /// Ingredients keyed by name
    #[serde(default)]
    pub ingredients: RecipeIngredients,
    /// Ordered steps, normally labelled `"1. ..."`
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<String>,
    /// Preparation and total time
    #[serde(default)]
    pub time: RecipeTime,
    /// Number of servings
    #[serde(
        default,
        deserialize_with = "lenient_servings",
        skip_serializing_if = "Option::is_none"
    )]
    pub servings: Option<u32>,
    /// Equipment needed
    #[serde(default, deserialize_with = "null_as_default")]
    pub materials: Vec<String>,
    /// Image filename
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Dishes that go well with this one
    #[serde(default, deserialize_with = "null_as_default")]
    pub combos: Vec<String>,
}

impl Recipe {
    /// Create a recipe with only an id and a name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            recipe_type: default_recipe_type(),
            ingredients: RecipeIngredients::new(),
            steps: Vec::new(),
            time: RecipeTime::default(),
            servings: None,
            materials: Vec::new(),
            image: None,
            combos: Vec::new(),
        }
    }

    /// Set the course type
    #[must_use]
    pub fn with_type(mut self, recipe_type: impl Into<String>) -> Self {
        self.recipe_type = recipe_type.into();
        self
    }

    /// Add an ingredient line
    #[must_use]
    pub fn with_ingredient(
        mut self,
        name: impl Into<String>,
        amount: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        self.ingredients
            .insert(RecipeIngredient::new(name, amount, unit));
        self
    }

    /// Add a step
    #[must_use]
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Set preparation and total time
    #[must_use]
    pub fn with_time(mut self, prep: impl Into<String>, total: impl Into<String>) -> Self {
        self.time = RecipeTime::new(prep, total);
        self
    }

    /// Set servings
    #[must_use]
    pub const fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Add a piece of equipment
    #[must_use]
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.materials.push(material.into());
        self
    }
}

fn default_recipe_type() -> String {
    DEFAULT_RECIPE_TYPE.to_owned()
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Render a JSON scalar as text; null becomes empty
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Explicit `null` decodes like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn recipe_type_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .and_then(non_blank)
        .unwrap_or_else(default_recipe_type))
}

fn id_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(&Value::deserialize(deserializer)?))
}

fn lenient_servings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let servings = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(servings)
}
