//! Drink Model

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One recipe ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: u32,
}

/// Ingredient as shown to anonymous readers: no `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: u32,
}

impl From<&Ingredient> for ShortIngredient {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            color: ingredient.color.clone(),
            parts: ingredient.parts,
        }
    }
}

/// Drink recipe
///
/// Clients may send either a single ingredient object or an array of them.
/// The shape is preserved in storage and in the long representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipe {
    Many(Vec<Ingredient>),
    Single(Ingredient),
}

impl Recipe {
    pub fn ingredients(&self) -> &[Ingredient] {
        match self {
            Recipe::Many(items) => items,
            Recipe::Single(item) => std::slice::from_ref(item),
        }
    }

    /// An empty ingredient array counts as "no recipe"
    pub fn is_empty(&self) -> bool {
        self.ingredients().is_empty()
    }

    /// Serialized text form stored in the `recipe` column
    pub fn to_stored(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_stored(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Recipe without ingredient names, always as an array
    pub fn short(&self) -> Vec<ShortIngredient> {
        self.ingredients().iter().map(ShortIngredient::from).collect()
    }
}

/// Drink entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub id: i64,
    pub title: String,
    pub recipe: Recipe,
}

impl Drink {
    /// Public representation
    pub fn short(&self) -> DrinkShort {
        DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.short(),
        }
    }

    /// Privileged representation with the full recipe
    pub fn long(&self) -> DrinkLong {
        DrinkLong {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkShort {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkLong {
    pub id: i64,
    pub title: String,
    pub recipe: Recipe,
}

/// Validated input for creating a drink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDrink {
    pub title: String,
    pub recipe: Recipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrinkValidationError {
    #[error("title is required")]
    MissingTitle,
    #[error("recipe is required")]
    MissingRecipe,
}

/// Create drink payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrinkCreate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub recipe: Option<Recipe>,
}

impl DrinkCreate {
    /// Both fields must be present and non-empty
    pub fn validate(self) -> Result<NewDrink, DrinkValidationError> {
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .ok_or(DrinkValidationError::MissingTitle)?;
        let recipe = self
            .recipe
            .filter(|r| !r.is_empty())
            .ok_or(DrinkValidationError::MissingRecipe)?;
        Ok(NewDrink { title, recipe })
    }
}

/// `null`, `false`, `0`, `""`, `[]` and `{}`
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Blank values become `None`; anything else must parse as `T`
fn non_blank<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if is_blank(&value) {
        return Ok(None);
    }
    serde_json::from_value(value).map(Some).map_err(D::Error::custom)
}

/// Update drink payload
///
/// Blank fields (empty, zero, `false`, `null`) are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkUpdate {
    #[serde(default, deserialize_with = "non_blank")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub recipe: Option<Recipe>,
}

impl DrinkUpdate {
    /// Drop fields that would not be applied
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.filter(|t| !t.is_empty()),
            recipe: self.recipe.filter(|r| !r.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.recipe.is_none()
    }

    /// Apply present fields to an existing drink
    pub fn apply_to(&self, drink: &mut Drink) {
        if let Some(title) = &self.title {
            drink.title = title.clone();
        }
        if let Some(recipe) = &self.recipe {
            drink.recipe = recipe.clone();
        }
    }
}
