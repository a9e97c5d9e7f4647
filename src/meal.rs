//! Meal records returned by TheMealDB
//!
//! The API wraps every response in `{ "meals": [...] }`, with `null` in place
//! of the array when nothing matched. Ingredients are not a list but twenty
//! numbered field pairs (`strIngredient1`/`strMeasure1` ... `strIngredient20`),
//! which are kept in a flattened map and walked on demand.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::steps::extract_steps;

/// Highest ingredient slot the API exposes.
pub const MAX_INGREDIENTS: usize = 20;

/// Response envelope shared by the search and lookup endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MealsEnvelope<T> {
    /// `None` when the API answered `"meals": null` (or omitted the field)
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    /// Flatten the envelope; "no results" becomes an empty list.
    pub fn into_meals(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// One search hit from `filter.php`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

/// Full meal record from `lookup.php`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealDetail {
    #[serde(rename = "idMeal", default)]
    pub id: String,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    /// Every other field, including the numbered ingredient/measure slots
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// An ingredient line: name plus optional measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

impl Ingredient {
    /// "{measure} {name}", without stray spaces when the measure is blank.
    pub fn display(&self) -> String {
        format!("{} {}", self.measure, self.name).trim().to_string()
    }
}

impl MealDetail {
    /// Title to show, falling back to "Recipe" when the API has none.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("Recipe")
    }

    /// Thumbnail URL, or `""` when absent.
    pub fn thumbnail_url(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or("")
    }

    /// Ingredient slots 1..=20 in order, skipping absent or blank names.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|i| {
                let name = self.text_field(&format!("strIngredient{i}"))?.trim();
                if name.is_empty() {
                    return None;
                }
                let measure = self
                    .text_field(&format!("strMeasure{i}"))
                    .unwrap_or("")
                    .trim();
                Some(Ingredient {
                    name: name.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }

    /// Instruction steps extracted from the free-text instructions field.
    pub fn steps(&self) -> Vec<String> {
        extract_steps(self.instructions.as_deref().unwrap_or(""))
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}
