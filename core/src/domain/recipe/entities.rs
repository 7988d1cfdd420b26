use std::fmt::Display;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const FALLBACK_RECIPE_NAME: &str = "Generated Recipe";
pub const FALLBACK_INGREDIENTS: &str = "Could not parse ingredients.";
pub const FALLBACK_INSTRUCTIONS: &str = "Could not parse instructions.";

/// A recipe drafted by the generation service. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSuggestion {
    pub name: String,
    /// Comma separated, as written by the generation service.
    pub ingredients: String,
    /// One step per line.
    pub instructions: String,
}

impl RecipeSuggestion {
    /// Answer for an empty inventory; no generation is attempted.
    pub fn no_items_provided() -> Self {
        Self {
            name: "No Items Provided".to_string(),
            ingredients: "No items in your inventory to generate a recipe.".to_string(),
            instructions: "Please add some food items to your inventory first!".to_string(),
        }
    }

    pub fn generation_failed(reason: impl Display) -> Self {
        Self {
            name: "Recipe Generation Failed".to_string(),
            ingredients: "Please try again later.".to_string(),
            instructions: format!("An error occurred: {reason}"),
        }
    }
}

impl Default for RecipeSuggestion {
    fn default() -> Self {
        Self {
            name: FALLBACK_RECIPE_NAME.to_string(),
            ingredients: FALLBACK_INGREDIENTS.to_string(),
            instructions: FALLBACK_INSTRUCTIONS.to_string(),
        }
    }
}
